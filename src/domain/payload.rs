use serde::{Deserialize, Serialize, Serializer};

/// Field values exactly as typed, gathered at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<RawTech>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTech {
    pub title: String,
    /// Unparsed knowledge input; coerced to a number during validation.
    pub knowledge: String,
}

impl RawTech {
    pub fn new(title: impl Into<String>, knowledge: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            knowledge: knowledge.into(),
        }
    }
}

/// Validated and normalized form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub techs: Vec<TechEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechEntry {
    pub title: String,
    #[serde(serialize_with = "serialize_knowledge")]
    pub knowledge: f64,
}

/// Whole numbers serialize as integers so `80` stays `80` in the output.
fn serialize_knowledge<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_knowledge_serializes_as_integer() {
        let entry = TechEntry {
            title: "Rust".into(),
            knowledge: 80.0,
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"title": "Rust", "knowledge": 80})
        );
    }

    #[test]
    fn fractional_knowledge_keeps_decimals() {
        let entry = TechEntry {
            title: "Go".into(),
            knowledge: 72.5,
        };
        let text = serde_json::to_string(&entry).unwrap();
        assert!(text.contains("72.5"), "{text}");
    }
}
