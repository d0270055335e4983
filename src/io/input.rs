use anyhow::{Context, Result};
use serde_json::Value;

use crate::domain::RawPayload;

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Read prefill values for the form.
///
/// Knowledge may be given as a number or a string; missing keys stay empty.
pub fn parse_prefill_str(contents: &str, format: DocumentFormat) -> Result<RawPayload> {
    let mut value = parse_document_str(contents, format)?;
    stringify_knowledge(&mut value);
    serde_json::from_value(with_missing_keys(value)).context("prefill does not match the form")
}

fn stringify_knowledge(value: &mut Value) {
    let Some(techs) = value.get_mut("techs").and_then(Value::as_array_mut) else {
        return;
    };
    for tech in techs {
        if let Some(Value::Number(number)) = tech.get("knowledge") {
            let text = number.to_string();
            tech["knowledge"] = Value::String(text);
        }
    }
}

fn with_missing_keys(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        for key in ["name", "email", "password"] {
            map.entry(key).or_insert_with(|| Value::String(String::new()));
        }
        map.entry("techs").or_insert_with(|| Value::Array(Vec::new()));
        if let Some(Value::Array(techs)) = map.get_mut("techs") {
            for tech in techs {
                if let Value::Object(entry) = tech {
                    entry
                        .entry("title")
                        .or_insert_with(|| Value::String(String::new()));
                    entry
                        .entry("knowledge")
                        .or_insert_with(|| Value::String(String::new()));
                }
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawTech;

    #[test]
    fn parse_json_documents() {
        let value = parse_document_str(r#"{"name": "Ana"}"#, DocumentFormat::Json).unwrap();
        assert_eq!(value["name"], "Ana");
        assert!(parse_document_str("{", DocumentFormat::Json).is_err());
    }

    #[test]
    fn prefill_accepts_numeric_knowledge_and_partial_documents() {
        let raw = parse_prefill_str(
            r#"{"name": "ana lima", "techs": [{"title": "Rust", "knowledge": 90}, {"title": "Go"}]}"#,
            DocumentFormat::Json,
        )
        .unwrap();
        assert_eq!(raw.name, "ana lima");
        assert_eq!(raw.email, "");
        assert_eq!(
            raw.techs,
            vec![RawTech::new("Rust", "90"), RawTech::new("Go", "")]
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn prefill_from_toml() {
        let raw = parse_prefill_str(
            "name = \"rui\"\n[[techs]]\ntitle = \"Zig\"\nknowledge = 40\n",
            DocumentFormat::Toml,
        )
        .unwrap();
        assert_eq!(raw.techs, vec![RawTech::new("Zig", "40")]);
    }
}
