use std::borrow::Cow;

use serde_json::{Value, json};

use crate::domain::FieldPath;

use super::error::ErrorCode;

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+-]+(\.[A-Za-z0-9_'+-]+)*@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$";

/// Tunable limits of the sign-up schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRules {
    pub email_suffix: Cow<'static, str>,
    pub min_password_len: usize,
    pub min_techs: usize,
    pub knowledge_min: u32,
    pub knowledge_max: u32,
}

impl Default for SchemaRules {
    fn default() -> Self {
        Self {
            email_suffix: Cow::Borrowed(".com.br"),
            min_password_len: 6,
            min_techs: 2,
            knowledge_min: 1,
            knowledge_max: 100,
        }
    }
}

impl SchemaRules {
    pub fn with_email_suffix(mut self, suffix: impl Into<Cow<'static, str>>) -> Self {
        self.email_suffix = Cow::Owned(suffix.into().to_lowercase());
        self
    }

    pub fn with_min_password_len(mut self, len: usize) -> Self {
        self.min_password_len = len;
        self
    }

    pub fn with_min_techs(mut self, count: usize) -> Self {
        self.min_techs = count;
        self
    }

    pub fn with_knowledge_range(mut self, min: u32, max: u32) -> Self {
        self.knowledge_min = min;
        self.knowledge_max = max;
        self
    }

    /// JSON Schema document checked against the coerced payload.
    ///
    /// The domain suffix is not part of it: that rule runs on the
    /// lower-cased email after the schema pass.
    pub fn document(&self) -> Value {
        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "required": ["name", "email", "password", "techs"],
            "properties": {
                "name": {
                    "type": "string",
                    "minLength": 1,
                    "pattern": "\\S"
                },
                "email": {
                    "type": "string",
                    "minLength": 1,
                    "pattern": EMAIL_PATTERN
                },
                "password": {
                    "type": "string",
                    "minLength": self.min_password_len
                },
                "techs": {
                    "type": "array",
                    "minItems": self.min_techs,
                    "items": {
                        "type": "object",
                        "required": ["title", "knowledge"],
                        "properties": {
                            "title": { "type": "string", "minLength": 1 },
                            "knowledge": {
                                "type": "number",
                                "minimum": self.knowledge_min,
                                "maximum": self.knowledge_max
                            }
                        }
                    }
                }
            }
        })
    }

    pub fn message(&self, path: &FieldPath, code: ErrorCode) -> String {
        match (path, code) {
            (FieldPath::Name, _) => "Name is required".to_string(),
            (FieldPath::Email, ErrorCode::MissingField) => "Email is required".to_string(),
            (FieldPath::Email, ErrorCode::DomainNotAllowed) => {
                format!("Email must end with {}", self.email_suffix)
            }
            (FieldPath::Email, _) => "Invalid email format".to_string(),
            (FieldPath::Password, _) => format!(
                "Password must be at least {} characters",
                self.min_password_len
            ),
            (FieldPath::TechTitle(_), _) => "Title is required".to_string(),
            (FieldPath::TechKnowledge(_), _) => format!(
                "Knowledge must be between {} and {}",
                self.knowledge_min, self.knowledge_max
            ),
            (FieldPath::Techs, _) => format!("Add at least {} technologies", self.min_techs),
        }
    }
}
