//! Sign-up validation schema.
//!
//! The raw payload is coerced into JSON, checked against a JSON Schema built
//! from [`SchemaRules`], and every violation is mapped back onto a
//! [`FieldPath`]. Accepted payloads are normalized into a [`FormPayload`].

mod error;
mod normalize;
mod rules;

use std::fmt;

use anyhow::{Context, Result};
use jsonschema::{Validator, validator_for};
use serde_json::{Number, Value, json};

use crate::domain::{FieldPath, FormPayload, RawPayload, TechEntry};

pub use error::{ErrorCode, FieldError, FieldErrors};
pub use normalize::{coerce_knowledge, normalize_email, normalize_name};
pub use rules::SchemaRules;

/// Either the normalized payload or every field error found.
pub type ValidationResult = std::result::Result<FormPayload, FieldErrors>;

pub struct SignupSchema {
    rules: SchemaRules,
    validator: Validator,
}

impl fmt::Debug for SignupSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupSchema")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl SignupSchema {
    pub fn new(rules: SchemaRules) -> Result<Self> {
        let document = rules.document();
        let validator = validator_for(&document).context("failed to compile JSON schema")?;
        Ok(Self { rules, validator })
    }

    pub fn standard() -> Result<Self> {
        Self::new(SchemaRules::default())
    }

    /// Validate the whole payload, collecting every failing rule.
    pub fn validate(&self, raw: &RawPayload) -> ValidationResult {
        let knowledge: Vec<Option<f64>> = raw
            .techs
            .iter()
            .map(|tech| coerce_knowledge(&tech.knowledge))
            .collect();
        let instance = coerced_instance(raw, &knowledge);

        let mut errors = FieldErrors::new();
        for error in self.validator.iter_errors(&instance) {
            let pointer = error.instance_path.to_string();
            let Some(path) = FieldPath::from_pointer(&pointer) else {
                tracing::trace!(%pointer, "schema violation outside form fields");
                continue;
            };
            let code = classify(&path, raw);
            let message = self.rules.message(&path, code);
            errors.insert(path, code, message);
        }

        let name = normalize_name(&raw.name);
        if name.is_empty() {
            let code = ErrorCode::MissingField;
            errors.insert(FieldPath::Name, code, self.rules.message(&FieldPath::Name, code));
        }

        let email = normalize_email(&raw.email);
        if !errors.contains(&FieldPath::Email) && !email.ends_with(&*self.rules.email_suffix) {
            let code = ErrorCode::DomainNotAllowed;
            errors.insert(FieldPath::Email, code, self.rules.message(&FieldPath::Email, code));
        }

        if !errors.is_empty() {
            errors.sort();
            return Err(errors);
        }

        let techs = raw
            .techs
            .iter()
            .zip(knowledge)
            .map(|(tech, knowledge)| TechEntry {
                title: tech.title.clone(),
                knowledge: knowledge.unwrap_or_default(),
            })
            .collect();

        Ok(FormPayload {
            name,
            email,
            password: raw.password.clone(),
            techs,
        })
    }
}

fn coerced_instance(raw: &RawPayload, knowledge: &[Option<f64>]) -> Value {
    let techs: Vec<Value> = raw
        .techs
        .iter()
        .zip(knowledge)
        .map(|(tech, knowledge)| {
            let knowledge = knowledge
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null);
            json!({ "title": tech.title, "knowledge": knowledge })
        })
        .collect();
    json!({
        "name": raw.name,
        "email": raw.email,
        "password": raw.password,
        "techs": techs,
    })
}

fn classify(path: &FieldPath, raw: &RawPayload) -> ErrorCode {
    match path {
        FieldPath::Name | FieldPath::TechTitle(_) => ErrorCode::MissingField,
        FieldPath::Email if raw.email.is_empty() => ErrorCode::MissingField,
        FieldPath::Email => ErrorCode::InvalidFormat,
        FieldPath::Password => ErrorCode::TooShort,
        FieldPath::TechKnowledge(_) => ErrorCode::OutOfRange,
        FieldPath::Techs => ErrorCode::TooFewEntries,
    }
}
