use crate::domain::{FieldPath, FieldPathError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The path is well formed but nothing is registered there yet.
    UnknownField(FieldPath),
    /// The path addresses the techs list, not an input.
    NotScalar(FieldPath),
    InvalidPath(String),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::UnknownField(path) => write!(f, "{path}: no such field"),
            FormError::NotScalar(path) => write!(f, "{path}: not a scalar input"),
            FormError::InvalidPath(raw) => write!(f, "{raw}: invalid field path"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<FieldPathError> for FormError {
    fn from(error: FieldPathError) -> Self {
        FormError::InvalidPath(error.raw)
    }
}
