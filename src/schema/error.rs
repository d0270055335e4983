use std::fmt;

use indexmap::IndexMap;

use crate::domain::FieldPath;

/// Failure taxonomy of the sign-up schema.
///
/// Variant order doubles as priority: when several rules fail on the same
/// path, the earliest variant is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    MissingField,
    InvalidFormat,
    DomainNotAllowed,
    TooShort,
    OutOfRange,
    TooFewEntries,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorCode::MissingField => "missing field",
            ErrorCode::InvalidFormat => "invalid format",
            ErrorCode::DomainNotAllowed => "domain not allowed",
            ErrorCode::TooShort => "too short",
            ErrorCode::OutOfRange => "out of range",
            ErrorCode::TooFewEntries => "too few entries",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub code: ErrorCode,
    pub message: String,
}

/// Flat mapping from field path to the single error shown for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: IndexMap<FieldPath, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, keeping the higher-priority one if the path already
    /// has an entry.
    pub fn insert(&mut self, path: FieldPath, code: ErrorCode, message: impl Into<String>) {
        match self.entries.get_mut(&path) {
            Some(existing) if existing.code <= code => {}
            Some(existing) => {
                existing.code = code;
                existing.message = message.into();
            }
            None => {
                self.entries.insert(
                    path,
                    FieldError {
                        code,
                        message: message.into(),
                    },
                );
            }
        }
    }

    pub fn get(&self, path: &FieldPath) -> Option<&FieldError> {
        self.entries.get(path)
    }

    pub fn message(&self, path: &FieldPath) -> Option<&str> {
        self.get(path).map(|error| error.message.as_str())
    }

    pub fn code(&self, path: &FieldPath) -> Option<ErrorCode> {
        self.get(path).map(|error| error.code)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.entries.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &FieldError)> {
        self.entries.iter()
    }

    /// Dotted-path keyed view, e.g. `techs.1.title -> "Title is required"`.
    pub fn to_messages(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(path, error)| (path.to_string(), error.message.clone()))
            .collect()
    }

    pub(crate) fn sort(&mut self) {
        self.entries.sort_keys();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, error) in &self.entries {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{path}: {}", error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
