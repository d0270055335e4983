#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod io;
mod presentation;
mod schema;

#[cfg(test)]
mod tests;

pub use app::{TechFormUI, UiOptions};
pub use domain::{FieldPath, FieldPathError, FormPayload, RawPayload, RawTech, TechEntry};
pub use form::{
    ErrorSlot, FieldBinding, FieldKind, FieldState, FieldStatus, FocusTarget, FormError, FormState,
    SubmitOutcome, SubmittedOutput, TechRow,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, parse_document_str, parse_prefill_str,
    render_payload,
};
pub use schema::{
    ErrorCode, FieldError, FieldErrors, SchemaRules, SignupSchema, ValidationResult,
    coerce_knowledge, normalize_email, normalize_name,
};

pub mod prelude {
    pub use super::{
        FormPayload, OutputOptions, RawPayload, SchemaRules, SignupSchema, TechFormUI, UiOptions,
    };
}
