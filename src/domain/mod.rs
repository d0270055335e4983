mod path;
mod payload;

pub use path::{FieldPath, FieldPathError};
pub use payload::{FormPayload, RawPayload, RawTech, TechEntry};
