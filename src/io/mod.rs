mod format;
pub mod input;
pub mod output;

pub use format::DocumentFormat;
pub use input::{parse_document_str, parse_prefill_str};
pub use output::{OutputDestination, OutputOptions, emit, render_payload};
