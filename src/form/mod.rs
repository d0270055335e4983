mod actions;
mod error;
mod field;
mod reducers;
mod state;

pub use actions::FormCommand;
pub use error::FormError;
pub use field::{FieldKind, FieldState, FieldStatus};
pub use reducers::{FormEffect, FormEngine};
pub use state::{
    ErrorSlot, FieldBinding, FocusTarget, FormState, SubmitOutcome, SubmittedOutput, TechRow,
};
