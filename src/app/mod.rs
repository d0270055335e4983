pub(crate) mod input;
mod options;
mod runtime;
mod status;
mod tech_form;
mod terminal;

pub use options::UiOptions;
pub use tech_form::TechFormUI;
