use std::borrow::Cow;

use anyhow::Result;

use crate::{
    domain::{FormPayload, RawPayload},
    form::FormState,
    schema::{SchemaRules, SignupSchema},
};

use super::{options::UiOptions, runtime::App};

/// Interactive sign-up form rendered in the terminal.
///
/// `run` blocks until the user quits and returns the last payload the schema
/// accepted.
#[derive(Debug)]
pub struct TechFormUI {
    rules: SchemaRules,
    options: UiOptions,
}

impl Default for TechFormUI {
    fn default() -> Self {
        Self::new(SchemaRules::default())
    }
}

impl TechFormUI {
    pub fn new(rules: SchemaRules) -> Self {
        Self {
            rules,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
        self.options.title = title.into();
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_prefill(mut self, prefill: RawPayload) -> Self {
        self.options.prefill = Some(prefill);
        self
    }

    pub fn run(self) -> Result<FormPayload> {
        let TechFormUI { rules, options } = self;

        let schema = SignupSchema::new(rules)?;
        let mut form_state = FormState::new();
        if let Some(prefill) = options.prefill.as_ref() {
            form_state.seed(prefill);
        }

        let mut app = App::new(form_state, schema, options);
        app.run()
    }
}
