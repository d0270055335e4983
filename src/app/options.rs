use std::borrow::Cow;

use crate::domain::RawPayload;

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub show_help: bool,
    /// Ask twice before quitting with edits that were never accepted.
    pub confirm_exit: bool,
    pub title: Cow<'static, str>,
    pub prefill: Option<RawPayload>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            show_help: true,
            confirm_exit: true,
            title: Cow::Borrowed("Create user"),
            prefill: None,
        }
    }
}

impl UiOptions {
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_prefill(mut self, prefill: RawPayload) -> Self {
        self.prefill = Some(prefill);
        self
    }
}
