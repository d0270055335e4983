use crate::{domain::FieldPath, schema::SignupSchema};

use super::{
    actions::FormCommand,
    state::{FocusTarget, FormState, SubmitOutcome},
};

/// What a dispatched command changed, for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    None,
    FocusMoved,
    Edited(FieldPath),
    TechAppended(usize),
    Submitted(SubmitOutcome),
}

pub struct FormEngine<'a> {
    state: &'a mut FormState,
    schema: &'a SignupSchema,
}

impl<'a> FormEngine<'a> {
    pub fn new(state: &'a mut FormState, schema: &'a SignupSchema) -> Self {
        Self { state, schema }
    }

    pub fn dispatch(&mut self, command: FormCommand) -> FormEffect {
        let state = &mut *self.state;
        match command {
            FormCommand::FocusNextField => {
                state.focus_next();
                FormEffect::FocusMoved
            }
            FormCommand::FocusPrevField => {
                state.focus_prev();
                FormEffect::FocusMoved
            }
            FormCommand::AppendTech => FormEffect::TechAppended(state.append_tech()),
            FormCommand::Edit(key) => {
                let FocusTarget::Field(path) = state.focused() else {
                    return FormEffect::None;
                };
                match state.register_field(path) {
                    Ok(binding) if binding.handle_key(state, &key) => {
                        FormEffect::Edited(binding.path().clone())
                    }
                    _ => FormEffect::None,
                }
            }
            FormCommand::Submit => FormEffect::Submitted(state.submit(self.schema)),
        }
    }
}
