use crossterm::event::KeyEvent;

use crate::{
    domain::{FieldPath, FormPayload, RawPayload, RawTech},
    io::render_payload,
    schema::{FieldErrors, SignupSchema},
};

use super::{
    error::FormError,
    field::{FieldKind, FieldState},
};

/// Knowledge value of a freshly appended tech row.
const DEFAULT_KNOWLEDGE: &str = "0";

#[derive(Debug, Clone)]
pub struct TechRow {
    pub title: FieldState,
    pub knowledge: FieldState,
}

impl TechRow {
    fn new(index: usize) -> Self {
        Self {
            title: FieldState::new(FieldPath::TechTitle(index), FieldKind::Text),
            knowledge: FieldState::new(FieldPath::TechKnowledge(index), FieldKind::Number)
                .with_value(DEFAULT_KNOWLEDGE),
        }
    }

    fn seeded(index: usize, raw: &RawTech) -> Self {
        Self {
            title: FieldState::new(FieldPath::TechTitle(index), FieldKind::Text)
                .with_value(raw.title.as_str()),
            knowledge: FieldState::new(FieldPath::TechKnowledge(index), FieldKind::Number)
                .with_value(raw.knowledge.as_str()),
        }
    }
}

/// Last accepted payload together with its rendering for the result panel.
#[derive(Debug, Clone)]
pub struct SubmittedOutput {
    pub payload: FormPayload,
    pub rendered: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { issues: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSlot<'a> {
    Clear,
    HasError(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldPath),
    AddTech,
    Submit,
}

/// Handle for one registered input; edits through it touch only its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    path: FieldPath,
}

impl FieldBinding {
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn value<'a>(&self, state: &'a FormState) -> Option<&'a str> {
        state.field(&self.path).map(FieldState::value)
    }

    pub fn set(&self, state: &mut FormState, value: impl Into<String>) -> Result<(), FormError> {
        let field = state
            .field_mut(&self.path)
            .ok_or_else(|| FormError::UnknownField(self.path.clone()))?;
        field.set_value(value);
        Ok(())
    }

    pub fn handle_key(&self, state: &mut FormState, key: &KeyEvent) -> bool {
        state
            .field_mut(&self.path)
            .is_some_and(|field| field.handle_key(key))
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    name: FieldState,
    email: FieldState,
    password: FieldState,
    techs: Vec<TechRow>,
    errors: FieldErrors,
    output: Option<SubmittedOutput>,
    focus_index: usize,
    /// Row count at the last seed or accepted submission.
    saved_techs: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: FieldState::new(FieldPath::Name, FieldKind::Text),
            email: FieldState::new(FieldPath::Email, FieldKind::Text),
            password: FieldState::new(FieldPath::Password, FieldKind::Secret),
            techs: Vec::new(),
            errors: FieldErrors::new(),
            output: None,
            focus_index: 0,
            saved_techs: 0,
        }
    }

    /// Bind an input to its path. Fails for the techs list itself and for
    /// rows that have not been appended yet.
    pub fn register_field(&self, path: FieldPath) -> Result<FieldBinding, FormError> {
        if !path.is_scalar() {
            return Err(FormError::NotScalar(path));
        }
        if self.field(&path).is_none() {
            return Err(FormError::UnknownField(path));
        }
        Ok(FieldBinding { path })
    }

    pub fn register_field_str(&self, raw: &str) -> Result<FieldBinding, FormError> {
        self.register_field(raw.parse::<FieldPath>()?)
    }

    /// Load starting values. Seeded fields stay pristine and clean.
    pub fn seed(&mut self, raw: &RawPayload) {
        self.name = FieldState::new(FieldPath::Name, FieldKind::Text).with_value(raw.name.as_str());
        self.email =
            FieldState::new(FieldPath::Email, FieldKind::Text).with_value(raw.email.as_str());
        self.password = FieldState::new(FieldPath::Password, FieldKind::Secret)
            .with_value(raw.password.as_str());
        self.techs = raw
            .techs
            .iter()
            .enumerate()
            .map(|(index, tech)| TechRow::seeded(index, tech))
            .collect();
        self.saved_techs = self.techs.len();
        self.focus_index = 0;
    }

    pub fn field(&self, path: &FieldPath) -> Option<&FieldState> {
        match path {
            FieldPath::Name => Some(&self.name),
            FieldPath::Email => Some(&self.email),
            FieldPath::Password => Some(&self.password),
            FieldPath::Techs => None,
            FieldPath::TechTitle(index) => self.techs.get(*index).map(|row| &row.title),
            FieldPath::TechKnowledge(index) => self.techs.get(*index).map(|row| &row.knowledge),
        }
    }

    pub fn field_mut(&mut self, path: &FieldPath) -> Option<&mut FieldState> {
        match path {
            FieldPath::Name => Some(&mut self.name),
            FieldPath::Email => Some(&mut self.email),
            FieldPath::Password => Some(&mut self.password),
            FieldPath::Techs => None,
            FieldPath::TechTitle(index) => self.techs.get_mut(*index).map(|row| &mut row.title),
            FieldPath::TechKnowledge(index) => {
                self.techs.get_mut(*index).map(|row| &mut row.knowledge)
            }
        }
    }

    pub fn techs(&self) -> &[TechRow] {
        &self.techs
    }

    /// Append an empty row and focus its title. Returns the new row's index.
    pub fn append_tech(&mut self) -> usize {
        let index = self.techs.len();
        self.techs.push(TechRow::new(index));
        tracing::debug!(index, "tech row appended");
        if let Some(position) = self
            .focus_targets()
            .iter()
            .position(|target| *target == FocusTarget::Field(FieldPath::TechTitle(index)))
        {
            self.focus_index = position;
        }
        index
    }

    pub fn raw_payload(&self) -> RawPayload {
        RawPayload {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            techs: self
                .techs
                .iter()
                .map(|row| RawTech::new(row.title.value(), row.knowledge.value()))
                .collect(),
        }
    }

    /// Validate the current values. Errors are replaced on every attempt;
    /// the previous output survives a rejected one.
    pub fn submit(&mut self, schema: &SignupSchema) -> SubmitOutcome {
        match schema.validate(&self.raw_payload()) {
            Ok(payload) => {
                let rendered = render_payload(&payload).unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "failed to render accepted payload");
                    format!("<unable to render output: {err}>")
                });
                self.output = Some(SubmittedOutput { payload, rendered });
                self.errors.clear();
                self.iter_fields_mut().for_each(FieldState::mark_saved);
                self.saved_techs = self.techs.len();
                tracing::debug!(techs = self.techs.len(), "submission accepted");
                SubmitOutcome::Accepted
            }
            Err(errors) => {
                let issues = errors.len();
                self.errors = errors;
                tracing::debug!(issues, "submission rejected");
                SubmitOutcome::Rejected { issues }
            }
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_slot(&self, path: &FieldPath) -> ErrorSlot<'_> {
        match self.errors.message(path) {
            Some(message) => ErrorSlot::HasError(message),
            None => ErrorSlot::Clear,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn output(&self) -> Option<&SubmittedOutput> {
        self.output.as_ref()
    }

    /// Edits or appended rows that no accepted submission has covered yet.
    pub fn is_dirty(&self) -> bool {
        self.techs.len() != self.saved_techs || self.iter_fields().any(|field| field.dirty)
    }

    /// Focus order: scalar inputs, each tech row, then the Add and Save actions.
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = vec![
            FocusTarget::Field(FieldPath::Name),
            FocusTarget::Field(FieldPath::Email),
            FocusTarget::Field(FieldPath::Password),
        ];
        for index in 0..self.techs.len() {
            targets.push(FocusTarget::Field(FieldPath::TechTitle(index)));
            targets.push(FocusTarget::Field(FieldPath::TechKnowledge(index)));
        }
        targets.push(FocusTarget::AddTech);
        targets.push(FocusTarget::Submit);
        targets
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn focused(&self) -> FocusTarget {
        let mut targets = self.focus_targets();
        let index = self.focus_index.min(targets.len() - 1);
        targets.swap_remove(index)
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        match self.focused() {
            FocusTarget::Field(path) => self.field(&path),
            _ => None,
        }
    }

    pub fn focus_next(&mut self) {
        let len = self.focus_targets().len();
        self.focus_index = (self.focus_index + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.focus_targets().len();
        self.focus_index = (self.focus_index + len - 1) % len;
    }

    pub fn focus(&mut self, target: &FocusTarget) -> bool {
        match self.focus_targets().iter().position(|item| item == target) {
            Some(position) => {
                self.focus_index = position;
                true
            }
            None => false,
        }
    }

    fn iter_fields(&self) -> impl Iterator<Item = &FieldState> {
        [&self.name, &self.email, &self.password]
            .into_iter()
            .chain(self.techs.iter().flat_map(|row| [&row.title, &row.knowledge]))
    }

    fn iter_fields_mut(&mut self) -> impl Iterator<Item = &mut FieldState> {
        [&mut self.name, &mut self.email, &mut self.password]
            .into_iter()
            .chain(
                self.techs
                    .iter_mut()
                    .flat_map(|row| [&mut row.title, &mut row.knowledge]),
            )
    }
}
