use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::FieldPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Rendered masked.
    Secret,
    /// Numeric input; Left/Right step the value.
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Pristine,
    Touched,
}

/// Live value of one input.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub path: FieldPath,
    pub kind: FieldKind,
    value: String,
    status: FieldStatus,
    /// Edited since the last accepted submission.
    pub dirty: bool,
}

impl FieldState {
    pub fn new(path: FieldPath, kind: FieldKind) -> Self {
        Self {
            path,
            kind,
            value: String::new(),
            status: FieldStatus::Pristine,
            dirty: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub fn label(&self) -> String {
        self.path.label()
    }

    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Secret => "•".repeat(self.value.chars().count()),
            FieldKind::Text | FieldKind::Number => self.value.clone(),
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.after_edit();
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let changed = match key.code {
            KeyCode::Left if self.kind == FieldKind::Number => step_number(&mut self.value, -1),
            KeyCode::Right if self.kind == FieldKind::Number => step_number(&mut self.value, 1),
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) || !self.accepts(ch) {
                    return false;
                }
                self.value.push(ch);
                true
            }
            KeyCode::Backspace => self.value.pop().is_some(),
            KeyCode::Delete => {
                let had_value = !self.value.is_empty();
                self.value.clear();
                had_value
            }
            _ => false,
        };
        if changed {
            self.after_edit();
        }
        changed
    }

    pub(crate) fn mark_saved(&mut self) {
        self.dirty = false;
    }

    fn accepts(&self, ch: char) -> bool {
        match self.kind {
            FieldKind::Number => ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'),
            FieldKind::Text | FieldKind::Secret => !ch.is_control(),
        }
    }

    fn after_edit(&mut self) {
        self.status = FieldStatus::Touched;
        self.dirty = true;
    }
}

fn step_number(buffer: &mut String, step: i64) -> bool {
    let trimmed = buffer.trim();
    if let Ok(current) = trimmed.parse::<i64>() {
        *buffer = current.saturating_add(step).to_string();
        return true;
    }
    let current = if trimmed.is_empty() {
        0.0
    } else {
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return false,
        }
    };
    *buffer = (current + step as f64).to_string();
    true
}
