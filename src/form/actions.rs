use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum FormCommand {
    FocusNextField,
    FocusPrevField,
    AppendTech,
    Submit,
    /// Key routed to the focused input.
    Edit(KeyEvent),
}
