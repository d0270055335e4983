use std::fmt;

/// What the footer tells the user about the last thing that happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ready,
    Editing(String),
    TechAdded(usize),
    Accepted,
    Rejected(usize),
    ConfirmExit,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => f.write_str("Ready. Press Ctrl+S to validate and submit."),
            Status::Editing(label) => write!(f, "Editing {label}"),
            Status::TechAdded(index) => write!(f, "Added technology #{}", index + 1),
            Status::Accepted => f.write_str("Submission accepted"),
            Status::Rejected(issues) => write!(f, "{issues} issue(s) remaining"),
            Status::ConfirmExit => f.write_str(
                "Unsubmitted changes. Press Ctrl+Q again to quit without submitting.",
            ),
        }
    }
}
