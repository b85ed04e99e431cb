use crate::{ValidationFailure, ValidationOutcome};

/// Title of every error dialog.
pub const ERROR_TITLE: &str = "Input Error";

/// Title of the success dialog.
pub const SUCCESS_TITLE: &str = "Success";

/// Message of the success dialog.
pub const SUCCESS_MESSAGE: &str = "Registration Successful!";

/// Styling of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Information,
}

/// A modal acknowledgment shown to the user after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    /// Create an error dialog with the standard title.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: ERROR_TITLE.to_string(),
            message: message.into(),
        }
    }

    /// Create an information dialog with the given title.
    pub fn information(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Information,
            title: title.into(),
            message: message.into(),
        }
    }

    /// The dialog that acknowledges a validation outcome.
    pub fn for_outcome(outcome: &ValidationOutcome) -> Self {
        match outcome {
            Ok(_) => Self::information(SUCCESS_TITLE, SUCCESS_MESSAGE),
            Err(failure) => Self::from(*failure),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == DialogKind::Error
    }
}

impl From<ValidationFailure> for Dialog {
    fn from(failure: ValidationFailure) -> Self {
        Self::error(failure.to_string())
    }
}
