use strum::{Display, VariantArray};

use crate::{Dialog, FormSnapshot};

/// A user action reported by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Register was pressed; carries the fields as they were on screen.
    Submit(FormSnapshot),
    /// Clear was pressed.
    Clear,
    /// Exit was pressed.
    Exit,
}

/// What the backend must do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Show a modal dialog. Form input is blocked until it is dismissed.
    ShowDialog(Dialog),
    /// Overwrite every widget with the given values.
    Reset(FormSnapshot),
    /// Close the form. The process exits with status 0.
    Exit,
}

/// How a form session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormExit {
    /// The user pressed Exit.
    Exit,
    /// The window or terminal was closed some other way.
    Closed,
}

/// The action buttons below the fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, VariantArray)]
pub enum Button {
    Register,
    Clear,
    Exit,
}

impl Button {
    /// The event a press produces, given the fields currently on screen.
    pub fn event(self, fields: &FormSnapshot) -> FormEvent {
        match self {
            Button::Register => FormEvent::Submit(fields.clone()),
            Button::Clear => FormEvent::Clear,
            Button::Exit => FormEvent::Exit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_in_display_order() {
        let labels: Vec<String> = Button::VARIANTS.iter().map(|b| b.to_string()).collect();
        assert_eq!(labels, ["Register", "Clear", "Exit"]);
    }

    #[test]
    fn register_captures_fields() {
        let fields = FormSnapshot {
            name: "Lea".to_string(),
            ..FormSnapshot::default()
        };
        assert_eq!(
            Button::Register.event(&fields),
            FormEvent::Submit(fields.clone())
        );
        assert_eq!(Button::Clear.event(&fields), FormEvent::Clear);
        assert_eq!(Button::Exit.event(&fields), FormEvent::Exit);
    }
}
