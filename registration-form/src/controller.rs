//! Maps user actions onto validation and UI reactions.

use tracing::{debug, info};

use crate::{Dialog, FormBackend, FormError, FormEvent, FormExit, FormSnapshot, Reaction, validate};

/// Wires form events to the validator.
///
/// The controller holds no form data. Field values live in the backend's
/// widgets and arrive with each [`FormEvent::Submit`].
#[derive(Debug, Clone, Default)]
pub struct FormController {
    submissions: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submit attempts handled so far.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Handle a single user action.
    ///
    /// * `Submit` validates the snapshot and always answers with a dialog. The
    ///   fields are left as they are, even on success.
    /// * `Clear` resets every field to blank/unselected.
    /// * `Exit` closes the form without confirmation.
    pub fn handle(&mut self, event: FormEvent) -> Reaction {
        match event {
            FormEvent::Submit(snapshot) => {
                self.submissions += 1;
                let outcome = validate(&snapshot);
                match &outcome {
                    Ok(_) => info!(submission = self.submissions, "registration accepted"),
                    Err(failure) => {
                        debug!(submission = self.submissions, ?failure, "registration rejected")
                    }
                }
                Reaction::ShowDialog(Dialog::for_outcome(&outcome))
            }
            FormEvent::Clear => {
                debug!("clearing form");
                Reaction::Reset(FormSnapshot::default())
            }
            FormEvent::Exit => {
                info!(submissions = self.submissions, "exit requested");
                Reaction::Exit
            }
        }
    }

    /// Run the form on a backend until the user exits or closes it.
    pub fn run<B: FormBackend>(&mut self, backend: B) -> Result<FormExit, FormError> {
        let exit = backend
            .run(&mut |event| self.handle(event))
            .map_err(FormError::backend)?;
        debug!(?exit, "form session ended");
        Ok(exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Course, DialogKind, Gender, ValidationFailure, YearLevel};

    fn juan() -> FormSnapshot {
        FormSnapshot {
            name: " Juan ".to_string(),
            course: Some(Course::BsitAgd),
            year_level: Some(YearLevel::Second),
            gender: Some(Gender::Female),
            address: "Cebu".to_string(),
            email: "juan@test.com".to_string(),
            contact: "09171234567".to_string(),
        }
    }

    fn dialog(reaction: Reaction) -> Dialog {
        match reaction {
            Reaction::ShowDialog(dialog) => dialog,
            other => panic!("Expected a dialog, got {other:?}"),
        }
    }

    #[test]
    fn submit_success_shows_information_dialog() {
        let mut controller = FormController::new();
        let shown = dialog(controller.handle(FormEvent::Submit(juan())));

        assert_eq!(shown.kind, DialogKind::Information);
        assert_eq!(shown.title, "Success");
        assert_eq!(shown.message, "Registration Successful!");
        assert_eq!(controller.submissions(), 1);
    }

    #[test]
    fn submit_failures_show_their_messages() {
        let mut controller = FormController::new();

        let mut missing = juan();
        missing.gender = None;
        let mut bad_email = juan();
        bad_email.email = "juan.test.com".to_string();
        let mut bad_contact = juan();
        bad_contact.contact = "0917 123 4567".to_string();

        for (snapshot, failure) in [
            (missing, ValidationFailure::MissingFields),
            (bad_email, ValidationFailure::InvalidEmail),
            (bad_contact, ValidationFailure::InvalidContact),
        ] {
            let shown = dialog(controller.handle(FormEvent::Submit(snapshot)));
            assert_eq!(shown, Dialog::error(failure.to_string()));
            assert_eq!(shown.title, "Input Error");
        }
        assert_eq!(controller.submissions(), 3);
    }

    #[test]
    fn clear_resets_to_blank_form() {
        let mut controller = FormController::new();
        assert_eq!(
            controller.handle(FormEvent::Clear),
            Reaction::Reset(FormSnapshot::default())
        );
    }

    #[test]
    fn exit_is_immediate() {
        let mut controller = FormController::new();
        assert_eq!(controller.handle(FormEvent::Exit), Reaction::Exit);
        assert_eq!(controller.submissions(), 0);
    }
}
