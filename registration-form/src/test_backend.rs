//! Test backend for driving the form without user interaction.
//!
//! `TestBackend` plays a script of field edits and button presses against an
//! in-memory copy of the form, the same way a real backend would against its
//! widgets. Every reaction is recorded for inspection after the run.
//!
//! # Example
//!
//! ```rust
//! use registration_form::{Field, FormController, FormExit, TestBackend};
//!
//! let backend = TestBackend::new()
//!     .with_value(Field::Name, "Juan")
//!     .with_register()
//!     .with_exit();
//!
//! let exit = FormController::new().run(&backend).unwrap();
//! assert_eq!(exit, FormExit::Exit);
//! assert_eq!(backend.dialogs()[0].message, "All fields are required!");
//! ```

use std::cell::RefCell;

use crate::{
    Dialog, Field, FormBackend, FormEvent, FormExit, FormSnapshot, Reaction, VariantArray,
};

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// Type into a text field or pick an entry of an enumeration field.
    Set { field: Field, value: String },
    Register,
    Clear,
    Exit,
}

/// A test backend that replays scripted user actions.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    steps: Vec<Step>,
    screen: RefCell<FormSnapshot>,
    reactions: RefCell<Vec<Reaction>>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidValue { field: Field, value: String },
}

impl TestBackend {
    /// Create a new backend with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field to a value. Enumeration fields take their exact label, or
    /// `""` for the blank entry.
    pub fn with_value(mut self, field: Field, value: impl Into<String>) -> Self {
        self.steps.push(Step::Set {
            field,
            value: value.into(),
        });
        self
    }

    /// Fill every field from a snapshot.
    pub fn with_snapshot(mut self, snapshot: &FormSnapshot) -> Self {
        for field in Field::VARIANTS {
            self = self.with_value(*field, snapshot.value(*field));
        }
        self
    }

    /// Press Register.
    pub fn with_register(mut self) -> Self {
        self.steps.push(Step::Register);
        self
    }

    /// Press Clear.
    pub fn with_clear(mut self) -> Self {
        self.steps.push(Step::Clear);
        self
    }

    /// Press Exit.
    pub fn with_exit(mut self) -> Self {
        self.steps.push(Step::Exit);
        self
    }

    /// Field values as they were left by the last run.
    pub fn screen(&self) -> FormSnapshot {
        self.screen.borrow().clone()
    }

    /// Every reaction received during the last run, in order.
    pub fn reactions(&self) -> Vec<Reaction> {
        self.reactions.borrow().clone()
    }

    /// The dialogs shown during the last run, in order.
    pub fn dialogs(&self) -> Vec<Dialog> {
        self.reactions
            .borrow()
            .iter()
            .filter_map(|reaction| match reaction {
                Reaction::ShowDialog(dialog) => Some(dialog.clone()),
                _ => None,
            })
            .collect()
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn run(
        &self,
        handle: &mut dyn FnMut(FormEvent) -> Reaction,
    ) -> Result<FormExit, Self::Error> {
        let mut screen = FormSnapshot::default();
        self.reactions.borrow_mut().clear();

        let mut exit = FormExit::Closed;
        for step in &self.steps {
            let event = match step {
                Step::Set { field, value } => {
                    screen.set_value(*field, value).map_err(|_| {
                        TestBackendError::InvalidValue {
                            field: *field,
                            value: value.clone(),
                        }
                    })?;
                    continue;
                }
                Step::Register => FormEvent::Submit(screen.clone()),
                Step::Clear => FormEvent::Clear,
                Step::Exit => FormEvent::Exit,
            };

            let reaction = handle(event);
            if let Reaction::Reset(values) = &reaction {
                screen = values.clone();
            }
            let done = reaction == Reaction::Exit;
            self.reactions.borrow_mut().push(reaction);
            if done {
                exit = FormExit::Exit;
                break;
            }
        }

        *self.screen.borrow_mut() = screen;
        Ok(exit)
    }
}
