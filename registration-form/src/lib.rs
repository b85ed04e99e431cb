//! # registration-form
//!
//! Validate student registration forms. Backend-agnostic.
//!
//! The form has seven fields (name, course, year level, gender, address,
//! email, contact number). A backend captures them into a [`FormSnapshot`],
//! the [`FormController`] validates it and answers with a [`Reaction`] such
//! as an error or success [`Dialog`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use registration_form::{FormController, FormExit};
//! use registration_egui_form::EguiBackend;
//!
//! let exit: FormExit = FormController::new().run(EguiBackend::new())?;
//! ```
//!
//! Validation can also be used on its own:
//!
//! ```rust
//! use registration_form::{FormSnapshot, ValidationFailure, validate};
//!
//! let snapshot = FormSnapshot::new();
//! assert_eq!(validate(&snapshot), Err(ValidationFailure::MissingFields));
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `FormBackend`:
//! - `registration-egui-form` - desktop window via egui
//! - `registration-ratatui-form` - terminal form via ratatui

// Re-export all types from registration-form-types
pub use registration_form_types::*;

mod validator;
pub use validator::{is_valid_contact, is_valid_email, validate};

mod controller;
pub use controller::FormController;

// Test backend for driving the form without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
