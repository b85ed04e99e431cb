//! # registration-ratatui-form
//!
//! Ratatui backend for registration-form.
//!
//! This backend displays every field of the registration form at once in the
//! terminal, with the Register, Clear and Exit buttons underneath. Users move
//! between fields using Tab/Shift+Tab or the arrow keys; dialogs pop up over
//! the form and are dismissed with Enter.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use registration_form::FormController;
//! use registration_ratatui_form::RatatuiFormBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = RatatuiFormBackend::new();
//!     let exit = FormController::new().run(backend)?;
//!     println!("{exit:?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{RatatuiFormBackend, RatatuiFormError, Theme};
