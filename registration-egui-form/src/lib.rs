//! # registration-egui-form
//!
//! An egui backend for registration-form that shows the form in a native
//! desktop window.
//!
//! The window lays the fields out in a two-column grid with the Register,
//! Clear and Exit buttons underneath. Acknowledgments appear as modal dialogs
//! that must be dismissed before the form accepts input again.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use registration_form::FormController;
//! use registration_egui_form::EguiBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = EguiBackend::new()
//!         .with_title("Registration Form")
//!         .with_window_size([350.0, 400.0]);
//!
//!     FormController::new().run(backend)?;
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{EguiBackend, EguiError};
