//! Core types for the registration-form crate.
//!
//! This crate provides the foundational types for the registration form:
//! - `FormSnapshot` and `Field` - Raw field values captured from a UI
//! - `Course`, `YearLevel` and `Gender` - The closed enumeration fields
//! - `Registration` and `ValidationOutcome` - The validated record or the reason it was rejected
//! - `FormEvent`, `Reaction` and `Dialog` - What a UI reports and what it is asked to do
//! - `FormBackend` trait - For implementing presentation backends

mod choice;
pub use choice::{Choice, Course, Gender, YearLevel};

mod field;
pub use field::Field;

mod snapshot;
pub use snapshot::FormSnapshot;

mod record;
pub use record::Registration;

mod outcome;
pub use outcome::{ValidationFailure, ValidationOutcome};

mod dialog;
pub use dialog::{Dialog, DialogKind, ERROR_TITLE, SUCCESS_MESSAGE, SUCCESS_TITLE};

mod event;
pub use event::{Button, FormEvent, FormExit, Reaction};

mod error;
pub use error::FormError;

mod traits;
pub use traits::FormBackend;

pub use strum::{ParseError, VariantArray};
