use crate::Registration;

/// Why a snapshot was rejected.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationFailure {
    /// At least one field is blank or unselected.
    #[error("All fields are required!")]
    MissingFields,

    /// The email address does not have the `local@domain` shape.
    #[error("Invalid email format!")]
    InvalidEmail,

    /// The contact number is not exactly 11 digits.
    #[error("Contact number must be 11 digits!")]
    InvalidContact,
}

/// Result of validating a snapshot: the record, or the first failure found.
pub type ValidationOutcome = Result<Registration, ValidationFailure>;
