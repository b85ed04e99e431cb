//! Field validation for registration snapshots.

use std::sync::LazyLock;

use regex::Regex;

use crate::{FormSnapshot, Registration, ValidationFailure, ValidationOutcome};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("email pattern compiles")
});

// `\d` would also accept non-ASCII digits.
static CONTACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("contact pattern compiles"));

/// Check an email address against the `local@domain` shape.
///
/// The local part may contain ASCII letters, digits and `+ _ . -`; the domain
/// letters, digits, `.` and `-`. The input is matched as-is, so trim it first.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Check that a contact number is exactly 11 ASCII digits.
pub fn is_valid_contact(contact: &str) -> bool {
    CONTACT.is_match(contact)
}

/// Strip leading and trailing spaces and ASCII control characters.
///
/// Anything above U+0020 is kept, including non-breaking and other Unicode spaces.
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c <= ' ')
}

/// Validate a snapshot.
///
/// Text fields are first stripped of surrounding spaces and control characters.
/// Checks run in a fixed order and only the first failure is reported:
/// 1. every field filled in ([`ValidationFailure::MissingFields`])
/// 2. email shape ([`ValidationFailure::InvalidEmail`])
/// 3. contact is 11 digits ([`ValidationFailure::InvalidContact`])
pub fn validate(snapshot: &FormSnapshot) -> ValidationOutcome {
    let name = trim(&snapshot.name);
    let address = trim(&snapshot.address);
    let email = trim(&snapshot.email);
    let contact = trim(&snapshot.contact);

    let (Some(course), Some(year_level), Some(gender)) =
        (snapshot.course, snapshot.year_level, snapshot.gender)
    else {
        return Err(ValidationFailure::MissingFields);
    };

    if [name, address, email, contact].iter().any(|v| v.is_empty()) {
        return Err(ValidationFailure::MissingFields);
    }

    if !is_valid_email(email) {
        return Err(ValidationFailure::InvalidEmail);
    }

    if !is_valid_contact(contact) {
        return Err(ValidationFailure::InvalidContact);
    }

    Ok(Registration {
        name: name.to_string(),
        course,
        year_level,
        gender,
        address: address.to_string(),
        email: email.to_string(),
        contact: contact.to_string(),
    })
}
