//! Pure validation predicates shared by the contact and newsletter forms.
//!
//! [`check_contact_form`] decides; [`validate_contact_form`] decides and tells
//! the user. Violations are checked in a fixed priority order so exactly one
//! message is shown per failed attempt: missing fields, then email shape, then
//! message length.

use crate::notify::{Notifier, Severity};
use crate::types::ContactFields;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum length of the project description, in characters.
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// First violation found in a contact form, in priority order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormViolation {
    #[error("Please fill in all required fields marked with *.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error(
        "Please provide more details about your project (at least {min} characters).",
        min = MIN_MESSAGE_LEN
    )]
    MessageTooShort,
}

/// `local@domain.tld` shape check: no whitespace, exactly one `@`, and a dot
/// somewhere after it with text on both sides.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Check the required fields without side effects.
///
/// Name, email and message are compared after trimming; the service type is a
/// select value and only needs to be non-empty.
pub fn check_contact_form(fields: &ContactFields) -> Result<(), FormViolation> {
    let name = fields.name.trim();
    let email = fields.email.trim();
    let message = fields.message.trim();

    if name.is_empty() || email.is_empty() || fields.service.trim().is_empty() || message.is_empty()
    {
        return Err(FormViolation::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(FormViolation::InvalidEmail);
    }
    if message.chars().count() < MIN_MESSAGE_LEN {
        return Err(FormViolation::MessageTooShort);
    }
    Ok(())
}

/// Validate and, on failure, emit exactly one error notification.
pub fn validate_contact_form(fields: &ContactFields, notifier: &mut dyn Notifier) -> bool {
    match check_contact_form(fields) {
        Ok(()) => true,
        Err(violation) => {
            tracing::debug!(?violation, "contact form rejected");
            notifier.notify(&violation.to_string(), Severity::Error);
            false
        }
    }
}
