//! Field validators - pure predicates over the contact form values
//!
//! All five validators run on every pass so the UI can show every error
//! at once; callers must not short-circuit on the first failure.

use regex::Regex;

use crate::models::{FieldErrors, FormFields};

/// Pattern for a minimal `local@domain.tld` address
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Pattern for an international phone number: leading `+`, 7 to 15 digits
const PHONE_PATTERN: &str = r"^\+[1-9]\d{6,14}$";

pub const MSG_FULL_NAME_REQUIRED: &str = "Full name is required";
pub const MSG_SUBJECT_REQUIRED: &str = "Subject is required";
pub const MSG_COMMENT_REQUIRED: &str = "Comment is required";
pub const MSG_EMAIL_REQUIRED: &str = "Email address is required";
pub const MSG_EMAIL_INVALID: &str = "Invalid email address";
pub const MSG_PHONE_INVALID: &str = "Invalid phone number";

pub fn is_valid_email(value: &str) -> bool {
    match Regex::new(EMAIL_PATTERN) {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

/// Accepts international-format numbers only (e.g. `+15551234567`)
pub fn is_valid_phone_number(value: &str) -> bool {
    match Regex::new(PHONE_PATTERN) {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

fn validate_full_name(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(MSG_FULL_NAME_REQUIRED.to_string())
    } else {
        None
    }
}

fn validate_subject(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(MSG_SUBJECT_REQUIRED.to_string())
    } else {
        None
    }
}

fn validate_comment(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(MSG_COMMENT_REQUIRED.to_string())
    } else {
        None
    }
}

fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        Some(MSG_EMAIL_REQUIRED.to_string())
    } else if !is_valid_email(value) {
        Some(MSG_EMAIL_INVALID.to_string())
    } else {
        None
    }
}

/// Empty phone is valid; the field is optional
fn validate_phone(value: &str) -> Option<String> {
    if !value.is_empty() && !is_valid_phone_number(value) {
        Some(MSG_PHONE_INVALID.to_string())
    } else {
        None
    }
}

/// Run all five validators unconditionally and return the full error set
pub fn validate_fields(fields: &FormFields) -> FieldErrors {
    FieldErrors {
        full_name: validate_full_name(&fields.full_name),
        email: validate_email(&fields.email),
        subject: validate_subject(&fields.subject),
        comment: validate_comment(&fields.comment),
        phone: validate_phone(&fields.phone),
    }
}
