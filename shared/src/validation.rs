//! Validation utilities for employee contact data
//!
//! Email and name checks use `validator` derives on the records; the
//! Netherlands-specific phone format lives here.

use std::borrow::Cow;

use validator::ValidationError;

/// Validate Dutch phone number format
/// Accepts: 0612345678, 06-12345678, 020 123 4567, +31612345678, 0031612345678
pub fn validate_dutch_phone(phone: &str) -> Result<(), &'static str> {
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
    {
        return Err("Phone number contains invalid characters");
    }

    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    // National format: 10 digits with trunk prefix 0
    if digits.len() == 10 && digits.starts_with('0') && !digits.starts_with("00") {
        return Ok(());
    }
    // International with +31
    if digits.len() == 11 && digits.starts_with("31") && phone.trim_start().starts_with('+') {
        return Ok(());
    }
    // International with 0031
    if digits.len() == 13 && digits.starts_with("0031") {
        return Ok(());
    }

    Err("Invalid Dutch phone number format")
}

/// `validator` adapter for [`validate_dutch_phone`]
pub fn validate_dutch_phone_field(phone: &str) -> Result<(), ValidationError> {
    validate_dutch_phone(phone).map_err(|message| {
        let mut error = ValidationError::new("dutch_phone");
        error.message = Some(Cow::Borrowed(message));
        error
    })
}

/// Reject values that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("Value must not be blank"));
        return Err(error);
    }
    Ok(())
}
