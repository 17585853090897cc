//! Per-field validation rules for the registration form.
//!
//! Each validator is a pure function from a field value to `Ok(())` or a
//! static, human-readable message. Rules run in a fixed order and the first
//! failure wins: required, then minimum length, then maximum length, then the
//! field's pattern or custom rule. An empty required field therefore reports
//! only its "required" message.
//!
//! Lengths are measured in characters, not bytes, so accented names count
//! the way a user would count them.

use once_cell::sync::Lazy;
use regex::Regex;
use subtle::ConstantTimeEq;

// Field length bounds
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const EMAIL_MIN_CHARS: usize = 5;
pub const EMAIL_MAX_CHARS: usize = 100;
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 50;

// Validation messages, surfaced inline next to the failing field
pub const MSG_REQUIRED: &str = "Complete this field.";
pub const MSG_MIN_CHARS: &str = "Minimum 2 characters.";
pub const MSG_MAX_CHARS: &str = "Maximum 50 characters.";
pub const MSG_INVALID_FORMAT: &str = "Invalid format.";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required.";
pub const MSG_EMAIL_TOO_SHORT: &str = "Too short.";
pub const MSG_EMAIL_MAX_CHARS: &str = "Maximum 100 characters.";
pub const MSG_EMAIL_FORMAT: &str = "Email must be a valid format.";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required.";
pub const MSG_PASSWORD_MIN_CHARS: &str = "Minimum 8 characters.";
pub const MSG_PASSWORD_CONTENT: &str = "Password must contain letters and numbers.";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Words of letters (including the accented Spanish set), apostrophes and
/// hyphens, separated by single spaces.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZÁÉÍÓÚÑáéíóúñ'-]+(\s[a-zA-ZÁÉÍÓÚÑáéíóúñ'-]+)*$").unwrap()
});

/// `local@domain.tld` shape, case-insensitive, final label of at least two
/// letters.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap());

/// Validate a name or last name; both fields share one rule set.
pub fn validate_name(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(MSG_REQUIRED);
    }
    let chars = value.chars().count();
    if chars < NAME_MIN_CHARS {
        return Err(MSG_MIN_CHARS);
    }
    if chars > NAME_MAX_CHARS {
        return Err(MSG_MAX_CHARS);
    }
    if !NAME_PATTERN.is_match(value) {
        return Err(MSG_INVALID_FORMAT);
    }
    Ok(())
}

/// Validate an email address.
pub fn validate_email(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(MSG_EMAIL_REQUIRED);
    }
    let chars = value.chars().count();
    if chars < EMAIL_MIN_CHARS {
        return Err(MSG_EMAIL_TOO_SHORT);
    }
    if chars > EMAIL_MAX_CHARS {
        return Err(MSG_EMAIL_MAX_CHARS);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(MSG_EMAIL_FORMAT);
    }
    Ok(())
}

/// Validate a password: ASCII letters and digits only, with at least one of
/// each. The content rule is a character scan rather than a regex.
pub fn validate_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(MSG_PASSWORD_REQUIRED);
    }
    let chars = value.chars().count();
    if chars < PASSWORD_MIN_CHARS {
        return Err(MSG_PASSWORD_MIN_CHARS);
    }
    if chars > PASSWORD_MAX_CHARS {
        return Err(MSG_MAX_CHARS);
    }
    let alnum_only = value.chars().all(|c| c.is_ascii_alphanumeric());
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(alnum_only && has_letter && has_digit) {
        return Err(MSG_PASSWORD_CONTENT);
    }
    Ok(())
}

/// Validate the password confirmation against the current password value.
pub fn validate_password_check(value: &str, password: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(MSG_PASSWORD_REQUIRED);
    }
    if value.chars().count() > PASSWORD_MAX_CHARS {
        return Err(MSG_MAX_CHARS);
    }
    if !constant_time_eq(value, password) {
        return Err(MSG_PASSWORD_MISMATCH);
    }
    Ok(())
}

/// Constant-time string comparison to prevent timing attacks.
/// Both sides of the confirmation check are secrets.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
