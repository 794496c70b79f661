//! Input validation helpers
//!
//! All validation here is advisory and client-side: it blocks progression
//! in the wizard and produces Turkish advisory text, nothing more. The
//! store enforces none of it.

use shared::util::digits_only;
use shared::{AppError, AppResult};

/// External lines are exactly 10 digits (no trunk 0).
pub const EXTERNAL_PHONE_LEN: usize = 10;

/// Internal extensions are exactly 3 digits.
pub const INTERNAL_PHONE_LEN: usize = 3;

/// Normalize raw phone input the way the form field does: digits only,
/// one leading trunk 0 stripped, capped at 10 digits.
pub fn normalize_phone_input(input: &str) -> String {
    let mut digits = digits_only(input);
    if digits.starts_with('0') {
        digits.remove(0);
    }
    digits.truncate(EXTERNAL_PHONE_LEN);
    digits
}

/// A stored phone is valid when it is exactly 10 digits (external) or
/// exactly 3 digits (internal extension).
pub fn validate_phone(phone: &str) -> AppResult<()> {
    if phone.len() == EXTERNAL_PHONE_LEN || phone.len() == INTERNAL_PHONE_LEN {
        Ok(())
    } else {
        Err(AppError::invalid_phone())
    }
}

/// Internal extensions cannot receive external chat messages.
pub fn is_internal_extension(phone: &str) -> bool {
    digits_only(phone).len() == INTERNAL_PHONE_LEN
}

/// Validate that a required string is non-empty (after trimming).
pub fn validate_required_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    Ok(())
}
