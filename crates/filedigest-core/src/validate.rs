//! Hash format validation

use crate::error::HashError;

/// Length of a SHA-256 digest rendered as hex
pub const SHA256_HEX_LEN: usize = 64;

/// SHA-256 of the empty input
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Check that a string is exactly 64 lowercase hex characters
#[must_use]
pub fn is_valid_hash(value: &str) -> bool {
    value.len() == SHA256_HEX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Trim surrounding whitespace and lowercase a primitive's hex output
#[must_use]
pub fn normalize_hash(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

/// Normalize and validate a hash, returning the normalized form
///
/// # Errors
/// Returns `HashError::Validation` if the normalized value is not 64 hex chars.
pub fn validate_hash(value: &str) -> Result<String, HashError> {
    let normalized = normalize_hash(value);
    if is_valid_hash(&normalized) {
        Ok(normalized)
    } else {
        Err(HashError::Validation {
            value: value.to_string(),
        })
    }
}
