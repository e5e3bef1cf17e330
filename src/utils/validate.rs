// src/utils/validate.rs
//
// Custom validators for `#[validate(custom(function = ...))]` on request DTOs.

use validator::ValidationError;

use super::{email::is_valid_email, url::{is_valid_url, sanitize_url}};

/// Validates that a string looks like an email address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::new("invalid_email"));
    }
    Ok(())
}

/// Validates that a string is a correctly formatted absolute URL.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if !is_valid_url(url) {
        return Err(ValidationError::new("invalid_url"));
    }
    Ok(())
}

/// Validates that a link would survive `sanitize_url`.
/// Accepts relative references (`/path`, `#anchor`) as well as allowed schemes.
pub fn validate_link(url: &str) -> Result<(), ValidationError> {
    if !url.is_empty() && sanitize_url(url).is_empty() {
        return Err(ValidationError::new("unsafe_url"));
    }
    Ok(())
}
