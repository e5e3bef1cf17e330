// src/utils/url.rs

use url::Url;

use crate::config::DEFAULT_URL_SCHEMES;

/// Returns true if the string parses as an absolute URL.
///
/// Relative paths and bare fragments fail to parse without a base, so they
/// are rejected here even though `sanitize_url` lets them through.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Filters a link target for use in an `href`.
///
/// * Absolute URL with an allowed scheme (http, https, mailto, tel): returned unchanged.
/// * Not an absolute URL but starting with `/` or `#`: returned unchanged.
/// * Anything else (`javascript:`, `data:`, `ftp:`, junk): empty string.
pub fn sanitize_url(url: &str) -> String {
    sanitize_url_with(url, DEFAULT_URL_SCHEMES)
}

/// Same rule as [`sanitize_url`] with a caller supplied scheme allow-list.
/// Scheme names are matched case-insensitively.
pub fn sanitize_url_with<S: AsRef<str>>(url: &str, schemes: &[S]) -> String {
    if is_safe_url(url, schemes) {
        url.to_string()
    } else {
        String::new()
    }
}

pub(crate) fn is_safe_url<S: AsRef<str>>(url: &str, schemes: &[S]) -> bool {
    match Url::parse(url) {
        // The parser already lowercases the scheme.
        Ok(parsed) => {
            let allowed = schemes
                .iter()
                .any(|s| s.as_ref().eq_ignore_ascii_case(parsed.scheme()));
            if !allowed {
                tracing::debug!("Rejected URL with scheme '{}'", parsed.scheme());
            }
            allowed
        }
        Err(_) => {
            let relative = url.starts_with('/') || url.starts_with('#');
            if !relative {
                tracing::debug!("Rejected malformed URL");
            }
            relative
        }
    }
}
