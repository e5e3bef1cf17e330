// src/utils/email.rs

use std::sync::LazyLock;

use regex::Regex;

// local-part "@" domain, optionally followed by "." and a non-space tail.
// Intentionally loose: single-label domains such as `a@b` pass.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+(?:\.\S+)?$").expect("email regex compiles"));

/// Lightweight structural check of an email address.
/// Does not verify the domain or full RFC 5322 syntax.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
