// src/error.rs

use std::fmt;

/// Library Error Enum.
/// Only configuration and lookup-by-name paths produce it; the sanitizers
/// themselves always fall back to a safe value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KitError {
    // Sanitizer policy could not be parsed or would be refused by ammonia
    InvalidConfig(String),

    // Name does not match any style property key
    UnknownStyleProperty(String),

    // Placement other than top/right/bottom/left
    UnknownPlacement(String),

    // No tour step with this id
    UnknownTourStep(String),
}

impl fmt::Display for KitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitError::InvalidConfig(msg) => write!(f, "invalid sanitizer config: {}", msg),
            KitError::UnknownStyleProperty(name) => write!(f, "unknown style property: {}", name),
            KitError::UnknownPlacement(name) => write!(f, "unknown placement: {}", name),
            KitError::UnknownTourStep(id) => write!(f, "unknown tour step: {}", id),
        }
    }
}

impl std::error::Error for KitError {}

/// Converts `serde_json::Error` into `KitError::InvalidConfig`.
/// Allows using `?` when loading a config document.
impl From<serde_json::Error> for KitError {
    fn from(err: serde_json::Error) -> Self {
        KitError::InvalidConfig(err.to_string())
    }
}
