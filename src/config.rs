// src/config.rs

use serde::Deserialize;

use crate::error::KitError;

/// Tags whose content ammonia always drops; they can never be allow-listed.
pub const CONTENT_STRIPPED_TAGS: &[&str] = &["script", "style"];

pub const DEFAULT_ALLOWED_TAGS: &[&str] = &["b", "i", "em", "strong", "a", "p", "br", "ul", "ol", "li"];

pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] = &["href", "target", "rel"];

/// Schemes accepted by `sanitize_url` for absolute URLs.
pub const DEFAULT_URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// HTML sanitization policy.
///
/// Every field has a default, so a host application can deserialize a
/// partial document and only override what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Tags kept in the output. Anything else is unwrapped to its text.
    pub allowed_tags: Vec<String>,

    /// Attributes kept on any allowed tag.
    pub allowed_attributes: Vec<String>,

    /// Schemes an absolute `href` may use.
    pub allowed_url_schemes: Vec<String>,

    /// When set, ammonia overwrites `rel` on every link with this value.
    /// Cannot be combined with `rel` in `allowed_attributes`.
    pub link_rel: Option<String>,

    pub strip_comments: bool,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            allowed_tags: to_owned(DEFAULT_ALLOWED_TAGS),
            allowed_attributes: to_owned(DEFAULT_ALLOWED_ATTRIBUTES),
            allowed_url_schemes: to_owned(DEFAULT_URL_SCHEMES),
            link_rel: None,
            strip_comments: true,
        }
    }
}

impl SanitizerConfig {
    /// Policy that keeps no markup at all, only text content.
    pub fn text_only() -> Self {
        Self {
            allowed_tags: Vec::new(),
            allowed_attributes: Vec::new(),
            ..Self::default()
        }
    }

    /// Parses a JSON policy document and validates it.
    pub fn from_json(input: &str) -> Result<Self, KitError> {
        let config: SanitizerConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects policies the underlying sanitizer would refuse.
    /// Names are checked in the form the sanitizer will use them.
    pub fn validate(&self) -> Result<(), KitError> {
        let config = self.normalized();

        if let Some(tag) = config
            .allowed_tags
            .iter()
            .find(|tag| CONTENT_STRIPPED_TAGS.contains(&tag.as_str()))
        {
            return Err(KitError::InvalidConfig(format!(
                "tag '{}' cannot be allowed",
                tag
            )));
        }

        if config.link_rel.is_some() && config.allowed_attributes.iter().any(|attr| attr == "rel") {
            return Err(KitError::InvalidConfig(
                "'rel' cannot be allowed while link_rel is set".to_string(),
            ));
        }

        if config.allowed_url_schemes.iter().any(|s| s.is_empty()) {
            return Err(KitError::InvalidConfig(
                "url scheme must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Copy of this config with every name trimmed and lowercased.
    /// Schemes also lose a trailing `:` (`"https:"` becomes `"https"`).
    pub fn normalized(&self) -> Self {
        Self {
            allowed_tags: lowercase(&self.allowed_tags),
            allowed_attributes: lowercase(&self.allowed_attributes),
            allowed_url_schemes: lowercase(&self.allowed_url_schemes)
                .into_iter()
                .map(|s| s.trim_end_matches(':').to_string())
                .collect(),
            link_rel: self.link_rel.clone(),
            strip_comments: self.strip_comments,
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn lowercase(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.trim().to_ascii_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_allow_lists() {
        let config = SanitizerConfig::default();
        assert_eq!(config.allowed_tags.len(), 10);
        assert_eq!(config.allowed_attributes, vec!["href", "target", "rel"]);
        assert_eq!(config.allowed_url_schemes, vec!["http", "https", "mailto", "tel"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn normalized_lowercases_names() {
        let config = SanitizerConfig {
            allowed_tags: vec!["B".to_string(), " Em ".to_string()],
            ..SanitizerConfig::default()
        };
        assert_eq!(config.normalized().allowed_tags, vec!["b", "em"]);
    }

    #[test]
    fn normalized_strips_scheme_colon() {
        let config = SanitizerConfig {
            allowed_url_schemes: vec!["HTTPS:".to_string(), " mailto ".to_string()],
            ..SanitizerConfig::default()
        };
        assert_eq!(config.normalized().allowed_url_schemes, vec!["https", "mailto"]);
    }
}
