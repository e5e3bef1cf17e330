use std::{borrow::Cow, sync::LazyLock};

use ammonia::{Builder, UrlRelative};

use crate::{
    config::{
        CONTENT_STRIPPED_TAGS, DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_TAGS,
        DEFAULT_URL_SCHEMES, SanitizerConfig,
    },
    error::KitError,
    utils::url::is_safe_url,
};

// Process-wide builders over the constant allow-lists, built once.
static RICH_TEXT: LazyLock<Builder<'static>> = LazyLock::new(|| {
    tracing::debug!("Built rich-text HTML sanitizer");
    policy_builder(
        DEFAULT_ALLOWED_TAGS,
        DEFAULT_ALLOWED_ATTRIBUTES,
        DEFAULT_URL_SCHEMES,
        None,
        true,
    )
});

static PLAIN_TEXT: LazyLock<Builder<'static>> = LazyLock::new(|| {
    tracing::debug!("Built plain-text HTML sanitizer");
    policy_builder(&[], &[], DEFAULT_URL_SCHEMES, None, true)
});

/// Allow-list HTML sanitizer backed by ammonia.
///
/// Disallowed tags are unwrapped (their text survives), disallowed attributes
/// are dropped, and `<script>`/`<style>` are removed together with their content.
/// Each `href` that survives the attribute allow-list must also pass the
/// `sanitize_url` rule for the configured schemes, or it is dropped.
#[derive(Debug, Clone)]
pub struct HtmlSanitizer {
    config: SanitizerConfig,
}

impl HtmlSanitizer {
    pub fn new(config: SanitizerConfig) -> Result<Self, KitError> {
        if let Err(e) = config.validate() {
            tracing::warn!("Rejected sanitizer config: {}", e);
            return Err(e);
        }
        let config = config.normalized();
        tracing::debug!(
            tags = config.allowed_tags.len(),
            attributes = config.allowed_attributes.len(),
            "Built HTML sanitizer"
        );
        Ok(Self { config })
    }

    /// The policy in effect, with names trimmed and lowercased as they are
    /// matched against the parsed document.
    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Sanitizes one HTML fragment. Never fails; malformed markup is
    /// repaired or dropped by the HTML parser.
    pub fn clean(&self, input: &str) -> String {
        let tags = as_strs(&self.config.allowed_tags);
        let attributes = as_strs(&self.config.allowed_attributes);
        let schemes = as_strs(&self.config.allowed_url_schemes);

        policy_builder(
            &tags,
            &attributes,
            &schemes,
            self.config.link_rel.as_deref(),
            self.config.strip_comments,
        )
        .clean(input)
        .to_string()
    }
}

// Names must already be normalized and validated.
fn policy_builder<'a>(
    tags: &[&'a str],
    attributes: &[&'a str],
    schemes: &[&'a str],
    link_rel: Option<&'a str>,
    strip_comments: bool,
) -> Builder<'a> {
    let href_schemes: Vec<String> = schemes.iter().map(|s| s.to_string()).collect();

    let mut builder = Builder::empty();
    builder
        .tags(tags.iter().copied().collect())
        .generic_attributes(attributes.iter().copied().collect())
        .url_schemes(schemes.iter().copied().collect())
        .url_relative(UrlRelative::PassThrough)
        .clean_content_tags(CONTENT_STRIPPED_TAGS.iter().copied().collect())
        .link_rel(link_rel)
        .strip_comments(strip_comments)
        .attribute_filter(move |_element, attribute, value| {
            if attribute == "href" && !is_safe_url(value, href_schemes.as_slice()) {
                None
            } else {
                Some(Cow::Borrowed(value))
            }
        });
    builder
}

fn as_strs(items: &[String]) -> Vec<&str> {
    items.iter().map(String::as_str).collect()
}

/// Clean HTML content with the rich-text allow-list
/// (`b i em strong a p br ul ol li`, attributes `href target rel`).
///
/// Output is safe to inject as rendered markup.
///
/// An `href` is kept only if `sanitize_url` keeps it: absolute http, https,
/// mailto or tel URLs, or references starting with `/` or `#`. Other relative
/// links such as `page.html` lose their `href`.
pub fn sanitize_html(html: &str) -> String {
    RICH_TEXT.clean(html).to_string()
}

/// Strips all markup, keeping only the text content.
/// Use for fields where formatting must never be allowed (titles, labels).
pub fn sanitize_text(text: &str) -> String {
    PLAIN_TEXT.clean(text).to_string()
}

/// Escapes `& < > " '` as `&amp; &lt; &gt; &quot; &#039;`.
/// Everything else is left untouched.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 10);
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(ch),
        }
    }
    result
}
