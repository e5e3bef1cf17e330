// src/lib.rs

pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the commonly used items at the crate root
pub use config::SanitizerConfig;
pub use error::KitError;
pub use models::style::{STYLE_DEFAULTS, StyleDefaults, StyleProperty, StyleRange};
pub use models::tour::{Placement, TOTAL_STEPS, TOUR_STEPS, TourStep};
pub use utils::email::is_valid_email;
pub use utils::html::{HtmlSanitizer, escape_html, sanitize_html, sanitize_text};
pub use utils::url::{is_valid_url, sanitize_url, sanitize_url_with};
