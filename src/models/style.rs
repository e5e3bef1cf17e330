// src/models/style.rs

use std::str::FromStr;

use serde::Serialize;

use crate::error::KitError;

/// Style properties editable from the style panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    FontSize,
    LineHeight,
    SpacingX,
    SpacingY,
    SectionSpacingX,
    SectionSpacingY,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 6] = [
        StyleProperty::FontSize,
        StyleProperty::LineHeight,
        StyleProperty::SpacingX,
        StyleProperty::SpacingY,
        StyleProperty::SectionSpacingX,
        StyleProperty::SectionSpacingY,
    ];

    /// Key used by the UI (e.g. "fontSize").
    pub fn key(self) -> &'static str {
        match self {
            StyleProperty::FontSize => "fontSize",
            StyleProperty::LineHeight => "lineHeight",
            StyleProperty::SpacingX => "spacingX",
            StyleProperty::SpacingY => "spacingY",
            StyleProperty::SectionSpacingX => "sectionSpacingX",
            StyleProperty::SectionSpacingY => "sectionSpacingY",
        }
    }
}

impl FromStr for StyleProperty {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleProperty::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| KitError::UnknownStyleProperty(s.to_string()))
    }
}

/// Valid range of one numeric style property.
///
/// The table only supplies bounds; clamping into `[min, max]` and snapping
/// to `step` is left to the consuming control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleRange {
    pub min: f64,
    pub max: f64,
    /// Granularity of the control. `None` means continuous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub default: f64,
}

/// Defaults table, one entry per [`StyleProperty`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDefaults {
    pub font_size: StyleRange,
    pub line_height: StyleRange,
    pub spacing_x: StyleRange,
    pub spacing_y: StyleRange,
    pub section_spacing_x: StyleRange,
    pub section_spacing_y: StyleRange,
}

// Font size in px, line height unitless, spacing in px.
pub const STYLE_DEFAULTS: StyleDefaults = StyleDefaults {
    font_size: StyleRange { min: 10.0, max: 96.0, step: Some(1.0), default: 16.0 },
    line_height: StyleRange { min: 1.0, max: 3.0, step: Some(0.1), default: 1.5 },
    spacing_x: StyleRange { min: 0.0, max: 128.0, step: Some(4.0), default: 16.0 },
    spacing_y: StyleRange { min: 0.0, max: 128.0, step: Some(4.0), default: 16.0 },
    section_spacing_x: StyleRange { min: 0.0, max: 256.0, step: None, default: 32.0 },
    section_spacing_y: StyleRange { min: 0.0, max: 256.0, step: None, default: 64.0 },
};

impl StyleDefaults {
    pub fn get(&self, property: StyleProperty) -> &StyleRange {
        match property {
            StyleProperty::FontSize => &self.font_size,
            StyleProperty::LineHeight => &self.line_height,
            StyleProperty::SpacingX => &self.spacing_x,
            StyleProperty::SpacingY => &self.spacing_y,
            StyleProperty::SectionSpacingX => &self.section_spacing_x,
            StyleProperty::SectionSpacingY => &self.section_spacing_y,
        }
    }

    /// Looks up a range by its UI key.
    pub fn lookup(&self, key: &str) -> Result<&StyleRange, KitError> {
        Ok(self.get(key.parse()?))
    }

    /// All entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &StyleRange)> {
        StyleProperty::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}
