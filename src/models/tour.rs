// src/models/tour.rs

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::KitError;

/// Side of the target element the tour popover is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Right,
    Bottom,
    Left,
}

impl Placement {
    pub fn as_str(self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Right => "right",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Placement::Top),
            "right" => Ok(Placement::Right),
            "bottom" => Ok(Placement::Bottom),
            "left" => Ok(Placement::Left),
            other => Err(KitError::UnknownPlacement(other.to_string())),
        }
    }
}

/// One step of the onboarding tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TourStep {
    /// Unique across the catalog.
    pub id: &'static str,

    /// CSS selector of the highlighted element.
    pub target: &'static str,

    pub title: &'static str,
    pub description: &'static str,
    pub placement: Placement,
}

/// Tour steps in the order they are shown.
pub const TOUR_STEPS: &[TourStep] = &[
    TourStep {
        id: "welcome",
        target: "[data-tour=\"canvas\"]",
        title: "Welcome to the page builder",
        description: "This is your canvas. Everything you add here is what visitors will see.",
        placement: Placement::Bottom,
    },
    TourStep {
        id: "add-block",
        target: "[data-tour=\"block-library\"]",
        title: "Add blocks",
        description: "Drag text, images, buttons and sections from the library onto the canvas.",
        placement: Placement::Right,
    },
    TourStep {
        id: "edit-content",
        target: "[data-tour=\"inline-editor\"]",
        title: "Edit in place",
        description: "Click any block to change its text and links directly on the page.",
        placement: Placement::Bottom,
    },
    TourStep {
        id: "style-panel",
        target: "[data-tour=\"style-panel\"]",
        title: "Adjust the style",
        description: "Tune font size, line height and spacing for the selected block.",
        placement: Placement::Left,
    },
    TourStep {
        id: "layers",
        target: "[data-tour=\"layers\"]",
        title: "Reorder with layers",
        description: "Use the layers list to select nested blocks and change their order.",
        placement: Placement::Right,
    },
    TourStep {
        id: "preview",
        target: "[data-tour=\"preview-toggle\"]",
        title: "Preview your page",
        description: "Switch between desktop and mobile to check how the page looks on each.",
        placement: Placement::Bottom,
    },
    TourStep {
        id: "publish",
        target: "[data-tour=\"publish-button\"]",
        title: "Publish",
        description: "When you are happy with the result, publish to make the page live.",
        placement: Placement::Top,
    },
];

/// Number of steps, always in sync with [`TOUR_STEPS`].
pub const TOTAL_STEPS: usize = TOUR_STEPS.len();

pub fn find_step(id: &str) -> Option<&'static TourStep> {
    TOUR_STEPS.iter().find(|step| step.id == id)
}

/// 1-based position of a step in the tour.
pub fn step_number(id: &str) -> Result<usize, KitError> {
    TOUR_STEPS
        .iter()
        .position(|step| step.id == id)
        .map(|index| index + 1)
        .ok_or_else(|| KitError::UnknownTourStep(id.to_string()))
}
