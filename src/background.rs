//! Background catalog: cosmetic canvas themes.
//!
//! The selected background is stored by the canvas model but never
//! interpreted by it. Only the renderer reads these records.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// A canvas background theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Background {
    #[default]
    Blueprint,
    Studio,
    LivingRoom,
    Podcast,
    GreenScreen,
    Outdoor,
}

impl Background {
    /// Every background, in selector order.
    pub const ALL: [Background; 6] = [
        Self::Blueprint,
        Self::Studio,
        Self::LivingRoom,
        Self::Podcast,
        Self::GreenScreen,
        Self::Outdoor,
    ];

    /// Selector tag (e.g. `"livingRoom"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Blueprint => "blueprint",
            Self::Studio => "studio",
            Self::LivingRoom => "livingRoom",
            Self::Podcast => "podcast",
            Self::GreenScreen => "greenScreen",
            Self::Outdoor => "outdoor",
        }
    }

    /// The static theme record.
    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Blueprint => &BLUEPRINT,
            Self::Studio => &STUDIO,
            Self::LivingRoom => &LIVING_ROOM,
            Self::Podcast => &PODCAST,
            Self::GreenScreen => &GREEN_SCREEN,
            Self::Outdoor => &OUTDOOR,
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Background {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bg| bg.tag() == s)
            .ok_or_else(|| PlannerError::UnknownBackground(s.to_owned()))
    }
}

/// Base layer of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backdrop {
    /// Image at `url` stretched over the canvas. `fallback` is painted
    /// until the image has finished loading.
    Image { url: &'static str, fallback: &'static str },
    /// Three-stop linear gradient at `angle_deg` (CSS convention: 180° runs
    /// top to bottom, 135° runs top-left to bottom-right).
    LinearGradient { angle_deg: f64, stops: [&'static str; 3] },
}

impl Backdrop {
    /// Asset to load for an image-backed theme.
    #[must_use]
    pub fn image_url(&self) -> Option<&'static str> {
        match *self {
            Self::Image { url, .. } => Some(url),
            Self::LinearGradient { .. } => None,
        }
    }
}

/// Decorative overlay drawn on top of the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern {
    None,
    /// Horizontal and vertical lines every `spacing` units.
    Grid { spacing: f64, line_width: f64, color: &'static str },
    /// Soft radial spots. Positions and radii are fractions of the canvas.
    Glow { spots: &'static [Glow] },
}

/// One radial spot of a [`Pattern::Glow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub fx: f64,
    pub fy: f64,
    pub radius: f64,
    pub color: &'static str,
}

/// Static description of a background theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub label: &'static str,
    pub backdrop: Backdrop,
    pub pattern: Pattern,
}

static BLUEPRINT: Theme = Theme {
    label: "Blueprint",
    backdrop: Backdrop::Image { url: "blueprint.png", fallback: "#1e3a5f" },
    pattern: Pattern::None,
};

static STUDIO: Theme = Theme {
    label: "Studio",
    backdrop: Backdrop::LinearGradient { angle_deg: 135.0, stops: ["#1a1a2e", "#16213e", "#0f0f23"] },
    pattern: Pattern::Grid { spacing: 40.0, line_width: 1.0, color: "rgba(42, 26, 252, 0.1)" },
};

static LIVING_ROOM: Theme = Theme {
    label: "Living Room",
    backdrop: Backdrop::LinearGradient { angle_deg: 135.0, stops: ["#3d2914", "#5c4023", "#2d1f0f"] },
    pattern: Pattern::Glow {
        spots: &[
            Glow { fx: 0.2, fy: 0.3, radius: 0.5, color: "rgba(255, 200, 100, 0.1)" },
            Glow { fx: 0.8, fy: 0.7, radius: 0.4, color: "rgba(255, 180, 80, 0.08)" },
        ],
    },
};

static PODCAST: Theme = Theme {
    label: "Podcast Booth",
    backdrop: Backdrop::LinearGradient { angle_deg: 135.0, stops: ["#1a0a0a", "#2d1515", "#0f0505"] },
    pattern: Pattern::Grid { spacing: 20.0, line_width: 2.0, color: "rgba(100, 50, 50, 0.1)" },
};

static GREEN_SCREEN: Theme = Theme {
    label: "Green Screen",
    backdrop: Backdrop::LinearGradient { angle_deg: 135.0, stops: ["#0a3d0a", "#1a5c1a", "#0a2d0a"] },
    pattern: Pattern::None,
};

static OUTDOOR: Theme = Theme {
    label: "Outdoor",
    backdrop: Backdrop::LinearGradient { angle_deg: 180.0, stops: ["#87CEEB", "#98D8C8", "#7CB342"] },
    pattern: Pattern::Glow {
        spots: &[
            Glow { fx: 0.3, fy: 0.2, radius: 0.2, color: "rgba(255, 255, 255, 0.3)" },
            Glow { fx: 0.7, fy: 0.15, radius: 0.15, color: "rgba(255, 255, 255, 0.2)" },
        ],
    },
};
