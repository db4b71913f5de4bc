//! Planner configuration.
//!
//! Every field has a default matching the stock 800 × 600 canvas, so an empty
//! JSON object (or [`PlannerConfig::default`]) yields a working planner.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_JITTER};
use crate::error::PlannerError;
use crate::geometry::{Point, Rect};

/// Tunables for a planner instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Canvas width in layout units.
    pub canvas_width: f64,
    /// Canvas height in layout units.
    pub canvas_height: f64,
    /// Per-axis bound on the random spawn offset.
    pub jitter_radius: f64,
    /// Seed for the spawn jitter RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { canvas_width: CANVAS_WIDTH, canvas_height: CANVAS_HEIGHT, jitter_radius: MAX_JITTER, seed: None }
    }
}

impl PlannerConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` on malformed JSON and `InvalidConfig` if validation fails.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that dimensions are positive and the jitter radius is within bounds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return Err(PlannerError::InvalidConfig(format!("canvas_width must be positive, got {}", self.canvas_width)));
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 0.0) {
            return Err(PlannerError::InvalidConfig(format!(
                "canvas_height must be positive, got {}",
                self.canvas_height
            )));
        }
        if !(0.0..=MAX_JITTER).contains(&self.jitter_radius) {
            return Err(PlannerError::InvalidConfig(format!(
                "jitter_radius must be within 0..={MAX_JITTER}, got {}",
                self.jitter_radius
            )));
        }
        Ok(())
    }

    /// The fixed point every field-of-view cone aims at.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// The canvas rectangle in canvas-local coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.canvas_width, self.canvas_height)
    }
}
