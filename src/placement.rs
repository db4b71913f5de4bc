//! Placement controller: the mutation entry points for the canvas model.
//!
//! DESIGN
//! ======
//! Hosts never touch [`CanvasModel`] directly. They call `add_token` on a
//! palette click, `update_position` exactly once when a drag ends, and
//! `reset` on an explicit clear. New tokens spawn at the canvas center with
//! a bounded random offset so repeated adds do not stack perfectly; there is
//! no overlap avoidance or snapping.
//!
//! Every `reset` bumps an epoch counter. Gestures that started before a reset
//! can compare epochs to recognise that their token is gone, even if the
//! restarted id counter has since handed the same id to a new token.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::background::Background;
use crate::catalog::TokenKind;
use crate::config::PlannerConfig;
use crate::doc::{CanvasModel, PlacedToken, TokenId};
use crate::error::PlannerError;
use crate::geometry::Point;

/// Nominal (jitter-free) spawn position for `kind`: the token centered on `center`.
#[must_use]
pub fn nominal_spawn(kind: TokenKind, center: Point) -> Point {
    let spec = kind.spec();
    Point::new(center.x - spec.width / 2.0, center.y - spec.height / 2.0)
}

/// Draw a per-axis offset uniformly from `[-radius, radius]`.
pub fn jitter<R: Rng>(rng: &mut R, radius: f64) -> Point {
    if radius <= 0.0 {
        return Point::new(0.0, 0.0);
    }
    Point::new(rng.random_range(-radius..=radius), rng.random_range(-radius..=radius))
}

/// Owns the canvas model and applies every mutation to it.
#[derive(Debug, Clone)]
pub struct PlacementController {
    model: CanvasModel,
    config: PlannerConfig,
    rng: StdRng,
    epoch: u64,
}

impl PlacementController {
    /// Create a controller for a validated config.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { model: CanvasModel::new(), config, rng, epoch: 0 })
    }

    /// Add a token by palette tag.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if `tag` names no catalog entry. The canvas is
    /// left unchanged.
    pub fn add_token(&mut self, tag: &str) -> Result<PlacedToken, PlannerError> {
        let kind = tag.parse::<TokenKind>().inspect_err(|_| warn!(%tag, "rejected unknown token type"))?;
        Ok(self.add_kind(kind))
    }

    /// Add a token of a known kind near the canvas center.
    pub fn add_kind(&mut self, kind: TokenKind) -> PlacedToken {
        let nominal = nominal_spawn(kind, self.config.center());
        let offset = jitter(&mut self.rng, self.config.jitter_radius);
        let token = *self.model.insert(kind, Point::new(nominal.x + offset.x, nominal.y + offset.y));
        debug!(id = token.id, %kind, x = token.x, y = token.y, "token added");
        token
    }

    /// Commit a token's final drag position.
    ///
    /// An id that is not on the canvas (for example a drag that outlived a
    /// reset) is ignored. Returns whether a token was moved.
    pub fn update_position(&mut self, id: TokenId, x: f64, y: f64) -> bool {
        let moved = self.model.set_position(id, x, y);
        if moved {
            debug!(id, x, y, "position committed");
        } else {
            debug!(id, "ignored position commit for missing token");
        }
        moved
    }

    /// Remove every token and restart ids at 1. The background is kept.
    pub fn reset(&mut self) {
        let cleared = self.model.len();
        self.model.clear();
        self.epoch += 1;
        debug!(cleared, epoch = self.epoch, "canvas reset");
    }

    /// Store the cosmetic background selection.
    pub fn select_background(&mut self, background: Background) {
        self.model.set_background(background);
        debug!(%background, "background selected");
    }

    /// Select a background by tag.
    ///
    /// # Errors
    ///
    /// Returns `UnknownBackground` if `tag` names no theme.
    pub fn select_background_tag(&mut self, tag: &str) -> Result<Background, PlannerError> {
        let background = tag.parse::<Background>().inspect_err(|_| warn!(%tag, "rejected unknown background"))?;
        self.select_background(background);
        Ok(background)
    }

    // --- Queries ---

    /// Read-only view of the canvas model.
    #[must_use]
    pub fn model(&self) -> &CanvasModel {
        &self.model
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Number of resets performed so far.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Default for PlacementController {
    fn default() -> Self {
        Self { model: CanvasModel::new(), config: PlannerConfig::default(), rng: StdRng::from_os_rng(), epoch: 0 }
    }
}
