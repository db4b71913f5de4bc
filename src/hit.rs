#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{CanvasModel, TokenId};
use crate::geometry::Point;

/// Return the topmost token whose box contains `canvas_pt`.
///
/// Tokens later in the model's order sit on top, so the scan runs back to
/// front. Cones are decorative and never hit.
#[must_use]
pub fn hit_test(canvas_pt: Point, model: &CanvasModel) -> Option<TokenId> {
    model
        .tokens()
        .iter()
        .rev()
        .find(|token| token.bounds().contains(canvas_pt))
        .map(|token| token.id)
}
