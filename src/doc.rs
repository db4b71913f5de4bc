//! Canvas model: placed tokens, id issuance, and the selected background.
//!
//! `CanvasModel` is the single source of truth for what is on the planner
//! canvas. Tokens are kept in insertion order, which is also their stacking
//! order (later tokens draw on top). The model exposes tokens only by shared
//! reference; the mutation entry points below are the only way to change a
//! position.
//!
//! The model does not validate coordinates. Keeping a dragged token inside
//! the canvas is the interaction surface's job.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::background::Background;
use crate::catalog::{TokenKind, TokenType};
use crate::consts::FIRST_TOKEN_ID;
use crate::geometry::{Point, Rect};

/// Unique identifier for a placed token.
pub type TokenId = u32;

/// A token instance on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedToken {
    pub id: TokenId,
    pub kind: TokenKind,
    /// Left edge in canvas-local coordinates.
    pub x: f64,
    /// Top edge in canvas-local coordinates.
    pub y: f64,
}

impl PlacedToken {
    /// Catalog record for this token's kind.
    #[must_use]
    pub fn spec(&self) -> &'static TokenType {
        self.kind.spec()
    }

    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounding box at the committed position.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds_at(self.position())
    }

    /// Bounding box if the top-left corner were at `top_left`.
    #[must_use]
    pub fn bounds_at(&self, top_left: Point) -> Rect {
        let spec = self.spec();
        Rect::new(top_left.x, top_left.y, spec.width, spec.height)
    }
}

/// In-memory store of placed tokens.
#[derive(Debug, Clone)]
pub struct CanvasModel {
    tokens: Vec<PlacedToken>,
    background: Background,
    next_id: TokenId,
}

impl CanvasModel {
    /// Create an empty canvas with the default background.
    #[must_use]
    pub fn new() -> Self {
        Self { tokens: Vec::new(), background: Background::default(), next_id: FIRST_TOKEN_ID }
    }

    /// Append a token of `kind` at `top_left`, issuing the next id.
    pub fn insert(&mut self, kind: TokenKind, top_left: Point) -> &PlacedToken {
        let id = self.next_id;
        self.next_id += 1;
        let index = self.tokens.len();
        self.tokens.push(PlacedToken { id, kind, x: top_left.x, y: top_left.y });
        &self.tokens[index]
    }

    /// Replace a token's position in place. Returns false if no token has `id`.
    pub fn set_position(&mut self, id: TokenId, x: f64, y: f64) -> bool {
        let Some(token) = self.tokens.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        token.x = x;
        token.y = y;
        true
    }

    /// Remove every token and restart id issuance at the first id.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.next_id = FIRST_TOKEN_ID;
    }

    /// Store the cosmetic background selection.
    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Return a token by id.
    #[must_use]
    pub fn get(&self, id: TokenId) -> Option<&PlacedToken> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// All tokens in stacking order (bottom first).
    #[must_use]
    pub fn tokens(&self) -> &[PlacedToken] {
        &self.tokens
    }

    /// The currently selected background.
    #[must_use]
    pub fn background(&self) -> Background {
        self.background
    }

    /// The id the next inserted token will receive.
    #[must_use]
    pub fn next_id(&self) -> TokenId {
        self.next_id
    }

    /// Number of tokens on the canvas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the canvas holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Footer text such as `"1 element placed"` or `"3 elements placed"`.
    #[must_use]
    pub fn placed_summary(&self) -> String {
        let n = self.len();
        let suffix = if n == 1 { "" } else { "s" };
        format!("{n} element{suffix} placed")
    }
}

impl Default for CanvasModel {
    fn default() -> Self {
        Self::new()
    }
}
