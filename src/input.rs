//! Input model: pointer buttons, hover state, and the drag state machine.
//!
//! `InputState` tracks the active gesture between pointer-down and
//! pointer-up. While a drag is in progress the token's live position lives
//! here, not in the canvas model; the model only learns the final position
//! when the gesture ends.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::catalog::TokenKind;
use crate::doc::TokenId;
use crate::geometry::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Cursor shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Pointer rests over a draggable token.
    Grab,
    /// A token is being dragged.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Token under the pointer while no drag is active.
    pub hovered_id: Option<TokenId>,
    /// Cursor last reported to the host.
    pub cursor: Cursor,
}

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A token is following the pointer.
    DraggingToken {
        /// Id of the token being dragged.
        id: TokenId,
        /// Kind of the dragged token, kept so containment works even if the
        /// token is cleared mid-drag.
        kind: TokenKind,
        /// Pointer position minus token top-left at pointer-down, in canvas units.
        grab_offset: Point,
        /// Current (uncommitted) top-left of the token.
        live: Point,
        /// Placement epoch when the drag began; a mismatch means the canvas was reset.
        epoch: u64,
    },
}

impl InputState {
    /// Id and live top-left of the dragged token, if a drag is active.
    #[must_use]
    pub fn dragging(&self) -> Option<(TokenId, Point)> {
        match *self {
            Self::DraggingToken { id, live, .. } => Some((id, live)),
            Self::Idle => None,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging().is_some()
    }
}
