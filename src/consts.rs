//! Shared numeric constants for the planner crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Default canvas width in layout units.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Default canvas height in layout units.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Id issued to the first token after construction or reset.
pub const FIRST_TOKEN_ID: u32 = 1;

// ── Placement ───────────────────────────────────────────────────

/// Maximum spawn offset from the nominal center position, per axis.
pub const MAX_JITTER: f64 = 50.0;

// ── Interaction ─────────────────────────────────────────────────

/// Scale applied to a token while it is being dragged.
pub const DRAG_SCALE: f64 = 1.1;

/// Scale applied to a token while the pointer hovers it.
pub const HOVER_SCALE: f64 = 1.05;

// ── Rendering ───────────────────────────────────────────────────

/// Corner radius of a token box in layout units.
pub const TOKEN_CORNER_RADIUS: f64 = 12.0;

/// Border width of a token box in layout units.
pub const TOKEN_BORDER_WIDTH: f64 = 2.0;

/// Font size of the label drawn under a token icon.
pub const TOKEN_LABEL_PX: f64 = 8.0;
