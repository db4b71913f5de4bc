#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::geometry::Point;

/// Maps screen coordinates onto the planner canvas.
///
/// The canvas is a fixed-size layout surface, but the host may display it at
/// an offset and scaled down to fit a narrow page. `offset_x` / `offset_y` are
/// the screen position of the canvas origin in CSS pixels; `scale` is CSS
/// pixels per layout unit (1.0 = actual size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

impl Camera {
    /// Camera that fits a canvas of `canvas_width` layout units into a
    /// display box `display_width` CSS pixels wide at the given offset.
    ///
    /// The canvas is never scaled up. Non-positive widths fall back to 1.0.
    #[must_use]
    pub fn fit_width(offset_x: f64, offset_y: f64, display_width: f64, canvas_width: f64) -> Self {
        let scale = if display_width > 0.0 && canvas_width > 0.0 { (display_width / canvas_width).min(1.0) } else { 1.0 };
        Self { offset_x, offset_y, scale }
    }

    /// Convert a screen-space point (CSS pixels) to canvas-local coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point { x: (screen.x - self.offset_x) / self.scale, y: (screen.y - self.offset_y) / self.scale }
    }

    /// Convert a canvas-local point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point { x: canvas.x * self.scale + self.offset_x, y: canvas.y * self.scale + self.offset_y }
    }
}
