//! Pure geometry: points, canvas rectangles, and bearing computation.
//!
//! Everything here is stateless and allocation-free so the render loop can
//! call it every frame.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in canvas-local or screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Center of a box given its top-left corner and dimensions.
#[must_use]
pub fn center_of(top_left: Point, width: f64, height: f64) -> Point {
    Point::new(top_left.x + width / 2.0, top_left.y + height / 2.0)
}

/// Angle in degrees of the ray from `from` to `to`.
///
/// Measured with `atan2(dy, dx)`, so 0° points along +x and positive angles
/// turn toward +y (clockwise on screen). Coincident points yield 0°.
#[must_use]
pub fn bearing(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Angle in degrees from the center of the box at `(x, y)` with size
/// `width` × `height` to `center`.
#[must_use]
pub fn bearing_to_center(x: f64, y: f64, width: f64, height: f64, center: Point) -> f64 {
    bearing(center_of(Point::new(x, y), width, height), center)
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        center_of(Point::new(self.x, self.y), self.width, self.height)
    }

    /// Whether `pt` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }

    /// Clamp the top-left corner of a `width` × `height` box so the box stays
    /// inside this rectangle.
    ///
    /// A box larger than the rectangle on some axis is pinned to the
    /// rectangle's near edge on that axis.
    #[must_use]
    pub fn clamp_top_left(&self, x: f64, y: f64, width: f64, height: f64) -> Point {
        let max_x = (self.x + self.width - width).max(self.x);
        let max_y = (self.y + self.height - height).max(self.y);
        Point::new(x.clamp(self.x, max_x), y.clamp(self.y, max_y))
    }
}
