#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn canvas_center() -> Point {
    Point::new(400.0, 300.0)
}

// =============================================================
// center_of
// =============================================================

#[test]
fn center_of_square() {
    let c = center_of(Point::new(150.0, 125.0), 50.0, 50.0);
    assert_eq!(c, Point::new(175.0, 150.0));
}

#[test]
fn center_of_wide_box() {
    let c = center_of(Point::new(0.0, 0.0), 150.0, 80.0);
    assert_eq!(c, Point::new(75.0, 40.0));
}

// =============================================================
// bearing
// =============================================================

#[test]
fn bearing_worked_example() {
    let angle = bearing_to_center(150.0, 125.0, 50.0, 50.0, canvas_center());
    let expected = 150.0_f64.atan2(225.0).to_degrees();
    assert!(approx_eq(angle, expected));
    assert!((angle - 33.69).abs() < 0.01);
}

#[test]
fn bearing_points_right_when_left_of_center() {
    // Center at (375, 300): directly left of the canvas center.
    let angle = bearing_to_center(350.0, 275.0, 50.0, 50.0, canvas_center());
    assert!(approx_eq(angle, 0.0));
}

#[test]
fn bearing_points_left_when_right_of_center() {
    let angle = bearing_to_center(500.0, 275.0, 50.0, 50.0, canvas_center());
    assert!(approx_eq(angle.abs(), 180.0));
}

#[test]
fn bearing_points_down_when_above_center() {
    let angle = bearing_to_center(375.0, 0.0, 50.0, 50.0, canvas_center());
    assert!(approx_eq(angle, 90.0));
}

#[test]
fn bearing_points_up_when_below_center() {
    let angle = bearing_to_center(375.0, 500.0, 50.0, 50.0, canvas_center());
    assert!(approx_eq(angle, -90.0));
}

#[test]
fn bearing_coincident_center_is_zero() {
    let angle = bearing_to_center(375.0, 275.0, 50.0, 50.0, canvas_center());
    assert_eq!(angle, 0.0);
}

#[test]
fn bearing_uses_element_dimensions() {
    // Same top-left, different size: the centers differ, so do the angles.
    let small = bearing_to_center(100.0, 100.0, 50.0, 50.0, canvas_center());
    let table = bearing_to_center(100.0, 100.0, 150.0, 80.0, canvas_center());
    assert!(!approx_eq(small, table));
}

#[test]
fn bearing_defined_far_outside_canvas() {
    let angle = bearing_to_center(-5000.0, -5000.0, 50.0, 50.0, canvas_center());
    assert!(angle > 0.0 && angle < 90.0);
}

#[test]
fn bearing_between_points_matches_formula() {
    let from = Point::new(10.0, 20.0);
    let to = Point::new(-30.0, 70.0);
    assert!(approx_eq(bearing(from, to), 50.0_f64.atan2(-40.0).to_degrees()));
}

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_contains_interior_and_edges() {
    let r = Rect::new(10.0, 10.0, 50.0, 50.0);
    assert!(r.contains(Point::new(30.0, 30.0)));
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(60.0, 60.0)));
}

#[test]
fn rect_does_not_contain_outside() {
    let r = Rect::new(10.0, 10.0, 50.0, 50.0);
    assert!(!r.contains(Point::new(9.9, 30.0)));
    assert!(!r.contains(Point::new(30.0, 60.1)));
}

#[test]
fn rect_center() {
    let r = Rect::new(0.0, 0.0, 800.0, 600.0);
    assert_eq!(r.center(), Point::new(400.0, 300.0));
}

#[test]
fn clamp_top_left_inside_is_unchanged() {
    let r = Rect::new(0.0, 0.0, 800.0, 600.0);
    assert_eq!(r.clamp_top_left(100.0, 200.0, 50.0, 50.0), Point::new(100.0, 200.0));
}

#[test]
fn clamp_top_left_pins_to_far_edges() {
    let r = Rect::new(0.0, 0.0, 800.0, 600.0);
    assert_eq!(r.clamp_top_left(900.0, 700.0, 150.0, 80.0), Point::new(650.0, 520.0));
}

#[test]
fn clamp_top_left_pins_to_near_edges() {
    let r = Rect::new(0.0, 0.0, 800.0, 600.0);
    assert_eq!(r.clamp_top_left(-40.0, -1.0, 50.0, 50.0), Point::new(0.0, 0.0));
}

#[test]
fn clamp_top_left_oversized_box_pins_to_origin() {
    let r = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(r.clamp_top_left(30.0, 30.0, 150.0, 80.0), Point::new(0.0, 20.0));
}
