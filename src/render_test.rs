#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn point_approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

// =============================================================
// css_gradient_line
// =============================================================

#[test]
fn gradient_180_runs_top_to_bottom() {
    let (start, end) = css_gradient_line(180.0, 800.0, 600.0);
    assert!(point_approx_eq(start, Point::new(400.0, 0.0)));
    assert!(point_approx_eq(end, Point::new(400.0, 600.0)));
}

#[test]
fn gradient_90_runs_left_to_right() {
    let (start, end) = css_gradient_line(90.0, 800.0, 600.0);
    assert!(point_approx_eq(start, Point::new(0.0, 300.0)));
    assert!(point_approx_eq(end, Point::new(800.0, 300.0)));
}

#[test]
fn gradient_135_runs_toward_bottom_right() {
    let (start, end) = css_gradient_line(135.0, 600.0, 600.0);
    assert!(start.x < 300.0 && start.y < 300.0);
    assert!(end.x > 300.0 && end.y > 300.0);
    // Square box: the line is the diagonal through the center.
    assert!(((end.x - 300.0) - (end.y - 300.0)).abs() < EPSILON);
}

#[test]
fn gradient_line_is_centered() {
    let (start, end) = css_gradient_line(37.0, 640.0, 480.0);
    let mid = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
    assert!(point_approx_eq(mid, Point::new(320.0, 240.0)));
}

// =============================================================
// grid_lines
// =============================================================

#[test]
fn grid_lines_cover_extent() {
    let xs: Vec<f64> = grid_lines(40.0, 130.0).collect();
    assert_eq!(xs, [0.0, 40.0, 80.0, 120.0]);
}

#[test]
fn grid_lines_exclude_far_edge() {
    let xs: Vec<f64> = grid_lines(20.0, 60.0).collect();
    assert_eq!(xs, [0.0, 20.0, 40.0]);
}

#[test]
fn grid_lines_guard_against_zero_spacing() {
    assert_eq!(grid_lines(0.0, 3.0).count(), 3);
}
