//! Rendering: draws the planner canvas to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the engine's per-frame views (background, draw list, live
//! bearings) and produces pixels. It never mutates planner state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::background::{Backdrop, Pattern, Theme};
use crate::catalog::{ConeShape, TokenType};
use crate::consts::{TOKEN_BORDER_WIDTH, TOKEN_CORNER_RADIUS, TOKEN_LABEL_PX};
use crate::engine::{EngineCore, TokenView};
use crate::geometry::Point;

/// Token border color.
const TOKEN_BORDER: &str = "rgba(255, 255, 255, 0.5)";

/// Vertical gap between the two empty-canvas hint lines.
const HINT_LINE_GAP: f64 = 28.0;

/// Draw the full frame: background, empty hint, then tokens in draw order.
///
/// `backdrop` is the image for an image-backed theme, if the host has one.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    core: &EngineCore,
    backdrop: Option<&HtmlImageElement>,
) -> Result<(), JsValue> {
    let config = core.placement.config();
    let (w, h) = (config.canvas_width, config.canvas_height);
    let k = core.camera.scale * core.dpr;

    // Layer 1: reset and scale layout units to backing-store pixels.
    ctx.set_transform(k, 0.0, 0.0, k, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, w, h);

    // Layer 2: background theme.
    draw_background(ctx, core.model().background().theme(), backdrop, w, h)?;

    // Layer 3: hint or tokens.
    if core.model().is_empty() {
        draw_empty_hint(ctx, w, h)?;
    }
    for view in core.draw_list() {
        draw_token(ctx, &view)?;
    }

    Ok(())
}

// =============================================================
// Background
// =============================================================

fn draw_background(
    ctx: &CanvasRenderingContext2d,
    theme: &Theme,
    image: Option<&HtmlImageElement>,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    match theme.backdrop {
        Backdrop::Image { fallback, .. } => {
            if let Some(image) = image.filter(|image| is_loaded(image)) {
                ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, w, h)?;
                return draw_pattern(ctx, theme, w, h);
            }
            ctx.set_fill_style_str(fallback);
        }
        Backdrop::LinearGradient { angle_deg, stops } => {
            let (start, end) = css_gradient_line(angle_deg, w, h);
            let gradient = ctx.create_linear_gradient(start.x, start.y, end.x, end.y);
            gradient.add_color_stop(0.0, stops[0])?;
            gradient.add_color_stop(0.5, stops[1])?;
            gradient.add_color_stop(1.0, stops[2])?;
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
    }
    ctx.fill_rect(0.0, 0.0, w, h);
    draw_pattern(ctx, theme, w, h)
}

fn draw_pattern(ctx: &CanvasRenderingContext2d, theme: &Theme, w: f64, h: f64) -> Result<(), JsValue> {
    match theme.pattern {
        Pattern::None => {}
        Pattern::Grid { spacing, line_width, color } => {
            ctx.set_fill_style_str(color);
            for x in grid_lines(spacing, w) {
                ctx.fill_rect(x, 0.0, line_width, h);
            }
            for y in grid_lines(spacing, h) {
                ctx.fill_rect(0.0, y, w, line_width);
            }
        }
        Pattern::Glow { spots } => {
            let extent = w.max(h);
            for spot in spots {
                let (cx, cy, r) = (spot.fx * w, spot.fy * h, spot.radius * extent);
                let gradient = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r)?;
                gradient.add_color_stop(0.0, spot.color)?;
                gradient.add_color_stop(1.0, "transparent")?;
                ctx.set_fill_style_canvas_gradient(&gradient);
                ctx.fill_rect(0.0, 0.0, w, h);
            }
        }
    }
    Ok(())
}

fn draw_empty_hint(ctx: &CanvasRenderingContext2d, w: f64, h: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    ctx.set_font("18px sans-serif");
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.3)");
    ctx.fill_text("Click elements above to add them here", w / 2.0, h / 2.0 - HINT_LINE_GAP / 2.0)?;

    ctx.set_font("14px sans-serif");
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.2)");
    ctx.fill_text("Then drag to position", w / 2.0, h / 2.0 + HINT_LINE_GAP / 2.0)?;

    ctx.restore();
    Ok(())
}

// =============================================================
// Tokens
// =============================================================

fn draw_token(ctx: &CanvasRenderingContext2d, view: &TokenView) -> Result<(), JsValue> {
    let spec = view.kind.spec();
    ctx.save();
    ctx.translate(view.x + spec.width / 2.0, view.y + spec.height / 2.0)?;
    ctx.scale(view.scale, view.scale)?;

    // The cone sits behind its own box but above earlier tokens.
    if let (Some(cone), Some(bearing)) = (spec.cone(), view.bearing) {
        draw_cone(ctx, cone, bearing)?;
    }
    draw_token_box(ctx, spec)?;

    ctx.restore();
    Ok(())
}

fn draw_cone(ctx: &CanvasRenderingContext2d, cone: &ConeShape, bearing_deg: f64) -> Result<(), JsValue> {
    ctx.save();
    ctx.rotate(bearing_deg.to_radians())?;

    let half = cone.size / 2.0;
    let gradient = ctx.create_linear_gradient(-half, 0.0, half, 0.0);
    gradient.add_color_stop(0.0, cone.gradient[0])?;
    gradient.add_color_stop(0.5, cone.gradient[1])?;
    gradient.add_color_stop(1.0, cone.gradient[2])?;
    ctx.set_fill_style_canvas_gradient(&gradient);

    let [apex, a, b] = cone.points_from_apex();
    ctx.begin_path();
    ctx.move_to(apex.0, apex.1);
    ctx.line_to(a.0, a.1);
    ctx.line_to(b.0, b.1);
    ctx.close_path();
    ctx.fill();

    ctx.restore();
    Ok(())
}

fn draw_token_box(ctx: &CanvasRenderingContext2d, spec: &TokenType) -> Result<(), JsValue> {
    let (hw, hh) = (spec.width / 2.0, spec.height / 2.0);

    if spec.fill.is_solid() {
        ctx.set_fill_style_str(spec.fill.from);
    } else {
        let gradient = ctx.create_linear_gradient(-hw, -hh, hw, hh);
        gradient.add_color_stop(0.0, spec.fill.from)?;
        gradient.add_color_stop(1.0, spec.fill.to)?;
        ctx.set_fill_style_canvas_gradient(&gradient);
    }
    rounded_rect_path(ctx, -hw, -hh, spec.width, spec.height, TOKEN_CORNER_RADIUS)?;
    ctx.fill();

    ctx.set_stroke_style_str(TOKEN_BORDER);
    ctx.set_line_width(TOKEN_BORDER_WIDTH);
    ctx.stroke();

    ctx.set_fill_style_str(spec.text_color);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("bold {TOKEN_LABEL_PX:.0}px sans-serif"));
    ctx.fill_text(spec.label, 0.0, 0.0)?;
    Ok(())
}

fn rounded_rect_path(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
) -> Result<(), JsValue> {
    let r = radius.min(w / 2.0).min(h / 2.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

/// A broken or still-loading image reports zero natural width.
fn is_loaded(image: &HtmlImageElement) -> bool {
    image.complete() && image.natural_width() > 0
}

/// Start and end points of a CSS `linear-gradient(<angle>)` over a `w` × `h` box.
///
/// CSS angles run clockwise from "to top": 0° points up, 90° right, 180° down.
/// The gradient line passes through the box center and is just long enough
/// for the corners to land on the first and last stops.
#[must_use]
pub fn css_gradient_line(angle_deg: f64, w: f64, h: f64) -> (Point, Point) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let half_len = (w * sin.abs() + h * cos.abs()) / 2.0;
    let (cx, cy) = (w / 2.0, h / 2.0);
    let (dx, dy) = (sin * half_len, -cos * half_len);
    (Point::new(cx - dx, cy - dy), Point::new(cx + dx, cy + dy))
}

/// Offsets of the grid lines strictly inside `0..extent`, starting at 0.
fn grid_lines(spacing: f64, extent: f64) -> impl Iterator<Item = f64> {
    let step = spacing.max(1.0);
    std::iter::successors(Some(0.0), move |x| Some(x + step)).take_while(move |x| *x < extent)
}
