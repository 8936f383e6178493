//! Rendering: draws the scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only views of the
//! shape store, viewport, and pointer state and produces pixels — it does not
//! mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    ORIGIN_MARKER_COLOR, ORIGIN_MARKER_RADIUS, POINTER_MARKER_COLOR, POINTER_MARKER_RADIUS,
};
use crate::shape::{Shape, ShapeStore};
use crate::viewport::{Point, SurfaceGeometry, Viewport};

/// Draw the full scene.
///
/// The caller is expected to have sorted the store by `order` already; shapes
/// are drawn in sequence order, bottom first. The saved transform brackets
/// every draw so each frame starts from the identity.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    store: &ShapeStore,
    viewport: &Viewport,
    geometry: &SurfaceGeometry,
    pointer_doc: Point,
    pointer_within: bool,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, geometry.width, geometry.height);

    // Translate before scale so zoom happens around the translation point.
    ctx.save();
    ctx.translate(viewport.translation.x, viewport.translation.y)?;
    ctx.scale(viewport.scale, viewport.scale)?;

    // Document-origin reference marker.
    fill_circle(ctx, Point::default(), ORIGIN_MARKER_RADIUS, ORIGIN_MARKER_COLOR)?;

    for shape in store.shapes() {
        match shape {
            Shape::Rect { color, x, y, w, h, .. } => {
                fill_rect(ctx, Point::new(*x, *y), *w, *h, color);
            }
            Shape::Circle { color, cx, cy, r, .. } => {
                fill_circle(ctx, Point::new(*cx, *cy), *r, color)?;
            }
        }
    }

    if pointer_within {
        fill_circle(ctx, pointer_doc, POINTER_MARKER_RADIUS, POINTER_MARKER_COLOR)?;
    }

    ctx.restore();
    Ok(())
}

// =============================================================
// Draw primitives
// =============================================================

/// Fill an axis-aligned rectangle under the active transform.
pub fn fill_rect(ctx: &CanvasRenderingContext2d, origin: Point, w: f64, h: f64, color: &str) {
    ctx.set_fill_style_str(color);
    ctx.fill_rect(origin.x, origin.y, w, h);
}

/// Fill a full circle under the active transform.
///
/// # Errors
///
/// Returns `Err` if the arc call rejects its arguments.
pub fn fill_circle(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    r: f64,
    color: &str,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.arc(center.x, center.y, r, 0.0, 2.0 * PI)?;
    ctx.fill();
    Ok(())
}

/// Stroke a line segment under the active transform. Unused by the current
/// shape kinds but part of the drawing contract for future ones.
pub fn stroke_line(
    ctx: &CanvasRenderingContext2d,
    from: Point,
    to: Point,
    color: &str,
    line_width: f64,
) {
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(line_width);
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}
