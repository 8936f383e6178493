//! Top-level engine: pointer/drag state machine over the shape store and
//! viewport.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::SCALE_STEP;
use crate::error::SurfaceError;
use crate::hit;
use crate::input::{DragState, PointerSample, WheelDelta};
use crate::render;
use crate::shape::{Shape, ShapeId, ShapeStore};
use crate::viewport::{Point, SurfaceGeometry, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies. Timestamps are passed in by the caller for the same reason.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub store: ShapeStore,
    pub viewport: Viewport,
    pub geometry: SurfaceGeometry,
    pub pointer: PointerSample,
    pub pointer_within: bool,
    pub drag: DragState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Hydrate the shape store from a host snapshot.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.store.load_snapshot(shapes);
    }

    /// Record the canvas element's client-space bounds after a resize.
    pub fn on_resize(&mut self, root_x: f64, root_y: f64, width: f64, height: f64) {
        self.geometry = SurfaceGeometry::new(root_x, root_y, width, height);
    }

    // --- Viewport operations (exposed to the host toolbar) ---

    /// Reset the viewport translation to the origin.
    pub fn recenter_viewport(&mut self) {
        self.viewport.recenter();
    }

    /// Set the viewport scale (clamped to a positive minimum).
    pub fn set_scale(&mut self, value: f64) {
        self.viewport.set_scale(value);
    }

    /// Step the viewport scale by a signed delta (clamped).
    pub fn step_scale(&mut self, delta: f64) {
        self.viewport.step_scale(delta);
    }

    // --- Input events ---

    /// Begin a gesture. `now_ms` is the wall-clock timestamp used as the
    /// picked shape's new z-order key.
    pub fn on_pointer_down(&mut self, client: Point, now_ms: f64) {
        self.ingest_pointer(client);

        if let Some(id) = hit::find_hit(self.pointer.doc, &self.store) {
            // Lookup cannot miss here; find_hit just returned this id.
            if let Some(shape) = self.store.get_mut(&id) {
                shape.set_order(now_ms);
                let grab_offset = shape.anchor() - self.pointer.doc;
                self.drag = DragState::DraggingShape { id, grab_offset };
                log::debug!("shape {id} picked up");
            }
        } else {
            let grab_offset = self.viewport.translation - self.pointer.canvas;
            self.drag = DragState::DraggingViewport { grab_offset };
            log::debug!("viewport pan started");
        }
    }

    /// Advance the active gesture, if any. Always refreshes the pointer
    /// sample so the render overlay tracks the cursor.
    pub fn on_pointer_move(&mut self, client: Point) {
        self.ingest_pointer(client);
        self.apply_drag();
    }

    /// Apply the final position update and return to idle.
    pub fn on_pointer_up(&mut self, client: Point) {
        self.ingest_pointer(client);
        self.apply_drag();
        self.drag = DragState::Idle;
    }

    /// The pointer crossed into the surface; the render overlay turns on.
    pub fn on_pointer_enter(&mut self) {
        self.pointer_within = true;
    }

    /// The pointer left the surface. Any active drag is cleanly ended by a
    /// synthesized pointer-up before the overlay flag clears; while idle this
    /// touches nothing else.
    pub fn on_pointer_leave(&mut self, client: Point) {
        self.on_pointer_up(client);
        self.pointer_within = false;
    }

    /// Step the scale by one notch per wheel event, by sign of the vertical
    /// delta. No zoom-around-cursor compensation.
    pub fn on_wheel(&mut self, delta: WheelDelta) {
        let dy = delta.dy.round();
        if dy > 0.0 {
            self.viewport.step_scale(SCALE_STEP);
        } else if dy < 0.0 {
            self.viewport.step_scale(-SCALE_STEP);
        }
    }

    // --- Queries ---

    /// The current viewport state.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Look up a shape by id.
    #[must_use]
    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.store.get(id)
    }

    // --- Internals ---

    /// Express a raw client-space pointer position in all three coordinate
    /// spaces. Must run before any hit-test or drag math in a handler.
    fn ingest_pointer(&mut self, client: Point) {
        self.pointer.client = client;
        self.pointer.canvas = self.geometry.client_to_canvas(client);
        self.pointer.doc = self.viewport.canvas_to_doc(self.pointer.canvas);
    }

    /// Apply the current drag state to the freshly ingested pointer sample.
    fn apply_drag(&mut self) {
        match self.drag {
            DragState::Idle => {}
            DragState::DraggingShape { id, grab_offset } => {
                if let Some(shape) = self.store.get_mut(&id) {
                    shape.set_anchor(self.pointer.doc + grab_offset);
                } else {
                    // The host removed the shape mid-drag; drop the gesture
                    // rather than chase a dangling id.
                    log::debug!("dragged shape {id} vanished; drag reset");
                    self.drag = DragState::Idle;
                }
            }
            DragState::DraggingViewport { grab_offset } => {
                self.viewport.translation = self.pointer.canvas + grab_offset;
            }
        }
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas
/// element and its 2D context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ContextUnavailable`] if the element does not
    /// yield a `2d` context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(SurfaceError::from)?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    /// The canvas element this engine draws to.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Delegated data inputs ---

    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.core.load_snapshot(shapes);
    }

    pub fn on_resize(&mut self, root_x: f64, root_y: f64, width: f64, height: f64) {
        self.core.on_resize(root_x, root_y, width, height);
    }

    // --- Delegated viewport operations ---

    pub fn recenter_viewport(&mut self) {
        self.core.recenter_viewport();
    }

    pub fn set_scale(&mut self, value: f64) {
        self.core.set_scale(value);
    }

    pub fn step_scale(&mut self, delta: f64) {
        self.core.step_scale(delta);
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, client: Point, now_ms: f64) {
        self.core.on_pointer_down(client, now_ms);
    }

    pub fn on_pointer_move(&mut self, client: Point) {
        self.core.on_pointer_move(client);
    }

    pub fn on_pointer_up(&mut self, client: Point) {
        self.core.on_pointer_up(client);
    }

    pub fn on_pointer_enter(&mut self) {
        self.core.on_pointer_enter();
    }

    pub fn on_pointer_leave(&mut self, client: Point) {
        self.core.on_pointer_leave(client);
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) {
        self.core.on_wheel(delta);
    }

    // --- Render ---

    /// Draw the current state to the canvas. Re-sorts the shape sequence in
    /// place by `order` first, so drag-induced promotions take effect.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.core.store.sort_by_order();
        render::draw(
            &self.ctx,
            &self.core.store,
            &self.core.viewport,
            &self.core.geometry,
            self.core.pointer.doc,
            self.core.pointer_within,
        )
    }
}
