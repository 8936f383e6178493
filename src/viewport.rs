//! Viewport state and coordinate conversions.
//!
//! Three coordinate spaces are in play:
//!
//! * **client** — raw pointer event coordinates, origin at the window corner;
//! * **canvas** — local to the canvas element, client minus the surface root;
//! * **document** — logical scene coordinates, related to canvas space by the
//!   viewport's translation and scale.
//!
//! All conversions are pure reads of [`Viewport`] / [`SurfaceGeometry`] state.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::ops::{Add, Sub};

use crate::consts::MIN_SCALE;

/// A point in client, canvas, or document space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
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

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Pan/zoom state mapping document space into canvas space.
///
/// `translation` is in canvas pixels. `scale` is a factor (1.0 = no zoom) and
/// is always at least [`MIN_SCALE`]; the setters clamp so the inverse
/// transform never divides by zero or flips orientation.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub translation: Point,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { translation: Point::default(), scale: 1.0 }
    }
}

impl Viewport {
    /// Convert a canvas-space point to document coordinates.
    #[must_use]
    pub fn canvas_to_doc(&self, canvas: Point) -> Point {
        Point {
            x: (canvas.x - self.translation.x) / self.scale,
            y: (canvas.y - self.translation.y) / self.scale,
        }
    }

    /// Convert a document-space point to canvas coordinates.
    #[must_use]
    pub fn doc_to_canvas(&self, doc: Point) -> Point {
        Point {
            x: doc.x * self.scale + self.translation.x,
            y: doc.y * self.scale + self.translation.y,
        }
    }

    /// Convert a document-space point all the way out to client coordinates.
    #[must_use]
    pub fn doc_to_client(&self, doc: Point, geometry: &SurfaceGeometry) -> Point {
        geometry.canvas_to_client(self.doc_to_canvas(doc))
    }

    /// Convert a client-space point all the way in to document coordinates.
    #[must_use]
    pub fn client_to_doc(&self, client: Point, geometry: &SurfaceGeometry) -> Point {
        self.canvas_to_doc(geometry.client_to_canvas(client))
    }

    /// Reset the translation to the origin. Scale is left untouched.
    pub fn recenter(&mut self) {
        self.translation = Point::default();
    }

    /// Set the scale, clamped to [`MIN_SCALE`].
    pub fn set_scale(&mut self, value: f64) {
        self.scale = value.max(MIN_SCALE);
    }

    /// Step the scale by a signed delta, clamped to [`MIN_SCALE`].
    pub fn step_scale(&mut self, delta: f64) {
        self.set_scale(self.scale + delta);
    }
}

/// Position and size of the canvas element in client space.
///
/// Recomputed whenever the element resizes; consulted by every
/// client-to-canvas conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceGeometry {
    pub root_x: f64,
    pub root_y: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceGeometry {
    #[must_use]
    pub fn new(root_x: f64, root_y: f64, width: f64, height: f64) -> Self {
        Self { root_x, root_y, width, height }
    }

    /// Convert a client-space point to canvas coordinates.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point { x: client.x - self.root_x, y: client.y - self.root_y }
    }

    /// Convert a canvas-space point to client coordinates.
    #[must_use]
    pub fn canvas_to_client(&self, canvas: Point) -> Point {
        Point { x: canvas.x + self.root_x, y: canvas.y + self.root_y }
    }
}
