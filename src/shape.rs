//! Shape records and the ordered in-memory store.
//!
//! A [`Shape`] is either an axis-aligned rectangle or a circle, tagged on the
//! wire with `"shape": "rect" | "circle"`. The store is an ordered sequence:
//! sequence position is draw order (and therefore hit-test priority), while
//! the `order` timestamp is only a sort key used to re-establish that
//! sequence before each render. The engine mutates position fields and
//! `order` during drags; creation and deletion belong to the host.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::viewport::Point;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// A shape as stored in the document and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    /// Axis-aligned rectangle anchored at its top-left corner.
    Rect {
        id: ShapeId,
        /// Z-order sort key; later pick-ups get larger timestamps.
        order: f64,
        color: String,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    /// Circle anchored at its center.
    Circle {
        id: ShapeId,
        /// Z-order sort key; later pick-ups get larger timestamps.
        order: f64,
        color: String,
        cx: f64,
        cy: f64,
        r: f64,
    },
}

impl Shape {
    /// Stable identity of this shape.
    #[must_use]
    pub fn id(&self) -> ShapeId {
        match self {
            Self::Rect { id, .. } | Self::Circle { id, .. } => *id,
        }
    }

    /// Current z-order sort key.
    #[must_use]
    pub fn order(&self) -> f64 {
        match self {
            Self::Rect { order, .. } | Self::Circle { order, .. } => *order,
        }
    }

    /// Overwrite the z-order sort key. Called when a shape is picked up so it
    /// sorts above everything picked up earlier.
    pub fn set_order(&mut self, value: f64) {
        match self {
            Self::Rect { order, .. } | Self::Circle { order, .. } => *order = value,
        }
    }

    /// The drag anchor: top-left corner for rects, center for circles.
    #[must_use]
    pub fn anchor(&self) -> Point {
        match self {
            Self::Rect { x, y, .. } => Point::new(*x, *y),
            Self::Circle { cx, cy, .. } => Point::new(*cx, *cy),
        }
    }

    /// Move the shape so its anchor lands at `anchor`.
    pub fn set_anchor(&mut self, anchor: Point) {
        match self {
            Self::Rect { x, y, .. } => {
                *x = anchor.x;
                *y = anchor.y;
            }
            Self::Circle { cx, cy, .. } => {
                *cx = anchor.x;
                *cy = anchor.y;
            }
        }
    }

    /// Whether a document-space point lies on or inside this shape.
    /// Boundaries are inclusive for both kinds.
    #[must_use]
    pub fn contains(&self, doc: Point) -> bool {
        match self {
            Self::Rect { x, y, w, h, .. } => {
                doc.x >= *x && doc.y >= *y && doc.x <= x + w && doc.y <= y + h
            }
            Self::Circle { cx, cy, r, .. } => {
                let dx = cx - doc.x;
                let dy = cy - doc.y;
                dx * dx + dy * dy <= r * r
            }
        }
    }

    /// Fill color as a CSS color string.
    #[must_use]
    pub fn color(&self) -> &str {
        match self {
            Self::Rect { color, .. } | Self::Circle { color, .. } => color,
        }
    }
}

/// Ordered in-memory store of shapes.
///
/// Sequence order doubles as draw order; [`ShapeStore::sort_by_order`] keeps
/// it consistent with the `order` keys. A full re-sort before every frame is
/// a deliberate scalability ceiling — fine at the shape counts this surface
/// targets.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Replace all shapes with a full snapshot, preserving snapshot order.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    /// Append a shape at the top of the visual stack.
    pub fn insert(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == *id)?;
        Some(self.shapes.remove(index))
    }

    /// Return a reference to a shape by id.
    #[must_use]
    pub fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == *id)
    }

    /// Return a mutable reference to a shape by id.
    pub fn get_mut(&mut self, id: &ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == *id)
    }

    /// The shape sequence in current draw order (bottom first).
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Stable in-place re-sort by ascending `order`. Ties keep their current
    /// sequence positions.
    pub fn sort_by_order(&mut self) {
        self.shapes.sort_by(|a, b| a.order().total_cmp(&b.order()));
    }

    /// Number of shapes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the store contains no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
