//! Input model: the pointer sample and the drag state machine types.
//!
//! [`PointerSample`] is the most recent pointer position expressed in all
//! three coordinate spaces; it is overwritten by every pointer event before
//! any hit-testing or drag math runs. [`DragState`] is the active gesture —
//! exactly one drag mode can be in flight, which the tagged union makes
//! unrepresentable to violate.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::shape::ShapeId;
use crate::viewport::Point;

/// The latest pointer position in client, canvas, and document space.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSample {
    /// Raw event coordinates relative to the window.
    pub client: Point,
    /// Coordinates relative to the canvas element's top-left corner.
    pub canvas: Point,
    /// Logical scene coordinates under the current viewport.
    pub doc: Point,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// The active drag gesture.
///
/// Each dragging variant carries the offset captured at pointer-down; reusing
/// it for every subsequent move keeps the dragged entity pointer-relative
/// instead of snapping to the cursor or accumulating drift.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A shape is being moved across the document.
    DraggingShape {
        /// Id of the dragged shape, resolved against the store on every move.
        id: ShapeId,
        /// Document-space vector from the pointer to the shape's anchor.
        grab_offset: Point,
    },
    /// The viewport is being panned.
    DraggingViewport {
        /// Canvas-space vector from the pointer to the viewport translation.
        grab_offset: Point,
    },
}
