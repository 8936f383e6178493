//! Hit-testing against the shape store.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::shape::{ShapeId, ShapeStore};
use crate::viewport::Point;

/// Find the topmost shape under a document-space point.
///
/// The sequence is traversed in reverse: shapes at the end of the store are
/// drawn last and therefore sit on top, so the first reverse match wins.
/// Hit priority follows sequence position, not the `order` key — the two only
/// agree after a render-time sort.
#[must_use]
pub fn find_hit(doc: Point, store: &ShapeStore) -> Option<ShapeId> {
    store
        .shapes()
        .iter()
        .rev()
        .find(|shape| shape.contains(doc))
        .map(crate::shape::Shape::id)
}
