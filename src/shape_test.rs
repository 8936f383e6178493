#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn rect(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::Rect { id: Uuid::new_v4(), order: 1.0, color: "red".to_owned(), x, y, w, h }
}

fn circle(cx: f64, cy: f64, r: f64) -> Shape {
    Shape::Circle { id: Uuid::new_v4(), order: 1.0, color: "blue".to_owned(), cx, cy, r }
}

fn rect_with_order(order: f64) -> Shape {
    Shape::Rect { id: Uuid::new_v4(), order, color: "red".to_owned(), x: 0.0, y: 0.0, w: 10.0, h: 10.0 }
}

// =============================================================
// Shape accessors
// =============================================================

#[test]
fn rect_anchor_is_top_left() {
    let s = rect(100.0, 100.0, 50.0, 25.0);
    assert_eq!(s.anchor(), Point::new(100.0, 100.0));
}

#[test]
fn circle_anchor_is_center() {
    let s = circle(200.0, 300.0, 25.0);
    assert_eq!(s.anchor(), Point::new(200.0, 300.0));
}

#[test]
fn set_anchor_moves_rect() {
    let mut s = rect(0.0, 0.0, 10.0, 10.0);
    s.set_anchor(Point::new(7.0, -3.0));
    assert_eq!(s.anchor(), Point::new(7.0, -3.0));
    let Shape::Rect { w, h, .. } = &s else {
        unreachable!("constructed a rect");
    };
    assert_eq!((*w, *h), (10.0, 10.0));
}

#[test]
fn set_anchor_moves_circle() {
    let mut s = circle(5.0, 5.0, 2.0);
    s.set_anchor(Point::new(-1.0, 4.0));
    assert_eq!(s.anchor(), Point::new(-1.0, 4.0));
}

#[test]
fn set_order_overwrites_key() {
    let mut s = rect(0.0, 0.0, 1.0, 1.0);
    s.set_order(1234.5);
    assert_eq!(s.order(), 1234.5);
}

#[test]
fn color_accessor() {
    assert_eq!(rect(0.0, 0.0, 1.0, 1.0).color(), "red");
    assert_eq!(circle(0.0, 0.0, 1.0).color(), "blue");
}

// =============================================================
// Containment
// =============================================================

#[test]
fn rect_contains_interior_point() {
    let s = rect(100.0, 100.0, 100.0, 50.0);
    assert!(s.contains(Point::new(150.0, 120.0)));
}

#[test]
fn rect_edges_are_inclusive() {
    let s = rect(0.0, 0.0, 10.0, 10.0);
    assert!(s.contains(Point::new(0.0, 0.0)));
    assert!(s.contains(Point::new(10.0, 10.0)));
    assert!(s.contains(Point::new(0.0, 10.0)));
    assert!(s.contains(Point::new(10.0, 0.0)));
}

#[test]
fn rect_excludes_outside_point() {
    let s = rect(0.0, 0.0, 10.0, 10.0);
    assert!(!s.contains(Point::new(10.001, 5.0)));
    assert!(!s.contains(Point::new(5.0, -0.001)));
}

#[test]
fn circle_contains_center() {
    let s = circle(200.0, 200.0, 25.0);
    assert!(s.contains(Point::new(200.0, 200.0)));
}

#[test]
fn circle_boundary_is_inclusive() {
    let s = circle(0.0, 0.0, 5.0);
    assert!(s.contains(Point::new(5.0, 0.0)));
    assert!(s.contains(Point::new(0.0, -5.0)));
}

#[test]
fn circle_excludes_outside_point() {
    let s = circle(0.0, 0.0, 5.0);
    assert!(!s.contains(Point::new(5.0, 0.1)));
    assert!(!s.contains(Point::new(3.6, 3.6)));
}

// =============================================================
// ShapeStore
// =============================================================

#[test]
fn store_new_is_empty() {
    let store = ShapeStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn insert_appends_to_sequence() {
    let mut store = ShapeStore::new();
    let a = rect(0.0, 0.0, 1.0, 1.0);
    let b = circle(0.0, 0.0, 1.0);
    let (a_id, b_id) = (a.id(), b.id());
    store.insert(a);
    store.insert(b);
    assert_eq!(store.len(), 2);
    assert_eq!(store.shapes()[0].id(), a_id);
    assert_eq!(store.shapes()[1].id(), b_id);
}

#[test]
fn get_finds_by_id() {
    let mut store = ShapeStore::new();
    let s = rect(1.0, 2.0, 3.0, 4.0);
    let id = s.id();
    store.insert(s);
    assert_eq!(store.get(&id).map(Shape::anchor), Some(Point::new(1.0, 2.0)));
    assert!(store.get(&Uuid::new_v4()).is_none());
}

#[test]
fn get_mut_allows_position_writes() {
    let mut store = ShapeStore::new();
    let s = rect(1.0, 2.0, 3.0, 4.0);
    let id = s.id();
    store.insert(s);
    if let Some(shape) = store.get_mut(&id) {
        shape.set_anchor(Point::new(9.0, 9.0));
    }
    assert_eq!(store.get(&id).map(Shape::anchor), Some(Point::new(9.0, 9.0)));
}

#[test]
fn remove_returns_the_shape() {
    let mut store = ShapeStore::new();
    let s = circle(0.0, 0.0, 1.0);
    let id = s.id();
    store.insert(s);
    let removed = store.remove(&id);
    assert!(removed.is_some());
    assert!(store.is_empty());
    assert!(store.remove(&id).is_none());
}

#[test]
fn load_snapshot_replaces_contents() {
    let mut store = ShapeStore::new();
    store.insert(rect(0.0, 0.0, 1.0, 1.0));
    store.load_snapshot(vec![circle(0.0, 0.0, 1.0), circle(1.0, 1.0, 1.0)]);
    assert_eq!(store.len(), 2);
}

#[test]
fn sort_by_order_ascending() {
    let mut store = ShapeStore::new();
    let high = rect_with_order(300.0);
    let low = rect_with_order(100.0);
    let mid = rect_with_order(200.0);
    let ids = [low.id(), mid.id(), high.id()];
    store.insert(high);
    store.insert(low);
    store.insert(mid);
    store.sort_by_order();
    let sequence: Vec<_> = store.shapes().iter().map(Shape::id).collect();
    assert_eq!(sequence, ids);
}

#[test]
fn sort_by_order_is_stable_for_ties() {
    let mut store = ShapeStore::new();
    let a = rect_with_order(1.0);
    let b = rect_with_order(1.0);
    let c = rect_with_order(1.0);
    let ids = [a.id(), b.id(), c.id()];
    store.insert(a);
    store.insert(b);
    store.insert(c);
    store.sort_by_order();
    let sequence: Vec<_> = store.shapes().iter().map(Shape::id).collect();
    assert_eq!(sequence, ids);
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn rect_serializes_with_shape_tag() {
    let s = Shape::Rect {
        id: Uuid::nil(),
        order: 1.0,
        color: "red".to_owned(),
        x: 100.0,
        y: 100.0,
        w: 100.0,
        h: 50.0,
    };
    let value = serde_json::to_value(&s).expect("serializable");
    assert_eq!(value["shape"], "rect");
    assert_eq!(value["x"], 100.0);
    assert_eq!(value["h"], 50.0);
}

#[test]
fn circle_round_trips_through_json() {
    let s = Shape::Circle {
        id: Uuid::new_v4(),
        order: 7.0,
        color: "blue".to_owned(),
        cx: 200.0,
        cy: 200.0,
        r: 25.0,
    };
    let json = serde_json::to_string(&s).expect("serializable");
    let back: Shape = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back.id(), s.id());
    assert_eq!(back.anchor(), Point::new(200.0, 200.0));
}
