//! Interactive 2D scene editor surface for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of one canvas element: translating raw DOM pointer and wheel
//! events through three coordinate spaces, hit-testing a z-ordered shape
//! store, driving a drag state machine for shape moves and viewport pans, and
//! redrawing the scene every animation frame. The host UI layer is responsible
//! only for mounting the surface and hydrating the shape store.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`shape`] | Shape records and the ordered in-memory store |
//! | [`viewport`] | Pan/zoom viewport and coordinate conversions |
//! | [`input`] | Pointer sample and the drag state machine types |
//! | [`hit`] | Topmost-wins hit-testing against the shape store |
//! | [`render`] | Scene rendering and stateless draw primitives |
//! | [`surface`] | Canvas binding, input wiring, and the render loop |
//! | [`error`] | Surface lifecycle error type |
//! | [`consts`] | Shared numeric constants (scale step, marker sizes, etc.) |

pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod input;
pub mod render;
pub mod shape;
pub mod surface;
pub mod viewport;
