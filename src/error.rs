//! Error type for the surface lifecycle.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding to or tearing down the canvas element.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The element did not yield a `2d` rendering context.
    #[error("canvas 2d context is unavailable")]
    ContextUnavailable,
    /// `window` is missing from the global scope.
    #[error("window is unavailable")]
    WindowUnavailable,
    /// A browser API call failed; the underlying `JsValue` is stringified
    /// because `JsValue` is neither `Send` nor `Error`.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
