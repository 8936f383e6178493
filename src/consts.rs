//! Shared numeric constants for the easel crate.

// ── Viewport ────────────────────────────────────────────────────

/// Scale change applied per wheel notch or toolbar step.
pub const SCALE_STEP: f64 = 0.05;

/// Smallest scale the viewport will accept. The inverse transform divides by
/// scale, so zero or negative values are never allowed to land.
pub const MIN_SCALE: f64 = 0.05;

// ── Render markers ──────────────────────────────────────────────

/// Radius of the document-origin reference marker, in document units.
pub const ORIGIN_MARKER_RADIUS: f64 = 5.0;

/// Fill color of the document-origin reference marker.
pub const ORIGIN_MARKER_COLOR: &str = "red";

/// Radius of the pointer-position indicator, in document units.
pub const POINTER_MARKER_RADIUS: f64 = 5.0;

/// Fill color of the pointer-position indicator.
pub const POINTER_MARKER_COLOR: &str = "green";

/// Line width used by the stroke primitive when the caller has no preference.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
