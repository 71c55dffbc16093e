//! Shared constants.

/// Default panel width in physical units (a full 8 ft sheet, in inches).
pub const DEFAULT_PANEL_WIDTH: f64 = 96.0;

/// Default panel height in physical units.
pub const DEFAULT_PANEL_HEIGHT: f64 = 48.0;

/// Default safe travel height for non-cutting moves.
pub const DEFAULT_SAFE_Z: f64 = 2.0;

/// Pointer hit radius around the crosshair and its lines, in screen pixels.
pub const DEFAULT_HIT_RADIUS: f64 = 20.0;

/// Radius of the drawn centre handle, in screen pixels.
pub const HANDLE_RADIUS: f64 = 10.0;

/// Horizontal space reserved around the canvas when fitting it to a container.
pub const CONTAINER_MARGIN: f64 = 20.0;

/// Distance between the crosshair and its coordinate label, in screen pixels.
pub const LABEL_OFFSET: f64 = 10.0;
