//! Shared constants for the seams crate.

// ── Layout ──────────────────────────────────────────────────────

/// Dead zone between the two panes, in surface units. Never configurable.
pub const PANE_GAP: f64 = 40.0;

/// Number of panes on the surface.
pub const PANE_COUNT: usize = 2;

// ── Seam styling ────────────────────────────────────────────────

/// Stroke color for front seams.
pub const FRONT_COLOR: &str = "#FF0000";

/// Stroke color for back seams.
pub const BACK_COLOR: &str = "#0000FF";

/// Stroke width for committed seam lines, in surface pixels.
pub const LINE_WIDTH_PX: f64 = 2.0;

/// Dash pattern (on, off) for back seams and the live preview line.
pub const DASH_PATTERN_PX: [f64; 2] = [5.0, 5.0];

/// Radius of the anchor marker drawn while a pairing is in progress.
pub const MARKER_RADIUS_PX: f64 = 4.0;

/// Stroke color of the anchor marker and preview line.
pub const PREVIEW_COLOR: &str = "#444444";

// ── 3-D preview ─────────────────────────────────────────────────

/// Z coordinate of the plane holding the left diagram.
pub const LEFT_PLANE_Z: f64 = -1.0;

/// Z coordinate of the plane holding the right diagram.
pub const RIGHT_PLANE_Z: f64 = 1.0;

/// Suggested camera distance from the origin, in scene units.
pub const PREVIEW_CAMERA_DISTANCE: f64 = 3.0;

/// Length of the x/y/z axis guides drawn at the preview origin, in scene units.
pub const PREVIEW_AXES_LENGTH: f64 = 100.0;
