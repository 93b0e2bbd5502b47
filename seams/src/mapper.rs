//! Conversions between the combined surface and pane-local coordinates.
//!
//! Points are always *stored* pane-local (origin at the pane's own top-left).
//! Surface coordinates exist only transiently: as raw pointer positions on the
//! way in, and as render/projection positions on the way out. These two
//! functions are the only seams where the frames meet.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use serde::{Deserialize, Serialize};

use crate::layout::{Layout, Pane};

/// A point in combined-surface coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
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

/// A point in one pane's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanePoint {
    /// Distance from the pane's left edge.
    pub x: f64,
    /// Distance from the surface top (panes share a vertical origin).
    pub y: f64,
    /// Which pane the point belongs to.
    pub pane: Pane,
}

impl PanePoint {
    #[must_use]
    pub fn new(x: f64, y: f64, pane: Pane) -> Self {
        Self { x, y, pane }
    }
}

/// Result of mapping a surface position onto the panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneHit {
    /// The position lies inside a pane.
    Pane(PanePoint),
    /// The position lies in the dead zone between panes.
    Gap,
}

impl PaneHit {
    /// The pane-local point, if the hit landed in a pane.
    #[must_use]
    pub fn point(self) -> Option<PanePoint> {
        match self {
            Self::Pane(p) => Some(p),
            Self::Gap => None,
        }
    }
}

/// Map a surface position to pane-local coordinates.
///
/// Positions left of the gap band belong to the left pane; positions from
/// the band's end onward belong to the right pane, so the right pane's own
/// origin maps to local x 0. The half-open band itself (see
/// [`Layout::gap_band`]) is [`PaneHit::Gap`]. The resulting point is clamped
/// into the pane's `[0, pane_width] x [0, container_height]` box.
///
/// An empty layout has no panes, and a non-finite position lands nowhere:
/// both are [`PaneHit::Gap`].
#[must_use]
pub fn to_pane_local(surface: Point, layout: &Layout) -> PaneHit {
    if layout.is_empty() || !surface.x.is_finite() || !surface.y.is_finite() {
        return PaneHit::Gap;
    }
    let (gap_start, gap_end) = layout.gap_band();
    let (pane, local_x) = if surface.x < gap_start {
        (Pane::Left, surface.x)
    } else if surface.x >= gap_end {
        (Pane::Right, surface.x - gap_end)
    } else {
        return PaneHit::Gap;
    };

    PaneHit::Pane(PanePoint {
        x: local_x.clamp(0.0, layout.pane_width),
        y: surface.y.clamp(0.0, layout.container_height),
        pane,
    })
}

/// Map a pane-local point back to surface coordinates for rendering.
#[must_use]
pub fn to_surface(point: PanePoint, layout: &Layout) -> Point {
    Point { x: point.x + layout.pane_offset(point.pane), y: point.y }
}
