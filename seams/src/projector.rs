//! 3-D preview geometry.
//!
//! The two diagrams are placed on parallel planes one unit either side of the
//! origin (left pane at z = -1, right pane at z = +1), and each seam becomes a
//! line between its endpoints on those planes. Surface coordinates are
//! centered and divided by half the larger surface extent, with the vertical
//! axis flipped so "up" is positive.
//!
//! Pure geometry: no camera, no render loop. The host draws [`Preview3`]
//! however it likes.

#[cfg(test)]
#[path = "projector_test.rs"]
mod projector_test;

use serde::Serialize;

use crate::consts::{LEFT_PLANE_Z, PREVIEW_AXES_LENGTH, PREVIEW_CAMERA_DISTANCE, RIGHT_PLANE_Z};
use crate::layout::{Layout, Pane};
use crate::lines::{Category, Segment, SegmentId};
use crate::mapper::{self, PanePoint};

/// A point in preview scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One seam in the preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line3 {
    pub segment: SegmentId,
    pub start: Vec3,
    pub end: Vec3,
    pub category: Category,
    pub color: &'static str,
    pub dashed: bool,
}

/// The full preview handed to a 3-D renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview3 {
    pub lines: Vec<Line3>,
    /// Surface pixels per scene unit.
    pub scale: f64,
    /// Suggested camera distance from the origin along +z.
    pub camera_distance: f64,
    /// Length of the axis guides at the origin.
    pub axes_length: f64,
}

/// Z coordinate of a pane's plane.
#[must_use]
pub fn plane_z(pane: Pane) -> f64 {
    match pane {
        Pane::Left => LEFT_PLANE_Z,
        Pane::Right => RIGHT_PLANE_Z,
    }
}

/// Surface pixels per scene unit: half the larger surface extent.
#[must_use]
pub fn scale_for(layout: &Layout) -> f64 {
    layout.container_width.max(layout.container_height) / 2.0
}

/// Project one pane-local point into the preview.
///
/// `scale` must be positive; see [`scale_for`].
#[must_use]
pub fn project_point(point: PanePoint, layout: &Layout, scale: f64) -> Vec3 {
    let surface = mapper::to_surface(point, layout);
    Vec3 {
        x: (surface.x - layout.container_width / 2.0) / scale,
        y: (layout.container_height / 2.0 - surface.y) / scale,
        z: plane_z(point.pane),
    }
}

/// Project every segment, in order.
///
/// An empty surface has no scale reference and projects to no lines.
#[must_use]
pub fn project(segments: &[Segment], layout: &Layout) -> Preview3 {
    let scale = scale_for(layout);
    let lines = if scale > 0.0 {
        segments
            .iter()
            .map(|s| Line3 {
                segment: s.id(),
                start: project_point(s.start(), layout, scale),
                end: project_point(s.end(), layout, scale),
                category: s.category(),
                color: s.category().color(),
                dashed: s.category().dashed(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Preview3 { lines, scale, camera_distance: PREVIEW_CAMERA_DISTANCE, axes_length: PREVIEW_AXES_LENGTH }
}
