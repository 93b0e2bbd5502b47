//! Rendering: builds the 2-D display list for the host renderer.
//!
//! This module reads engine state and produces plain primitives: one view per
//! pane, committed seams in two passes (back beneath front), and the transient
//! anchor marker and preview line while a pairing is in progress. Every
//! on-screen position is derived here from pane-local storage through
//! [`mapper::to_surface`]; nothing is stored pre-offset.
//!
//! It does not mutate any application state.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::{DASH_PATTERN_PX, LINE_WIDTH_PX, MARKER_RADIUS_PX, PREVIEW_COLOR};
use crate::diagram::Diagram;
use crate::input::PairingState;
use crate::layout::{Layout, Pane};
use crate::lines::{Category, LineStore, Segment, SegmentId};
use crate::mapper::{self, Point};

/// A straight stroke in surface coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line2 {
    pub from: Point,
    pub to: Point,
    pub color: &'static str,
    pub width: f64,
    /// Dash pattern, or `None` for a solid stroke.
    pub dash: Option<[f64; 2]>,
    /// The seam this stroke draws; `None` for the preview line.
    pub segment: Option<SegmentId>,
}

/// The circle drawn at the anchor of an in-progress pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub center: Point,
    pub radius: f64,
    pub color: &'static str,
}

/// Placement of one diagram on the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaneView<'a> {
    pub pane: Pane,
    /// Left edge of the pane in surface coordinates.
    pub offset_x: f64,
    pub width: f64,
    pub height: f64,
    /// Sanitized SVG for the pane, or `None` to leave it empty.
    pub content: Option<&'a str>,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene<'a> {
    pub layout: Layout,
    pub panes: [PaneView<'a>; 2],
    /// First line pass: back seams.
    pub back: Vec<Line2>,
    /// Second line pass: front seams, drawn over `back`.
    pub front: Vec<Line2>,
    pub marker: Option<Marker>,
    pub preview: Option<Line2>,
}

impl Scene<'_> {
    /// All strokes in draw order (bottom first).
    pub fn strokes(&self) -> impl Iterator<Item = &Line2> {
        self.back.iter().chain(self.front.iter()).chain(self.preview.iter())
    }
}

/// Build the display list for the current state.
#[must_use]
pub fn scene<'a>(
    layout: &Layout,
    diagrams: &'a [Option<Diagram>; 2],
    lines: &LineStore,
    pairing: &PairingState,
) -> Scene<'a> {
    let panes = Pane::ALL.map(|pane| PaneView {
        pane,
        offset_x: layout.pane_offset(pane),
        width: layout.pane_width,
        height: layout.container_height,
        content: diagrams[pane.index()].as_ref().map(Diagram::content),
    });

    let pass = |category: Category| -> Vec<Line2> {
        lines.by_category(category).map(|s| seam_stroke(s, layout)).collect()
    };

    let (marker, preview) = match pairing.anchor() {
        Some(anchor) => {
            let center = mapper::to_surface(anchor, layout);
            let marker = Marker { center, radius: MARKER_RADIUS_PX, color: PREVIEW_COLOR };
            let preview = pairing.cursor().map(|cursor| Line2 {
                from: center,
                to: cursor,
                color: PREVIEW_COLOR,
                width: LINE_WIDTH_PX,
                dash: Some(DASH_PATTERN_PX),
                segment: None,
            });
            (Some(marker), preview)
        }
        None => (None, None),
    };

    Scene { layout: *layout, panes, back: pass(Category::Back), front: pass(Category::Front), marker, preview }
}

fn seam_stroke(segment: &Segment, layout: &Layout) -> Line2 {
    let category = segment.category();
    Line2 {
        from: mapper::to_surface(segment.start(), layout),
        to: mapper::to_surface(segment.end(), layout),
        color: category.color(),
        width: LINE_WIDTH_PX,
        dash: category.dashed().then_some(DASH_PATTERN_PX),
        segment: Some(segment.id()),
    }
}
