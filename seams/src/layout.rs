//! Pane geometry for the combined pointer surface.
//!
//! The surface is split into two equal-width panes with a fixed gap between
//! them. Layout is a pure function of the current surface measurements: it is
//! recomputed on every resize and every diagram swap, never cached across
//! either.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::consts::PANE_GAP;

/// One of the two panes on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    /// Left pane, index 0.
    Left,
    /// Right pane, index 1.
    Right,
}

impl Pane {
    /// Both panes in index order.
    pub const ALL: [Pane; 2] = [Pane::Left, Pane::Right];

    /// Numeric index: 0 for the left pane, 1 for the right.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// Pane for a numeric index, or `None` outside `0..=1`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }

    /// The opposite pane.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Measured surface geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Width of the combined surface in pixels.
    pub container_width: f64,
    /// Height of the combined surface in pixels.
    pub container_height: f64,
    /// Gap between the panes. Always [`PANE_GAP`].
    pub gap: f64,
    /// Width of each pane: `(container_width - gap) / 2`, never negative.
    pub pane_width: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self::compute(0.0, 0.0)
    }
}

impl Layout {
    /// Compute the layout for a surface of the given size.
    ///
    /// Negative or non-finite measurements are treated as zero, and a surface
    /// narrower than the gap yields zero-width panes.
    #[must_use]
    pub fn compute(width: f64, height: f64) -> Self {
        let container_width = sanitize_extent(width);
        let container_height = sanitize_extent(height);
        let pane_width = ((container_width - PANE_GAP) / 2.0).max(0.0);
        Self { container_width, container_height, gap: PANE_GAP, pane_width }
    }

    /// Horizontal offset of a pane's origin within the surface.
    #[must_use]
    pub fn pane_offset(&self, pane: Pane) -> f64 {
        match pane {
            Pane::Left => 0.0,
            Pane::Right => self.pane_width + self.gap,
        }
    }

    /// The surface x range `[start, end)` covered by the gap band.
    #[must_use]
    pub fn gap_band(&self) -> (f64, f64) {
        (self.pane_width, self.pane_width + self.gap)
    }

    /// Whether the surface has any area to interact with.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pane_width <= 0.0 || self.container_height <= 0.0
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
