//! Seam segments and the ordered line store.
//!
//! A [`Segment`] joins a point on one pane to a point on the other; segments
//! whose endpoints share a pane cannot be constructed. The [`LineStore`] keeps
//! completed segments in insertion order. Order matters for numbering and
//! undo; rendering may regroup by [`Category`].

#[cfg(test)]
#[path = "lines_test.rs"]
mod lines_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{BACK_COLOR, FRONT_COLOR};
use crate::mapper::PanePoint;

/// Unique identifier for a segment.
pub type SegmentId = Uuid;

/// Which side of the garment a seam faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Created with the primary button. Drawn red and solid, above back seams.
    Front,
    /// Created with the secondary button. Drawn blue and dashed.
    Back,
}

impl Category {
    /// Stroke color for this category.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Front => FRONT_COLOR,
            Self::Back => BACK_COLOR,
        }
    }

    /// Whether lines of this category are drawn dashed.
    #[must_use]
    pub fn dashed(self) -> bool {
        matches!(self, Self::Back)
    }
}

/// A validated cross-pane seam line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    id: SegmentId,
    start: PanePoint,
    end: PanePoint,
    category: Category,
}

impl Segment {
    /// Build a segment, or `None` when both endpoints are on the same pane.
    #[must_use]
    pub fn new(start: PanePoint, end: PanePoint, category: Category) -> Option<Self> {
        if start.pane == end.pane {
            return None;
        }
        Some(Self { id: Uuid::new_v4(), start, end, category })
    }

    #[must_use]
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// The first clicked endpoint.
    #[must_use]
    pub fn start(&self) -> PanePoint {
        self.start
    }

    /// The second clicked endpoint.
    #[must_use]
    pub fn end(&self) -> PanePoint {
        self.end
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Listing label, numbered from 1: `Line 3: (10.0, 20.5) -> (0.0, 7.2)`.
    #[must_use]
    pub fn label(&self, number: usize) -> String {
        format!(
            "Line {number}: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            self.start.x, self.start.y, self.end.x, self.end.y
        )
    }
}

/// One row of the user-facing line listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingEntry {
    /// 1-based position in insertion order.
    pub number: usize,
    /// Formatted label text.
    pub label: String,
    pub category: Category,
    /// Swatch color.
    pub color: &'static str,
}

/// Ordered collection of completed segments.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    segments: Vec<Segment>,
}

impl LineStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { segments: Vec::new() }
    }

    /// Append a segment at the end.
    pub fn append(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Remove and return the most recently appended segment. No-op when empty.
    pub fn remove_last(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Remove every segment, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.segments.len();
        self.segments.clear();
        n
    }

    /// All segments in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment at a 0-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Segments of one category, in insertion order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.category == category)
    }

    /// Numbered listing rows for display.
    #[must_use]
    pub fn listing(&self) -> Vec<ListingEntry> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, s)| ListingEntry {
                number: i + 1,
                label: s.label(i + 1),
                category: s.category,
                color: s.category.color(),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
