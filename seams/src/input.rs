//! Input model: mouse buttons, keys, and the point-pairing state machine.
//!
//! A seam is marked with two clicks: the first captures an anchor on one
//! pane, the second (on the other pane) completes the segment. Which button
//! made the *second* click decides the seam's category. `PairingState` is the
//! single tagged variant holding everything transient about a pairing, so an
//! anchor-less cursor or a cursor-less preview cannot be represented.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::lines::{Category, Segment};
use crate::mapper::{self, PaneHit, PanePoint, Point};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }

    /// Seam category created by this button, or `None` for buttons that do
    /// not take part in pairing.
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Self::Primary => Some(Category::Front),
            Self::Secondary => Some(Category::Back),
            Self::Middle => None,
        }
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// What a pairing input did.
#[derive(Debug, Clone, PartialEq)]
pub enum PairingOutcome {
    /// Nothing changed.
    Ignored,
    /// An anchor was captured.
    Started(PanePoint),
    /// An in-progress pairing was abandoned.
    Cancelled,
    /// The second click landed on the anchor's own pane; nothing was created
    /// and the pairing was reset.
    Rejected,
    /// A segment was completed.
    Completed(Segment),
}

/// Transient pairing state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PairingState {
    /// No anchor; waiting for the first click.
    #[default]
    Idle,
    /// One point captured, waiting for a click on the other pane.
    Anchored {
        /// The first captured point, pane-local.
        anchor: PanePoint,
        /// Last pointer position in surface coordinates, for the preview line.
        cursor: Option<Point>,
    },
}

impl PairingState {
    /// The captured anchor, if a pairing is in progress.
    #[must_use]
    pub fn anchor(&self) -> Option<PanePoint> {
        match *self {
            Self::Idle => None,
            Self::Anchored { anchor, .. } => Some(anchor),
        }
    }

    /// The live cursor position, if a pairing is in progress and the pointer
    /// has been seen since.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        match *self {
            Self::Idle => None,
            Self::Anchored { cursor, .. } => cursor,
        }
    }

    #[must_use]
    pub fn is_anchored(&self) -> bool {
        matches!(self, Self::Anchored { .. })
    }

    /// Feed a click at a surface position.
    pub fn click(&mut self, surface: Point, layout: &Layout, button: Button) -> PairingOutcome {
        let Some(category) = button.category() else {
            return PairingOutcome::Ignored;
        };

        let hit = mapper::to_pane_local(surface, layout);
        match (*self, hit) {
            (Self::Idle, PaneHit::Gap) => PairingOutcome::Ignored,
            (Self::Idle, PaneHit::Pane(point)) => {
                *self = Self::Anchored { anchor: point, cursor: Some(surface) };
                PairingOutcome::Started(point)
            }
            (Self::Anchored { .. }, PaneHit::Gap) => self.cancel(),
            (Self::Anchored { anchor, .. }, PaneHit::Pane(point)) => {
                *self = Self::Idle;
                match Segment::new(anchor, point, category) {
                    Some(segment) => PairingOutcome::Completed(segment),
                    None => PairingOutcome::Rejected,
                }
            }
        }
    }

    /// Track the pointer. Returns `true` when the preview needs redrawing.
    pub fn pointer_move(&mut self, surface: Point) -> bool {
        match self {
            Self::Idle => false,
            Self::Anchored { cursor, .. } => {
                *cursor = Some(surface);
                true
            }
        }
    }

    /// The pointer left the interactive surface.
    pub fn pointer_leave(&mut self) -> PairingOutcome {
        self.cancel()
    }

    /// Abandon any in-progress pairing.
    pub fn cancel(&mut self) -> PairingOutcome {
        match self {
            Self::Idle => PairingOutcome::Ignored,
            Self::Anchored { .. } => {
                *self = Self::Idle;
                PairingOutcome::Cancelled
            }
        }
    }
}
