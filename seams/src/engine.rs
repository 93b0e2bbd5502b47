use serde::Serialize;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

use crate::diagram::Diagram;
use crate::input::{Button, Key, PairingOutcome, PairingState};
use crate::layout::{Layout, Pane};
use crate::lines::{LineStore, ListingEntry, Segment, SegmentId};
use crate::mapper::{PanePoint, Point};
use crate::projector::{self, Preview3};
use crate::render::{self, Scene};
use crate::upload::{self, SourceFile, UploadError, UploadGate, UploadTicket};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// A seam was completed and appended to the store.
    SegmentAdded(Segment),
    /// The most recent seam was undone.
    SegmentRemoved { id: SegmentId },
    /// Every seam was cleared after a confirmed reset.
    LinesCleared { count: usize },
    /// The first point of a pairing was captured.
    PairingStarted { anchor: PanePoint },
    /// An in-progress pairing was abandoned.
    PairingCancelled,
    /// A second click on the anchor's own pane was refused.
    PairingRejected,
    /// A reset is waiting for confirmation.
    ResetArmed { count: usize },
    /// A new diagram pair replaced the previous one. `false` marks a pane
    /// left empty because its file had no drawable root.
    DiagramsLoaded { left: bool, right: bool },
    /// Pane geometry changed.
    LayoutChanged(Layout),
    /// Something visible changed; redraw.
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the browser.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub diagrams: [Option<Diagram>; 2],
    pub layout: Layout,
    pub pairing: PairingState,
    pub lines: LineStore,
    pub uploads: UploadGate,
    pub reset_armed: bool,
    pub preview_open: bool,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Uploads ---

    /// Accept an upload of `file_count` files. Call before reading them.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::WrongFileCount`] unless exactly two files were
    /// selected; no engine state changes in that case.
    pub fn begin_upload(&mut self, file_count: usize) -> Result<UploadTicket, UploadError> {
        let ticket = self.uploads.begin(file_count)?;
        debug!(generation = ticket.generation(), "upload accepted");
        Ok(ticket)
    }

    /// Install both files of an accepted upload.
    ///
    /// Completions for a ticket that has since been superseded, or that was
    /// already completed, are ignored.
    /// A new pair replaces the old one wholesale: previous seams and any
    /// pending pairing refer to the old pieces and are dropped with them.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::WrongFileCount`] unless exactly two files are given.
    pub fn complete_upload(&mut self, ticket: UploadTicket, files: Vec<SourceFile>) -> Result<Vec<Action>, UploadError> {
        if !self.uploads.is_current(ticket) {
            debug!(generation = ticket.generation(), "ignoring stale upload");
            return Ok(Vec::new());
        }

        let diagrams = upload::normalize_pair(files)?;
        self.uploads.settle(ticket);
        let (left, right) = (diagrams[0].is_some(), diagrams[1].is_some());
        info!(left, right, "diagrams loaded");

        self.diagrams = diagrams;
        self.pairing = PairingState::Idle;
        self.lines.clear();
        self.reset_armed = false;
        self.layout = Layout::compute(self.layout.container_width, self.layout.container_height);

        Ok(vec![
            Action::DiagramsLoaded { left, right },
            Action::LayoutChanged(self.layout),
            Action::RenderNeeded,
        ])
    }

    // --- Viewport ---

    /// Update the measured surface size.
    ///
    /// A pending pairing is cancelled: its cursor was measured against the
    /// old geometry.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        let layout = Layout::compute(width, height);
        if layout == self.layout {
            return Vec::new();
        }
        self.layout = layout;
        debug!(width = layout.container_width, height = layout.container_height, pane_width = layout.pane_width, "layout changed");

        let mut actions = vec![Action::LayoutChanged(layout)];
        if self.pairing.cancel() == PairingOutcome::Cancelled {
            actions.push(Action::PairingCancelled);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Input events ---

    /// A button was pressed on the surface at `screen_pt` (surface-relative CSS pixels).
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        let outcome = self.pairing.click(screen_pt, &self.layout, button);
        self.apply_outcome(outcome)
    }

    /// The pointer moved over the surface.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.pairing.pointer_move(screen_pt) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// The pointer left the surface.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let outcome = self.pairing.pointer_leave();
        self.apply_outcome(outcome)
    }

    /// A key was pressed. `Escape` abandons a pairing and disarms a pending reset.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_escape() {
            return Vec::new();
        }
        self.reset_armed = false;
        let outcome = self.pairing.cancel();
        self.apply_outcome(outcome)
    }

    /// Secondary clicks pick the back category, so the browser's context
    /// menu must never open over the surface.
    #[must_use]
    pub fn suppresses_context_menu(&self) -> bool {
        true
    }

    fn apply_outcome(&mut self, outcome: PairingOutcome) -> Vec<Action> {
        match outcome {
            PairingOutcome::Ignored => Vec::new(),
            PairingOutcome::Started(anchor) => {
                debug!(pane = anchor.pane.index(), x = anchor.x, y = anchor.y, "pairing started");
                vec![Action::PairingStarted { anchor }, Action::RenderNeeded]
            }
            PairingOutcome::Cancelled => {
                debug!("pairing cancelled");
                vec![Action::PairingCancelled, Action::RenderNeeded]
            }
            PairingOutcome::Rejected => {
                debug!("same-pane pairing rejected");
                vec![Action::PairingRejected, Action::RenderNeeded]
            }
            PairingOutcome::Completed(segment) => {
                debug!(id = %segment.id(), category = ?segment.category(), "segment added");
                self.reset_armed = false;
                self.lines.append(segment.clone());
                vec![Action::SegmentAdded(segment), Action::RenderNeeded]
            }
        }
    }

    // --- Line store ---

    /// Remove the most recent seam. No-op on an empty store.
    pub fn undo(&mut self) -> Vec<Action> {
        self.reset_armed = false;
        match self.lines.remove_last() {
            Some(segment) => {
                debug!(id = %segment.id(), remaining = self.lines.len(), "segment undone");
                vec![Action::SegmentRemoved { id: segment.id() }, Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    /// First step of a reset: arm it and ask the host to confirm.
    pub fn request_reset(&mut self) -> Vec<Action> {
        self.reset_armed = true;
        vec![Action::ResetArmed { count: self.lines.len() }]
    }

    /// Second step of a reset. Clears every seam only if a reset is armed.
    pub fn confirm_reset(&mut self) -> Vec<Action> {
        if !self.reset_armed {
            return Vec::new();
        }
        self.reset_armed = false;
        let mut actions = Vec::new();
        if self.pairing.cancel() == PairingOutcome::Cancelled {
            actions.push(Action::PairingCancelled);
        }
        let count = self.lines.clear();
        info!(count, "lines cleared");
        actions.push(Action::LinesCleared { count });
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Abandon an armed reset.
    pub fn cancel_reset(&mut self) {
        self.reset_armed = false;
    }

    // --- Preview ---

    /// Open or close the 3-D preview overlay. Returns the new state. Seams are untouched.
    pub fn toggle_preview(&mut self) -> bool {
        self.preview_open = !self.preview_open;
        self.preview_open
    }

    // --- Queries ---

    /// The 2-D display list for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        render::scene(&self.layout, &self.diagrams, &self.lines, &self.pairing)
    }

    /// 3-D geometry for every seam.
    #[must_use]
    pub fn projection(&self) -> Preview3 {
        projector::project(self.lines.list(), &self.layout)
    }

    /// 3-D geometry, only while the preview overlay is open.
    #[must_use]
    pub fn preview(&self) -> Option<Preview3> {
        self.preview_open.then(|| self.projection())
    }

    /// Numbered seam listing.
    #[must_use]
    pub fn listing(&self) -> Vec<ListingEntry> {
        self.lines.listing()
    }

    /// The diagram shown in `pane`, if any.
    #[must_use]
    pub fn diagram(&self, pane: Pane) -> Option<&Diagram> {
        self.diagrams[pane.index()].as_ref()
    }
}

// =============================================================
// WASM boundary
// =============================================================

/// The engine as seen from JavaScript.
///
/// Every event handler returns its actions as a JSON array. Mouse buttons use
/// DOM `MouseEvent.button` codes.
#[wasm_bindgen]
#[derive(Default)]
pub struct Engine {
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Uploads ---

    /// Accept a selection of `file_count` files; returns the ticket generation.
    ///
    /// # Errors
    ///
    /// Rejects any count other than two with a user-facing message.
    pub fn begin_upload(&mut self, file_count: u32) -> Result<u32, JsValue> {
        let count = usize::try_from(file_count).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.core.begin_upload(count).map(UploadTicket::generation).map_err(js_error)
    }

    /// Hand over both file texts once they have been read.
    ///
    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn complete_upload(
        &mut self,
        generation: u32,
        left_name: String,
        left_text: String,
        right_name: String,
        right_text: String,
    ) -> Result<String, JsValue> {
        let files = vec![SourceFile::new(left_name, left_text), SourceFile::new(right_name, right_text)];
        let actions = self
            .core
            .complete_upload(UploadTicket::from_generation(generation), files)
            .map_err(js_error)?;
        to_json(&actions)
    }

    // --- Viewport ---

    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<String, JsValue> {
        to_json(&self.core.set_viewport(width, height))
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn on_pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<String, JsValue> {
        let actions = match Button::from_dom(button) {
            Some(button) => self.core.on_pointer_down(Point::new(x, y), button),
            None => Vec::new(),
        };
        to_json(&actions)
    }

    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<String, JsValue> {
        to_json(&self.core.on_pointer_move(Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn on_pointer_leave(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.on_pointer_leave())
    }

    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn on_key_down(&mut self, key: String) -> Result<String, JsValue> {
        to_json(&self.core.on_key_down(&Key(key)))
    }

    #[must_use]
    pub fn suppresses_context_menu(&self) -> bool {
        self.core.suppresses_context_menu()
    }

    // --- Line store ---

    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn undo(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.undo())
    }

    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn request_reset(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.request_reset())
    }

    /// # Errors
    ///
    /// Returns an error if the actions cannot be serialized.
    pub fn confirm_reset(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.confirm_reset())
    }

    pub fn cancel_reset(&mut self) {
        self.core.cancel_reset();
    }

    pub fn toggle_preview(&mut self) -> bool {
        self.core.toggle_preview()
    }

    // --- Queries ---

    /// # Errors
    ///
    /// Returns an error if the scene cannot be serialized.
    pub fn scene(&self) -> Result<String, JsValue> {
        to_json(&self.core.scene())
    }

    /// The 3-D preview, or `null` while the overlay is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the preview cannot be serialized.
    pub fn preview(&self) -> Result<String, JsValue> {
        to_json(&self.core.preview())
    }

    /// # Errors
    ///
    /// Returns an error if the listing cannot be serialized.
    pub fn listing(&self) -> Result<String, JsValue> {
        to_json(&self.core.listing())
    }
}

impl Engine {
    /// The browser-independent core.
    #[must_use]
    pub fn core(&self) -> &EngineCore {
        &self.core
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_error(e: UploadError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
