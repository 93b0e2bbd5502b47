//! Dual-pane seam-line engine for the sewing pattern viewer.
//!
//! Two flat pattern diagrams are shown side by side on a single pointer
//! surface. The user clicks a point on one piece and then a point on the other
//! to mark where they are sewn together. This crate owns the logic behind
//! that interaction: splitting the surface into two panes around a fixed gap,
//! turning pointer positions into pane-local points, pairing clicks into
//! validated seam segments, and projecting those segments into a simple 3-D
//! preview. The host (a browser shell or the `seamview` driver) is responsible
//! only for reading files, wiring input events, and drawing what the engine
//! describes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`diagram`] | SVG normalization and allow-list sanitizing |
//! | [`layout`] | Pane widths and offsets for the combined surface |
//! | [`mapper`] | Surface ↔ pane-local coordinate conversions |
//! | [`input`] | Input event types and the point-pairing state machine |
//! | [`lines`] | Seam segments and the ordered line store |
//! | [`render`] | 2-D display list for the host renderer |
//! | [`projector`] | 3-D preview geometry |
//! | [`upload`] | File-count validation and superseding load tickets |
//! | [`consts`] | Shared constants (gap, colors, preview camera distance) |

pub mod consts;
pub mod diagram;
pub mod engine;
pub mod input;
pub mod layout;
pub mod lines;
pub mod mapper;
pub mod projector;
pub mod render;
pub mod upload;
