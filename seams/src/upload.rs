//! Two-file upload gate.
//!
//! Loading is the one asynchronous boundary in the system: the host reads two
//! files concurrently and hands them over only once both have resolved. This
//! module validates the file count up front and issues an [`UploadTicket`]
//! per accepted upload. Only the most recently issued ticket may complete, so
//! a slow earlier load that resolves after a newer one is dropped instead of
//! overwriting it.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::consts::PANE_COUNT;
use crate::diagram::{self, Diagram};
use crate::layout::Pane;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("please select exactly 2 SVG files (got {0})")]
    WrongFileCount(usize),
    #[error("{0} is not valid UTF-8 text")]
    NotUtf8(String),
}

/// A fully read input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Display name (usually the file name).
    pub name: String,
    /// Complete file contents.
    pub text: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self { name: name.into(), text: text.into() }
    }

    /// Decode raw file bytes as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::NotUtf8`] if the bytes are not valid UTF-8.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, UploadError> {
        let name = name.into();
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { name, text }),
            Err(_) => Err(UploadError::NotUtf8(name)),
        }
    }
}

/// Proof that an upload was accepted, carried to its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u32,
}

impl UploadTicket {
    /// Rebuild a ticket from a generation number handed across the wasm boundary.
    #[must_use]
    pub fn from_generation(generation: u32) -> Self {
        Self { generation }
    }

    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// Issues tickets and recognizes the current one.
///
/// A ticket is honored once: after [`UploadGate::settle`] it is no longer
/// current, so a repeated completion cannot reinstall the pair.
#[derive(Debug, Clone, Default)]
pub struct UploadGate {
    issued: u32,
    settled: u32,
}

impl UploadGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an upload of `file_count` files, superseding any in flight.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::WrongFileCount`] unless exactly two files were
    /// selected. A rejected upload does not supersede anything.
    pub fn begin(&mut self, file_count: usize) -> Result<UploadTicket, UploadError> {
        check_count(file_count)?;
        self.issued = self.issued.wrapping_add(1);
        Ok(UploadTicket { generation: self.issued })
    }

    /// Whether `ticket` belongs to the newest accepted upload and has not
    /// been settled yet.
    #[must_use]
    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        self.issued != 0 && ticket.generation == self.issued && self.settled != self.issued
    }

    /// Mark `ticket` as completed. No-op unless it is current.
    pub fn settle(&mut self, ticket: UploadTicket) {
        if self.is_current(ticket) {
            self.settled = ticket.generation;
        }
    }
}

/// Reject any selection that is not exactly two files.
///
/// # Errors
///
/// Returns [`UploadError::WrongFileCount`] for any count other than two.
pub fn check_count(file_count: usize) -> Result<(), UploadError> {
    if file_count == PANE_COUNT { Ok(()) } else { Err(UploadError::WrongFileCount(file_count)) }
}

/// Normalize a file pair in selection order: the first file goes to the left
/// pane, the second to the right.
///
/// # Errors
///
/// Returns [`UploadError::WrongFileCount`] unless exactly two files are given.
pub fn normalize_pair(files: Vec<SourceFile>) -> Result<[Option<Diagram>; 2], UploadError> {
    let count = files.len();
    let Ok([left, right]) = <[SourceFile; 2]>::try_from(files) else {
        return Err(UploadError::WrongFileCount(count));
    };
    Ok([
        diagram::normalize(&left.text, &left.name, Pane::Left),
        diagram::normalize(&right.text, &right.name, Pane::Right),
    ])
}
