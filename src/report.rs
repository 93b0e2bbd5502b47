//! Human-readable listing and JSON outputs.

use std::path::{Path, PathBuf};

use seams::lines::{Category, ListingEntry};
use serde::Serialize;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the seam listing, one line per seam with its category swatch.
#[must_use]
pub fn format_listing(entries: &[ListingEntry]) -> String {
    if entries.is_empty() {
        return "No lines.\n".to_owned();
    }
    let mut lines: Vec<String> = entries
        .iter()
        .map(|entry| format!("[{} {}] {}", category_name(entry.category), entry.color, entry.label))
        .collect();
    lines.push(String::new());
    lines.join("\n")
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Front => "front",
        Category::Back => "back ",
    }
}

/// Serialize `value` as pretty JSON and write it to `path`.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if encoding fails and [`ReportError::Write`]
/// on I/O failure.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ReportError> {
    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');
    tokio::fs::write(path, body)
        .await
        .map_err(|source| ReportError::Write { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), "wrote json");
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
