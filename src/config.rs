//! Command-line configuration.
//!
//! Surface size can also come from the environment so a shell profile can
//! pin it once: `SEAMVIEW_WIDTH`, `SEAMVIEW_HEIGHT`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use seams::layout::Pane;

pub const DEFAULT_WIDTH: f64 = 840.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("surface {axis} must be a positive number (got {value})")]
    InvalidSurface { axis: &'static str, value: f64 },
    #[error("pane must be 0 or 1 (got {0})")]
    InvalidPane(usize),
}

#[derive(Parser, Debug)]
#[command(name = "seamview", about = "Mark seam lines between two sewing pattern pieces")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load two pattern files and replay a pointer-event script against them.
    Replay(ReplayArgs),
    /// Print the sanitized, size-agnostic markup for one pattern file.
    Normalize(NormalizeArgs),
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Pattern files: left piece first, right piece second.
    pub files: Vec<PathBuf>,

    #[arg(long, env = "SEAMVIEW_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    #[arg(long, env = "SEAMVIEW_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    #[arg(long, help = "Pointer-event script (JSON lines)")]
    pub events: Option<PathBuf>,

    #[arg(long, help = "Write the 2-D scene as JSON to this path")]
    pub scene: Option<PathBuf>,

    #[arg(long, help = "Write the 3-D preview as JSON to this path")]
    pub preview: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    pub file: PathBuf,

    #[arg(long, default_value_t = 0, help = "Pane index used for the root marker class")]
    pub pane: usize,
}

/// Validated settings for a replay run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    pub files: Vec<PathBuf>,
    pub width: f64,
    pub height: f64,
    pub events: Option<PathBuf>,
    pub scene_out: Option<PathBuf>,
    pub preview_out: Option<PathBuf>,
}

impl ReplayConfig {
    /// Check surface dimensions. The file count is left to the upload gate so
    /// the rejection message is the same one every host shows.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSurface`] for non-positive or non-finite sizes.
    pub fn from_args(args: ReplayArgs) -> Result<Self, ConfigError> {
        let width = positive("width", args.width)?;
        let height = positive("height", args.height)?;
        Ok(Self {
            files: args.files,
            width,
            height,
            events: args.events,
            scene_out: args.scene,
            preview_out: args.preview,
        })
    }
}

impl NormalizeArgs {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPane`] for an index other than 0 or 1.
    pub fn pane(&self) -> Result<Pane, ConfigError> {
        Pane::from_index(self.pane).ok_or(ConfigError::InvalidPane(self.pane))
    }
}

fn positive(axis: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 { Ok(value) } else { Err(ConfigError::InvalidSurface { axis, value }) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
