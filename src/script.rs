//! Pointer-event scripts.
//!
//! A script is JSON lines, one tagged event per line, replayed against an
//! [`EngineCore`] in order. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"type":"resize","width":840,"height":600}
//! {"type":"down","x":100,"y":50}
//! {"type":"down","x":440,"y":60,"button":"secondary"}
//! ```

use seams::engine::{Action, EngineCore};
use seams::input::{Button, Key};
use seams::mapper::Point;
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
#[error("event script line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}

/// One scripted host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Down {
        x: f64,
        y: f64,
        #[serde(default = "primary")]
        button: Button,
    },
    Move {
        x: f64,
        y: f64,
    },
    Leave,
    Key {
        key: String,
    },
    Undo,
    Reset,
    ConfirmReset,
    CancelReset,
    Resize {
        width: f64,
        height: f64,
    },
    TogglePreview,
}

fn primary() -> Button {
    Button::Primary
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns the first malformed line, numbered from 1.
pub fn parse(text: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| {
            let l = l.trim();
            !l.is_empty() && !l.starts_with('#')
        })
        .map(|(i, l)| serde_json::from_str(l).map_err(|source| ScriptError { line: i + 1, source }))
        .collect()
}

/// Feed one event to the engine.
pub fn apply(core: &mut EngineCore, event: &ScriptEvent) -> Vec<Action> {
    match event {
        ScriptEvent::Down { x, y, button } => core.on_pointer_down(Point::new(*x, *y), *button),
        ScriptEvent::Move { x, y } => core.on_pointer_move(Point::new(*x, *y)),
        ScriptEvent::Leave => core.on_pointer_leave(),
        ScriptEvent::Key { key } => core.on_key_down(&Key(key.clone())),
        ScriptEvent::Undo => core.undo(),
        ScriptEvent::Reset => core.request_reset(),
        ScriptEvent::ConfirmReset => core.confirm_reset(),
        ScriptEvent::CancelReset => {
            core.cancel_reset();
            Vec::new()
        }
        ScriptEvent::Resize { width, height } => core.set_viewport(*width, *height),
        ScriptEvent::TogglePreview => {
            let open = core.toggle_preview();
            debug!(open, "preview toggled");
            vec![Action::RenderNeeded]
        }
    }
}

/// Replay every event in order, collecting the actions they produced.
pub fn replay(core: &mut EngineCore, events: &[ScriptEvent]) -> Vec<Action> {
    let actions: Vec<Action> = events.iter().flat_map(|event| apply(core, event)).collect();
    info!(events = events.len(), actions = actions.len(), lines = core.lines.len(), "script replayed");
    actions
}

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;
