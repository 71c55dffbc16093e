//! Scripted pointer sessions.
//!
//! A replay script is a JSON document listing host events in order. Each step
//! is fed to a [`CrosshairController`]; every committed change is collected,
//! and the final snapshot is turned into program text.
//!
//! ```json
//! {
//!   "container_width": 980,
//!   "steps": [
//!     { "action": "down", "x": 480, "y": 240 },
//!     { "action": "move", "x": 300, "y": 100, "pressed": true },
//!     { "action": "up" },
//!     { "action": "toggle", "line": 1 }
//!   ]
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use ripperkit_core::{ChangeEvent, Point, QuadrantLine, SelectionSet};
use ripperkit_designer::Overlay;
use ripperkit_settings::Config;

use crate::{controller_for, program_for};

/// One host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Container resized to the given pixel width
    Resize { container_width: f64 },
    /// Button pressed at canvas pixel `(x, y)`
    Down { x: f64, y: f64 },
    /// Pointer moved to canvas pixel `(x, y)`
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        pressed: bool,
    },
    /// Button released
    Up,
    /// Pointer left the canvas
    Leave,
    /// Programmatic position in panel units
    SetPosition { x: f64, y: f64 },
    /// Programmatic selection; `null` clears it
    SetSelection { quads: Option<Vec<u8>> },
    /// Programmatic toggle of one quadrant line
    Toggle { line: u8 },
}

/// A full session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Initial container width. Without it the canvas stays at scale 1.
    #[serde(default)]
    pub container_width: Option<f64>,
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    /// Every change notification, in emission order
    pub changes: Vec<ChangeEvent>,
    /// State after the last step
    pub final_state: ChangeEvent,
    /// Scene for the final state
    pub overlay: Overlay,
    /// Program text for the final state
    pub program: String,
}

/// Drive a fresh controller through `script`.
pub fn run_replay(script: &ReplayScript, config: &Config) -> anyhow::Result<ReplayOutcome> {
    let mut controller = controller_for(config);

    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    controller.on_change(move |change| sink.borrow_mut().push(change.clone()));

    if let Some(width) = script.container_width {
        controller.resize(width);
    }

    for (index, step) in script.steps.iter().enumerate() {
        tracing::debug!("Replay step {}: {:?}", index, step);
        match step {
            ReplayStep::Resize { container_width } => controller.resize(*container_width),
            ReplayStep::Down { x, y } => controller.on_pointer_down(Point::new(*x, *y)),
            ReplayStep::Move { x, y, pressed } => {
                controller.on_pointer_move(Point::new(*x, *y), *pressed)
            }
            ReplayStep::Up => controller.on_pointer_up(),
            ReplayStep::Leave => controller.on_pointer_leave(),
            ReplayStep::SetPosition { x, y } => controller.set_position(*x, *y),
            ReplayStep::SetSelection { quads } => {
                let selection = quads
                    .as_deref()
                    .map(SelectionSet::from_ids)
                    .transpose()
                    .map_err(|e| anyhow::anyhow!("step {}: {}", index, e))?;
                controller.set_selection(selection);
            }
            ReplayStep::Toggle { line } => {
                let line = QuadrantLine::try_from(*line)
                    .map_err(|e| anyhow::anyhow!("step {}: {}", index, e))?;
                controller.toggle_quad(line);
            }
        }
    }

    let final_state = controller.snapshot();
    let overlay = Overlay::build(&controller);
    let program = program_for(&final_state, config)?;
    let changes = changes.borrow().clone();
    tracing::info!(
        "Replayed {} steps, {} changes",
        script.steps.len(),
        changes.len()
    );

    Ok(ReplayOutcome {
        changes,
        final_state,
        overlay,
        program,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(json: &str) -> ReplayScript {
        ReplayScript::from_json(json).unwrap()
    }

    #[test]
    fn test_step_parsing() {
        let s = script(
            r#"{"steps":[
                {"action":"down","x":1,"y":2},
                {"action":"move","x":3,"y":4},
                {"action":"set_selection","quads":null},
                {"action":"up"}
            ]}"#,
        );
        assert_eq!(s.container_width, None);
        assert_eq!(
            s.steps[1],
            ReplayStep::Move {
                x: 3.0,
                y: 4.0,
                pressed: false
            }
        );
        assert_eq!(s.steps[2], ReplayStep::SetSelection { quads: None });
    }

    #[test]
    fn test_click_and_toggle_session() {
        // 980 px container, 20 px margin: 960 px canvas, scale 10
        let s = script(
            r#"{"container_width":980,"steps":[
                {"action":"down","x":480,"y":-60},
                {"action":"down","x":100,"y":100}
            ]}"#,
        );
        let outcome = run_replay(&s, &Config::default()).unwrap();

        // First click lands on the top line, second moves the crosshair
        assert_eq!(outcome.changes.len(), 2);
        assert_eq!(outcome.changes[0].quads, vec![1]);
        assert_eq!(outcome.final_state.x, 10.0);
        assert_eq!(outcome.final_state.y, 38.0);
        assert!(outcome.program.contains("' Rip segment"));
        assert!(outcome.program.contains("J2,10.00000,48.00000"));

        assert_eq!(outcome.overlay.width, 960.0);
        assert_eq!(outcome.overlay.label.text, "(10.00,38.00)");
    }

    #[test]
    fn test_invalid_toggle_is_reported() {
        let s = script(r#"{"steps":[{"action":"toggle","line":5}]}"#);
        let err = run_replay(&s, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("step 0"));
    }

    #[test]
    fn test_programmatic_steps() {
        let s = script(
            r#"{"steps":[
                {"action":"set_position","x":12,"y":6},
                {"action":"set_selection","quads":[2,4]},
                {"action":"toggle","line":2}
            ]}"#,
        );
        let outcome = run_replay(&s, &Config::default()).unwrap();
        assert_eq!(outcome.changes.len(), 3);
        assert_eq!(outcome.final_state.quads, vec![4]);
        assert!(outcome.program.contains("J2,96.00000,6.00000"));
    }
}
