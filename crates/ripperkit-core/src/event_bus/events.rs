//! Event type definitions for the event bus.

use serde::{Deserialize, Serialize};

use crate::data::{ChangeEvent, HitTarget};

/// Events published by the crosshair controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CrosshairEvent {
    /// Committed change of position or selection
    Changed(ChangeEvent),
    /// The hover indicator moved to a different target
    HoverChanged(HitTarget),
    /// The visible state may have changed and the host should redraw
    RedrawRequested,
}

impl CrosshairEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            CrosshairEvent::Changed(_) => EventCategory::Change,
            CrosshairEvent::HoverChanged(_) => EventCategory::Hover,
            CrosshairEvent::RedrawRequested => EventCategory::Redraw,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            CrosshairEvent::Changed(change) => format!(
                "Change ({:.3}, {:.3}) quads {:?}",
                change.x, change.y, change.quads
            ),
            CrosshairEvent::HoverChanged(target) => format!("Hover {}", target),
            CrosshairEvent::RedrawRequested => "Redraw".to_string(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Position and selection changes
    Change,
    /// Hover indicator updates
    Hover,
    /// Redraw requests
    Redraw,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Change => write!(f, "change"),
            EventCategory::Hover => write!(f, "hover"),
            EventCategory::Redraw => write!(f, "redraw"),
        }
    }
}
