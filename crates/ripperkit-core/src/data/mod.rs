//! Data models for RipperKit
//!
//! Provides the panel, point, quadrant line, hit target, and selection types
//! shared by the crosshair controller and the toolpath generator.

mod quadrant;
mod selection;

pub use quadrant::{HitTarget, QuadrantLine};
pub use selection::SelectionSet;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH};
use crate::units::format_fixed;

/// A 2D coordinate, either in physical panel units or in screen pixels
/// depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", format_fixed(self.x, 2), format_fixed(self.y, 2))
    }
}

/// Physical panel dimensions.
///
/// Fixed for the lifetime of a controller. Not validated: zero or negative
/// sizes are carried through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Panel width (X extent)
    pub width: f64,
    /// Panel height (Y extent)
    pub height: f64,
}

impl Panel {
    /// Create a panel with the given physical dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Geometric centre of the panel
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Height to width ratio
    pub fn aspect(&self) -> f64 {
        self.height / self.width
    }

    /// Boundary endpoint of a quadrant line for the given crosshair.
    ///
    /// Top and bottom keep the crosshair X, left and right keep its Y.
    pub fn edge_point(&self, line: QuadrantLine, crosshair: Point) -> Point {
        match line {
            QuadrantLine::Top => Point::new(crosshair.x, self.height),
            QuadrantLine::Left => Point::new(0.0, crosshair.y),
            QuadrantLine::Bottom => Point::new(crosshair.x, 0.0),
            QuadrantLine::Right => Point::new(self.width, crosshair.y),
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_WIDTH, DEFAULT_PANEL_HEIGHT)
    }
}

/// Snapshot of the controller state carried by every change notification.
///
/// `quads` lists the selected quadrant line ids in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Crosshair X in panel units
    pub x: f64,
    /// Crosshair Y in panel units
    pub y: f64,
    /// Selected quadrant line ids (1..=4)
    pub quads: Vec<u8>,
}

impl ChangeEvent {
    /// Build a snapshot from a position and selection
    pub fn new(position: Point, selection: &SelectionSet) -> Self {
        Self {
            x: position.x,
            y: position.y,
            quads: selection.ids(),
        }
    }

    /// Crosshair position of this snapshot
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rebuild the typed selection carried by this snapshot
    pub fn selection(&self) -> crate::Result<SelectionSet> {
        Ok(SelectionSet::from_ids(&self.quads)?)
    }

    /// Compact JSON form, e.g. `{"x":48.0,"y":24.0,"quads":[1,3]}`
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot and check its quadrant ids.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let event: Self = serde_json::from_str(json)?;
        event.selection()?;
        Ok(event)
    }
}
