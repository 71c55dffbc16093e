//! Quadrant line and hit target identifiers.
//!
//! The crosshair is composed of four quadrant lines, numbered like the
//! conventional mathematical quadrants starting from the top line:
//! 1 (top), 2 (left), 3 (bottom), 4 (right). Hit testing adds two more
//! outcomes: 0 (nothing) and 5 (the centre handle).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::QuadrantError;

/// One of the four cut candidates running from the crosshair to a panel edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum QuadrantLine {
    /// Crosshair to the top edge (increasing Y)
    Top = 1,
    /// Crosshair to the left edge (decreasing X)
    Left = 2,
    /// Crosshair to the bottom edge (decreasing Y)
    Bottom = 3,
    /// Crosshair to the right edge (increasing X)
    Right = 4,
}

impl QuadrantLine {
    /// All lines in numeric order
    pub const ALL: [QuadrantLine; 4] = [
        QuadrantLine::Top,
        QuadrantLine::Left,
        QuadrantLine::Bottom,
        QuadrantLine::Right,
    ];

    /// Numeric identifier (1..=4)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// The line on the other side of the crosshair
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Left => Self::Right,
            Self::Bottom => Self::Top,
            Self::Right => Self::Left,
        }
    }
}

impl TryFrom<u8> for QuadrantLine {
    type Error = QuadrantError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Top),
            2 => Ok(Self::Left),
            3 => Ok(Self::Bottom),
            4 => Ok(Self::Right),
            other => Err(QuadrantError::InvalidLine(other)),
        }
    }
}

impl From<QuadrantLine> for u8 {
    fn from(line: QuadrantLine) -> Self {
        line.id()
    }
}

impl fmt::Display for QuadrantLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Left => write!(f, "left"),
            Self::Bottom => write!(f, "bottom"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Result of testing a pointer position against the crosshair geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HitTarget {
    /// No hit (0)
    #[default]
    None,
    /// A quadrant line (1..=4)
    Line(QuadrantLine),
    /// The centre handle (5)
    Center,
}

impl HitTarget {
    /// Numeric identifier (0..=5)
    pub fn id(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Line(line) => line.id(),
            Self::Center => 5,
        }
    }

    /// The quadrant line, if this target is one
    pub fn line(self) -> Option<QuadrantLine> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }
}

impl From<QuadrantLine> for HitTarget {
    fn from(line: QuadrantLine) -> Self {
        Self::Line(line)
    }
}

impl TryFrom<u8> for HitTarget {
    type Error = QuadrantError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::None),
            5 => Ok(Self::Center),
            1..=4 => QuadrantLine::try_from(id).map(Self::Line),
            other => Err(QuadrantError::InvalidTarget(other)),
        }
    }
}

impl From<HitTarget> for u8 {
    fn from(target: HitTarget) -> Self {
        target.id()
    }
}

impl fmt::Display for HitTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Line(line) => write!(f, "line {} ({})", line.id(), line),
            Self::Center => write!(f, "center"),
        }
    }
}
