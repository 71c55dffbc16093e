//! ShopBot part-file commands.
//!
//! Only the handful of commands the rip cut generator needs:
//!
//! | Command        | Meaning                        |
//! |----------------|--------------------------------|
//! | `M2,<x>,<y>`   | linear cutting move in XY      |
//! | `J2,<x>,<y>`   | rapid (jog) move in XY         |
//! | `MZ,<z>`       | cutting move in Z              |
//! | `JZ,<z>`       | rapid move in Z                |
//! | `' text`       | comment                        |
//!
//! Coordinates always carry exactly five decimals, rounded like the
//! interpreter's reference tooling (ties away from zero).

use ripperkit_core::{format_fixed, Point};
use std::fmt;

/// A single line of a ShopBot program.
#[derive(Debug, Clone, PartialEq)]
pub enum SbpCommand {
    /// `' text`
    Comment(String),
    /// Verbatim line, e.g. `C6` or `&Tool = 1`
    Raw(String),
    /// Empty line separating logical groups
    Blank,
    /// Linear cutting move
    M2 { x: f64, y: f64 },
    /// Linear rapid move
    J2 { x: f64, y: f64 },
    /// Cutting move in depth
    MZ(f64),
    /// Rapid move in depth
    JZ(f64),
}

impl SbpCommand {
    pub fn comment(text: impl Into<String>) -> Self {
        SbpCommand::Comment(text.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        SbpCommand::Raw(text.into())
    }

    pub fn m2(p: Point) -> Self {
        SbpCommand::M2 { x: p.x, y: p.y }
    }

    pub fn j2(p: Point) -> Self {
        SbpCommand::J2 { x: p.x, y: p.y }
    }

    /// True for moves that touch material (`M2`, `MZ`)
    pub fn is_cutting(&self) -> bool {
        matches!(self, SbpCommand::M2 { .. } | SbpCommand::MZ(_))
    }
}

impl fmt::Display for SbpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SbpCommand::Comment(text) => write!(f, "' {}", text),
            SbpCommand::Raw(text) => write!(f, "{}", text),
            SbpCommand::Blank => Ok(()),
            SbpCommand::M2 { x, y } => write!(f, "M2,{},{}", format_coord(*x), format_coord(*y)),
            SbpCommand::J2 { x, y } => write!(f, "J2,{},{}", format_coord(*x), format_coord(*y)),
            SbpCommand::MZ(z) => write!(f, "MZ,{}", format_coord(*z)),
            SbpCommand::JZ(z) => write!(f, "JZ,{}", format_coord(*z)),
        }
    }
}

/// Join commands into program text, one per line, no trailing newline.
pub fn to_program(commands: &[SbpCommand]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a coordinate with five decimals.
///
/// Exact halfway values round away from zero, negative zero prints as
/// zero, and tiny negatives keep their sign (`-0.00000`).
pub fn format_coord(value: f64) -> String {
    format_fixed(value, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_forms() {
        assert_eq!(SbpCommand::m2(Point::new(48.0, 0.0)).to_string(), "M2,48.00000,0.00000");
        assert_eq!(SbpCommand::j2(Point::new(0.0, 24.5)).to_string(), "J2,0.00000,24.50000");
        assert_eq!(SbpCommand::MZ(0.0).to_string(), "MZ,0.00000");
        assert_eq!(SbpCommand::JZ(2.0).to_string(), "JZ,2.00000");
        assert_eq!(SbpCommand::comment("Rip X").to_string(), "' Rip X");
        assert_eq!(SbpCommand::raw("&Tool = 1").to_string(), "&Tool = 1");
        assert_eq!(SbpCommand::Blank.to_string(), "");
    }

    #[test]
    fn test_format_coord_precision() {
        assert_eq!(format_coord(1.0 / 3.0), "0.33333");
        assert_eq!(format_coord(2.0 / 3.0), "0.66667");
        assert_eq!(format_coord(96.0), "96.00000");
        assert_eq!(format_coord(-1.5), "-1.50000");
        assert_eq!(format_coord(123456.123456), "123456.12346");
    }

    #[test]
    fn test_format_coord_ties_round_away_from_zero() {
        assert_eq!(format_coord(0.015625), "0.01563");
        assert_eq!(format_coord(-0.015625), "-0.01563");
        assert_eq!(format_coord(10.046875), "10.04688");
    }

    #[test]
    fn test_format_coord_signs() {
        assert_eq!(format_coord(-0.0), "0.00000");
        assert_eq!(format_coord(-0.000001), "-0.00000");
        assert_eq!(format_coord(f64::NAN), "NaN");
        assert_eq!(format_coord(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_to_program_keeps_blank_lines() {
        let program = to_program(&[
            SbpCommand::raw("C7"),
            SbpCommand::Blank,
            SbpCommand::raw("END"),
        ]);
        assert_eq!(program, "C7\n\nEND");
    }

    #[test]
    fn test_is_cutting() {
        assert!(SbpCommand::MZ(0.0).is_cutting());
        assert!(SbpCommand::M2 { x: 0.0, y: 0.0 }.is_cutting());
        assert!(!SbpCommand::JZ(2.0).is_cutting());
        assert!(!SbpCommand::J2 { x: 0.0, y: 0.0 }.is_cutting());
    }
}
