//! Rip cut generator.
//!
//! Converts a crosshair point and the selected quadrant lines into a ShopBot
//! program with as few plunge/retract cycles as possible:
//!
//! 1. lines 1 and 3 together become one straight rip along Y (top to bottom)
//! 2. lines 2 and 4 together become one straight rip along X (left to right)
//! 3. whatever is left (zero, one or two adjacent lines) becomes a single
//!    path through the crosshair, in selection order
//!
//! Every cut group jogs at safe height to its start, plunges to zero, cuts,
//! and retracts to safe height again.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use ripperkit_core::constants::{DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH, DEFAULT_SAFE_Z};
use ripperkit_core::{ChangeEvent, Panel, Point, QuadrantLine, SelectionSet};

use crate::error::CamToolResult;
use crate::sbp::{to_program, SbpCommand};

/// Depth every cut plunges to.
const CUT_DEPTH: f64 = 0.0;

/// Parameters for the rip cut generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RipCutParameters {
    /// Panel width (X extent)
    pub width: f64,
    /// Panel height (Y extent)
    pub height: f64,
    /// Crosshair X
    pub x: f64,
    /// Crosshair Y
    pub y: f64,
    /// Selected quadrant lines, in selection order
    pub quads: SelectionSet,
    /// Height for safe travel between cuts. Zero falls back to 2.0.
    pub safe_z: f64,
    /// Stock thickness. Carried for the motion layer, not used for ordering.
    pub thickness: Option<f64>,
    /// Cut through the stock. Carried for the motion layer, not used for ordering.
    pub cut_through: bool,
}

impl Default for RipCutParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANEL_WIDTH,
            height: DEFAULT_PANEL_HEIGHT,
            x: DEFAULT_PANEL_WIDTH / 2.0,
            y: DEFAULT_PANEL_HEIGHT / 2.0,
            quads: SelectionSet::new(),
            safe_z: DEFAULT_SAFE_Z,
            thickness: None,
            cut_through: false,
        }
    }
}

impl RipCutParameters {
    /// Build parameters from a crosshair change notification.
    pub fn from_snapshot(panel: &Panel, change: &ChangeEvent, safe_z: f64) -> CamToolResult<Self> {
        Ok(Self {
            width: panel.width,
            height: panel.height,
            x: change.x,
            y: change.y,
            quads: SelectionSet::from_ids(&change.quads)?,
            safe_z,
            ..Self::default()
        })
    }

    /// Parse parameters from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CamToolResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Safe height actually used for travel moves.
    pub fn effective_safe_z(&self) -> f64 {
        if self.safe_z == 0.0 || !self.safe_z.is_finite() {
            DEFAULT_SAFE_Z
        } else {
            self.safe_z
        }
    }

    fn panel(&self) -> Panel {
        Panel::new(self.width, self.height)
    }

    fn crosshair(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Kind of cut group, which also names it in the program comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutKind {
    /// Lines 1 and 3 merged into one straight cut along Y
    RipY,
    /// Lines 2 and 4 merged into one straight cut along X
    RipX,
    /// Two adjacent lines cut as one path through the crosshair
    Quadrant,
    /// A single line from the edge to the crosshair
    Segment,
}

impl CutKind {
    /// Comment text introducing the group
    pub fn label(self) -> &'static str {
        match self {
            CutKind::RipY => "Rip Y",
            CutKind::RipX => "Rip X",
            CutKind::Quadrant => "Rip quadrant",
            CutKind::Segment => "Rip segment",
        }
    }

    /// Full-length rips are followed by a blank separator line
    pub fn is_full_rip(self) -> bool {
        matches!(self, CutKind::RipY | CutKind::RipX)
    }
}

/// One plunge-to-retract cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutGroup {
    pub kind: CutKind,
    /// Start point followed by every cutting target
    pub path: Vec<Point>,
}

impl CutGroup {
    /// Bracketed moves for this group at the given safe height
    pub fn commands(&self, safe_z: f64) -> Vec<SbpCommand> {
        let mut commands = Vec::with_capacity(self.path.len() + 3);
        commands.push(SbpCommand::JZ(safe_z));
        if let Some((start, targets)) = self.path.split_first() {
            commands.push(SbpCommand::j2(*start));
            commands.push(SbpCommand::MZ(CUT_DEPTH));
            commands.extend(targets.iter().map(|p| SbpCommand::m2(*p)));
        }
        commands.push(SbpCommand::JZ(safe_z));
        commands
    }
}

/// Generator for rip cut programs
pub struct RipCutGenerator {
    params: RipCutParameters,
}

impl RipCutGenerator {
    /// Create a new RipCutGenerator with the given parameters
    pub fn new(params: RipCutParameters) -> Self {
        Self { params }
    }

    /// Parameters this generator was built with
    pub fn params(&self) -> &RipCutParameters {
        &self.params
    }

    /// Order the selected lines into cut groups.
    pub fn plan(&self) -> Vec<CutGroup> {
        let panel = self.params.panel();
        let center = self.params.crosshair();
        let edge = |line: QuadrantLine| panel.edge_point(line, center);

        let mut remaining = self.params.quads.clone();
        let mut groups = Vec::new();

        if remaining.contains_pair(QuadrantLine::Top) {
            groups.push(CutGroup {
                kind: CutKind::RipY,
                path: vec![edge(QuadrantLine::Top), edge(QuadrantLine::Bottom)],
            });
            remaining.remove(QuadrantLine::Top);
            remaining.remove(QuadrantLine::Bottom);
        }

        if remaining.contains_pair(QuadrantLine::Left) {
            groups.push(CutGroup {
                kind: CutKind::RipX,
                path: vec![edge(QuadrantLine::Left), edge(QuadrantLine::Right)],
            });
            remaining.remove(QuadrantLine::Left);
            remaining.remove(QuadrantLine::Right);
        }

        // At most two adjacent lines are left once both pairs are merged
        let lines = remaining.as_slice();
        if let Some(&first) = lines.first() {
            let mut path = vec![edge(first), center];
            let kind = match lines.get(1) {
                Some(&second) => {
                    path.push(edge(second));
                    CutKind::Quadrant
                }
                None => CutKind::Segment,
            };
            groups.push(CutGroup { kind, path });
        }

        groups
    }

    /// Full program as commands: setup, cut groups, teardown.
    pub fn commands(&self) -> Vec<SbpCommand> {
        let safe_z = self.params.effective_safe_z();

        let mut commands = vec![
            SbpCommand::comment("Created by THE RIPPER"),
            SbpCommand::Blank,
            SbpCommand::comment("Select Tool"),
            SbpCommand::raw("&Tool = 1"),
            SbpCommand::raw("C9"),
            SbpCommand::Blank,
            SbpCommand::JZ(safe_z),
            SbpCommand::comment("Spindle on"),
            SbpCommand::raw("C6"),
            SbpCommand::Blank,
        ];

        for group in self.plan() {
            commands.push(SbpCommand::comment(group.kind.label()));
            commands.extend(group.commands(safe_z));
            if group.kind.is_full_rip() {
                commands.push(SbpCommand::Blank);
            }
        }

        commands.extend([
            SbpCommand::Blank,
            SbpCommand::comment("Spindle off"),
            SbpCommand::raw("C7"),
            SbpCommand::Blank,
            SbpCommand::raw("END"),
        ]);
        commands
    }

    /// Generate the program text
    pub fn generate(&self) -> Result<String> {
        let p = &self.params;
        tracing::debug!(
            "Rip cut: panel {}x{}, crosshair ({}, {}), quads {:?}, thickness {:?}, cut_through {}",
            p.width,
            p.height,
            p.x,
            p.y,
            p.quads.ids(),
            p.thickness,
            p.cut_through
        );

        let commands = self.commands();
        let cuts = commands.iter().filter(|c| c.is_cutting()).count();
        tracing::info!(
            "Generated rip program: {} lines, {} cutting moves",
            commands.len(),
            cuts
        );
        Ok(to_program(&commands))
    }
}
