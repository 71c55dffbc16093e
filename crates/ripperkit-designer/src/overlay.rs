//! Renderer-agnostic overlay for the crosshair.
//!
//! Describes what a host draws on top of the panel: the two full-length
//! guides, the centre handle, the selected quadrant lines, the hover
//! highlight and the coordinate label. All geometry is in canvas pixels.
//! Colours and fonts belong to the host and are expressed only as a
//! [`StrokeRole`].

use ripperkit_core::constants::{HANDLE_RADIUS, LABEL_OFFSET};
use ripperkit_core::{HitTarget, Point, QuadrantError, QuadrantLine};
use serde::Serialize;

use crate::crosshair::CrosshairController;

/// A straight line between two canvas points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// How a primitive should be styled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeRole {
    /// Thin neutral guide
    Guide,
    /// Line selected for cutting
    Selected,
    /// Element under the pointer
    Hover,
}

/// A styled segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub segment: Segment,
    pub role: StrokeRole,
}

/// A styled circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub role: StrokeRole,
}

/// Horizontal text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Right,
}

/// Vertical text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Bottom,
}

/// Crosshair coordinate readout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinateLabel {
    pub text: String,
    pub anchor: Point,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

/// Everything a host needs to draw one frame.
///
/// Serializes to JSON for hosts that render out of process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub width: f64,
    pub height: f64,
    /// Guides first, then selected lines in selection order, then hover
    pub strokes: Vec<Stroke>,
    /// Centre handle, plus its hover highlight when hovered or dragged
    pub circles: Vec<Circle>,
    pub label: CoordinateLabel,
}

impl Overlay {
    /// Build the overlay for the controller's current state.
    pub fn build(ctrl: &CrosshairController) -> Self {
        let view = ctrl.view();
        let c = ctrl.crosshair_pixel();
        let (width, height) = (
            ctrl.panel().width * view.scale(),
            ctrl.panel().height * view.scale(),
        );

        let mut strokes = vec![
            Stroke {
                segment: Segment::new(Point::new(0.0, c.y), Point::new(width, c.y)),
                role: StrokeRole::Guide,
            },
            Stroke {
                segment: Segment::new(Point::new(c.x, 0.0), Point::new(c.x, height)),
                role: StrokeRole::Guide,
            },
        ];
        strokes.extend(ctrl.selection().iter().map(|line| Stroke {
            segment: line_segment(ctrl, line),
            role: StrokeRole::Selected,
        }));

        let mut circles = vec![Circle {
            center: c,
            radius: HANDLE_RADIUS,
            role: StrokeRole::Guide,
        }];

        match ctrl.hover() {
            HitTarget::Line(line) => strokes.push(Stroke {
                segment: line_segment(ctrl, line),
                role: StrokeRole::Hover,
            }),
            HitTarget::Center => circles.push(Circle {
                center: c,
                radius: HANDLE_RADIUS,
                role: StrokeRole::Hover,
            }),
            HitTarget::None => {}
        }

        Self {
            width,
            height,
            strokes,
            circles,
            label: coordinate_label(ctrl),
        }
    }
}

/// Canvas segment for a hit target. Only quadrant lines have one.
pub fn segment_for_target(ctrl: &CrosshairController, target: HitTarget) -> Option<Segment> {
    target.line().map(|line| line_segment(ctrl, line))
}

/// Canvas segment for a raw target id.
///
/// 0 and 5 are valid and draw nothing. Any other id outside 1..=4 is a
/// caller bug and is returned as an error rather than ignored.
pub fn segment_for_id(ctrl: &CrosshairController, id: u8) -> Result<Option<Segment>, QuadrantError> {
    let target = HitTarget::try_from(id)?;
    Ok(segment_for_target(ctrl, target))
}

fn line_segment(ctrl: &CrosshairController, line: QuadrantLine) -> Segment {
    let s = ctrl.view().scale();
    let c = ctrl.crosshair_pixel();
    match line {
        QuadrantLine::Top => Segment::new(c, Point::new(c.x, 0.0)),
        QuadrantLine::Left => Segment::new(Point::new(0.0, c.y), c),
        QuadrantLine::Bottom => Segment::new(Point::new(c.x, s * ctrl.panel().height), c),
        QuadrantLine::Right => Segment::new(Point::new(s * ctrl.panel().width, c.y), c),
    }
}

/// Label placed beside the crosshair, in the quadrant with the most room.
fn coordinate_label(ctrl: &CrosshairController) -> CoordinateLabel {
    let panel = ctrl.panel();
    let pos = ctrl.position();
    let c = ctrl.crosshair_pixel();

    let (h_align, x) = if pos.x <= panel.width / 2.0 {
        (HAlign::Left, c.x + LABEL_OFFSET)
    } else {
        (HAlign::Right, c.x - LABEL_OFFSET)
    };
    let (v_align, y) = if pos.y >= panel.height / 2.0 {
        (VAlign::Top, c.y + LABEL_OFFSET)
    } else {
        (VAlign::Bottom, c.y - LABEL_OFFSET)
    };

    CoordinateLabel {
        text: pos.to_string(),
        anchor: Point::new(x, y),
        h_align,
        v_align,
    }
}
