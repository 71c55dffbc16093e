//! # RipperKit Designer
//!
//! Interactive crosshair editing for rip-cut planning.
//!
//! A [`CrosshairController`] owns the crosshair position, the selected
//! quadrant lines and the hover/drag indicator. Hosts feed it pointer
//! positions in canvas pixels and listen for change notifications.
//! [`Overlay`] turns the controller state into renderer-agnostic primitives.

pub mod crosshair;
pub mod overlay;
pub mod viewport;

pub use crosshair::{CrosshairController, CrosshairOptions, InteractionMode};
pub use hit_test::hit_test;
pub use overlay::{
    segment_for_id, segment_for_target, Circle, CoordinateLabel, HAlign, Overlay, Segment, Stroke,
    StrokeRole, VAlign,
};
pub use viewport::ViewScale;

pub use ripperkit_core::{ChangeEvent, HitTarget, Panel, Point, QuadrantLine, SelectionSet};
