//! # RipperKit Core
//!
//! Core types, errors, and utilities shared by the RipperKit crates.
//! Provides the panel/crosshair data model, the quadrant line and hit target
//! identifiers, the ordered selection set, and the synchronous event bus the
//! crosshair controller publishes on, plus the fixed-decimal formatting used
//! for labels and part files.

pub mod constants;
pub mod data;
pub mod error;
pub mod event_bus;
pub mod units;

pub use data::{ChangeEvent, HitTarget, Panel, Point, QuadrantLine, SelectionSet};

pub use error::{Error, QuadrantError, Result};

pub use units::format_fixed;

pub use event_bus::{
    CrosshairEvent, EventBus, EventCategory, EventFilter, EventHandler, SubscriptionId,
};
