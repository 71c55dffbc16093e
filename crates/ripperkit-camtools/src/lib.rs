//! # RipperKit CAM Tools
//!
//! Toolpath synthesis for crosshair rip cuts.
//!
//! ## Included
//!
//! - **Rip Cut Generator**: turns a panel, a crosshair point and a set of
//!   quadrant lines into the fewest plunge/retract cycles, merging opposite
//!   lines into single straight rips
//! - **ShopBot Commands**: the subset of the ShopBot part-file dialect the
//!   generator emits (`M2`, `J2`, `MZ`, `JZ`, comments and raw setup lines)

pub mod error;
pub mod rip_cut;
pub mod sbp;

pub use error::{CamToolError, CamToolResult};
pub use rip_cut::{CutGroup, CutKind, RipCutGenerator, RipCutParameters};
pub use sbp::SbpCommand;
