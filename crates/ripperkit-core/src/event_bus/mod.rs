//! # Event Bus Module
//!
//! Synchronous publish/subscribe used by the crosshair controller to notify
//! its host.
//!
//! ## Overview
//!
//! - Handlers run on the publishing call, in registration order
//! - Subscribers filter by event category
//! - Every handler completes before `publish` returns
//!
//! ## Usage
//!
//! ```rust
//! use ripperkit_core::event_bus::{CrosshairEvent, EventBus, EventCategory, EventFilter};
//! use ripperkit_core::{ChangeEvent, Point, SelectionSet};
//!
//! let mut bus = EventBus::new();
//! let id = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Change]),
//!     |event| {
//!         if let CrosshairEvent::Changed(change) = event {
//!             println!("crosshair at ({}, {})", change.x, change.y);
//!         }
//!     },
//! );
//!
//! let change = ChangeEvent::new(Point::new(48.0, 24.0), &SelectionSet::new());
//! assert_eq!(bus.publish(&CrosshairEvent::Changed(change)), 1);
//! assert!(bus.unsubscribe(id));
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
