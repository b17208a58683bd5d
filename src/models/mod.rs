//! Models module for the calendar
//!
//! Data structures shared by the event builder, the layout engine and
//! the JavaScript API.

pub mod event;
pub mod view;
pub mod controls;

// Re-export commonly used types
pub use event::*;
pub use view::*;
pub use controls::{Control, Controls};
