//! Event Model Builder
//!
//! Turns the raw child items into validated, placement-ordered events.

pub mod builder;
pub mod ordering;

pub use builder::{build_events, week_end, BuildOutput, RejectedItem, WeekBoundaryPolicy};
pub use ordering::compare_events;
