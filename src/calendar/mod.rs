//! Calendar state
//!
//! Owns the inputs of the layout (child items, view month, selection,
//! controls, configuration) and rebuilds events and placements on demand.

pub mod changes;
pub mod state;

pub use changes::{Change, ChangeQueue, ChangeSet};
pub use state::CalendarState;
