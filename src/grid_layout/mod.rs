//! Week Layout Engine
//!
//! This module computes the placement of events into the month grid,
//! generating a PlacementGrid with every cell's rows and every event's span
//! so JavaScript only has to mount slots and spacers.

pub mod engine;
pub mod week;
pub mod cell;
pub mod placement;

pub use engine::{LayoutEngine, LayoutConfig};
pub use placement::{PlacementGrid, EventPlacement, RowEntry, SpanWidth, WeekLayout};
pub use cell::DayCell;
