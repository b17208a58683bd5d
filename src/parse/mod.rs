//! Parsing module for the calendar
//!
//! Converts attribute strings (`start-date`, `end-date`, `view`, the
//! month input value) into chrono values.

pub mod dates;

// Re-export commonly used functions
pub use dates::*;
