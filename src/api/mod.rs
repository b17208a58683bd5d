//! Calendar WASM API
//!
//! This module provides the JavaScript-facing API for the calendar elements.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion and console logging
//! - `calendar`: The `CalendarEngine` class and the one-shot `layoutMonth` function

pub mod helpers;
pub mod calendar;

pub use calendar::{layout_month, CalendarEngine};
