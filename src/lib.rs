//! Month-view Calendar WASM Module
//!
//! Core of the `basic-calendar` / `grid-calendar` custom elements: builds
//! date-ranged events from the element's children and lays them out in the
//! 6-week month grid. DOM construction stays in JavaScript.

pub mod models;
pub mod error;
pub mod parse;
pub mod event_model;
pub mod grid_layout;
pub mod diagnostics;
pub mod calendar;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use error::{ConfigError, DateParseError, ItemError};
pub use event_model::{build_events, BuildOutput, RejectedItem, WeekBoundaryPolicy};
pub use grid_layout::{LayoutConfig, LayoutEngine, PlacementGrid, RowEntry};
pub use calendar::CalendarState;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Calendar WASM module initialized");
}
