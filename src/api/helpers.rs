//! Shared helpers for WASM API operations
//!
//! Console output with a `[calendar]` prefix, and the conversions between
//! JavaScript values and the calendar's own types.

use chrono::NaiveDate;
use log::Level;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::ConfigError;
use crate::grid_layout::LayoutConfig;
use crate::parse::parse_date;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

/// Log a debug message with [calendar] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::console(::log::Level::Debug, &format!($($arg)*))
    };
}

/// Log an info message with [calendar] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::console(::log::Level::Info, &format!($($arg)*))
    };
}

/// Log a warning message with [calendar] prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::console(::log::Level::Warn, &format!($($arg)*))
    };
}

/// Log an error message with [calendar] prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::console(::log::Level::Error, &format!($($arg)*))
    };
}

/// Write one prefixed line to the browser console at the given level
pub fn console(level: Level, msg: &str) {
    let line = format!("[calendar] {}", msg);
    match level {
        Level::Error => console_error(&line),
        Level::Warn => console_warn(&line),
        Level::Info => console_info(&line),
        Level::Debug | Level::Trace => console_log(&line),
    }
}

/// Error returned to JavaScript, reported to the console first
fn js_error(msg: String) -> JsValue {
    crate::wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Deserialize a value passed from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", context, e)))
}

/// Serialize a value for JavaScript
pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(format!("{}: {}", context, e)))
}

/// Convert a configuration error into the thrown JavaScript value
pub fn config_error(err: ConfigError) -> JsValue {
    js_error(err.to_string())
}

/// Parse an optional date attribute; `None` or an empty string is absent
pub fn optional_date(text: Option<&str>) -> Result<Option<NaiveDate>, JsValue> {
    match text.map(str::trim).filter(|t| !t.is_empty()) {
        Some(text) => parse_date(text).map(Some).map_err(config_error),
        None => Ok(None),
    }
}

/// Layout config from an optional JS object; `undefined` or `null` gives
/// the defaults
pub fn layout_config(value: JsValue) -> Result<LayoutConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(LayoutConfig::default())
    } else {
        deserialize(value, "Invalid layout config")
    }
}

/// Today's date according to the browser clock
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}
