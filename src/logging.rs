//! Logging Setup
//!
//! Installs the rolling logger with a sink that mirrors every line to
//! the browser console.

use rolling_logger::{parse_level, LevelFilter, LogBuffer, LogLine, RollingLogger};
use tracing::Level;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;

fn console_sink(line: &LogLine) {
    let text = JsValue::from_str(&line.to_string());
    if line.level == Level::ERROR {
        web_sys::console::error_1(&text);
    } else if line.level == Level::WARN {
        web_sys::console::warn_1(&text);
    } else if line.level == Level::INFO {
        web_sys::console::info_1(&text);
    } else {
        web_sys::console::debug_1(&text);
    }
}

/// Install the global subscriber. Returns the in-memory buffer, or
/// `None` if a subscriber was already set.
pub fn init(config: &AppConfig) -> Option<LogBuffer> {
    let level = parse_level(&config.log_level).unwrap_or(LevelFilter::INFO);
    let result = RollingLogger::new()
        .capacity(config.log_capacity)
        .max_level(level)
        .sink(console_sink)
        .init();

    match result {
        Ok(buffer) => {
            tracing::info!(level = %level, capacity = buffer.capacity(), "logging initialized");
            Some(buffer)
        }
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
            None
        }
    }
}
