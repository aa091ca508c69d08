//! Console output for notices and debug tracing.

use alloc::string::ToString;
use responder_core::{Notice, NoticeSink};
use wasm_bindgen::JsValue;

/// Reports notices with `console.warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl NoticeSink for ConsoleSink {
    fn notice(&self, notice: &Notice) {
        web_sys::console::warn_1(&JsValue::from_str(&notice.to_string()));
    }
}

/// Traces to `console.debug` when the `debug-log` feature is enabled.
#[cfg(feature = "debug-log")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        web_sys::console::debug_1(&wasm_bindgen::JsValue::from_str(&alloc::format!($($arg)*)))
    };
}

#[cfg(not(feature = "debug-log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_log;
