#[cfg(target_arch = "wasm32")]
use gloo::console;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    level: Level,
    component: &'a str,
    message: &'a str,
}

/// Structured log lines on the browser console, one JSON object per line.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        emit(level, format_record(level, component, message));
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: String) {
    match level {
        Level::Debug => console::debug!(line),
        Level::Info => console::info!(line),
        Level::Warn => console::warn!(line),
        Level::Error => console::error!(line),
    }
}

/// No browser console off-wasm (native unit tests)
#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: String) {}

fn format_record(level: Level, component: &str, message: &str) -> String {
    let record = LogRecord { level, component, message };
    serde_json::to_string(&record)
        .unwrap_or_else(|_| format!("[{:?}] {}: {}", level, component, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_single_line_json() {
        let line = format_record(Level::Warn, "config", "using defaults\nfor site.json");
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "warn");
        assert_eq!(value["component"], "config");
        assert_eq!(value["message"], "using defaults\nfor site.json");
    }
}
