// Console logger: forwards `log` records to the browser devtools console,
// choosing the console method by level.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsValue;

static INSTALLED: AtomicBool = AtomicBool::new(false);
static LOGGER: ConsoleLogger = ConsoleLogger;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::log_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(target: &str, message: &str) -> String {
    format!("[{}] {}", target, message)
}

/// Installs the console logger once; later calls only adjust the level.
pub fn init(level: LevelFilter) {
    if !INSTALLED.swap(true, Ordering::SeqCst) && log::set_logger(&LOGGER).is_err() {
        // Another logger won the race; keep it.
        return;
    }
    log::set_max_level(level);
}
