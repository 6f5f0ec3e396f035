//! A `log` backend that records every warning, so tests can count what was
//! emitted.

use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

static CAPTURED: Mutex<Vec<(String, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        CAPTURED
            .lock()
            .unwrap()
            .push((record.target().to_string(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

pub fn install() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Warn);
}

/// Targets of every captured record whose text is `message`.
pub fn targets_of(message: &str) -> Vec<String> {
    CAPTURED
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, text)| text == message)
        .map(|(target, _)| target.clone())
        .collect()
}
