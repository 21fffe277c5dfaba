//! Page Logger
//!
//! `log` backend for code running inside a storefront page.
//! Records go to the browser console on wasm32 (stderr elsewhere) and the most
//! recent ones are kept in a fixed-size ring for later inspection.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept by default
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<PageLogger> = OnceLock::new();

/// Fixed-size ring of formatted log lines; the oldest line is dropped first
#[derive(Debug)]
pub struct RecordBuffer {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RecordBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

struct PageLogger {
    level: LevelFilter,
    buffer: Mutex<RecordBuffer>,
}

impl Log for PageLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(&timestamp(), record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the page logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| PageLogger {
        level,
        buffer: Mutex::new(RecordBuffer::new(capacity)),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent records, oldest first. Empty before [`init`].
pub fn recent_records() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|buffer| buffer.lines()))
        .unwrap_or_default()
}

fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{timestamp}] {level:<5} {target}: {message}")
}

#[cfg(target_arch = "wasm32")]
fn timestamp() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(not(target_arch = "wasm32"))]
fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let line = js_sys::JsString::from(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}
