//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and mirrors each one to the browser console (wasm) or stderr (native).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("rolling logger already initialized")]
    AlreadyInitialized,
    #[error("rolling logger not initialized")]
    NotInitialized,
    #[error("failed to install logger: {0}")]
    Install(String),
}

/// Fixed-capacity buffer of formatted log lines, oldest first
#[derive(Debug, Clone)]
pub struct RecordRing {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RecordRing {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&mut self, line: String) {
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

struct RollingLogger {
    app_name: String,
    ring: Mutex<RecordRing>,
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// `[HH:MM:SS.mmm] LEVEL target: message`
fn format_line(level: Level, target: &str, message: &str) -> String {
    format!(
        "[{}] {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        if let Ok(mut ring) = self.ring.lock() {
            ring.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the rolling logger as the global `log` backend.
///
/// `capacity` bounds how many recent lines `recent()` can return.
pub fn init_logger(capacity: usize, app_name: &str) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    let logger = LOGGER.get_or_init(|| RollingLogger {
        app_name: app_name.to_string(),
        ring: Mutex::new(RecordRing::new(capacity)),
    });
    log::set_logger(logger).map_err(|e| LoggerError::Install(e.to_string()))?;
    log::set_max_level(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    log::info!(target: logger.app_name.as_str(), "Logger initialized (capacity {})", capacity);
    Ok(())
}

fn installed() -> Result<&'static RollingLogger, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

/// Log an info line under the app name
pub fn info(message: &str) -> Result<(), LoggerError> {
    let logger = installed()?;
    log::info!(target: logger.app_name.as_str(), "{}", message);
    Ok(())
}

/// Log an error line under the app name
pub fn error(message: &str) -> Result<(), LoggerError> {
    let logger = installed()?;
    log::error!(target: logger.app_name.as_str(), "{}", message);
    Ok(())
}

/// Most recent lines, oldest first. Empty before `init_logger`.
pub fn recent() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.ring.lock().ok().map(|ring| ring.lines()))
        .unwrap_or_default()
}
