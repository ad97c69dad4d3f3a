use std::sync::atomic::{AtomicU8, Ordering};

static MAX_LOG_LEVEL: AtomicU8 = AtomicU8::new(LoggerLevel::Warn as u8);

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum LoggerLevel {
    None = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl LoggerLevel {
    /// Values above `4` are considered as `Debug`.
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => LoggerLevel::None,
            1 => LoggerLevel::Error,
            2 => LoggerLevel::Warn,
            3 => LoggerLevel::Info,
            _ => LoggerLevel::Debug,
        }
    }
}

pub struct Logger {}

impl Logger {
    pub fn set_logger_level(new_level: LoggerLevel) {
        MAX_LOG_LEVEL.store(new_level as u8, Ordering::Relaxed);
    }

    pub fn info(text: &str) {
        if is_enabled(LoggerLevel::Info) {
            emit(LoggerLevel::Info, text);
        }
    }

    pub fn warn(text: &str) {
        if is_enabled(LoggerLevel::Warn) {
            emit(LoggerLevel::Warn, text);
        }
    }

    pub fn debug(text: &str) {
        if is_enabled(LoggerLevel::Debug) {
            emit(LoggerLevel::Debug, text);
        }
    }

    pub fn lazy_debug(func: &dyn Fn() -> String) {
        if is_enabled(LoggerLevel::Debug) {
            emit(LoggerLevel::Debug, &func());
        }
    }
}

fn is_enabled(level: LoggerLevel) -> bool {
    MAX_LOG_LEVEL.load(Ordering::Relaxed) >= level as u8
}

/// JavaScript imports cannot be called outside of a WebAssembly environment, so logs go
/// through the `log` facade there instead.
#[cfg(target_arch = "wasm32")]
fn emit(level: LoggerLevel, text: &str) {
    use crate::bindings::{jsLog, LogLevel};
    let js_level = match level {
        LoggerLevel::Error | LoggerLevel::None => LogLevel::Error,
        LoggerLevel::Warn => LogLevel::Warn,
        LoggerLevel::Info => LogLevel::Info,
        LoggerLevel::Debug => LogLevel::Debug,
    };
    jsLog(js_level, text);
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: LoggerLevel, text: &str) {
    match level {
        LoggerLevel::Error | LoggerLevel::None => log::error!("{text}"),
        LoggerLevel::Warn => log::warn!("{text}"),
        LoggerLevel::Info => log::info!("{text}"),
        LoggerLevel::Debug => log::debug!("{text}"),
    }
}
