//! Logging bridge for failapp's C surface.

use std::os::raw::c_void;
use std::ptr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Once, RwLock};

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;

use crate::error::{Error, clear_error, cstring_from_str_lossy, write_error};
use crate::types::{
    failapp_error_t, failapp_log_callback_t, failapp_log_config_t, failapp_log_level_t,
    failapp_log_record_t,
};

const LOGGER_STATE_UNINIT: u8 = 0;
const LOGGER_STATE_READY: u8 = 1;
const LOGGER_STATE_FAILED: u8 = 2;

static LOGGER_STATE: AtomicU8 = AtomicU8::new(LOGGER_STATE_UNINIT);
static LOGGER_INIT: Once = Once::new();
static FAILAPP_LOGGER: Lazy<FailappLogger> = Lazy::new(FailappLogger::new);

impl From<failapp_log_level_t> for LevelFilter {
    fn from(value: failapp_log_level_t) -> Self {
        match value {
            failapp_log_level_t::FAILAPP_LOG_LEVEL_OFF => LevelFilter::Off,
            failapp_log_level_t::FAILAPP_LOG_LEVEL_ERROR => LevelFilter::Error,
            failapp_log_level_t::FAILAPP_LOG_LEVEL_WARN => LevelFilter::Warn,
            failapp_log_level_t::FAILAPP_LOG_LEVEL_INFO => LevelFilter::Info,
            failapp_log_level_t::FAILAPP_LOG_LEVEL_DEBUG => LevelFilter::Debug,
            failapp_log_level_t::FAILAPP_LOG_LEVEL_TRACE => LevelFilter::Trace,
        }
    }
}

impl From<Level> for failapp_log_level_t {
    fn from(value: Level) -> Self {
        match value {
            Level::Error => failapp_log_level_t::FAILAPP_LOG_LEVEL_ERROR,
            Level::Warn => failapp_log_level_t::FAILAPP_LOG_LEVEL_WARN,
            Level::Info => failapp_log_level_t::FAILAPP_LOG_LEVEL_INFO,
            Level::Debug => failapp_log_level_t::FAILAPP_LOG_LEVEL_DEBUG,
            Level::Trace => failapp_log_level_t::FAILAPP_LOG_LEVEL_TRACE,
        }
    }
}

struct LoggerConfig {
    level: LevelFilter,
    callback: failapp_log_callback_t,
    user_data: usize,
}

struct FailappLogger {
    config: RwLock<LoggerConfig>,
}

impl FailappLogger {
    fn new() -> Self {
        Self {
            config: RwLock::new(LoggerConfig {
                level: LevelFilter::Info,
                callback: None,
                user_data: 0,
            }),
        }
    }

    fn update(&self, config: LoggerConfig) {
        let mut guard = self.config.write().unwrap_or_else(|err| err.into_inner());
        *guard = config;
    }

    fn with_config<T>(&self, f: impl FnOnce(&LoggerConfig) -> T) -> T {
        let guard = self.config.read().unwrap_or_else(|err| err.into_inner());
        f(&guard)
    }
}

impl Log for FailappLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.with_config(|config| metadata.level().to_level_filter() <= config.level)
    }

    fn log(&self, record: &Record) {
        let (callback, user_data, enabled) = self.with_config(|config| {
            (
                config.callback,
                config.user_data,
                record.level().to_level_filter() <= config.level,
            )
        });

        if !enabled {
            return;
        }

        if let Some(callback) = callback {
            let user_data = user_data as *mut c_void;
            let level = failapp_log_level_t::from(record.level());
            let target = cstring_from_str_lossy(record.target());
            let message = cstring_from_str_lossy(&record.args().to_string());
            let module_path = record.module_path().map(cstring_from_str_lossy);
            let file = record.file().map(cstring_from_str_lossy);
            let out = failapp_log_record_t {
                level,
                target: target.as_ptr(),
                message: message.as_ptr(),
                module_path: module_path.as_ref().map_or(ptr::null(), |value| value.as_ptr()),
                file: file.as_ref().map_or(ptr::null(), |value| value.as_ptr()),
                line: record.line().unwrap_or(0),
            };
            callback(&out, user_data);
        } else {
            eprintln!("{} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn resolve_level(config: Option<&failapp_log_config_t>) -> Result<LevelFilter, Error> {
    if let Ok(value) = std::env::var("FAILAPP_LOG") {
        return parse_level(&value).ok_or(Error::InvalidLogLevel(value));
    }
    let level = config
        .map(|config| config.level)
        .unwrap_or(failapp_log_level_t::FAILAPP_LOG_LEVEL_INFO);
    Ok(level.into())
}

fn ensure_logger(out_error: *mut *mut failapp_error_t) -> bool {
    LOGGER_INIT.call_once(|| {
        if log::set_logger(&*FAILAPP_LOGGER).is_ok() {
            LOGGER_STATE.store(LOGGER_STATE_READY, Ordering::SeqCst);
        } else {
            LOGGER_STATE.store(LOGGER_STATE_FAILED, Ordering::SeqCst);
        }
    });

    match LOGGER_STATE.load(Ordering::SeqCst) {
        LOGGER_STATE_READY => true,
        LOGGER_STATE_FAILED => {
            write_error(out_error, Error::LoggerConflict);
            false
        }
        _ => {
            write_error(out_error, Error::LoggerUninit);
            false
        }
    }
}

/// Initializes default logging configuration values.
///
/// The defaults select INFO logging and no callback.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_log_config_init(config: *mut failapp_log_config_t) {
    if config.is_null() {
        return;
    }
    // Safety: caller provided a writable config pointer.
    unsafe {
        *config = failapp_log_config_t {
            level: failapp_log_level_t::FAILAPP_LOG_LEVEL_INFO,
            callback: None,
            user_data: ptr::null_mut(),
        };
    }
}

/// Initializes logging for failapp.
///
/// If `config` is null, defaults are used. This function may be called
/// multiple times to update the logging configuration after initialization.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_log_init(
    config: *const failapp_log_config_t,
    out_error: *mut *mut failapp_error_t,
) -> bool {
    clear_error(out_error);

    // Safety: config is either null or a valid configuration provided by the caller.
    let config = unsafe { config.as_ref() };
    let level = match resolve_level(config) {
        Ok(level) => level,
        Err(err) => {
            write_error(out_error, err);
            return false;
        }
    };

    if !ensure_logger(out_error) {
        return false;
    }

    let callback = config.and_then(|config| config.callback);
    let user_data = config.map(|config| config.user_data as usize).unwrap_or(0);

    FAILAPP_LOGGER.update(LoggerConfig {
        level,
        callback,
        user_data,
    });
    log::set_max_level(level);
    true
}
