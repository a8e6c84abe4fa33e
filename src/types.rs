//! Boundary type declarations for the failapp surface.
//!
//! Compiled in both linkage modes, the way a C header's type section serves
//! the library build and its consumers alike. Only the symbol definitions
//! are gated on the `exports` feature.

use std::os::raw::{c_char, c_int, c_void};

/// `failapp_run` completed normally.
pub const FAILAPP_OK: c_int = 0;

/// `failapp_run` caught a panic at the boundary.
pub const FAILAPP_PANIC: c_int = -1;

/// Opaque application handle for C callers.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct failapp_app_t;

/// Opaque error type for C callers.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct failapp_error_t;

/// Log level values for failapp logging.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(C)]
pub enum failapp_log_level_t {
    FAILAPP_LOG_LEVEL_OFF = 0,
    FAILAPP_LOG_LEVEL_ERROR = 1,
    FAILAPP_LOG_LEVEL_WARN = 2,
    FAILAPP_LOG_LEVEL_INFO = 3,
    FAILAPP_LOG_LEVEL_DEBUG = 4,
    FAILAPP_LOG_LEVEL_TRACE = 5,
}

/// Structured log record delivered to a C callback.
///
/// String pointers are only valid for the duration of the callback and must
/// not be retained. `module_path` and `file` may be null when unavailable.
/// `line` is 0 when unknown.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct failapp_log_record_t {
    pub level: failapp_log_level_t,
    pub target: *const c_char,
    pub message: *const c_char,
    pub module_path: *const c_char,
    pub file: *const c_char,
    pub line: u32,
}

/// Callback invoked for each log record emitted by failapp.
///
/// The callback may be invoked from any thread that emits a log record.
#[allow(non_camel_case_types)]
pub type failapp_log_callback_t =
    Option<extern "C" fn(record: *const failapp_log_record_t, user_data: *mut c_void)>;

/// Configuration for initializing failapp logging.
///
/// `level` selects the maximum level delivered; the `FAILAPP_LOG`
/// environment variable, when set, overrides it. If `callback` is null,
/// records are written to stderr, otherwise they are delivered to the
/// callback with `user_data` forwarded unchanged.
#[allow(non_camel_case_types)]
#[repr(C)]
pub struct failapp_log_config_t {
    pub level: failapp_log_level_t,
    pub callback: failapp_log_callback_t,
    pub user_data: *mut c_void,
}
