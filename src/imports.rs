//! Import declarations for consuming a prebuilt failapp library.
//!
//! Compiled when the `exports` feature is disabled. The symbols below are
//! resolved from a failapp cdylib or staticlib at link time, and the
//! Rust-visible surface matches the export-mode definitions item for item.

use std::os::raw::{c_char, c_int};
use std::sync::atomic::AtomicI32;

use crate::types::{failapp_app_t, failapp_error_t, failapp_log_config_t};

#[link(name = "failapp")]
unsafe extern "C" {
    /// Process-wide integer slot exported across the library boundary.
    #[allow(non_upper_case_globals)]
    pub safe static failapp_value: AtomicI32;

    pub safe fn failapp_app_create() -> *mut failapp_app_t;
    pub safe fn failapp_app_free(app: *mut failapp_app_t);

    pub safe fn failapp_run() -> c_int;

    pub safe fn failapp_value_get() -> c_int;
    pub safe fn failapp_value_set(value: c_int);

    pub safe fn failapp_error_message(error: *const failapp_error_t) -> *const c_char;
    pub safe fn failapp_error_free(error: *mut failapp_error_t);

    pub safe fn failapp_log_config_init(config: *mut failapp_log_config_t);
    pub safe fn failapp_log_init(
        config: *const failapp_log_config_t,
        out_error: *mut *mut failapp_error_t,
    ) -> bool;

    pub safe fn failapp_version() -> *const c_char;
}
