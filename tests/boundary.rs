//! Exercises the exported surface the way a consumer module would.

use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

use failapp::*;

#[test]
fn app_handles_are_distinct_and_free_tolerates_null() {
    let first = failapp_app_create();
    let second = failapp_app_create();
    assert!(!first.is_null());
    assert!(!second.is_null());
    assert_ne!(first, second);
    failapp_app_free(first);
    failapp_app_free(second);
    failapp_app_free(ptr::null_mut());
}

#[test]
fn exported_value_starts_at_zero_and_round_trips() {
    // No other test writes the slot, so the load-time value is observable.
    assert_eq!(failapp_value.load(Ordering::SeqCst), 0);
    assert_eq!(failapp_value_get(), 0);

    failapp_value_set(41);
    assert_eq!(failapp_value_get(), 41);
    assert_eq!(failapp_value.load(Ordering::SeqCst), 41);

    failapp_value.store(-7, Ordering::SeqCst);
    assert_eq!(failapp_value_get(), -7);
}

#[test]
fn version_reports_the_crate_version() {
    let version = failapp_version();
    assert!(!version.is_null());
    // Safety: failapp_version returns a NUL-terminated static string.
    let version = unsafe { CStr::from_ptr(version) }.to_str().unwrap();
    assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
    assert!(version.contains("rustc"));
}

static RECORDS: AtomicUsize = AtomicUsize::new(0);

extern "C" fn count_records(record: *const failapp_log_record_t, user_data: *mut c_void) {
    assert!(user_data.is_null());
    assert!(!record.is_null());
    // Safety: record pointers are valid for the duration of the callback.
    let record = unsafe { &*record };
    assert!(!record.target.is_null());
    assert!(!record.message.is_null());
    RECORDS.fetch_add(1, Ordering::SeqCst);
}

// Logging and failapp_run share the process-wide logger, so everything that
// touches it lives in one test.
#[test]
fn logging_is_rejected_reconfigured_and_observed() {
    // An invalid FAILAPP_LOG value must fail before the logger is installed.
    // Safety: no other test in this binary reads or writes FAILAPP_LOG.
    unsafe { std::env::set_var("FAILAPP_LOG", "loud") };
    let mut error: *mut failapp_error_t = ptr::null_mut();
    assert!(!failapp_log_init(ptr::null(), &mut error));
    assert!(!error.is_null());
    // Safety: failapp_error_message returns a NUL-terminated string for a live handle.
    let message = unsafe { CStr::from_ptr(failapp_error_message(error)) };
    assert!(message.to_str().unwrap().contains("FAILAPP_LOG"));
    failapp_error_free(error);
    // Safety: as above.
    unsafe { std::env::remove_var("FAILAPP_LOG") };

    // Install the logger with a counting callback at TRACE.
    let mut config = failapp_log_config_t {
        level: failapp_log_level_t::FAILAPP_LOG_LEVEL_OFF,
        callback: None,
        user_data: ptr::null_mut(),
    };
    failapp_log_config_init(&mut config);
    assert_eq!(config.level, failapp_log_level_t::FAILAPP_LOG_LEVEL_INFO);
    config.level = failapp_log_level_t::FAILAPP_LOG_LEVEL_TRACE;
    config.callback = Some(count_records);
    let mut error: *mut failapp_error_t = ptr::null_mut();
    assert!(failapp_log_init(&config, &mut error));
    assert!(error.is_null());

    let before = RECORDS.load(Ordering::SeqCst);
    assert_eq!(failapp_run(), FAILAPP_OK);
    assert!(RECORDS.load(Ordering::SeqCst) > before);

    // Reconfiguration takes effect for subsequent records.
    config.level = failapp_log_level_t::FAILAPP_LOG_LEVEL_OFF;
    assert!(failapp_log_init(&config, ptr::null_mut()));
    let quiet = RECORDS.load(Ordering::SeqCst);
    assert_eq!(failapp_run(), FAILAPP_OK);
    assert_eq!(failapp_run(), FAILAPP_OK);
    assert_eq!(RECORDS.load(Ordering::SeqCst), quiet);
}
