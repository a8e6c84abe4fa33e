use std::ffi::CString;
use std::fmt::Display;
use std::os::raw::c_char;
use std::ptr;

use crate::types::failapp_error_t;

/// Failure cases surfaced to C callers through `failapp_error_t` handles.
#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("invalid FAILAPP_LOG value `{0}`: expected off, error, warn, info, debug, or trace")]
    InvalidLogLevel(String),
    #[error("logging already initialized by another logger")]
    LoggerConflict,
    #[error("logging failed to initialize")]
    LoggerUninit,
}

struct ErrorHandle {
    message: CString,
}

pub(crate) fn cstring_from_str_lossy(value: &str) -> CString {
    if value.as_bytes().contains(&0) {
        let sanitized: String = value.chars().map(|c| if c == '\0' { ' ' } else { c }).collect();
        CString::new(sanitized).unwrap_or_else(|_| CString::new("invalid utf-8").unwrap())
    } else {
        CString::new(value).unwrap_or_else(|_| CString::new("invalid utf-8").unwrap())
    }
}

pub(crate) fn clear_error(out_error: *mut *mut failapp_error_t) {
    if !out_error.is_null() {
        // Safety: caller provided a valid out_error pointer.
        unsafe {
            *out_error = ptr::null_mut();
        }
    }
}

pub(crate) fn write_error(out_error: *mut *mut failapp_error_t, error: impl Display) {
    if out_error.is_null() {
        return;
    }
    let message = cstring_from_str_lossy(&error.to_string());
    let handle = Box::new(ErrorHandle { message });
    // Safety: out_error is non-null and points to writable memory.
    unsafe {
        *out_error = Box::into_raw(handle) as *mut failapp_error_t;
    }
}

/// Returns the message for an error allocated by failapp.
///
/// The returned pointer is valid as long as the error handle is alive.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_error_message(error: *const failapp_error_t) -> *const c_char {
    if error.is_null() {
        return ptr::null();
    }
    // Safety: error must be a valid handle allocated by failapp.
    let handle = unsafe { &*(error as *const ErrorHandle) };
    handle.message.as_ptr()
}

/// Frees an error returned by failapp.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_error_free(error: *mut failapp_error_t) {
    if error.is_null() {
        return;
    }
    // Safety: error must be a valid handle allocated by failapp.
    unsafe {
        drop(Box::from_raw(error as *mut ErrorHandle));
    }
}
