//! The exported application handle.

use crate::types::failapp_app_t;

// Must not be zero-sized: every create has to hand out a distinct address.
struct AppHandle {
    _occupied: u8,
}

/// Creates a new application handle.
///
/// Always succeeds and has no observable side effects. The returned handle
/// must be released with `failapp_app_free`.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_app_create() -> *mut failapp_app_t {
    let handle = Box::new(AppHandle { _occupied: 0 });
    Box::into_raw(handle) as *mut failapp_app_t
}

/// Frees an application handle.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_app_free(app: *mut failapp_app_t) {
    if app.is_null() {
        return;
    }
    // Safety: app must be a valid handle allocated by failapp.
    unsafe {
        drop(Box::from_raw(app as *mut AppHandle));
    }
}
