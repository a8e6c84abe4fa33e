//! Version reporting for the failapp library.

use std::ffi::CString;
use std::os::raw::c_char;

use once_cell::sync::Lazy;

use crate::error::cstring_from_str_lossy;

static VERSION: Lazy<CString> = Lazy::new(|| {
    cstring_from_str_lossy(concat!(
        env!("CARGO_PKG_VERSION"),
        " (rustc ",
        env!("VERGEN_RUSTC_SEMVER"),
        ", built ",
        env!("VERGEN_BUILD_TIMESTAMP"),
        ")"
    ))
});

/// Returns the failapp version string.
///
/// The returned pointer is static and must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_version() -> *const c_char {
    VERSION.as_ptr()
}
