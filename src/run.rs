//! The exported entry point.

use std::os::raw::c_int;
use std::panic;

use log::debug;

use crate::types::{FAILAPP_OK, FAILAPP_PANIC};

/// Runs the failapp entry point.
///
/// Never unwinds across the boundary: a caught panic is reported as
/// `FAILAPP_PANIC`. Otherwise returns `FAILAPP_OK`.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_run() -> c_int {
    let result = panic::catch_unwind(|| {
        debug!("failapp_run invoked");
        FAILAPP_OK
    });
    result.unwrap_or(FAILAPP_PANIC)
}
