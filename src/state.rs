//! The exported process-wide integer.

use std::os::raw::c_int;
use std::sync::atomic::{AtomicI32, Ordering};

/// Process-wide integer slot exported across the library boundary.
///
/// Consumer modules address it by name as a 32-bit integer. It starts at
/// zero at module load and carries no meaning of its own; in-library access
/// goes through `failapp_value_get` and `failapp_value_set`.
#[allow(non_upper_case_globals)]
#[unsafe(no_mangle)]
pub static failapp_value: AtomicI32 = AtomicI32::new(0);

/// Reads the exported integer.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_value_get() -> c_int {
    failapp_value.load(Ordering::SeqCst)
}

/// Writes the exported integer.
#[unsafe(no_mangle)]
pub extern "C" fn failapp_value_set(value: c_int) {
    failapp_value.store(value, Ordering::SeqCst);
}
