//! C ABI boundary for the failapp shared library.
//!
//! With the `exports` feature (the default) this crate defines the boundary
//! symbols, so a cdylib or staticlib build makes them visible to consumers.
//! Without it, the same surface is compiled as import declarations resolved
//! from a previously built failapp library at link time.

mod types;

pub use types::*;

#[cfg(feature = "exports")]
mod app;
#[cfg(feature = "exports")]
mod error;
#[cfg(feature = "exports")]
mod logging;
#[cfg(feature = "exports")]
mod run;
#[cfg(feature = "exports")]
mod state;
#[cfg(feature = "exports")]
mod version;

#[cfg(feature = "exports")]
pub use app::{failapp_app_create, failapp_app_free};
#[cfg(feature = "exports")]
pub use error::{failapp_error_free, failapp_error_message};
#[cfg(feature = "exports")]
pub use logging::{failapp_log_config_init, failapp_log_init};
#[cfg(feature = "exports")]
pub use run::failapp_run;
#[cfg(feature = "exports")]
pub use state::{failapp_value, failapp_value_get, failapp_value_set};
#[cfg(feature = "exports")]
pub use version::failapp_version;

#[cfg(not(feature = "exports"))]
mod imports;

#[cfg(not(feature = "exports"))]
pub use imports::*;
