//! Startup notice
//!
//! Hosts call [`announce`] once after their logger is set up. Nothing is
//! emitted on import.

use log::info;

/// Fixed informational line logged by [`announce`]
pub const STARTUP_NOTICE: &str = "short-date formatter initialized";

/// Log the startup notice at info level
pub fn announce() {
    info!("{} (v{})", STARTUP_NOTICE, env!("CARGO_PKG_VERSION"));
}
