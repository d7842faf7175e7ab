//! The process-wide debug toggle.
//!
//! Seeded once from the `DEBUG` environment variable (`DEBUG=TRUE` enables
//! it), and overridable at runtime with [`set_debug`]. Toggling takes
//! effect on the next debug-level call.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static DEBUG: AtomicBool = AtomicBool::new(false);
static ENV_INIT: Once = Once::new();

fn init_from_env() {
    ENV_INIT.call_once(|| {
        if env::var("DEBUG").map_or(false, |v| v == "TRUE") {
            DEBUG.store(true, Ordering::SeqCst);
        }
    });
}

/// Enables or disables debug-level emission for the whole process.
pub fn set_debug(enabled: bool) {
    init_from_env();
    DEBUG.store(enabled, Ordering::SeqCst);
}

/// Returns whether debug-level records are currently emitted.
pub fn debug_enabled() -> bool {
    init_from_env();
    DEBUG.load(Ordering::SeqCst)
}
