//! Diagnostic output on stderr.
//!
//! Warnings (duplicate targets, failed tree walks) are always shown. The
//! `-log` flag additionally enables the per-step progress lines. Stdout is
//! reserved for match paths.

use std::io::IsTerminal;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Returns the filter directive for the given `-log` setting.
#[must_use]
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose { "info" } else { "warn" }
}

/// Initialize logging. Only the first call takes effect.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::new(filter_directive(verbose));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .init();
    });
}
