//! Tracing setup for the `dcl` binary.
//!
//! `RUST_LOG` only selects which log records are written. User-facing
//! messages are routed through `tracing` solely in debug mode (`-v` or
//! `DCL_DEBUG`), and then the `dcl` target is always enabled so no
//! confirmation or error line is filtered away.

use super::messages::macros::{enable_debug_mode, is_debug_mode};
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "warn";
const DEBUG_DIRECTIVE: &str = "dcl=debug";

/// Builds the `EnvFilter` directives for the given mode and `RUST_LOG` value.
pub fn filter_directives(debug: bool, rust_log: Option<&str>) -> String {
    let base = rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVES);

    if debug {
        format!("{},{}", base, DEBUG_DIRECTIVE)
    } else {
        base.to_string()
    }
}

/// Installs the global subscriber writing to stderr.
pub fn init(verbose: bool) {
    if verbose {
        enable_debug_mode();
    }
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(filter_directives(is_debug_mode(), rust_log.as_deref()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
