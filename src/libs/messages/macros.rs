//! Output macros for user-facing messages.
//!
//! In normal mode messages are printed plainly: confirmations to stdout and
//! errors to stderr. When debug mode is on (`--verbose` or `DCL_DEBUG`)
//! the same messages go through `tracing` so they interleave with request
//! logs. `RUST_LOG` alone never reroutes them.
//!
//! ```text
//! msg_success!(..) ──▶ debug mode? ──yes──▶ tracing::info!
//!                                  └─no───▶ println!
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dcl::{msg_error, msg_success};
//! use dcl::libs::messages::Message;
//!
//! msg_success!(Message::StartedTracking("gtd_meeting".to_string()));
//! msg_error!(Message::NothingToStop);
//! ```

use std::sync::OnceLock;

/// Enables debug mode when set to any non-empty value.
pub const DEBUG_ENV: &str = "DCL_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages should be routed through `tracing`.
///
/// Evaluated once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var_os(DEBUG_ENV).is_some_and(|value| !value.is_empty()))
}

/// Forces debug mode on, used by `--verbose`. Has no effect once the mode
/// has been read.
#[doc(hidden)]
pub fn enable_debug_mode() {
    let _ = DEBUG_MODE.set(true);
}

/// Prints a plain message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a confirmation.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning to stderr.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️ {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}
