//! Structured logging for the mediafs workspace.
//!
//! Thin setup layer over `emit`, configured from the `MEDIAFS_LOG`
//! environment variable:
//!
//! - `MEDIAFS_LOG=off` (default) - silent
//! - `MEDIAFS_LOG=error|warn|info|debug` - minimum level emitted to stderr

use std::sync::Once;

// Re-export emit so the macros below expand against our copy.
pub use emit;

static INIT: Once = Once::new();

fn min_level(name: &str) -> Option<emit::Level> {
    match name {
        "error" => Some(emit::Level::Error),
        "warn" => Some(emit::Level::Warn),
        "info" => Some(emit::Level::Info),
        "debug" => Some(emit::Level::Debug),
        _ => None,
    }
}

/// Initialize logging from `MEDIAFS_LOG`.
///
/// Safe to call more than once; only the first call does anything.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let configured = std::env::var("MEDIAFS_LOG").unwrap_or_else(|_| "off".to_string());
        if configured == "off" {
            return;
        }

        let level = match min_level(&configured) {
            Some(level) => level,
            None => {
                eprintln!(
                    "Warning: unknown MEDIAFS_LOG value '{}', using 'info'",
                    configured
                );
                emit::Level::Info
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        // The emit runtime must outlive all logging call sites.
        std::mem::forget(rt);
    });
}

pub use init_diagnostics as init;

/// Log normal operations: uploads, deletes, container bootstrap.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log internal detail: cache hits, path normalization, listing counts.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable conditions: missing blobs, overwrite warnings.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures: store errors, failed deletes.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}
