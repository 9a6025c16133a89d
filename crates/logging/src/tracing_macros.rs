//! Convenience macros for escp-specific tracing.
//!
//! These wrap the standard tracing macros with the subsystem targets that
//! `ESCP_LOG` directives select on.

/// Emit a filter decision trace.
///
/// # Example
/// ```ignore
/// trace_filter!("excluded {} by pattern {}", path, pattern);
/// ```
#[macro_export]
macro_rules! trace_filter {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "escp::filter", $($arg)*)
    };
}

/// Emit a file list trace.
///
/// # Example
/// ```ignore
/// trace_flist!("found {} entries in {:?}", count, dir);
/// ```
#[macro_export]
macro_rules! trace_flist {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "escp::flist", $($arg)*)
    };
}

/// Emit a copy operation trace.
///
/// # Example
/// ```ignore
/// trace_copy!("copying {} to {}", source, destination);
/// ```
#[macro_export]
macro_rules! trace_copy {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "escp::copy", $($arg)*)
    };
}

/// Emit a configuration trace (pattern loading, option resolution).
///
/// # Example
/// ```ignore
/// trace_config!("loaded {} ignore patterns from {}", count, path);
/// ```
#[macro_export]
macro_rules! trace_config {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "escp::config", $($arg)*)
    };
}
