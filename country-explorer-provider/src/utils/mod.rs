//! Utility modules.

/// Keeps large response bodies out of the log.
pub mod log_sanitizer;
