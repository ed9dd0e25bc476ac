//! Utility modules.

/// Log sanitization utilities to keep tokens and large bodies out of logs.
pub mod log_sanitizer;
