//! Canonical tag keys for error reports
//!
//! These constants keep report metadata consistent between the facade and
//! anything asserting on captured events.

/// Tag carrying the label of the logger that produced a report
pub const TAG_MODULE: &str = "module";

/// Tag carrying the correlation uid added by failure callbacks
pub const TAG_TRACE_UID: &str = "trace_uid";
