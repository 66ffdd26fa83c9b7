//! Core types shared across the Kino logging facade
//!
//! This crate provides the vocabulary used by both the emitter and the
//! error-reporting bridge:
//!
//! - **Levels**: the fixed level set with its tag, color, and stream mapping
//! - **Payloads**: the typed union of loggable kinds and the bounded inspector
//! - **Capture context**: tags/extras/user metadata attached to error reports
//! - **Trace uids**: correlation ids for failure callbacks
//! - **Schema constants**: canonical tag keys

pub mod context;
pub mod level;
pub mod payload;
pub mod schema;
pub mod trace;

pub use context::{CaptureContext, User};
pub use level::{Level, OutputStream};
pub use payload::{inspect, Payload, MAX_INSPECT_DEPTH};
pub use trace::TraceUid;
