//! Kino - console logging facade with error-report forwarding
//!
//! Kino standardizes console output (one colorized, timestamped line per
//! value) and forwards error-level logs to Sentry with contextual tags.
//!
//! # Setup
//!
//! Initialize the global facade once at startup. Configuration implements
//! `serde` traits, so it can come from a configuration file.
//!
//! ```
//! use kino::InitOptions;
//!
//! let kino = kino::init(InitOptions::default()).expect("first init");
//! kino.default_logger().info("startup complete");
//! ```
//!
//! A second `init` fails with `AlreadyInitialized`; logging through the
//! global free functions before `init` fails with `Uninitialized`.
//!
//! # Logging
//!
//! Loggers are named per module and obtained from the registry:
//!
//! ```
//! # let kino = kino::handle().or_else(|_| kino::init(kino::InitOptions::default())).unwrap();
//! let log = kino.logger("payments");
//! log.success("charge settled");
//! log.warn("retrying provider");
//! ```
//!
//! # Error reporting
//!
//! `error` additionally captures the value once, iff an enabled client is
//! bound, with the caller's tags merged with a `module` tag:
//!
//! ```
//! use kino::CaptureContext;
//! # let kino = kino::handle().or_else(|_| kino::init(kino::InitOptions::default())).unwrap();
//! # let log = kino.logger("payments");
//! log.error_with(
//!     "charge failed",
//!     &CaptureContext::new().with_tag("provider", "acme"),
//! );
//! ```
//!
//! `trace(uid, context)` builds a failure callback: invoking it routes the
//! payload through `error` with an added `trace_uid` tag.
//!
//! For capabilities the facade does not wrap, the client handle and the
//! scope-isolation utility are re-exported ([`with_scope`], [`Hub`]).

pub mod config;
pub mod emitter;
pub mod errors;
pub mod facade;
pub mod global;
pub mod integrations;
pub mod logger;
mod report;

// Re-export commonly used types
pub use config::{
    DriverPackage, InitOptions, SentryOptions, UnhandledCaptureMode, DEFAULT_INSTANCE_TITLE,
    DEFAULT_LOCALE,
};
pub use emitter::{ConsoleSink, Emitter, MemorySink, Sink};
pub use errors::{KinoError, Result};
pub use facade::Kino;
pub use global::{
    debug, error, error_with, handle, info, init, log, logger, success, trace, warn,
};
pub use integrations::Integration;
pub use kino_core_types::{
    inspect, CaptureContext, Level, OutputStream, Payload, TraceUid, User, MAX_INSPECT_DEPTH,
};
pub use logger::Logger;

// Expose the minimal direct error-reporting API.
#[doc(inline)]
pub use sentry::{capture_error, configure_scope, with_scope, Hub};
