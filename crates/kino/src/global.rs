//! Once-only global handle and its free-function mirrors
//!
//! `init` performs the one-way Uninitialized → Initialized transition; an
//! atomic started flag elects the winner before anything is constructed, so
//! a racing second call loses cleanly instead of tearing state. Every free
//! function here answers `Uninitialized` before `init` and
//! `AlreadyInitialized` on a second `init`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use kino_core_types::{CaptureContext, Payload, TraceUid};

use crate::config::{InitOptions, UnhandledCaptureMode};
use crate::errors::{KinoError, Result};
use crate::facade::Kino;
use crate::logger::Logger;

static STARTED: AtomicBool = AtomicBool::new(false);
static GLOBAL: OnceLock<Kino> = OnceLock::new();

/// Initialize the global facade, once per process
///
/// Sets up the console emitter, the default logger, the Sentry client when
/// configured, and the panic hook when unhandled capture is self-managed.
/// The winning call is elected atomically before anything is constructed,
/// so a losing racer never touches the error tracker.
pub fn init(options: InitOptions) -> Result<&'static Kino> {
    if STARTED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(KinoError::AlreadyInitialized);
    }

    let mode = options.unhandled_capture;
    // Only the thread that flipped STARTED reaches this point.
    let kino = Kino::with_console(options);
    GLOBAL
        .set(kino)
        .map_err(|_| KinoError::AlreadyInitialized)?;

    if mode == UnhandledCaptureMode::SelfManaged {
        install_panic_hook();
    }

    handle()
}

/// The global handle, or `Uninitialized` before `init`
pub fn handle() -> Result<&'static Kino> {
    GLOBAL.get().ok_or(KinoError::Uninitialized)
}

/// Route panics through the default logger's `error` path
///
/// The previous hook still runs afterwards, so default panic output and
/// abort semantics are unchanged.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Some(kino) = GLOBAL.get() {
            kino.default_logger().error(Payload::Text(info.to_string()));
        }
        previous(info);
    }));
}

/// Get or create a registered logger on the global handle
pub fn logger(name: &str) -> Result<Logger> {
    handle().map(|kino| kino.logger(name))
}

pub fn log(value: impl Into<Payload>) -> Result<()> {
    handle().map(|kino| kino.default_logger().log(value))
}

pub fn info(value: impl Into<Payload>) -> Result<()> {
    handle().map(|kino| kino.default_logger().info(value))
}

pub fn success(value: impl Into<Payload>) -> Result<()> {
    handle().map(|kino| kino.default_logger().success(value))
}

pub fn warn(value: impl Into<Payload>) -> Result<()> {
    handle().map(|kino| kino.default_logger().warn(value))
}

pub fn debug(value: impl Into<Payload>) -> Result<()> {
    handle().map(|kino| kino.default_logger().debug(value))
}

pub fn error(value: impl Into<Payload>) -> Result<()> {
    handle().map(|kino| kino.default_logger().error(value))
}

pub fn error_with(value: impl Into<Payload>, context: &CaptureContext) -> Result<()> {
    handle().map(|kino| kino.default_logger().error_with(value, context))
}

/// Build a failure callback on the default logger
pub fn trace(
    uid: impl Into<TraceUid>,
    context: CaptureContext,
) -> Result<impl Fn(Payload) + Send + Sync + 'static> {
    handle().map(|kino| kino.default_logger().trace(uid, context))
}
