//! Logger instances
//!
//! A logger is a cheap clonable handle carrying an immutable module label.
//! Every level method formats and emits; only `error` has the capture side
//! channel.

use std::sync::Arc;

use kino_core_types::{schema, CaptureContext, Level, Payload, TraceUid};

use crate::emitter::Emitter;
use crate::report;

/// A named logger bound to one module label
#[derive(Clone)]
pub struct Logger {
    label: Arc<str>,
    emitter: Arc<Emitter>,
}

impl Logger {
    pub(crate) fn new(label: &str, emitter: Arc<Emitter>) -> Self {
        Self {
            label: Arc::from(label),
            emitter,
        }
    }

    /// Module label this logger was created with
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Emit one line per value at the given level, no side channel
    pub fn emit<I>(&self, level: Level, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Payload>,
    {
        let values: Vec<Payload> = values.into_iter().map(Into::into).collect();
        self.emitter.emit(level, &self.label, &values);
    }

    pub fn log(&self, value: impl Into<Payload>) {
        self.emit(Level::Log, [value]);
    }

    pub fn info(&self, value: impl Into<Payload>) {
        self.emit(Level::Info, [value]);
    }

    pub fn success(&self, value: impl Into<Payload>) {
        self.emit(Level::Success, [value]);
    }

    pub fn warn(&self, value: impl Into<Payload>) {
        self.emit(Level::Warn, [value]);
    }

    pub fn debug(&self, value: impl Into<Payload>) {
        self.emit(Level::Debug, [value]);
    }

    /// Emit an error line and, when the error tracker is active, capture
    /// the value once with a `module` tag
    pub fn error(&self, value: impl Into<Payload>) {
        self.error_with(value, &CaptureContext::default());
    }

    /// `error` with caller-supplied capture context
    pub fn error_with(&self, value: impl Into<Payload>, context: &CaptureContext) {
        let payload = value.into();
        self.emitter
            .emit(Level::Error, &self.label, std::slice::from_ref(&payload));
        report::capture(&self.label, &payload, context);
    }

    /// Build a failure callback bound to a trace uid
    ///
    /// Pure closure construction; nothing happens until the callback is
    /// invoked, at which point the payload goes through
    /// [`error_with`](Self::error_with) with the context plus a `trace_uid` tag.
    pub fn trace(
        &self,
        uid: impl Into<TraceUid>,
        context: CaptureContext,
    ) -> impl Fn(Payload) + Send + Sync + 'static {
        let logger = self.clone();
        let uid = uid.into();
        move |payload: Payload| {
            let context = context
                .clone()
                .with_tag(schema::TAG_TRACE_UID, uid.as_str());
            logger.error_with(payload, &context);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
