//! The facade handle
//!
//! A `Kino` owns the process-wide configuration: locale, default logger,
//! the logger registry, the assembled instrumentation list, and the Sentry
//! client guard. `Kino::new` is the injectable constructor used by tests
//! and embedders; the once-only global wrapper lives in `global`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::{InitOptions, UnhandledCaptureMode};
use crate::emitter::{ConsoleSink, Emitter, Sink};
use crate::integrations::{assemble, Integration};
use crate::logger::Logger;
use crate::report;

pub struct Kino {
    locale: String,
    emitter: Arc<Emitter>,
    default_logger: Logger,
    registry: Mutex<HashMap<String, Logger>>,
    integrations: Vec<Integration>,
    unhandled_capture: UnhandledCaptureMode,
    // Client this handle initialized, if any.
    client: Option<Arc<sentry::Client>>,
    // Held for the process lifetime; dropping it would flush and disable
    // the client.
    _sentry_guard: Option<sentry::ClientInitGuard>,
}

impl Kino {
    /// Construct a handle writing to the given sink
    ///
    /// Initializes the Sentry client iff `options.sentry` is present (and
    /// enabled); otherwise the capture side channel stays inert.
    pub fn new(options: InitOptions, sink: Arc<dyn Sink>) -> Self {
        let locale = options.locale_tag().to_owned();
        let title = options.title().to_owned();
        let emitter = Arc::new(Emitter::new(&locale, sink));
        let integrations = assemble(&options);
        let sentry_guard = options
            .sentry
            .as_ref()
            .and_then(|sentry| report::init_client(sentry, options.unhandled_capture));
        // init_client bound the fresh client to the hub; snapshot it so the
        // accessor answers for this handle even if the hub is later rebound.
        let client = sentry_guard
            .as_ref()
            .and_then(|_| sentry::Hub::current().client());
        let default_logger = Logger::new(&title, emitter.clone());

        Self {
            locale,
            emitter,
            default_logger,
            registry: Mutex::new(HashMap::new()),
            integrations,
            unhandled_capture: options.unhandled_capture,
            client,
            _sentry_guard: sentry_guard,
        }
    }

    /// Construct a handle writing to the process stdout/stderr
    pub fn with_console(options: InitOptions) -> Self {
        Self::new(options, Arc::new(ConsoleSink))
    }

    /// The default logger instance
    pub fn default_logger(&self) -> &Logger {
        &self.default_logger
    }

    /// Get or create the logger registered under `name`
    ///
    /// One logger exists per name; repeated calls return clones of the
    /// same instance.
    pub fn logger(&self, name: &str) -> Logger {
        let mut registry = match self.registry.lock() {
            Ok(registry) => registry,
            Err(poisoned) => poisoned.into_inner(),
        };
        registry
            .entry(name.to_owned())
            .or_insert_with(|| Logger::new(name, self.emitter.clone()))
            .clone()
    }

    /// Instrumentation enabled by the configuration this handle was built from
    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }

    /// Configured locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Ownership of uncaught-failure capture
    pub fn unhandled_capture(&self) -> UnhandledCaptureMode {
        self.unhandled_capture
    }

    /// The underlying error-tracking client, for direct use
    ///
    /// Answers with the client this handle initialized. Handles built
    /// without a `sentry` section fall back to whatever client the current
    /// hub holds, which may have been bound by another handle or by direct
    /// SDK use.
    pub fn client(&self) -> Option<Arc<sentry::Client>> {
        self.client
            .clone()
            .or_else(|| sentry::Hub::current().client())
    }

    /// The hub bound to the current thread, not a per-handle resource;
    /// pair with [`crate::with_scope`] for scope isolation
    pub fn hub(&self) -> Arc<sentry::Hub> {
        sentry::Hub::current()
    }
}

impl std::fmt::Debug for Kino {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kino")
            .field("locale", &self.locale)
            .field("default_logger", &self.default_logger)
            .field("integrations", &self.integrations)
            .field("unhandled_capture", &self.unhandled_capture)
            .finish_non_exhaustive()
    }
}
