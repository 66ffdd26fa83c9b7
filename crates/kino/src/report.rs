//! Bridge to the Sentry client
//!
//! Client bootstrap happens once during `init`; capture is attempted only
//! when the bound client reports itself enabled, so running without a DSN
//! (or without a `sentry` section at all) silently skips the side channel.

use std::borrow::Cow;
use std::sync::Arc;

use kino_core_types::{CaptureContext, Payload};

use crate::config::{SentryOptions, UnhandledCaptureMode};

/// Facade default for the trace sample rate
const DEFAULT_TRACES_SAMPLE_RATE: f32 = 0.1;

/// Facade default for the breadcrumb cap
const DEFAULT_MAX_BREADCRUMBS: usize = 5;

/// Initialize the Sentry client from the pass-through options
///
/// Self-managed unhandled capture swaps the SDK's default integration set
/// for one without the panic integration; the facade's own hook owns that
/// concern instead, so a panic can never be reported twice.
pub(crate) fn init_client(
    options: &SentryOptions,
    mode: UnhandledCaptureMode,
) -> Option<sentry::ClientInitGuard> {
    if !options.enabled {
        return None;
    }

    let mut client_options = sentry::ClientOptions {
        traces_sample_rate: options
            .traces_sample_rate
            .unwrap_or(DEFAULT_TRACES_SAMPLE_RATE),
        max_breadcrumbs: options.max_breadcrumbs.unwrap_or(DEFAULT_MAX_BREADCRUMBS),
        auto_session_tracking: false,
        debug: options.debug,
        ..Default::default()
    };
    client_options.dsn = options.dsn.as_deref().and_then(|dsn| dsn.parse().ok());
    client_options.release = options.release.clone().map(Cow::Owned);
    client_options.environment = options.environment.clone().map(Cow::Owned);

    if mode == UnhandledCaptureMode::SelfManaged {
        client_options.default_integrations = false;
        client_options.integrations = vec![
            Arc::new(sentry::integrations::backtrace::AttachStacktraceIntegration::default()),
            Arc::new(sentry::integrations::backtrace::ProcessStacktraceIntegration::default()),
            Arc::new(sentry::integrations::contexts::ContextIntegration::default()),
        ];
    }

    Some(sentry::init(client_options))
}

/// Whether a client is bound and enabled on the current hub
pub(crate) fn client_active() -> bool {
    sentry::Hub::current()
        .client()
        .map_or(false, |client| client.is_enabled())
}

/// Capture one report for an error-level payload
///
/// No-op when no enabled client is bound. Tags are the caller's merged with
/// the `module` tag; extras and user pass through unchanged.
pub(crate) fn capture(module_label: &str, payload: &Payload, context: &CaptureContext) {
    if !client_active() {
        return;
    }

    sentry::with_scope(
        |scope| {
            for (key, value) in context.merged_tags(module_label) {
                scope.set_tag(&key, value);
            }
            for (key, value) in &context.extras {
                scope.set_extra(key, value.clone());
            }
            if let Some(user) = &context.user {
                scope.set_user(Some(sentry::protocol::User {
                    id: user.id.clone(),
                    username: user.username.clone(),
                    ..Default::default()
                }));
            }
        },
        || match payload {
            Payload::Failure(err) => {
                sentry::capture_error(err.as_ref());
            }
            other => {
                sentry::capture_message(&other.report_message(), sentry::Level::Error);
            }
        },
    );
}
