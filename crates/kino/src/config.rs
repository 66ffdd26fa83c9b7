//! Initialization options
//!
//! Options derive `Deserialize` with defaults so they can be loaded from a
//! configuration file as well as built in code with struct literals.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Label of the default logger when none is configured
pub const DEFAULT_INSTANCE_TITLE: &str = "GLOBAL";

/// Locale used for timestamp formatting when none is configured
pub const DEFAULT_LOCALE: &str = "en-US";

/// How unhandled failures reach the error tracker
///
/// The two variants are mutually exclusive by construction: either the SDK's
/// own integrations own the concern, or the facade installs a process panic
/// hook that routes through `error`. There is no way to enable both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhandledCaptureMode {
    /// Delegate uncaught-failure capture to the SDK's integrations
    #[default]
    Sdk,
    /// Install a panic hook that routes panics through the default logger
    SelfManaged,
}

/// Database driver whose instrumentation should be enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverPackage {
    Knex,
    Mysql2,
}

/// Pass-through configuration for the error-tracking client
///
/// Unset numeric knobs fall back to the facade defaults (trace sample rate
/// 0.1, breadcrumb cap 5) when the client is initialized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SentryOptions {
    pub dsn: Option<String>,
    pub enabled: bool,
    pub release: Option<String>,
    pub environment: Option<String>,
    pub debug: bool,
    pub traces_sample_rate: Option<f32>,
    pub max_breadcrumbs: Option<usize>,
}

impl Default for SentryOptions {
    fn default() -> Self {
        Self {
            dsn: None,
            enabled: true,
            release: None,
            environment: None,
            debug: false,
            traces_sample_rate: None,
            max_breadcrumbs: None,
        }
    }
}

/// Options accepted by `init`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InitOptions {
    /// Error-tracking client configuration; absent means no client is set up
    pub sentry: Option<SentryOptions>,
    /// Database drivers whose instrumentation to enable
    pub packages: Vec<DriverPackage>,
    /// Enable application-not-responding detection
    pub anr: bool,
    /// Label for the default logger instance
    pub default_instance_title: Option<String>,
    /// Locale for timestamp formatting, e.g. `en-US`
    pub locale: Option<String>,
    /// Ownership of uncaught-failure capture
    pub unhandled_capture: UnhandledCaptureMode,
    /// Unrecognized keys, kept for forward compatibility
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl InitOptions {
    /// Default logger label, falling back to [`DEFAULT_INSTANCE_TITLE`]
    pub fn title(&self) -> &str {
        self.default_instance_title
            .as_deref()
            .unwrap_or(DEFAULT_INSTANCE_TITLE)
    }

    /// Locale tag, falling back to [`DEFAULT_LOCALE`]
    pub fn locale_tag(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}
