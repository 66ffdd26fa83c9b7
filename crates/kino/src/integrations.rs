//! Conditional assembly of the enabled-instrumentation list
//!
//! The list keeps the instrumentation vocabulary of the hosted error
//! tracker as a domain model. Only a subset has a native SDK equivalent
//! (see `report`); the full list stays observable on the handle so callers
//! and tests can see exactly what a given configuration enabled.

use serde::Serialize;

use crate::config::{DriverPackage, InitOptions, UnhandledCaptureMode};

/// A named unit of instrumentation enabled in the error-tracking client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Integration {
    FunctionToString,
    LinkedErrors,
    ConsoleCapture,
    FetchInstrumentation,
    HttpInstrumentation,
    ContextLines,
    ChildProcess,
    Modules,
    UncaughtException,
    UnhandledRejection,
    Anr,
    Knex,
    Mysql2,
}

impl Integration {
    pub fn name(&self) -> &'static str {
        match self {
            Integration::FunctionToString => "FunctionToString",
            Integration::LinkedErrors => "LinkedErrors",
            Integration::ConsoleCapture => "ConsoleCapture",
            Integration::FetchInstrumentation => "FetchInstrumentation",
            Integration::HttpInstrumentation => "HttpInstrumentation",
            Integration::ContextLines => "ContextLines",
            Integration::ChildProcess => "ChildProcess",
            Integration::Modules => "Modules",
            Integration::UncaughtException => "UncaughtException",
            Integration::UnhandledRejection => "UnhandledRejection",
            Integration::Anr => "Anr",
            Integration::Knex => "Knex",
            Integration::Mysql2 => "Mysql2",
        }
    }
}

impl std::fmt::Display for Integration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Instrumentation always enabled regardless of configuration
const BASELINE: &[Integration] = &[
    Integration::FunctionToString,
    Integration::LinkedErrors,
    Integration::ConsoleCapture,
    Integration::FetchInstrumentation,
    Integration::HttpInstrumentation,
    Integration::ContextLines,
    Integration::ChildProcess,
    Integration::Modules,
];

/// Assemble the instrumentation list for a configuration
///
/// Uncaught-failure integrations appear only when the SDK owns that concern;
/// self-managed capture replaces them with the facade's panic hook. ANR and
/// driver instrumentation are opt-in.
pub fn assemble(options: &InitOptions) -> Vec<Integration> {
    let mut list = BASELINE.to_vec();

    if options.unhandled_capture == UnhandledCaptureMode::Sdk {
        list.push(Integration::UncaughtException);
        list.push(Integration::UnhandledRejection);
    }

    if options.anr {
        list.push(Integration::Anr);
    }

    if options.packages.contains(&DriverPackage::Knex) {
        list.push(Integration::Knex);
    }
    if options.packages.contains(&DriverPackage::Mysql2) {
        list.push(Integration::Mysql2);
    }

    list
}
