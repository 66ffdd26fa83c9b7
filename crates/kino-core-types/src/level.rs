//! Log levels and their fixed tag, color, and stream mappings

use colored::Color;
use serde::{Deserialize, Serialize};

/// Output stream a log line is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Log level
///
/// Each level carries a fixed uppercase tag, a fixed prefix color, and a
/// fixed output stream. `Success` is a first-class level rather than a
/// decorated `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Log,
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Level {
    /// The uppercase tag rendered inside the bracketed prefix
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Log => "LOG",
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
        }
    }

    /// Prefix color for this level
    pub fn color(&self) -> Color {
        match self {
            Level::Log => Color::White,
            Level::Info => Color::Cyan,
            Level::Success => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
            Level::Debug => Color::Magenta,
        }
    }

    /// Stream this level writes to
    ///
    /// Error and warning lines go to stderr, everything else to stdout.
    pub fn stream(&self) -> OutputStream {
        match self {
            Level::Error | Level::Warn => OutputStream::Stderr,
            _ => OutputStream::Stdout,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
