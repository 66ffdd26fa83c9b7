//! Line formatting and stream routing
//!
//! One line per value: `[<localized timestamp> - <label> - <LEVEL>] <value>`,
//! with the bracketed prefix colorized per level. Error and warning lines go
//! to stderr, everything else to stdout. Writes are unbuffered and a write
//! failure is fatal to the caller.

use std::sync::{Arc, Mutex};

use chrono::Local;
use colored::Colorize;
use kino_core_types::{Level, OutputStream, Payload};

/// Destination for formatted lines
///
/// The console sink is the production implementation; the memory sink
/// captures lines for deterministic assertions in tests and embedders.
pub trait Sink: Send + Sync {
    fn write_line(&self, stream: OutputStream, line: &str);
}

/// Sink writing to the process stdout/stderr
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write_line(&self, stream: OutputStream, line: &str) {
        match stream {
            OutputStream::Stdout => println!("{line}"),
            OutputStream::Stderr => eprintln!("{line}"),
        }
    }
}

/// Sink collecting lines in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(OutputStream, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far
    pub fn lines(&self) -> Vec<(OutputStream, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Sink for MemorySink {
    fn write_line(&self, stream: OutputStream, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((stream, line.to_owned()));
    }
}

/// Formats log lines and hands them to a sink
pub struct Emitter {
    locale: chrono::Locale,
    sink: Arc<dyn Sink>,
}

impl Emitter {
    pub fn new(locale_tag: &str, sink: Arc<dyn Sink>) -> Self {
        Self {
            locale: parse_locale(locale_tag),
            sink,
        }
    }

    /// Write one formatted line per value to the stream for `level`
    pub fn emit(&self, level: Level, label: &str, values: &[Payload]) {
        for value in values {
            let timestamp = Local::now().format_localized("%c", self.locale);
            let prefix = format!("[{timestamp} - {label} - {}]", level.tag());
            let line = format!("{} {}", prefix.as_str().color(level.color()), value.render());
            self.sink.write_line(level.stream(), &line);
        }
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

/// Map an IETF-style tag (`en-US`) to a chrono locale, falling back to
/// `en_US` for anything unknown
fn parse_locale(tag: &str) -> chrono::Locale {
    chrono::Locale::try_from(tag.replace('-', "_").as_str()).unwrap_or(chrono::Locale::en_US)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn emitter_with_sink() -> (Emitter, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let emitter = Emitter::new("en-US", sink.clone());
        (emitter, sink)
    }

    #[test]
    fn test_one_line_per_value() {
        let (emitter, sink) = emitter_with_sink();
        emitter.emit(
            Level::Info,
            "api",
            &[Payload::from("first"), Payload::from("second")],
        );
        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].1.ends_with("first"));
        assert!(lines[1].1.ends_with("second"));
    }

    #[test]
    fn test_line_contains_label_and_tag() {
        let (emitter, sink) = emitter_with_sink();
        emitter.emit(Level::Success, "worker", &[Payload::from("done")]);
        let (stream, line) = &sink.lines()[0];
        assert_eq!(*stream, OutputStream::Stdout);
        assert!(line.contains("worker"));
        assert!(line.contains("SUCCESS"));
    }

    #[test]
    fn test_error_and_warn_route_to_stderr() {
        let (emitter, sink) = emitter_with_sink();
        emitter.emit(Level::Error, "api", &[Payload::from("boom")]);
        emitter.emit(Level::Warn, "api", &[Payload::from("careful")]);
        emitter.emit(Level::Debug, "api", &[Payload::from("detail")]);
        let streams: Vec<OutputStream> = sink.lines().iter().map(|(s, _)| *s).collect();
        assert_eq!(
            streams,
            vec![
                OutputStream::Stderr,
                OutputStream::Stderr,
                OutputStream::Stdout
            ]
        );
    }

    #[test]
    fn test_record_payload_goes_through_inspector() {
        let (emitter, sink) = emitter_with_sink();
        emitter.emit(
            Level::Log,
            "api",
            &[Payload::from(json!({"code": 7, "deep": {"a": {"b": {"c": 1}}}}))],
        );
        let line = &sink.lines()[0].1;
        assert!(line.contains("code: 7"));
        assert!(line.contains("{…}"));
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let sink = Arc::new(MemorySink::new());
        let emitter = Emitter::new("xx-XX", sink.clone());
        emitter.emit(Level::Log, "api", &[Payload::from("still logs")]);
        assert_eq!(sink.lines().len(), 1);
    }
}
