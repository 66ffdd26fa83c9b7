//! End-to-end facade behavior against an injected sink

use std::sync::Arc;

use kino::{
    CaptureContext, DriverPackage, InitOptions, Integration, Kino, Level, MemorySink,
    OutputStream, Payload, UnhandledCaptureMode,
};
use serde_json::json;

fn kino_with_sink(options: InitOptions) -> (Kino, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Kino::new(options, sink.clone()), sink)
}

#[test]
fn test_level_methods_format_and_route() {
    let (kino, sink) = kino_with_sink(InitOptions::default());
    let log = kino.logger("api");

    log.log("plain");
    log.info("informational");
    log.success("settled");
    log.warn("degraded");
    log.debug(json!({"attempt": 2}));
    log.error("broken");

    let lines = sink.lines();
    assert_eq!(lines.len(), 6);
    for (_, line) in &lines {
        assert!(line.contains("api"));
    }
    assert!(lines[0].1.contains("LOG"));
    assert!(lines[2].1.contains("SUCCESS"));
    assert!(lines[4].1.contains("attempt: 2"));

    let stderr_lines: Vec<_> = lines
        .iter()
        .filter(|(stream, _)| *stream == OutputStream::Stderr)
        .collect();
    assert_eq!(stderr_lines.len(), 2); // warn + error
}

#[test]
fn test_error_captures_with_merged_context_when_client_active() {
    let (kino, sink) = kino_with_sink(InitOptions::default());
    let log = kino.logger("payments");

    let events = sentry::test::with_captured_events(|| {
        log.error_with(
            "charge failed",
            &CaptureContext::new().with_tag("provider", "acme"),
        );
    });

    assert_eq!(sink.lines().len(), 1);
    assert_eq!(events.len(), 1);
    let tags = &events[0].tags;
    assert_eq!(tags.get("module").map(String::as_str), Some("payments"));
    assert_eq!(tags.get("provider").map(String::as_str), Some("acme"));
}

#[test]
fn test_trace_callback_matches_error_with_trace_uid() {
    let (kino, sink) = kino_with_sink(InitOptions::default());
    let log = kino.logger("jobs");
    let on_failure = log.trace("job-9", CaptureContext::new());

    let events = sentry::test::with_captured_events(|| {
        on_failure(Payload::from("worker died"));
    });

    assert_eq!(sink.lines().len(), 1);
    assert!(sink.lines()[0].1.contains("ERROR"));
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].tags.get("trace_uid").map(String::as_str),
        Some("job-9")
    );
}

#[test]
fn test_integration_list_follows_configuration() {
    let (defaults, _) = kino_with_sink(InitOptions::default());
    assert!(defaults
        .integrations()
        .contains(&Integration::UncaughtException));
    assert!(!defaults.integrations().contains(&Integration::Knex));

    let (configured, _) = kino_with_sink(InitOptions {
        packages: vec![DriverPackage::Knex, DriverPackage::Mysql2],
        anr: true,
        unhandled_capture: UnhandledCaptureMode::SelfManaged,
        ..Default::default()
    });
    let list = configured.integrations();
    assert!(list.contains(&Integration::Knex));
    assert!(list.contains(&Integration::Mysql2));
    assert!(list.contains(&Integration::Anr));
    assert!(!list.contains(&Integration::UncaughtException));
    assert!(!list.contains(&Integration::UnhandledRejection));
}

#[test]
fn test_emit_is_one_line_per_value() {
    let (kino, sink) = kino_with_sink(InitOptions::default());
    kino.default_logger().emit(
        Level::Info,
        [
            Payload::from("first"),
            Payload::from(json!(["a", "b"])),
            Payload::failure(std::io::Error::new(std::io::ErrorKind::Other, "io down")),
        ],
    );
    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].1.contains(r#"["a", "b"]"#));
    assert!(lines[2].1.contains("io down"));
}
