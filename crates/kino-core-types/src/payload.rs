//! Typed log payloads and the bounded structural inspector
//!
//! Payloads are a closed union of the kinds of values the facade accepts:
//! plain text, a structured record, or a failure value. Text passes through
//! unchanged; records are rendered by [`inspect`] with a bounded depth;
//! failures render their full cause chain.

use std::error::Error;
use std::sync::Arc;

use serde_json::Value;

/// Maximum nesting depth the structural inspector renders before eliding
pub const MAX_INSPECT_DEPTH: usize = 3;

/// A loggable value
#[derive(Debug, Clone)]
pub enum Payload {
    /// Plain text, printed as-is
    Text(String),
    /// Structured record, rendered through the bounded inspector
    Record(Value),
    /// A failure value, rendered as its cause chain
    Failure(Arc<dyn Error + Send + Sync>),
}

impl Payload {
    /// Wrap an error value
    pub fn failure<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Payload::Failure(Arc::new(err))
    }

    /// Render the payload to the text that appears after the line prefix
    pub fn render(&self) -> String {
        match self {
            Payload::Text(s) => s.clone(),
            Payload::Record(v) => inspect(v, MAX_INSPECT_DEPTH),
            Payload::Failure(e) => render_chain(e.as_ref()),
        }
    }

    /// The message used when this payload is reported to the error tracker
    ///
    /// Identical to [`render`](Self::render) today; kept separate so report
    /// messages can diverge from console rendering without touching callers.
    pub fn report_message(&self) -> String {
        self.render()
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_owned())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Value> for Payload {
    fn from(v: Value) -> Self {
        Payload::Record(v)
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Format an error together with all of its causes
fn render_chain(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Render a structured value down to `depth` levels of nesting
///
/// Containers deeper than the budget are elided as `[…]`/`{…}` so a log
/// line stays bounded no matter what record is thrown at it.
pub fn inspect(value: &Value, depth: usize) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Array(items) => {
            if depth == 0 {
                return "[…]".to_owned();
            }
            let inner: Vec<String> = items.iter().map(|v| inspect(v, depth - 1)).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            if depth == 0 {
                return "{…}".to_owned();
            }
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{k}: {}", inspect(v, depth - 1)))
                .collect();
            format!("{{ {} }}", inner.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Outer;

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("outer failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&Inner)
        }
    }

    #[derive(Debug)]
    struct Inner;

    impl std::fmt::Display for Inner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("inner cause")
        }
    }

    impl Error for Inner {}

    #[test]
    fn test_text_passes_through_unchanged() {
        let p = Payload::from("hello world");
        assert_eq!(p.render(), "hello world");
    }

    #[test]
    fn test_record_renders_structurally() {
        let p = Payload::from(json!({"a": 1, "b": "two"}));
        assert_eq!(p.render(), r#"{ a: 1, b: "two" }"#);
    }

    #[test]
    fn test_inspect_elides_beyond_depth() {
        let v = json!({"l1": {"l2": {"l3": {"l4": 1}}}});
        let rendered = inspect(&v, MAX_INSPECT_DEPTH);
        assert!(rendered.contains("l3"));
        assert!(rendered.contains("{…}"));
        assert!(!rendered.contains("l4"));
    }

    #[test]
    fn test_inspect_elides_deep_arrays() {
        let v = json!([[[[1]]]]);
        assert_eq!(inspect(&v, MAX_INSPECT_DEPTH), "[[[[…]]]]");
    }

    #[test]
    fn test_failure_renders_cause_chain() {
        let p = Payload::failure(Outer);
        assert_eq!(p.render(), "outer failed: inner cause");
    }
}
