//! Correlation uids for failure callbacks

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uid correlating an error report with the operation that produced it
///
/// Callers usually pass their own uid (a request id, a job id); `new`
/// mints a sortable UUIDv7 for callers that have none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceUid(String);

impl TraceUid {
    /// Generate a new random TraceUid using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TraceUid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for TraceUid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TraceUid {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for TraceUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
