//! Capture context attached to error reports
//!
//! A context is a transient value merged into the data sent to the error
//! tracker on a single call. It is never persisted by the facade.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema;

/// Identity of the user associated with an error report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub username: Option<String>,
}

/// Per-call metadata forwarded with an error report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureContext {
    pub tags: BTreeMap<String, String>,
    pub extras: BTreeMap<String, Value>,
    pub user: Option<User>,
}

impl CaptureContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Add an extra
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Attach a user identity
    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Tags as sent to the error tracker: caller tags plus the `module` tag
    ///
    /// The module tag wins over a caller-supplied tag of the same name so a
    /// report can always be attributed to the logger that produced it.
    pub fn merged_tags(&self, module_label: &str) -> BTreeMap<String, String> {
        let mut tags = self.tags.clone();
        tags.insert(schema::TAG_MODULE.to_owned(), module_label.to_owned());
        tags
    }
}
