//! Config entries with layered lookup
//!
//! An entry has a base `data` layer written when the advisor is created and an
//! `options` layer written by later option updates. Lookups consult options
//! first, then data; callers supply the per-key default.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keys::CONF_NAME;

/// Raw key/value layer
pub type ConfigMap = serde_json::Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Unique entry id (generated when absent)
    #[serde(default = "new_entry_id")]
    pub entry_id: String,

    /// Values captured at creation time
    pub data: ConfigMap,

    /// Values from the latest options update
    #[serde(default)]
    pub options: ConfigMap,
}

fn new_entry_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

impl ConfigEntry {
    /// Create an entry with a fresh id and empty options
    pub fn new(data: ConfigMap) -> Self {
        Self {
            entry_id: new_entry_id(),
            data,
            options: ConfigMap::new(),
        }
    }

    /// Use a fixed entry id
    pub fn with_id(mut self, entry_id: impl Into<String>) -> Self {
        self.entry_id = entry_id.into();
        self
    }

    /// Set the options layer
    pub fn with_options(mut self, options: ConfigMap) -> Self {
        self.options = options;
        self
    }

    /// Options value if present, else data value.
    ///
    /// An explicit `null` in options shadows data (the option was cleared).
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.options.get(key).or_else(|| self.data.get(key))
    }

    /// Replace the options layer
    pub fn update_options(&mut self, options: ConfigMap) {
        self.options = options;
    }

    /// Entry title (its configured name), if any
    pub fn title(&self) -> Option<&str> {
        self.data.get(CONF_NAME).and_then(Value::as_str)
    }
}
