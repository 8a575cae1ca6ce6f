//! Reconciler options.

use serde::{Deserialize, Serialize};
use tessera_carton::DEFAULT_EVENT_PREFIX;

/// Naming conventions the reconciler applies to element props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcilerOptions {
    /// Prop-name prefix marking event handlers (default: "on")
    #[serde(default = "default_event_prefix")]
    pub event_prefix: String,

    /// Props assigned as live node properties instead of attributes
    /// (default: ["value", "checked"])
    #[serde(default = "default_live_properties")]
    pub live_properties: Vec<String>,

    /// Tag of the transient node list reconciliation mounts new children onto
    /// (default: "span")
    #[serde(default = "default_placeholder_tag")]
    pub placeholder_tag: String,
}

impl Default for ReconcilerOptions {
    fn default() -> Self {
        Self {
            event_prefix: default_event_prefix(),
            live_properties: default_live_properties(),
            placeholder_tag: default_placeholder_tag(),
        }
    }
}

impl ReconcilerOptions {
    #[inline]
    pub fn is_live_property(&self, name: &str) -> bool {
        self.live_properties.iter().any(|prop| prop == name)
    }
}

fn default_event_prefix() -> String {
    DEFAULT_EVENT_PREFIX.to_string()
}

fn default_live_properties() -> Vec<String> {
    vec!["value".to_string(), "checked".to_string()]
}

fn default_placeholder_tag() -> String {
    "span".to_string()
}
