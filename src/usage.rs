//! Derive a query from recorded usage data
//!
//! Usage data is either `{"actions": [...]}` or a list of event objects with
//! `app_name`, `action` and `context` fields. Anything else falls back to a
//! fixed set of common actions.

use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_ACTIONS: [&str; 3] = ["sending emails", "updating spreadsheets", "creating tasks"];

const EVENT_FIELDS: [&str; 3] = ["app_name", "action", "context"];

pub fn default_actions() -> Vec<String> {
    DEFAULT_ACTIONS.iter().map(|s| s.to_string()).collect()
}

/// Extract action descriptions from parsed usage data
pub fn extract_actions(data: &Value) -> Vec<String> {
    if let Some(actions) = data.get("actions").and_then(Value::as_array) {
        return actions.iter().map(value_text).collect();
    }

    if let Some(events) = data.as_array() {
        let actions: Vec<String> = events
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|event| {
                let parts: Vec<String> = EVENT_FIELDS
                    .iter()
                    .filter_map(|key| event.get(*key))
                    .filter(|v| is_truthy(v))
                    .map(value_text)
                    .collect();
                (!parts.is_empty()).then(|| parts.join(" "))
            })
            .collect();
        if !actions.is_empty() {
            return actions;
        }
    }

    default_actions()
}

/// Read usage data from disk; unreadable or invalid files yield the defaults
pub fn load_actions(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("no usage data at {}: {}", path.display(), e);
            return default_actions();
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(data) => extract_actions(&data),
        Err(e) => {
            warn!("ignoring invalid usage data in {}: {}", path.display(), e);
            default_actions()
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
