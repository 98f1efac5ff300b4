//! Query input accepted by the ranking engine

use serde_json::Value;
use zapgenius_core::{Error, Result};

/// A free-text task description, or a sequence of observed actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Text(String),
    Actions(Vec<String>),
}

impl Query {
    /// Collapse to one text; actions are joined with single spaces
    pub fn to_text(&self) -> String {
        match self {
            Query::Text(text) => text.clone(),
            Query::Actions(actions) => actions.join(" "),
        }
    }

    /// Validate a loosely-typed query: a string or an array of strings
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Query::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        Error::InvalidInput(format!(
                            "query sequence must contain only strings, got {item}"
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()
                .map(Query::Actions),
            other => Err(Error::InvalidInput(format!(
                "query must be a string or a sequence of strings, got {other}"
            ))),
        }
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::Text(text.to_string())
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Query::Text(text)
    }
}

impl From<Vec<String>> for Query {
    fn from(actions: Vec<String>) -> Self {
        Query::Actions(actions)
    }
}

impl From<&[&str]> for Query {
    fn from(actions: &[&str]) -> Self {
        Query::Actions(actions.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Query {
    fn from(actions: [&str; N]) -> Self {
        Query::Actions(actions.iter().map(|s| s.to_string()).collect())
    }
}

impl TryFrom<&Value> for Query {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Query::from_value(value)
    }
}
