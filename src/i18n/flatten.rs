//! Flattening of nested translation documents
//!
//! A decoded JSON document is first converted into a [`Node`] tree and then
//! collapsed into a [`Bundle`] whose keys are dot-joined leaf paths.

use serde_json::{Map, Value};
use super::bundle::Bundle;

/// Separator placed between nested keys
pub const KEY_SEPARATOR: char = '.';

/// A translation document node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    Sequence(Vec<String>),
    Object(Vec<(String, Node)>),
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Node::Sequence(items.iter().map(stringify).collect()),
            Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, child)| (key, Node::from(child)))
                    .collect(),
            ),
            other => Node::Scalar(stringify(&other)),
        }
    }
}

/// Render a JSON value as variant text: strings verbatim, anything else as compact JSON
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Flatten a decoded JSON object into a bundle
pub fn flatten(document: Map<String, Value>) -> Bundle {
    flatten_entries(
        document
            .into_iter()
            .map(|(key, value)| (key, Node::from(value)))
            .collect(),
    )
}

/// Flatten already-converted object entries
///
/// Colliding keys are resolved by iteration order: the last write wins.
pub fn flatten_entries(entries: Vec<(String, Node)>) -> Bundle {
    let mut bundle = Bundle::new();

    for (key, node) in entries {
        match node {
            Node::Scalar(text) => {
                bundle.insert(key, vec![text]);
            }
            Node::Sequence(items) => {
                bundle.insert(key, items);
            }
            Node::Object(children) => {
                for (sub_key, variants) in flatten_entries(children) {
                    bundle.insert(format!("{key}{KEY_SEPARATOR}{sub_key}"), variants);
                }
            }
        }
    }

    bundle
}
