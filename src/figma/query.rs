//! Generic searches over an untyped Figma JSON tree.
//!
//! Both searches walk a [`NodeRef`] view of `serde_json::Value`, so mapping
//! keys are visited in document order (the crate enables serde_json's
//! `preserve_order`) and sequences in index order.

use serde_json::{Map, Value};

/// Typed view of one position in the JSON tree.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    Scalar(&'a Value),
}

impl<'a> From<&'a Value> for NodeRef<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => NodeRef::Object(map),
            Value::Array(items) => NodeRef::Array(items),
            other => NodeRef::Scalar(other),
        }
    }
}

/// Depth-first search for the first node (root included) whose `id` equals `id`.
pub fn find_by_id<'a>(node: &'a Value, id: &str) -> Option<&'a Value> {
    match NodeRef::from(node) {
        NodeRef::Object(map) => {
            if matches!(map.get("id"), Some(Value::String(found)) if found == id) {
                return Some(node);
            }
            map.values().find_map(|child| find_by_id(child, id))
        }
        NodeRef::Array(items) => items.iter().find_map(|child| find_by_id(child, id)),
        NodeRef::Scalar(_) => None,
    }
}

/// Collect every value stored under `key`, in pre-order.
///
/// A matched value is collected but not searched again; its siblings are.
pub fn find_all_by_key<'a>(node: &'a Value, key: &str) -> Vec<&'a Value> {
    let mut found = Vec::new();
    collect_by_key(node, key, &mut found);
    found
}

fn collect_by_key<'a>(node: &'a Value, key: &str, acc: &mut Vec<&'a Value>) {
    match NodeRef::from(node) {
        NodeRef::Object(map) => {
            for (prop, value) in map {
                if prop == key {
                    acc.push(value);
                } else {
                    collect_by_key(value, key, acc);
                }
            }
        }
        NodeRef::Array(items) => {
            for item in items {
                collect_by_key(item, key, acc);
            }
        }
        NodeRef::Scalar(_) => {}
    }
}

/// First value under `key` anywhere beneath `node`.
pub fn find_first_by_key<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    find_all_by_key(node, key).into_iter().next()
}
