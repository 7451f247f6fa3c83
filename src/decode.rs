//! Tree parser: reconstructs a [`Value`] from a parsed node tree.
//!
//! This is the inverse of the builder in [`crate::encode`], but it must also
//! cope with trees the builder never produced: hand-written documents,
//! foreign generators, and partially repaired markup from the lenient parse
//! stage. Reconstruction is therefore structural:
//!
//! - leaf text short-circuits to a string, then the `type` attribute coerces
//!   it back to its scalar variant;
//! - generic `item` children with a `key` attribute restore explicit keys;
//! - repeated sibling tags bucket into lists, and single-element buckets
//!   unwrap (the documented list/singleton ambiguity);
//! - remaining attributes surface as `@`-prefixed entries, with a leaf's own
//!   text stored under the configured value key.
//!
//! A `nil` attribute wins over everything else; the result is `Null`.

use crate::error::{Error, Result};
use crate::node::Node;
use crate::tag::{
    DEPTH_LIMIT, ITEM_TAG, KEY_ATTR, MARKER_ATTR, NIL_ATTR, TYPE_ATTR, DATETIME_FORMAT, TypeTag,
};
use crate::{Key, Value, ValueMap};
use chrono::DateTime;
use indexmap::IndexMap;

/// Reconstructs the value encoded by a document's root node.
///
/// A childless root without the vocabulary marker attribute is a bare scalar
/// leaf: its raw text value, the empty string if it has none. With the
/// marker it is an originally-empty container.
pub(crate) fn parse(root: &Node, value_key: &str) -> Result<Value> {
    if root.children.is_empty()
        && root.text.is_none()
        && !root.leading_comment
        && root.attr(MARKER_ATTR).is_none()
        && data_attrs(root, &[]).next().is_none()
    {
        return Ok(Value::String(String::new()));
    }
    parse_node(root, value_key, &[], 0)
}

/// Structural body of a node before attributes are folded in.
enum Body {
    Text(String),
    Entries(ValueMap),
}

/// Sibling accumulation: explicit `item` keys land directly, repeated tags
/// bucket until the unwrap pass.
enum Slot {
    Keyed(Value),
    Bucket(Vec<Value>),
}

fn parse_node(node: &Node, value_key: &str, skip: &[&str], depth: usize) -> Result<Value> {
    if depth >= DEPTH_LIMIT {
        return Err(Error::DepthLimit(DEPTH_LIMIT));
    }

    let mut nil = false;
    let mut type_tag = None;
    let mut extra: Vec<(String, String)> = Vec::new();
    for (name, val) in data_attrs(node, skip) {
        match name {
            NIL_ATTR => nil = matches!(val, "true" | "1"),
            TYPE_ATTR => type_tag = TypeTag::from_str(val),
            _ => extra.push((format!("@{}", name), val.to_string())),
        }
    }
    if nil {
        return Ok(Value::Null);
    }

    let body = parse_body(node, value_key, depth)?;
    Ok(combine(extra, type_tag, body, value_key))
}

fn parse_body(node: &Node, value_key: &str, depth: usize) -> Result<Body> {
    if node.leading_comment {
        return Ok(Body::Text(String::new()));
    }
    if let Some(text) = &node.text {
        return Ok(Body::Text(text.content().to_string()));
    }
    if node.children.is_empty() {
        // An empty element is an empty string unless the builder marked it
        // as an originally-empty container.
        if node.attr(MARKER_ATTR).is_some() {
            return Ok(Body::Entries(ValueMap::new()));
        }
        return Ok(Body::Text(String::new()));
    }

    let mut slots: IndexMap<Key, Slot> = IndexMap::new();
    for child in &node.children {
        if child.name == ITEM_TAG {
            if let Some(raw) = child.attr(KEY_ATTR) {
                let key = raw
                    .parse::<i64>()
                    .map(Key::Int)
                    .unwrap_or_else(|_| Key::Str(raw.to_string()));
                let value = parse_node(child, value_key, &[KEY_ATTR], depth + 1)?;
                slots.insert(key, Slot::Keyed(value));
                continue;
            }
        }
        let value = parse_node(child, value_key, &[], depth + 1)?;
        match slots.entry(Key::Str(child.name.clone())) {
            indexmap::map::Entry::Occupied(mut occupied) => match occupied.get_mut() {
                Slot::Bucket(items) => items.push(value),
                Slot::Keyed(_) => {
                    occupied.insert(Slot::Bucket(vec![value]));
                }
            },
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(Slot::Bucket(vec![value]));
            }
        }
    }

    let mut entries = ValueMap::with_capacity(slots.len());
    for (key, slot) in slots {
        let value = match slot {
            Slot::Keyed(value) => value,
            Slot::Bucket(mut items) => {
                if items.len() == 1 {
                    // Inverse of the repeated-tag convention; a one-element
                    // list and a single nested value are indistinguishable
                    // here.
                    items.pop().unwrap_or(Value::Null)
                } else {
                    Value::List(items)
                }
            }
        };
        entries.insert(key, value);
    }
    Ok(Body::Entries(entries))
}

/// Folds attributes into the structural body and applies type coercion.
fn combine(extra: Vec<(String, String)>, type_tag: Option<TypeTag>, body: Body, value_key: &str) -> Value {
    match body {
        Body::Text(text) => {
            let scalar = coerce(type_tag, text);
            if extra.is_empty() {
                scalar
            } else {
                let mut map = attr_map(extra);
                map.insert(value_key, scalar);
                Value::Map(map)
            }
        }
        Body::Entries(entries) => {
            if extra.is_empty() {
                Value::Map(entries)
            } else {
                // An attributed wrapper: its entries (one or many) merge in
                // after the attributes.
                let mut map = attr_map(extra);
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Map(map)
            }
        }
    }
}

fn attr_map(extra: Vec<(String, String)>) -> ValueMap {
    extra
        .into_iter()
        .map(|(k, v)| (Key::Str(k), Value::String(v)))
        .collect()
}

/// Coerces a text payload back to its tagged scalar variant. Payloads that
/// do not parse under their tag stay strings rather than failing the whole
/// document.
fn coerce(tag: Option<TypeTag>, text: String) -> Value {
    let Some(tag) = tag else {
        return Value::String(text);
    };
    let trimmed = text.trim();
    match tag {
        TypeTag::Integer => trimmed
            .parse::<i64>()
            .map(Value::Int)
            .unwrap_or(Value::String(text)),
        TypeTag::Float => trimmed
            .parse::<f64>()
            .map(Value::Float)
            .unwrap_or(Value::String(text)),
        TypeTag::Boolean => match trimmed {
            "true" | "1" => Value::Bool(true),
            "false" | "0" => Value::Bool(false),
            _ => Value::String(text),
        },
        TypeTag::DateTime => DateTime::parse_from_str(trimmed, DATETIME_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(trimmed))
            .map(Value::DateTime)
            .unwrap_or(Value::String(text)),
        TypeTag::Object => serde_json::from_str(&text)
            .map(Value::Object)
            .unwrap_or(Value::String(text)),
    }
}

/// Attributes that carry data: everything except namespace declarations and
/// the caller's skip list.
fn data_attrs<'a>(
    node: &'a Node,
    skip: &'a [&'a str],
) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    node.attributes
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .filter(move |(k, _)| !k.starts_with("xmlns") && !skip.contains(k))
}
