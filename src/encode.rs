//! Tree builder: walks a [`Value`] and emits the intermediate node tree.
//!
//! The builder is one half of the XML codec core. Containers become element
//! trees under the conventions the parser inverts:
//!
//! - integer-keyed entries become generic `item` elements carrying a `key`
//!   attribute, so the key survives the round trip;
//! - a string-keyed entry whose value is list-shaped becomes one sibling per
//!   element, all named after the key (the repeated-tag convention, lossy
//!   for one-element lists, see [`crate::format`]);
//! - any other container entry becomes a named child element;
//! - scalars become typed leaves per the vocabulary in [`crate::tag`].
//!
//! The builder cannot fail on any value the closed [`Value`] union can
//! express; its only error is the recursion depth guard.

use crate::error::{Error, Result};
use crate::node::{Node, NodeText};
use crate::tag::{
    DEPTH_LIMIT, ITEM_TAG, KEY_ATTR, MARKER_ATTR, MARKER_VALUE, NIL_ATTR, TYPE_ATTR, TypeTag,
};
use crate::{Key, Value};

/// Builds the node tree for `value`.
///
/// With a root name, containers become a single rooted element carrying the
/// vocabulary marker attribute and scalars become a single typed leaf.
/// Without one, a container's entries become top-level siblings in an
/// unnamed fragment; a bare scalar falls back to the generic item tag.
pub(crate) fn build(root_name: Option<&str>, value: &Value) -> Result<Node> {
    match value {
        Value::List(_) | Value::Map(_) => {
            let mut node = match root_name {
                Some(name) => {
                    let mut node = Node::new(name);
                    // The marker is what lets an empty container re-parse as
                    // an empty container instead of an empty string.
                    node.set_attr(MARKER_ATTR, MARKER_VALUE);
                    node
                }
                None => Node::fragment(),
            };
            build_entries(&mut node, value, 0)?;
            Ok(node)
        }
        scalar => {
            let mut node = Node::new(root_name.unwrap_or(ITEM_TAG));
            apply_scalar(&mut node, scalar)?;
            Ok(node)
        }
    }
}

/// Appends one child (or one run of siblings) per entry of `container`.
fn build_entries(parent: &mut Node, container: &Value, depth: usize) -> Result<()> {
    if depth >= DEPTH_LIMIT {
        return Err(Error::DepthLimit(DEPTH_LIMIT));
    }
    for (key, item) in entries(container) {
        match key {
            Key::Int(k) => {
                let mut child = Node::new(ITEM_TAG);
                child.set_attr(KEY_ATTR, k.to_string());
                fill(&mut child, item, depth + 1)?;
                parent.children.push(child);
            }
            Key::Str(name) => {
                if let Some(elements) = list_elements(item) {
                    // Repeated-tag convention: one sibling per element,
                    // each named after the key.
                    for element in elements {
                        let mut child = Node::new(name.as_str());
                        fill(&mut child, element, depth + 1)?;
                        parent.children.push(child);
                    }
                } else {
                    let mut child = Node::new(name.as_str());
                    fill(&mut child, item, depth + 1)?;
                    parent.children.push(child);
                }
            }
        }
    }
    Ok(())
}

/// Fills a fresh node from a value: containers recurse, scalars become
/// typed leaves. An empty container keeps the marker attribute so it reads
/// back as a container rather than an empty string.
fn fill(node: &mut Node, value: &Value, depth: usize) -> Result<()> {
    match value {
        Value::List(items) if items.is_empty() => {
            node.set_attr(MARKER_ATTR, MARKER_VALUE);
            Ok(())
        }
        Value::Map(map) if map.is_empty() => {
            node.set_attr(MARKER_ATTR, MARKER_VALUE);
            Ok(())
        }
        container if container.is_container() => build_entries(node, container, depth),
        scalar => apply_scalar(node, scalar),
    }
}

/// Applies a scalar's type attribute and text payload to a leaf node.
fn apply_scalar(node: &mut Node, value: &Value) -> Result<()> {
    match value {
        Value::Null => node.set_attr(NIL_ATTR, "true"),
        Value::Bool(b) => {
            node.set_attr(TYPE_ATTR, TypeTag::Boolean.as_str());
            node.text = Some(NodeText::Raw(if *b { "true" } else { "false" }.to_string()));
        }
        Value::Int(i) => {
            node.set_attr(TYPE_ATTR, TypeTag::Integer.as_str());
            node.text = Some(NodeText::Raw(i.to_string()));
        }
        Value::Float(f) => {
            node.set_attr(TYPE_ATTR, TypeTag::Float.as_str());
            node.text = Some(NodeText::Raw(f.to_string()));
        }
        Value::String(s) => {
            if !s.is_empty() {
                node.text = Some(if needs_cdata(s) {
                    NodeText::CData(s.clone())
                } else {
                    NodeText::Raw(s.clone())
                });
            }
        }
        Value::DateTime(dt) => {
            node.set_attr(TYPE_ATTR, TypeTag::DateTime.as_str());
            node.text = Some(NodeText::Raw(
                dt.format(crate::tag::DATETIME_FORMAT).to_string(),
            ));
        }
        Value::Object(payload) => {
            node.set_attr(TYPE_ATTR, TypeTag::Object.as_str());
            let text = serde_json::to_string(payload).map_err(Error::transcode)?;
            node.text = Some(NodeText::CData(text));
        }
        Value::List(_) | Value::Map(_) => {
            // Callers branch on is_container before reaching here.
            debug_assert!(false, "apply_scalar called with a container");
        }
    }
    Ok(())
}

fn needs_cdata(s: &str) -> bool {
    s.contains(['<', '>', '&', '\'', '"'])
}

/// Iterates a container's entries in order, giving lists implicit integer
/// keys.
fn entries<'a>(container: &'a Value) -> Box<dyn Iterator<Item = (Key, &'a Value)> + 'a> {
    match container {
        Value::List(items) => Box::new(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (Key::Int(i as i64), v)),
        ),
        Value::Map(map) => Box::new(map.iter().map(|(k, v)| (k.clone(), v))),
        _ => Box::new(std::iter::empty()),
    }
}

/// Returns the elements of a list-shaped container: a `List`, or a `Map`
/// whose keys are exactly `0..n-1`. Non-list-shaped values return `None`.
fn list_elements(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::List(items) => Some(items.iter().collect()),
        Value::Map(map) if map.is_list_shaped() => Some(map.values().collect()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueMap;

    fn map(entries: Vec<(Key, Value)>) -> Value {
        Value::Map(entries.into_iter().collect::<ValueMap>())
    }

    #[test]
    fn test_scalar_leaf() {
        let node = build(Some("root"), &Value::Int(42)).unwrap();
        assert_eq!(node.name, "root");
        assert_eq!(node.attr(TYPE_ATTR), Some("xsd:integer"));
        assert_eq!(node.text.as_ref().unwrap().content(), "42");
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_null_leaf() {
        let node = build(Some("root"), &Value::Null).unwrap();
        assert_eq!(node.attr(NIL_ATTR), Some("true"));
        assert_eq!(node.attr(TYPE_ATTR), None);
        assert!(node.text.is_none());
    }

    #[test]
    fn test_container_gets_marker() {
        let node = build(Some("root"), &Value::Map(ValueMap::new())).unwrap();
        assert_eq!(node.attr(MARKER_ATTR), Some(MARKER_VALUE));
        assert!(node.children.is_empty());

        let leaf = build(Some("root"), &Value::String(String::new())).unwrap();
        assert_eq!(leaf.attr(MARKER_ATTR), None);
    }

    #[test]
    fn test_integer_keys_use_item_tag() {
        let value = map(vec![
            (Key::Int(0), Value::from("a")),
            (Key::Int(1), Value::from("b")),
        ]);
        let node = build(Some("root"), &value).unwrap();
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].name, ITEM_TAG);
        assert_eq!(node.children[0].attr(KEY_ATTR), Some("0"));
        assert_eq!(node.children[1].attr(KEY_ATTR), Some("1"));
    }

    #[test]
    fn test_list_value_collapses_to_repeated_tags() {
        let value = map(vec![(
            Key::Str("color".to_string()),
            Value::List(vec![Value::from("red"), Value::from("blue")]),
        )]);
        let node = build(Some("root"), &value).unwrap();
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].name, "color");
        assert_eq!(node.children[1].name, "color");
        assert_eq!(node.children[0].attr(KEY_ATTR), None);
    }

    #[test]
    fn test_empty_list_value_vanishes() {
        let value = map(vec![(Key::Str("empty".to_string()), Value::List(vec![]))]);
        let node = build(Some("root"), &value).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_nested_empty_map_keeps_marker() {
        let value = map(vec![(
            Key::Str("inner".to_string()),
            Value::Map(ValueMap::new()),
        )]);
        let node = build(Some("root"), &value).unwrap();
        assert_eq!(node.children[0].attr(MARKER_ATTR), Some(MARKER_VALUE));
        assert!(node.children[0].children.is_empty());
    }

    #[test]
    fn test_nested_map_keeps_name() {
        let inner = map(vec![(Key::Str("x".to_string()), Value::Int(1))]);
        let value = map(vec![(Key::Str("point".to_string()), inner)]);
        let node = build(Some("root"), &value).unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].name, "point");
        assert_eq!(node.children[0].children[0].name, "x");
    }

    #[test]
    fn test_unsafe_string_becomes_cdata() {
        let value = map(vec![(
            Key::Str("s".to_string()),
            Value::from("a <b> & 'c'"),
        )]);
        let node = build(Some("root"), &value).unwrap();
        assert!(matches!(
            node.children[0].text,
            Some(NodeText::CData(_))
        ));
    }

    #[test]
    fn test_depth_guard() {
        let mut value = Value::Map(ValueMap::new());
        for _ in 0..200 {
            let mut wrapper = ValueMap::new();
            wrapper.insert("inner", value);
            value = Value::Map(wrapper);
        }
        assert!(matches!(
            build(Some("root"), &value),
            Err(Error::DepthLimit(_))
        ));
    }

    #[test]
    fn test_fragment_root() {
        let value = map(vec![(Key::Str("a".to_string()), Value::Int(1))]);
        let node = build(None, &value).unwrap();
        assert!(node.name.is_empty());
        assert_eq!(node.children.len(), 1);
    }
}
