//! # wireval
//!
//! A dynamically typed value tree with interchangeable transport codecs,
//! built around a lossless-by-convention XML tree format.
//!
//! ## What is wireval?
//!
//! Systems that shuttle heterogeneous, nested data between processes need a
//! representation that is self-describing on the wire and forgiving on the
//! way back in. `wireval` provides:
//!
//! - **[`Value`]**: a closed union of the transportable types (null, bool,
//!   integer, float, string, datetime, opaque JSON, list, ordered map)
//! - **[`XmlCodec`]**: the core codec, encoding values as XML with type-tag
//!   attributes and reconstructing them from possibly malformed documents
//! - **[`JsonCodec`]**, **[`PackCodec`]**, **[`RawCodec`]**: alternate
//!   transports behind the same [`Codec`] trait, selectable by name via
//!   [`codec()`](codec())
//!
//! ## Key Properties
//!
//! - **Self-describing markup**: primitives carry `type` attributes
//!   (`xsd:integer`, `xsd:boolean`, ...), so a decoder needs no schema
//! - **Fail-soft decoding**: codecs never refuse input; malformed markup is
//!   repaired or degraded, and the worst case is `Value::Null`
//! - **Order-preserving maps**: [`ValueMap`] keeps insertion order and
//!   accepts both string and integer keys
//! - **No `unsafe` code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! wireval = "0.1"
//! ```
//!
//! ### Encoding and Decoding XML
//!
//! ```rust
//! use wireval::{value, from_xml, to_xml};
//!
//! let payload = value!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["admin", "ops"],
//! });
//!
//! let xml = to_xml("user", &payload);
//! assert!(xml.contains(r#"<age type="xsd:integer">30</age>"#));
//! assert!(xml.contains("<tags>admin</tags><tags>ops</tags>"));
//!
//! let back = from_xml(&xml);
//! assert_eq!(back.as_map().unwrap().get("name").unwrap().as_str(), Some("Alice"));
//! ```
//!
//! ### Selecting a Codec by Name
//!
//! ```rust
//! use wireval::{codec, value, Codec};
//!
//! let c = codec("msgpack", None).unwrap();
//! let payload = value!({ "id": 7, "ok": true });
//! let bytes = c.serialize(&payload);
//! assert_eq!(c.deserialize(&bytes), payload);
//! ```
//!
//! ### Decoding Foreign Documents
//!
//! Markup produced elsewhere decodes too; untyped leaves come back as
//! strings and attributes surface under `@`-prefixed keys:
//!
//! ```rust
//! use wireval::{from_xml, Value};
//!
//! let v = from_xml(r#"<track id="9">Blue in Green</track>"#);
//! let map = v.as_map().unwrap();
//! assert_eq!(map.get("@id"), Some(&Value::from("9")));
//! assert_eq!(map.get("#"), Some(&Value::from("Blue in Green")));
//! ```
//!
//! ## Format Documentation
//!
//! The full wire conventions, including the deliberately lossy repeated-tag
//! list encoding and the empty-container marker, are documented in
//! [`format`].

pub mod codec;
mod decode;
mod encode;
pub mod error;
pub mod format;
pub mod id;
pub mod macros;
pub mod map;
pub mod mime;
mod node;
pub mod tag;
pub mod value;
pub mod xml;

pub use codec::{codec, Codec, JsonCodec, PackCodec, RawCodec};
pub use error::{Error, Result};
pub use id::{random_id, IdGenerator};
pub use map::{Key, ValueMap};
pub use tag::TypeTag;
pub use value::Value;
pub use xml::XmlCodec;

/// Encodes a value as an XML document rooted at `root`.
///
/// Convenience wrapper over [`XmlCodec`] with default settings. Never
/// fails; internal errors are logged and yield an empty string.
///
/// # Examples
///
/// ```rust
/// use wireval::{to_xml, Value};
///
/// assert_eq!(
///     to_xml("n", &Value::Int(5)),
///     r#"<?xml version="1.0" encoding="UTF-8"?><n type="xsd:integer">5</n>"#
/// );
/// ```
#[must_use]
pub fn to_xml(root: &str, value: &Value) -> String {
    XmlCodec::new(Some(root)).serialize_str(value)
}

/// Decodes an XML document back to a [`Value`].
///
/// Convenience wrapper over [`XmlCodec`] with default settings. Never
/// fails; empty or unparseable input yields [`Value::Null`].
///
/// # Examples
///
/// ```rust
/// use wireval::{from_xml, Value};
///
/// assert_eq!(from_xml("<x>hi</x>"), Value::from("hi"));
/// assert_eq!(from_xml(""), Value::Null);
/// ```
#[must_use]
pub fn from_xml(text: &str) -> Value {
    XmlCodec::new(None).deserialize_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_xml_from_xml_map() {
        let mut map = ValueMap::new();
        map.insert("name", Value::from("Alice"));
        map.insert("age", Value::Int(30));
        let value = Value::Map(map);

        let xml = to_xml("user", &value);
        assert_eq!(from_xml(&xml), value);
    }

    #[test]
    fn test_from_xml_empty_is_null() {
        assert_eq!(from_xml(""), Value::Null);
    }

    #[test]
    fn test_codec_factory_names() {
        for name in ["xml", "json", "msgpack", "raw"] {
            let c = codec(name, Some("root")).unwrap_or_else(|| panic!("missing {name}"));
            assert_eq!(c.name(), name);
        }
        assert!(codec("yaml", None).is_none());
    }
}
