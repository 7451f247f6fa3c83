//! The XML tree codec façade.
//!
//! [`XmlCodec`] is the public face of the builder/parser pair in
//! [`crate::encode`] and [`crate::decode`]. It owns the configuration
//! fields (root element name, synthetic value key, pretty flag) and enforces
//! the fail-soft contract: no internal failure ever escapes `serialize` or
//! `deserialize`; each is converted to a sentinel value and logged.
//!
//! ## Examples
//!
//! ```rust
//! use wireval::{Value, ValueMap, XmlCodec};
//!
//! let codec = XmlCodec::new(Some("config"));
//!
//! let mut map = ValueMap::new();
//! map.insert("retries", Value::Int(3));
//! map.insert("verbose", Value::Bool(true));
//!
//! let xml = codec.serialize_str(&Value::Map(map.clone()));
//! assert!(xml.contains(r#"<retries type="xsd:integer">3</retries>"#));
//! assert_eq!(codec.deserialize_str(&xml), Value::Map(map));
//! ```

use crate::tag::DEFAULT_VALUE_KEY;
use crate::{decode, encode, node, Value};
use tracing::warn;

/// Codec converting values to and from a tree-structured markup document.
///
/// Both configuration fields are immutable after construction, so the codec
/// is freely shareable across threads; every call works on fresh local
/// state.
#[derive(Debug, Clone)]
pub struct XmlCodec {
    root: Option<String>,
    value_key: String,
    pretty: bool,
}

impl XmlCodec {
    /// Creates a codec with the given root element name.
    ///
    /// The root name is required to serialize containers; `None` is only
    /// legitimate for bare scalars and for callers that emit already-rooted
    /// fragments.
    #[must_use]
    pub fn new(root: Option<&str>) -> Self {
        XmlCodec {
            root: root.map(str::to_string),
            value_key: DEFAULT_VALUE_KEY.to_string(),
            pretty: false,
        }
    }

    /// Replaces the synthetic key under which a leaf's own text payload is
    /// stored when the leaf also carries attributes. Default `"#"`. The
    /// caller is responsible for picking a key that cannot collide with real
    /// data keys.
    #[must_use]
    pub fn with_value_key(mut self, value_key: impl Into<String>) -> Self {
        self.value_key = value_key.into();
        self
    }

    /// Enables indented output. Purely presentational: indented and compact
    /// documents deserialize identically.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// The configured value key.
    #[must_use]
    pub fn value_key(&self) -> &str {
        &self.value_key
    }

    /// Serializes a value to markup text.
    ///
    /// Never fails: any internal error is logged and the empty string is
    /// returned instead.
    #[must_use]
    pub fn serialize_str(&self, value: &Value) -> String {
        let built = encode::build(self.root.as_deref(), value)
            .and_then(|node| node.render(self.pretty));
        match built {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "xml serialize failed, returning empty output");
                String::new()
            }
        }
    }

    /// Deserializes markup text back to a value.
    ///
    /// Never fails: empty or unparseable input yields `Null`, and a document
    /// whose tree cannot be walked yields an empty map, each with a log
    /// line.
    #[must_use]
    pub fn deserialize_str(&self, text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Null;
        }
        let root = match node::parse_document(text) {
            Ok(root) => root,
            Err(err) => {
                warn!(error = %err, "xml deserialize failed, returning null");
                return Value::Null;
            }
        };
        match decode::parse(&root, &self.value_key) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "xml tree walk failed, returning empty container");
                Value::Map(crate::ValueMap::new())
            }
        }
    }
}

impl crate::Codec for XmlCodec {
    fn serialize(&self, value: &Value) -> Vec<u8> {
        self.serialize_str(value).into_bytes()
    }

    fn deserialize(&self, input: &[u8]) -> Value {
        self.deserialize_str(&String::from_utf8_lossy(input))
    }

    fn name(&self) -> &'static str {
        "xml"
    }
}
