//! The generic codec contract and the pass-through codecs.
//!
//! Every transport representation in this crate is reached through the same
//! three-method [`Codec`] contract: `serialize` a [`Value`] to bytes,
//! `deserialize` bytes back to a `Value`, and report a stable `name` for
//! dispatch. Both directions fail soft: a sentinel value plus a log line,
//! never an error across the boundary, so callers treat codecs as
//! best-effort transforms.
//!
//! Besides the tree codec in [`crate::xml`], three thin pass-throughs are
//! provided:
//!
//! - [`JsonCodec`] delegates to `serde_json` on `Value`'s serde impls
//! - [`PackCodec`] delegates to `rmp-serde` (MessagePack), serializing maps
//!   with named keys for cross-runtime compatibility
//! - [`RawCodec`] passes UTF-8 text through unchanged
//!
//! The [`codec`] factory function is the lookup table that turns a
//! configured codec name into an instance.

use crate::{Value, XmlCodec};
use tracing::warn;

/// The contract every transport codec implements.
///
/// Implementations are immutable after construction and safe to share
/// across threads.
pub trait Codec: Send + Sync {
    /// Converts a value to its transport representation.
    ///
    /// Never fails: unrepresentable input yields empty output and a log
    /// line.
    fn serialize(&self, value: &Value) -> Vec<u8>;

    /// Reconstructs a value from its transport representation.
    ///
    /// Never fails: malformed input yields a sentinel value (`Null` or an
    /// empty container) and a log line.
    fn deserialize(&self, input: &[u8]) -> Value;

    /// Stable identifier used by the factory and dispatch tables.
    fn name(&self) -> &'static str;
}

/// JSON pass-through codec.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    #[must_use]
    pub fn new() -> Self {
        JsonCodec { pretty: false }
    }

    /// Enables indented output.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl Codec for JsonCodec {
    fn serialize(&self, value: &Value) -> Vec<u8> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        match result {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "json serialize failed, returning empty output");
                Vec::new()
            }
        }
    }

    fn deserialize(&self, input: &[u8]) -> Value {
        match serde_json::from_slice(input) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "json deserialize failed, returning null");
                Value::Null
            }
        }
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// MessagePack pass-through codec.
///
/// Maps serialize with named keys (`to_vec_named`) so payloads interoperate
/// with runtimes that address fields by name.
#[derive(Debug, Clone, Default)]
pub struct PackCodec;

impl PackCodec {
    #[must_use]
    pub fn new() -> Self {
        PackCodec
    }
}

impl Codec for PackCodec {
    fn serialize(&self, value: &Value) -> Vec<u8> {
        match rmp_serde::to_vec_named(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "msgpack serialize failed, returning empty output");
                Vec::new()
            }
        }
    }

    fn deserialize(&self, input: &[u8]) -> Value {
        match rmp_serde::from_slice(input) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "msgpack deserialize failed, returning null");
                Value::Null
            }
        }
    }

    fn name(&self) -> &'static str {
        "msgpack"
    }
}

/// UTF-8 pass-through codec.
///
/// Strings travel unchanged; any other value falls back to its JSON text so
/// the output is still readable.
#[derive(Debug, Clone, Default)]
pub struct RawCodec;

impl RawCodec {
    #[must_use]
    pub fn new() -> Self {
        RawCodec
    }
}

impl Codec for RawCodec {
    fn serialize(&self, value: &Value) -> Vec<u8> {
        match value {
            Value::String(s) => s.clone().into_bytes(),
            other => JsonCodec::new().serialize(other),
        }
    }

    fn deserialize(&self, input: &[u8]) -> Value {
        Value::String(String::from_utf8_lossy(input).into_owned())
    }

    fn name(&self) -> &'static str {
        "raw"
    }
}

/// Constructs a codec by name: `"xml"`, `"json"`, `"msgpack"`, or `"raw"`.
///
/// `root` configures the XML codec's root element name and is ignored by
/// the pass-through codecs. Unknown names return `None`.
///
/// # Examples
///
/// ```rust
/// use wireval::{codec, Codec, Value};
///
/// let xml = codec("xml", Some("root")).unwrap();
/// let bytes = xml.serialize(&Value::Int(7));
/// assert_eq!(xml.deserialize(&bytes), Value::Int(7));
///
/// assert!(codec("yaml", None).is_none());
/// ```
#[must_use]
pub fn codec(name: &str, root: Option<&str>) -> Option<Box<dyn Codec>> {
    match name {
        "xml" => Some(Box::new(XmlCodec::new(root))),
        "json" => Some(Box::new(JsonCodec::new())),
        "msgpack" => Some(Box::new(PackCodec::new())),
        "raw" => Some(Box::new(RawCodec::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueMap;

    fn sample() -> Value {
        let mut map = ValueMap::new();
        map.insert("a", Value::Int(1));
        map.insert("b", Value::from("x"));
        map.insert("c", Value::List(vec![Value::Bool(true), Value::Null]));
        Value::Map(map)
    }

    #[test]
    fn test_json_round_trip() {
        let codec = JsonCodec::new();
        let bytes = codec.serialize(&sample());
        assert_eq!(codec.deserialize(&bytes), sample());
    }

    #[test]
    fn test_json_soft_failure() {
        let codec = JsonCodec::new();
        assert_eq!(codec.deserialize(b"{ truncated"), Value::Null);
        assert_eq!(codec.deserialize(b""), Value::Null);
    }

    #[test]
    fn test_msgpack_round_trip() {
        let codec = PackCodec::new();
        let bytes = codec.serialize(&sample());
        assert_eq!(codec.deserialize(&bytes), sample());
    }

    #[test]
    fn test_msgpack_integer_keys_survive() {
        let mut map = ValueMap::new();
        map.insert(0, Value::from("a"));
        map.insert(1, Value::from("b"));
        let value = Value::Map(map);

        let codec = PackCodec::new();
        assert_eq!(codec.deserialize(&codec.serialize(&value)), value);
    }

    #[test]
    fn test_msgpack_soft_failure() {
        let codec = PackCodec::new();
        assert_eq!(codec.deserialize(&[0xc1]), Value::Null);
    }

    #[test]
    fn test_raw_passthrough() {
        let codec = RawCodec::new();
        let bytes = codec.serialize(&Value::from("hello"));
        assert_eq!(bytes, b"hello");
        assert_eq!(codec.deserialize(b"hello"), Value::from("hello"));
    }

    #[test]
    fn test_factory_lookup() {
        for name in ["xml", "json", "msgpack", "raw"] {
            let instance = codec(name, Some("root")).unwrap();
            assert_eq!(instance.name(), name);
        }
        assert!(codec("unknown", None).is_none());
    }
}
