//! The fixed type-tag vocabulary shared by the tree builder and parser.
//!
//! Generic markup is untyped text, so the XML codec records each scalar's
//! original type in a `type` attribute drawn from a small, fixed vocabulary.
//! The builder and parser use the table symmetrically: whatever tag the
//! builder emits, the parser coerces back to the same [`Value`](crate::Value)
//! variant.
//!
//! | Variant    | `type=` attribute | text payload |
//! |------------|-------------------|--------------|
//! | `Int`      | `xsd:integer`     | decimal string |
//! | `Bool`     | `xsd:boolean`     | `true` / `false` |
//! | `Float`    | `xsd:float`       | decimal string |
//! | `DateTime` | `xsd:dateTime`    | `2023-04-07T07:45:26+0000` |
//! | `Object`   | `xsd:object`      | JSON text in a CDATA section |
//! | `Null`     | none; `nil="true"` attribute instead | absent |
//!
//! A node carrying none of these attributes reads back as a string (or a
//! container, depending on its children).

/// Element name used to wrap integer-keyed map entries so the original key
/// survives the round trip (via the [`KEY_ATTR`] attribute).
pub const ITEM_TAG: &str = "item";

/// Attribute carrying the original key on [`ITEM_TAG`] elements.
pub const KEY_ATTR: &str = "key";

/// Attribute recording a scalar's original type.
pub const TYPE_ATTR: &str = "type";

/// Boolean-valued attribute marking an explicit null.
pub const NIL_ATTR: &str = "nil";

/// Default synthetic key under which a leaf's own text payload is stored
/// when the leaf also carries attributes.
pub const DEFAULT_VALUE_KEY: &str = "#";

/// Marker attribute advertising the tag vocabulary, emitted on the root of
/// any container-valued document and on empty containers anywhere in the
/// tree. Its presence is what distinguishes an originally-empty container
/// from an empty string on re-parse.
pub const MARKER_ATTR: &str = "xmlns:xsd";

/// Value of the vocabulary marker attribute.
pub const MARKER_VALUE: &str = "http://www.w3.org/2001/XMLSchema";

/// chrono format string for `xsd:dateTime` payloads
/// (ISO-8601 extended, numeric offset without a colon).
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Maximum tree depth accepted by the builder, the parser, and the lenient
/// markup stage. Bounds stack growth on adversarial input.
pub const DEPTH_LIMIT: usize = 128;

/// A wire-level type tag, the attribute form of a scalar variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Integer,
    Boolean,
    Float,
    DateTime,
    Object,
}

impl TypeTag {
    /// The attribute value for this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Integer => "xsd:integer",
            TypeTag::Boolean => "xsd:boolean",
            TypeTag::Float => "xsd:float",
            TypeTag::DateTime => "xsd:dateTime",
            TypeTag::Object => "xsd:object",
        }
    }

    /// Looks up a tag from its attribute value. Unknown tags return `None`
    /// and the payload stays a string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "xsd:integer" => Some(TypeTag::Integer),
            "xsd:boolean" => Some(TypeTag::Boolean),
            "xsd:float" => Some(TypeTag::Float),
            "xsd:dateTime" => Some(TypeTag::DateTime),
            "xsd:object" => Some(TypeTag::Object),
            _ => None,
        }
    }
}
