//! XML Wire Format
//!
//! This module documents the XML wire conventions implemented by
//! [`XmlCodec`](crate::XmlCodec).
//!
//! # Overview
//!
//! The format encodes a dynamically typed [`Value`](crate::Value) as a
//! single-rooted XML document and reconstructs a `Value` from a possibly
//! malformed one. Element text carries the payload; element attributes carry
//! the type information needed to get primitives back out of the otherwise
//! stringly-typed markup.
//!
//! ## Design Goals
//!
//! - **Self-describing**: every non-string leaf names its own type, so no
//!   external schema is needed to decode.
//! - **Fail-soft**: decoding never refuses input. Malformed markup is
//!   repaired where possible and degrades to strings or empty containers
//!   where not.
//! - **Plain-reader friendly**: a document with no type attributes is still
//!   valid and decodes to nested string maps.
//!
//! # Scalars
//!
//! Scalars are leaf elements whose text is the payload and whose `type`
//! attribute names the payload's type:
//!
//! | Type | `type` attribute | Example |
//! |------|------------------|---------|
//! | String | (none) | `<name>Alice</name>` |
//! | Integer | `xsd:integer` | `<age type="xsd:integer">30</age>` |
//! | Boolean | `xsd:boolean` | `<on type="xsd:boolean">true</on>` |
//! | Float | `xsd:float` | `<x type="xsd:float">2.5</x>` |
//! | DateTime | `xsd:dateTime` | `<at type="xsd:dateTime">2023-04-07T08:25:26+0000</at>` |
//! | Opaque JSON | `xsd:object` | `<blob type="xsd:object"><![CDATA[{"a":1}]]></blob>` |
//! | Null | `nil="true"` | `<gone nil="true"/>` |
//!
//! **Rules**:
//! - Booleans render as `true`/`false`; `1`/`0` are accepted on decode.
//! - Datetimes render with `%Y-%m-%dT%H:%M:%S%z` (second precision, numeric
//!   offset); RFC 3339 is accepted on decode.
//! - `nil="true"` wins over any `type` attribute or text.
//! - A payload that fails to parse under its declared type decodes as a
//!   plain string rather than failing the document.
//! - Strings containing `<`, `>`, `&`, `'`, or `"` are wrapped in CDATA so
//!   they survive byte-for-byte.
//!
//! # Maps
//!
//! String-keyed entries become child elements named after the key:
//!
//! ```text
//! <person>
//!   <name>Alice</name>
//!   <age type="xsd:integer">30</age>
//! </person>
//! ```
//!
//! Integer-keyed entries cannot become element names, so they use the
//! generic `item` tag with a `key` attribute:
//!
//! ```text
//! <slots xmlns:xsd="http://www.w3.org/2001/XMLSchema">
//!   <item key="0">first</item>
//!   <item key="7">eighth</item>
//! </slots>
//! ```
//!
//! Insertion order is preserved in both directions.
//!
//! # Lists
//!
//! A list stored under a string key renders as repeated sibling elements,
//! one per element, all named after the key:
//!
//! ```text
//! <order>
//!   <sku>A-1</sku>
//!   <sku>A-2</sku>
//! </order>
//! ```
//!
//! On decode, repeated sibling tags collect back into a list under their
//! shared name. This convention is deliberately lossy in two ways:
//!
//! - A one-element list renders the same as a plain value, so
//!   `{"sku": ["A-1"]}` and `{"sku": "A-1"}` produce identical markup.
//! - An empty list renders nothing at all, so the key vanishes.
//!
//! Lists in any other position (the document root, or an integer-keyed
//! entry) fall back to the `item`/`key` convention above, reading back as a
//! map with integer keys `0..n`.
//!
//! # Containers vs Empty Strings
//!
//! `<a/>` is ambiguous between an empty string and an empty container.
//! Container roots and empty containers therefore carry a marker namespace
//! declaration:
//!
//! ```text
//! <a xmlns:xsd="http://www.w3.org/2001/XMLSchema"/>
//! ```
//!
//! With the marker the element decodes as an empty map; without it, as an
//! empty string. `xmlns`-prefixed attributes are never surfaced as data.
//!
//! # Attributes
//!
//! Decoded attributes other than `type`, `nil`, `key`, and `xmlns*` are
//! surfaced as map entries whose keys carry an `@` prefix. When an element
//! has both attributes and text, the text lands under the codec's value key
//! (`#` by default):
//!
//! ```text
//! <track id="9">Blue in Green</track>
//! ```
//!
//! decodes to `{"@id": "9", "#": "Blue in Green"}`.
//!
//! # Malformed Input
//!
//! Decoding is lenient:
//!
//! - Mismatched or stray end tags are ignored; unclosed elements are closed
//!   at end of input.
//! - Content after the first root element is ignored.
//! - Predefined and numeric character references are resolved; unknown
//!   entities are kept literally (`&name;`).
//! - Whitespace-only text between elements is not data.
//! - Input that yields no element tree at all decodes to
//!   [`Value::Null`](crate::Value::Null).
//!
//! # Limits
//!
//! Documents and values nested deeper than 128 levels are rejected, in both
//! directions, to keep recursion bounded.

// This module contains only documentation; no implementation code
