use chrono::{FixedOffset, TimeZone};
use wireval::{from_xml, to_xml, value, Key, Value, ValueMap, XmlCodec};

fn assert_roundtrip(value: &Value) {
    let xml = to_xml("root", value);
    let back = from_xml(&xml);
    assert_eq!(&back, value, "xml was: {}", xml);
}

#[test]
fn test_scalar_roundtrips() {
    assert_roundtrip(&Value::Null);
    assert_roundtrip(&Value::Bool(true));
    assert_roundtrip(&Value::Bool(false));
    assert_roundtrip(&Value::Int(0));
    assert_roundtrip(&Value::Int(-42));
    assert_roundtrip(&Value::Int(i64::MAX));
    assert_roundtrip(&Value::Float(3.5));
    assert_roundtrip(&Value::Float(-0.125));
    assert_roundtrip(&Value::from("hello world"));
    assert_roundtrip(&Value::from(""));
}

#[test]
fn test_datetime_roundtrip() {
    let offset = FixedOffset::east_opt(3600).unwrap();
    let dt = offset.with_ymd_and_hms(2023, 4, 7, 9, 25, 26).unwrap();
    assert_roundtrip(&Value::DateTime(dt));
}

#[test]
fn test_type_fidelity() {
    // Integers come back as integers, not floats or strings.
    let back = from_xml(&to_xml("n", &Value::Int(7)));
    assert_eq!(back, Value::Int(7));
    assert_ne!(back, Value::Float(7.0));
    assert_ne!(back, Value::from("7"));

    // Digit strings stay strings.
    assert_eq!(from_xml(&to_xml("s", &Value::from("7"))), Value::from("7"));
}

#[test]
fn test_flat_map_roundtrip() {
    let v = value!({
        "name": "Alice",
        "age": 30,
        "score": 99.5,
        "active": true,
        "note": null,
    });
    assert_roundtrip(&v);
}

#[test]
fn test_nested_map_roundtrip() {
    let v = value!({
        "customer": {
            "name": "Bob",
            "address": { "city": "Lyon", "zip": "69001" },
        },
        "total": 109.97,
    });
    assert_roundtrip(&v);
}

#[test]
fn test_list_singleton_collapse() {
    // A one-element list and a plain value are indistinguishable on the
    // wire, so both render identically and the list reads back collapsed.
    let singleton = value!({ "sku": ["A-1"] });
    let plain = value!({ "sku": "A-1" });
    assert_eq!(to_xml("order", &singleton), to_xml("order", &plain));
    assert_eq!(from_xml(&to_xml("order", &singleton)), plain);
}

#[test]
fn test_list_under_key_roundtrip() {
    let v = value!({ "sku": ["A-1", "A-2", "A-3"] });
    assert_roundtrip(&v);
}

#[test]
fn test_empty_list_value_vanishes() {
    let v = value!({ "gone": [], "kept": 1 });
    let back = from_xml(&to_xml("root", &v));
    let map = back.as_map().unwrap();
    assert!(map.get("gone").is_none());
    assert_eq!(map.get("kept"), Some(&Value::Int(1)));
}

#[test]
fn test_root_list_reads_back_as_integer_keyed_map() {
    let list = Value::List(vec![Value::Int(1), Value::from("two")]);
    let back = from_xml(&to_xml("root", &list));
    let map = back.as_map().unwrap();
    assert_eq!(map.get(0), Some(&Value::Int(1)));
    assert_eq!(map.get(1), Some(&Value::from("two")));
}

#[test]
fn test_integer_keys_preserve_order_and_type() {
    let mut map = ValueMap::new();
    map.insert(7, Value::from("seventh"));
    map.insert(0, Value::from("first"));
    map.insert(3, Value::from("third"));
    let v = Value::Map(map);

    let back = from_xml(&to_xml("slots", &v));
    assert_eq!(back, v);
    let keys: Vec<_> = back.as_map().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec![Key::Int(7), Key::Int(0), Key::Int(3)]);
}

#[test]
fn test_empty_map_vs_empty_string() {
    let empty_map = Value::Map(ValueMap::new());
    let empty_str = Value::from("");

    let map_xml = to_xml("a", &empty_map);
    let str_xml = to_xml("a", &empty_str);
    assert_ne!(map_xml, str_xml);
    assert_eq!(from_xml(&map_xml), empty_map);
    assert_eq!(from_xml(&str_xml), empty_str);
}

#[test]
fn test_nested_empties_roundtrip() {
    let v = value!({ "name": "", "settings": {}, "note": null });
    assert_roundtrip(&v);
}

#[test]
fn test_unsafe_characters_survive() {
    for s in [
        "a < b",
        "x > y",
        "fish & chips",
        "it's",
        "say \"hi\"",
        "<b>bold</b>",
        "mixed <>&'\" all",
        "terminator ]]> inside",
    ] {
        assert_roundtrip(&Value::from(s));
    }
}

#[test]
fn test_opaque_json_roundtrip() {
    let blob: serde_json::Value = serde_json::json!({ "a": 1, "b": [true, null] });
    assert_roundtrip(&Value::Object(blob.clone()));

    let mut map = ValueMap::new();
    map.insert("payload", Value::Object(blob));
    assert_roundtrip(&Value::Map(map));
}

#[test]
fn test_foreign_document_untyped_leaves() {
    let back = from_xml("<user><name>Alice</name><age>30</age></user>");
    let map = back.as_map().unwrap();
    assert_eq!(map.get("name"), Some(&Value::from("Alice")));
    // No type attribute, so the digits stay a string.
    assert_eq!(map.get("age"), Some(&Value::from("30")));
}

#[test]
fn test_foreign_document_attributes() {
    let back = from_xml(r#"<track id="9" disc="1">Blue in Green</track>"#);
    let map = back.as_map().unwrap();
    assert_eq!(map.get("@id"), Some(&Value::from("9")));
    assert_eq!(map.get("@disc"), Some(&Value::from("1")));
    assert_eq!(map.get("#"), Some(&Value::from("Blue in Green")));
}

#[test]
fn test_custom_value_key() {
    let codec = XmlCodec::new(None).with_value_key("_body");
    let back = codec.deserialize_str(r#"<a lang="en">hi</a>"#);
    let map = back.as_map().unwrap();
    assert_eq!(map.get("_body"), Some(&Value::from("hi")));
}

#[test]
fn test_repeated_tags_collect() {
    let back = from_xml("<r><x>1</x><y>mid</y><x>2</x></r>");
    let map = back.as_map().unwrap();
    assert_eq!(
        map.get("x"),
        Some(&Value::List(vec![Value::from("1"), Value::from("2")]))
    );
    assert_eq!(map.get("y"), Some(&Value::from("mid")));
}

#[test]
fn test_malformed_input_never_fails() {
    // Everything here must come back as some value, without a panic.
    for text in [
        "",
        "   ",
        "not markup",
        "<",
        "</close-only>",
        "<a>",
        "<a><b></a>",
        "<a><b>text",
        "<a>&bogus;</a>",
        "<a>&#xZZ;</a>",
        "<<>>",
        "<?xml version=\"1.0\"?>",
        "<a/><b/>trailing",
        "<a b=>",
        "\u{0}\u{1}\u{2}",
    ] {
        let _ = from_xml(text);
    }
}

#[test]
fn test_unclosed_elements_repaired() {
    let back = from_xml("<root><a>1</a><b>two");
    let map = back.as_map().unwrap();
    assert_eq!(map.get("a"), Some(&Value::from("1")));
    assert_eq!(map.get("b"), Some(&Value::from("two")));
}

#[test]
fn test_content_after_root_ignored() {
    let back = from_xml("<a>first</a><b>second</b>");
    assert_eq!(back, Value::from("first"));
}

#[test]
fn test_nil_beats_text_and_type() {
    let back = from_xml(r#"<a nil="true" type="xsd:integer">42</a>"#);
    assert_eq!(back, Value::Null);
}

#[test]
fn test_bad_typed_payload_degrades_to_string() {
    let back = from_xml(r#"<a type="xsd:integer">not a number</a>"#);
    assert_eq!(back, Value::from("not a number"));
}

#[test]
fn test_pretty_output_decodes_identically() {
    let v = value!({ "a": { "b": [1, 2] }, "c": "text" });
    let compact = XmlCodec::new(Some("root"));
    let pretty = XmlCodec::new(Some("root")).pretty();

    let compact_xml = compact.serialize_str(&v);
    let pretty_xml = pretty.serialize_str(&v);
    assert_ne!(compact_xml, pretty_xml);
    assert_eq!(from_xml(&compact_xml), from_xml(&pretty_xml));
}
