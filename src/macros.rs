/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// Map keys may be string literals or integer literals; integer keys are the
/// convention lists reduce to on the wire.
///
/// # Examples
///
/// ```rust
/// use wireval::{value, Value};
///
/// let v = value!({
///     "name": "carol",
///     "tags": ["a", "b"],
///     "extra": null,
/// });
/// assert!(matches!(v, Value::Map(_)));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::ValueMap::new())
    };

    ({ $($key:literal : $entry:tt),* $(,)? }) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert($key, $crate::value!($entry));
        )*
        $crate::Value::Map(map)
    }};

    // Fallback for any expression with a `From` conversion.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Value, ValueMap};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Int(42));
        assert_eq!(value!(3.5), Value::Float(3.5));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_lists() {
        assert_eq!(value!([]), Value::List(vec![]));

        let list = value!([1, "two", null]);
        match list {
            Value::List(elements) => {
                assert_eq!(elements.len(), 3);
                assert_eq!(elements[0], Value::Int(1));
                assert_eq!(elements[1], Value::String("two".to_string()));
                assert_eq!(elements[2], Value::Null);
            }
            _ => panic!("Expected list"),
        }
    }

    #[test]
    fn test_value_macro_maps() {
        assert_eq!(value!({}), Value::Map(ValueMap::new()));

        let map = value!({
            "name": "Alice",
            "age": 30
        });

        match map {
            Value::Map(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Int(30)));
            }
            _ => panic!("Expected map"),
        }
    }

    #[test]
    fn test_value_macro_integer_keys() {
        let map = value!({ 0: "a", 1: "b" });
        match map {
            Value::Map(map) => {
                assert!(map.is_list_shaped());
                assert_eq!(map.get(0), Some(&Value::String("a".to_string())));
            }
            _ => panic!("Expected map"),
        }
    }

    #[test]
    fn test_value_macro_nesting() {
        let v = value!({
            "rows": [{ "id": 1 }, { "id": 2 }],
        });
        let rows = v.as_map().and_then(|m| m.get("rows"));
        assert!(matches!(rows, Some(Value::List(elements)) if elements.len() == 2));
    }
}
