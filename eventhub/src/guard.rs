//! Predicates for validating dynamic payloads.
//!
//! Consumers that receive payloads as [`serde_json::Value`] (configuration,
//! bridge code, anything that crosses a serialization boundary) can use
//! these to check a value's shape before handing it to a typed channel. The
//! hub itself never calls them; they are an optional collaborator surface.

use serde_json::Value;

/// Returns whether the value is a JSON string.
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Returns whether the value is a JSON number.
pub const fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Returns whether the value is a JSON boolean.
pub const fn is_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Returns whether the value is JSON null.
pub const fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Returns whether the value is a JSON array.
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// Returns whether the value is a plain JSON object.
///
/// Only a JSON map satisfies this; arrays, strings, and the other compound
/// representations do not.
pub const fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_values() {
        assert!(is_string(&json!("hello")));
        assert!(!is_string(&json!(42)));
        assert!(!is_string(&json!(null)));
    }

    #[test]
    fn number_values() {
        assert!(is_number(&json!(42)));
        assert!(is_number(&json!(4.2)));
        assert!(!is_number(&json!("42")));
    }

    #[test]
    fn bool_and_null_values() {
        assert!(is_bool(&json!(true)));
        assert!(!is_bool(&json!(null)));
        assert!(is_null(&json!(null)));
        assert!(!is_null(&json!(false)));
    }

    #[test]
    fn compound_values() {
        assert!(is_array(&json!([1, 2, 3])));
        assert!(!is_array(&json!({"a": 1})));
        assert!(is_object(&json!({"a": 1})));
        assert!(!is_object(&json!([1, 2, 3])));
        assert!(!is_object(&json!("not a map")));
    }

    #[test]
    fn predicates_fit_the_predicate_alias() {
        let check: crate::Predicate<Value> = is_object;
        assert!(check(&json!({})));
    }
}
