use core::fmt;

use serde_json::Value;

/// The variant tag of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// Booleans, numbers and strings are primitives. Null is not.
    #[must_use]
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            JsonKind::Boolean | JsonKind::Number | JsonKind::String
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type an accessor was asked to produce.
///
/// Numeric variants follow the usual fixed-width naming: `Byte` is `i8`, `Int` is `i32`,
/// `Long` is `i64`, `Float` is `f32` and `Double` is `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    Boolean,
    Byte,
    Double,
    Float,
    Int,
    Long,
    String,
    Array,
    Object,
}

impl Expected {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Expected::Boolean => "boolean",
            Expected::Byte => "byte",
            Expected::Double => "double",
            Expected::Float => "float",
            Expected::Int => "int",
            Expected::Long => "long",
            Expected::String => "string",
            Expected::Array => "array",
            Expected::Object => "object",
        }
    }

    fn article(self) -> &'static str {
        match self {
            Expected::Int | Expected::Array | Expected::Object => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.article(), self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use test_case::test_case;

    use super::{Expected, JsonKind};

    #[test_case(&json!(null), JsonKind::Null)]
    #[test_case(&json!(false), JsonKind::Boolean)]
    #[test_case(&json!(42), JsonKind::Number)]
    #[test_case(&json!(-4.5), JsonKind::Number)]
    #[test_case(&json!("text"), JsonKind::String)]
    #[test_case(&json!([1, 2]), JsonKind::Array)]
    #[test_case(&json!({"a": 1}), JsonKind::Object)]
    fn kind_of(value: &Value, expected: JsonKind) {
        assert_eq!(JsonKind::of(value), expected);
    }

    #[test]
    fn primitives() {
        assert!(JsonKind::Boolean.is_primitive());
        assert!(JsonKind::Number.is_primitive());
        assert!(JsonKind::String.is_primitive());
        assert!(!JsonKind::Null.is_primitive());
        assert!(!JsonKind::Array.is_primitive());
        assert!(!JsonKind::Object.is_primitive());
    }

    #[test_case(Expected::Boolean, "a boolean")]
    #[test_case(Expected::Byte, "a byte")]
    #[test_case(Expected::Int, "an int")]
    #[test_case(Expected::Long, "a long")]
    #[test_case(Expected::Object, "an object")]
    fn expected_display(expected: Expected, message: &str) {
        assert_eq!(expected.to_string(), message);
    }
}
