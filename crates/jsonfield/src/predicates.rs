//! Kind checks for object fields. None of these fail: an absent field is simply not of any kind.
use serde_json::Value;

use crate::{JsonKind, Object};

/// Returns `true` if `name` is present and its value is not `null`.
#[must_use]
pub fn has_non_null(object: &Object, name: &str) -> bool {
    object.get(name).is_some_and(|value| !value.is_null())
}

#[must_use]
pub fn is_array(object: &Object, name: &str) -> bool {
    object.get(name).is_some_and(Value::is_array)
}

#[must_use]
pub fn is_object(object: &Object, name: &str) -> bool {
    object.get(name).is_some_and(Value::is_object)
}

#[must_use]
pub fn is_primitive(object: &Object, name: &str) -> bool {
    object.get(name).is_some_and(is_primitive_value)
}

#[must_use]
pub fn is_number(object: &Object, name: &str) -> bool {
    object.get(name).is_some_and(is_number_value)
}

#[must_use]
pub fn is_boolean(object: &Object, name: &str) -> bool {
    object.get(name).is_some_and(Value::is_boolean)
}

#[must_use]
pub fn is_string(object: &Object, name: &str) -> bool {
    object.get(name).is_some_and(Value::is_string)
}

/// Returns `true` for booleans, numbers and strings.
#[inline]
#[must_use]
pub fn is_primitive_value(element: &Value) -> bool {
    JsonKind::of(element).is_primitive()
}

/// Returns `true` if `element` is a number, regardless of whether it was written as an integer
/// or a float.
#[inline]
#[must_use]
pub fn is_number_value(element: &Value) -> bool {
    matches!(element, Value::Number(_))
}
