//! Strict (`need_*`) and defaulted (`get_*`) accessors.
//!
//! Every type has three entry points:
//!
//! - `need_*_value(element, name)` converts an element that was already looked up. `name` is
//!   only used to build the error.
//! - `need_*(object, name)` looks the field up first and fails with [`Error::MissingField`] if
//!   it is absent.
//! - `get_*(object, name, default)` returns `default` if the field is absent, otherwise it
//!   behaves like `need_*`. Type errors are never replaced by the default.
//!
//! Numeric accessors accept any JSON number and convert it with `as` semantics: integers wrap
//! to narrower widths, floats are truncated toward zero and saturate at the target bounds.
use serde_json::Value;

use crate::{predicates::has_non_null, Error, Expected, Object};

/// Conversion from a borrowed JSON element into a Rust value.
pub trait FromElement<'a>: Sized {
    /// Reported in errors when the conversion fails.
    const EXPECTED: Expected;
    /// Whether an explicit `null` counts as absent for [`get`].
    const DEFAULT_ON_NULL: bool = false;

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `element` is not of a compatible kind.
    fn from_element(element: &'a Value, name: &str) -> Result<Self, Error>;
}

/// Convert `element` into `T`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not of a compatible kind.
#[inline]
pub fn need_value<'a, T: FromElement<'a>>(element: &'a Value, name: &str) -> Result<T, Error> {
    T::from_element(element, name)
}

/// Look up `name` in `object` and convert it into `T`.
///
/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if its value
/// is not of a compatible kind.
#[inline]
pub fn need<'a, T: FromElement<'a>>(object: &'a Object, name: &str) -> Result<T, Error> {
    match object.get(name) {
        Some(element) => T::from_element(element, name),
        None => Err(Error::missing_field(name, T::EXPECTED)),
    }
}

/// Look up `name` in `object` and convert it into `T`, or return `default` if it is absent.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if the field is present but not of a compatible kind.
#[inline]
pub fn get<'a, T: FromElement<'a>>(object: &'a Object, name: &str, default: T) -> Result<T, Error> {
    let present = if T::DEFAULT_ON_NULL {
        has_non_null(object, name)
    } else {
        object.contains_key(name)
    };
    if present {
        need(object, name)
    } else {
        Ok(default)
    }
}

enum Numeric {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

fn numeric(element: &Value, name: &str, expected: Expected) -> Result<Numeric, Error> {
    if let Value::Number(number) = element {
        if let Some(value) = number.as_i64() {
            return Ok(Numeric::Signed(value));
        }
        if let Some(value) = number.as_u64() {
            return Ok(Numeric::Unsigned(value));
        }
        if let Some(value) = number.as_f64() {
            return Ok(Numeric::Float(value));
        }
    }
    Err(Error::type_mismatch(name, expected, element))
}

macro_rules! impl_numeric {
    ($($ty:ty => $expected:ident),+ $(,)?) => {
        $(
            impl<'a> FromElement<'a> for $ty {
                const EXPECTED: Expected = Expected::$expected;

                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_precision_loss,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from_element(element: &'a Value, name: &str) -> Result<Self, Error> {
                    Ok(match numeric(element, name, Self::EXPECTED)? {
                        Numeric::Signed(value) => value as $ty,
                        Numeric::Unsigned(value) => value as $ty,
                        Numeric::Float(value) => value as $ty,
                    })
                }
            }
        )+
    };
}

impl_numeric! {
    i8 => Byte,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
}

impl<'a> FromElement<'a> for bool {
    const EXPECTED: Expected = Expected::Boolean;

    fn from_element(element: &'a Value, name: &str) -> Result<Self, Error> {
        element
            .as_bool()
            .ok_or_else(|| Error::type_mismatch(name, Self::EXPECTED, element))
    }
}

/// Any primitive converts to a string: numbers and booleans yield their JSON text.
impl<'a> FromElement<'a> for String {
    const EXPECTED: Expected = Expected::String;
    const DEFAULT_ON_NULL: bool = true;

    fn from_element(element: &'a Value, name: &str) -> Result<Self, Error> {
        match element {
            Value::String(value) => Ok(value.clone()),
            Value::Number(value) => Ok(value.to_string()),
            Value::Bool(value) => Ok(value.to_string()),
            _ => Err(Error::type_mismatch(name, Self::EXPECTED, element)),
        }
    }
}

impl<'a> FromElement<'a> for &'a Vec<Value> {
    const EXPECTED: Expected = Expected::Array;

    fn from_element(element: &'a Value, name: &str) -> Result<Self, Error> {
        element
            .as_array()
            .ok_or_else(|| Error::type_mismatch(name, Self::EXPECTED, element))
    }
}

impl<'a> FromElement<'a> for &'a Object {
    const EXPECTED: Expected = Expected::Object;

    fn from_element(element: &'a Value, name: &str) -> Result<Self, Error> {
        element
            .as_object()
            .ok_or_else(|| Error::type_mismatch(name, Self::EXPECTED, element))
    }
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not a boolean.
pub fn need_boolean_value(element: &Value, name: &str) -> Result<bool, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// a boolean.
pub fn need_boolean(object: &Object, name: &str) -> Result<bool, Error> {
    need(object, name)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `name` is present but not a boolean, `null` included.
pub fn get_boolean(object: &Object, name: &str, default: bool) -> Result<bool, Error> {
    get(object, name, default)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not a number.
pub fn need_byte_value(element: &Value, name: &str) -> Result<i8, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// a number.
pub fn need_byte(object: &Object, name: &str) -> Result<i8, Error> {
    need(object, name)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `name` is present but not a number.
pub fn get_byte(object: &Object, name: &str, default: i8) -> Result<i8, Error> {
    get(object, name, default)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not a number.
pub fn need_double_value(element: &Value, name: &str) -> Result<f64, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// a number.
pub fn need_double(object: &Object, name: &str) -> Result<f64, Error> {
    need(object, name)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `name` is present but not a number.
pub fn get_double(object: &Object, name: &str, default: f64) -> Result<f64, Error> {
    get(object, name, default)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not a number.
pub fn need_float_value(element: &Value, name: &str) -> Result<f32, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// a number.
pub fn need_float(object: &Object, name: &str) -> Result<f32, Error> {
    need(object, name)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `name` is present but not a number.
pub fn get_float(object: &Object, name: &str, default: f32) -> Result<f32, Error> {
    get(object, name, default)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not a number.
pub fn need_int_value(element: &Value, name: &str) -> Result<i32, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// a number.
pub fn need_int(object: &Object, name: &str) -> Result<i32, Error> {
    need(object, name)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `name` is present but not a number.
pub fn get_int(object: &Object, name: &str, default: i32) -> Result<i32, Error> {
    get(object, name, default)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not a number.
pub fn need_long_value(element: &Value, name: &str) -> Result<i64, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// a number.
pub fn need_long(object: &Object, name: &str) -> Result<i64, Error> {
    need(object, name)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `name` is present but not a number.
pub fn get_long(object: &Object, name: &str, default: i64) -> Result<i64, Error> {
    get(object, name, default)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not a primitive.
pub fn need_string_value(element: &Value, name: &str) -> Result<String, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// a primitive.
pub fn need_string(object: &Object, name: &str) -> Result<String, Error> {
    need(object, name)
}

/// Unlike the other defaulted accessors, an explicit `null` also yields `default`.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `name` holds an array or an object.
pub fn get_string(object: &Object, name: &str, default: &str) -> Result<String, Error> {
    if has_non_null(object, name) {
        need(object, name)
    } else {
        Ok(default.to_owned())
    }
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not an array.
pub fn need_array_value<'a>(element: &'a Value, name: &str) -> Result<&'a Vec<Value>, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// an array.
pub fn need_array<'a>(object: &'a Object, name: &str) -> Result<&'a Vec<Value>, Error> {
    need(object, name)
}

/// # Errors
///
/// Returns [`Error::TypeMismatch`] if `element` is not an object.
pub fn need_object_value<'a>(element: &'a Value, name: &str) -> Result<&'a Object, Error> {
    need_value(element, name)
}

/// # Errors
///
/// Returns [`Error::MissingField`] if `name` is absent, or [`Error::TypeMismatch`] if it is not
/// an object.
pub fn need_object<'a>(object: &'a Object, name: &str) -> Result<&'a Object, Error> {
    need(object, name)
}
