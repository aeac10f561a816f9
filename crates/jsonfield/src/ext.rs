use crate::{extract, predicates, Error, FromElement, Object};

/// Method-call access to the helpers in this crate.
///
/// ```rust
/// use jsonfield::ObjectExt;
/// use serde_json::json;
///
/// let document = json!({"retries": 3, "name": null});
/// let object = document.as_object().expect("Should be an object");
///
/// assert!(object.is_number("retries"));
/// assert_eq!(object.need::<i64>("retries").expect("Should be a number"), 3);
/// assert_eq!(object.get_or("timeout", 30).expect("Should default"), 30);
/// assert_eq!(object.get_or("name", String::from("anonymous")).expect("Should default"), "anonymous");
/// ```
pub trait ObjectExt {
    fn has_non_null(&self, name: &str) -> bool;
    fn is_array(&self, name: &str) -> bool;
    fn is_object(&self, name: &str) -> bool;
    fn is_primitive(&self, name: &str) -> bool;
    fn is_number(&self, name: &str) -> bool;
    fn is_boolean(&self, name: &str) -> bool;
    fn is_string(&self, name: &str) -> bool;
    /// See [`need`](crate::need).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] or [`Error::TypeMismatch`].
    fn need<'a, T: FromElement<'a>>(&'a self, name: &str) -> Result<T, Error>;
    /// See [`get`](crate::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the field is present but not of a compatible kind.
    fn get_or<'a, T: FromElement<'a>>(&'a self, name: &str, default: T) -> Result<T, Error>;
}

impl ObjectExt for Object {
    fn has_non_null(&self, name: &str) -> bool {
        predicates::has_non_null(self, name)
    }
    fn is_array(&self, name: &str) -> bool {
        predicates::is_array(self, name)
    }
    fn is_object(&self, name: &str) -> bool {
        predicates::is_object(self, name)
    }
    fn is_primitive(&self, name: &str) -> bool {
        predicates::is_primitive(self, name)
    }
    fn is_number(&self, name: &str) -> bool {
        predicates::is_number(self, name)
    }
    fn is_boolean(&self, name: &str) -> bool {
        predicates::is_boolean(self, name)
    }
    fn is_string(&self, name: &str) -> bool {
        predicates::is_string(self, name)
    }
    fn need<'a, T: FromElement<'a>>(&'a self, name: &str) -> Result<T, Error> {
        extract::need(self, name)
    }
    fn get_or<'a, T: FromElement<'a>>(&'a self, name: &str, default: T) -> Result<T, Error> {
        extract::get(self, name, default)
    }
}
