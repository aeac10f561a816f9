//! # jsonfield
//!
//! Typed field access for `serde_json` documents.
//!
//! The crate offers two flavours of accessors on top of [`serde_json::Value`]:
//!
//! - `need_*` accessors are strict: they fail if the field is missing or holds a value of an
//!   incompatible kind.
//! - `get_*` accessors fall back to a default when the field is missing, but still report type
//!   errors.
//!
//! ```rust
//! use serde_json::json;
//!
//! # fn main() -> Result<(), jsonfield::Error> {
//! let document = json!({"name": "example", "port": 8080, "tags": null});
//! let object = document.as_object().expect("Should be an object");
//!
//! assert_eq!(jsonfield::need_string(object, "name")?, "example");
//! assert_eq!(jsonfield::get_int(object, "port", 80)?, 8080);
//! assert_eq!(jsonfield::get_string(object, "tags", "none")?, "none");
//! assert!(!jsonfield::get_boolean(object, "verbose", false)?);
//! assert!(jsonfield::need_long(object, "name").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! Documents can be loaded from disk with [`read`] and [`read_object`]:
//!
//! ```rust,no_run
//! # fn main() -> Result<(), jsonfield::Error> {
//! let config = jsonfield::read_object("config.json")?;
//! let workers = jsonfield::get_int(&config, "workers", 4)?;
//! # Ok(())
//! # }
//! ```
mod error;
mod ext;
mod extract;
mod kind;
mod loader;
mod predicates;

pub use error::Error;
pub use ext::ObjectExt;
pub use extract::{
    get, get_boolean, get_byte, get_double, get_float, get_int, get_long, get_string, need,
    need_array, need_array_value, need_boolean, need_boolean_value, need_byte, need_byte_value,
    need_double, need_double_value, need_float, need_float_value, need_int, need_int_value,
    need_long, need_long_value, need_object, need_object_value, need_string, need_string_value,
    need_value, FromElement,
};
pub use kind::{Expected, JsonKind};
pub use loader::{parse, parse_object, read, read_object};
pub use predicates::{
    has_non_null, is_array, is_boolean, is_number, is_number_value, is_object, is_primitive,
    is_primitive_value, is_string,
};

/// A JSON object: string keys mapped to JSON values.
pub type Object = serde_json::Map<String, serde_json::Value>;
