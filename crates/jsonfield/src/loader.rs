//! Loading JSON documents from files and strings.
//!
//! Parsing goes through `serde_json` directly, so there is no parser state shared between calls.
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{Error, Expected, JsonKind, Object};

/// Name reported in type errors when an in-memory document is not an object.
const ROOT: &str = "<root>";

/// Read and parse the JSON document at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file can not be opened or read, and [`Error::Parse`] if its
/// contents are not well-formed JSON.
pub fn read(path: impl AsRef<Path>) -> Result<Value, Error> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "Reading JSON document");
    let file = File::open(path).map_err(|source| {
        tracing::debug!(path = %path.display(), error = %source, "Failed to open JSON document");
        Error::io(path, source)
    })?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| from_reader_error(path, source))?;
    tracing::debug!(path = %path.display(), kind = %JsonKind::of(&value), "Loaded JSON document");
    Ok(value)
}

/// Read the JSON document at `path`, which must contain an object at the top level.
///
/// # Errors
///
/// Same as [`read`], plus [`Error::TypeMismatch`] (named after the path) if the document is not
/// an object.
pub fn read_object(path: impl AsRef<Path>) -> Result<Object, Error> {
    let path = path.as_ref();
    match read(path)? {
        Value::Object(object) => Ok(object),
        other => Err(Error::type_mismatch(
            path.display().to_string(),
            Expected::Object,
            &other,
        )),
    }
}

/// Parse a JSON document held in memory.
///
/// # Errors
///
/// Returns [`Error::Parse`] if `text` is not well-formed JSON.
pub fn parse(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|source| Error::parse(None, source))
}

/// Parse a JSON document held in memory, which must be an object.
///
/// # Errors
///
/// Same as [`parse`], plus [`Error::TypeMismatch`] if the document is not an object.
pub fn parse_object(text: &str) -> Result<Object, Error> {
    match parse(text)? {
        Value::Object(object) => Ok(object),
        other => Err(Error::type_mismatch(ROOT, Expected::Object, &other)),
    }
}

fn from_reader_error(path: &Path, source: serde_json::Error) -> Error {
    tracing::debug!(path = %path.display(), error = %source, "Failed to load JSON document");
    if source.is_io() {
        Error::io(path, source.into())
    } else {
        Error::parse(Some(PathBuf::from(path)), source)
    }
}
