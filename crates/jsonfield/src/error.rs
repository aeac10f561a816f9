use core::fmt;
use std::{io, path::PathBuf};

use serde_json::Value;

use crate::{Expected, JsonKind};

/// Errors that occur while extracting typed values or loading JSON documents.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A strict accessor was asked for a field the object does not contain.
    MissingField { name: String, expected: Expected },
    /// The field exists, but its value can not be converted to the requested type.
    TypeMismatch {
        name: String,
        expected: Expected,
        found: JsonKind,
    },
    /// The file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// The input is not well-formed JSON. `path` is `None` for in-memory input.
    Parse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn missing_field(name: impl Into<String>, expected: Expected) -> Error {
        Error::MissingField {
            name: name.into(),
            expected,
        }
    }

    pub(crate) fn type_mismatch(
        name: impl Into<String>,
        expected: Expected,
        found: &Value,
    ) -> Error {
        Error::TypeMismatch {
            name: name.into(),
            expected,
            found: JsonKind::of(found),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: Option<PathBuf>, source: serde_json::Error) -> Error {
        Error::Parse { path, source }
    }

    /// Name of the field the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingField { name, .. } | Error::TypeMismatch { name, .. } => Some(name),
            Error::Io { .. } | Error::Parse { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingField { name, expected } => {
                write!(f, "Missing {name}, expected to find {expected}")
            }
            Error::TypeMismatch {
                name,
                expected,
                found,
            } => write!(f, "Expected {name} to be {expected}, found {found}"),
            Error::Io { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
            Error::Parse {
                path: Some(path),
                source,
            } => write!(f, "Invalid JSON in '{}': {source}", path.display()),
            Error::Parse { path: None, source } => write!(f, "Invalid JSON: {source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Parse { source, .. } => Some(source),
            Error::MissingField { .. } | Error::TypeMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use serde_json::json;

    use super::Error;
    use crate::{Expected, JsonKind};

    #[test]
    fn missing_field_message() {
        let error = Error::missing_field("port", Expected::Int);
        assert_eq!(error.to_string(), "Missing port, expected to find an int");
        assert_eq!(error.field(), Some("port"));
        assert!(error.source().is_none());
    }

    #[test]
    fn type_mismatch_message() {
        let error = Error::type_mismatch("enabled", Expected::Boolean, &json!("yes"));
        assert_eq!(
            error.to_string(),
            "Expected enabled to be a boolean, found string"
        );
        assert!(matches!(
            error,
            Error::TypeMismatch {
                found: JsonKind::String,
                ..
            }
        ));
    }

    #[test]
    fn io_error_exposes_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = Error::io("config.json", source);
        assert_eq!(error.to_string(), "Failed to read 'config.json': no such file");
        assert_eq!(error.field(), None);
        let source = error.source().expect("Should have a source");
        assert_eq!(source.to_string(), "no such file");
    }

    #[test]
    fn parse_error_without_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("Should fail");
        let error = Error::parse(None, source);
        assert!(error.to_string().starts_with("Invalid JSON: "));
        assert!(error.source().is_some());
    }
}
