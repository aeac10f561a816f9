use std::{error::Error as _, fs, path::PathBuf};

use jsonfield::{read, read_object, Error, Expected, JsonKind};
use serde_json::json;
use tempfile::TempDir;
use test_case::test_case;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[test]
fn read_object_with_single_key() {
    let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = write_fixture(&dir, "single.json", r#"{"a":1}"#);
    let object = read_object(&path).expect("Should be an object");
    assert_eq!(object.len(), 1);
    assert_eq!(object["a"], json!(1));
}

#[test]
fn read_any_document() {
    let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = write_fixture(&dir, "array.json", "[1, 2, {\"nested\": null}]\n");
    assert_eq!(
        read(&path).expect("Valid JSON"),
        json!([1, 2, {"nested": null}])
    );
}

#[test_case("[1,2]", JsonKind::Array)]
#[test_case("42", JsonKind::Number)]
#[test_case("\"value\"", JsonKind::String)]
fn read_object_rejects_non_objects(contents: &str, kind: JsonKind) {
    let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = write_fixture(&dir, "document.json", contents);
    let error = read_object(&path).expect_err("Should fail");
    match &error {
        Error::TypeMismatch {
            name,
            expected,
            found,
        } => {
            assert_eq!(name, &path.display().to_string());
            assert_eq!(*expected, Expected::Object);
            assert_eq!(*found, kind);
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert_eq!(error.field(), Some(path.display().to_string().as_str()));
}

#[test]
fn missing_file_is_io_failure() {
    let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = dir.path().join("does-not-exist.json");
    let error = read_object(&path).expect_err("Should fail");
    assert!(matches!(&error, Error::Io { path: actual, .. } if *actual == path));
    assert!(error.to_string().starts_with("Failed to read '"));
    let source = error.source().expect("Should have a source");
    let source = source
        .downcast_ref::<std::io::Error>()
        .expect("Should be an IO error");
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn directory_is_io_failure() {
    let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
    let error = read(dir.path()).expect_err("Should fail");
    assert!(matches!(error, Error::Io { .. }), "{error:?}");
}

#[test_case("{invalid")]
#[test_case("")]
#[test_case("{\"a\": 1,}")]
#[test_case("[1, 2] [3]")]
fn malformed_contents_are_parse_failures(contents: &str) {
    let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = write_fixture(&dir, "broken.json", contents);
    let error = read_object(&path).expect_err("Should fail");
    assert!(
        matches!(&error, Error::Parse { path: Some(actual), .. } if *actual == path),
        "{error:?}"
    );
    assert!(error.to_string().starts_with("Invalid JSON in '"));
    assert!(error.source().is_some());
}

#[test]
fn loaded_documents_feed_accessors() {
    let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
    let path = write_fixture(
        &dir,
        "config.json",
        r#"{"name": "service", "workers": 8, "debug": false, "ratio": 0.75}"#,
    );
    let config = read_object(&path).expect("Should be an object");
    assert_eq!(
        jsonfield::need_string(&config, "name").expect("Present"),
        "service"
    );
    assert_eq!(jsonfield::get_int(&config, "workers", 1).expect("Present"), 8);
    assert!(!jsonfield::get_boolean(&config, "debug", true).expect("Present"));
    assert_eq!(jsonfield::get_long(&config, "timeout", 30).expect("Defaulted"), 30);
}
