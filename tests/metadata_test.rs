// tests/metadata_test.rs
use std::io::Write;
use std::path::Path;

use pr_publish::validate::{validate_dependencies, validate_metadata};
use pr_publish::PrPublishError;
use tempfile::NamedTempFile;

fn write_metadata(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn complete_metadata() -> String {
    [
        "name=Servo",
        "version=1.0.1",
        "author=Alice Example",
        "maintainer=Bob Example <bob@example.com>",
        "sentence=Allows boards to control servo motors.",
        "paragraph=This library can control a great number of servos.",
        "category=Device Control",
        "url=https://example.com/servo",
    ]
    .join("\n")
}

#[test]
fn test_complete_metadata_passes() {
    let file = write_metadata(&complete_metadata());
    assert!(validate_metadata(file.path()).is_ok());
}

#[test]
fn test_missing_file_fails() {
    let err = validate_metadata(Path::new("/nonexistent/library.properties")).unwrap_err();
    assert!(matches!(err, PrPublishError::FileMissing(_)));
}

#[test]
fn test_each_missing_field_is_named() {
    let complete = complete_metadata();

    for missing in [
        "name",
        "version",
        "author",
        "maintainer",
        "sentence",
        "paragraph",
        "category",
        "url",
    ] {
        let content: String = complete
            .lines()
            .filter(|line| !line.starts_with(&format!("{}=", missing)))
            .collect::<Vec<_>>()
            .join("\n");
        let file = write_metadata(&content);

        match validate_metadata(file.path()).unwrap_err() {
            PrPublishError::FieldMissing(field) => assert_eq!(field, missing),
            other => panic!("expected FieldMissing for '{}', got {:?}", missing, other),
        }
    }
}

#[test]
fn test_validation_is_idempotent() {
    let file = write_metadata(&complete_metadata());
    assert!(validate_metadata(file.path()).is_ok());
    assert!(validate_metadata(file.path()).is_ok());

    let incomplete = write_metadata("name=Servo\n");
    assert!(validate_metadata(incomplete.path()).is_err());
    assert!(validate_metadata(incomplete.path()).is_err());
}

#[test]
fn test_dependencies_valid_names() {
    let content = format!("{}\ndepends=Wire\ndepends=SPI\n", complete_metadata());
    let file = write_metadata(&content);
    assert_eq!(
        validate_dependencies(file.path()).unwrap(),
        vec!["Wire", "SPI"]
    );
}

#[test]
fn test_dependencies_invalid_name_fails() {
    let content = format!("{}\ndepends=Foo-Bar\n", complete_metadata());
    let file = write_metadata(&content);

    match validate_dependencies(file.path()).unwrap_err() {
        PrPublishError::BadDependencyName(name) => assert_eq!(name, "Foo-Bar"),
        other => panic!("expected BadDependencyName, got {:?}", other),
    }
}

#[test]
fn test_dependencies_none_is_informational_success() {
    let file = write_metadata(&complete_metadata());
    assert!(validate_dependencies(file.path()).unwrap().is_empty());
}

#[test]
fn test_dependencies_comma_list_rejected_as_one_name() {
    // One name per depends= line; a comma-separated list is a single
    // (invalid) entry by design.
    let content = format!("{}\ndepends=Wire, SPI\n", complete_metadata());
    let file = write_metadata(&content);
    assert!(matches!(
        validate_dependencies(file.path()).unwrap_err(),
        PrPublishError::BadDependencyName(_)
    ));
}
