use std::path::Path;

use crate::domain::{LibraryMetadata, REQUIRED_FIELDS};
use crate::error::{PrPublishError, Result};

/// Validate that the metadata file declares every required field.
///
/// Fields are checked in the fixed order of [`REQUIRED_FIELDS`]; the first
/// missing field aborts with `FieldMissing` naming it (no aggregation).
///
/// # Returns
/// * `Ok(())` - All required fields present
/// * `Err(FileMissing)` - No metadata file at the given path
/// * `Err(FieldMissing)` - A required field has no `key=` line
pub fn validate_metadata(path: &Path) -> Result<()> {
    let metadata = LibraryMetadata::load(path)?;

    for field in REQUIRED_FIELDS {
        if !metadata.has_field(field) {
            return Err(PrPublishError::FieldMissing(field.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_metadata(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_first_missing_field_reported() {
        // Both "author" and "category" are absent; "author" comes first
        let file = write_metadata("name=Servo\nversion=1.0.1\n");
        let err = validate_metadata(file.path()).unwrap_err();
        match err {
            PrPublishError::FieldMissing(field) => assert_eq!(field, "author"),
            other => panic!("expected FieldMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = validate_metadata(Path::new("/nonexistent/library.properties")).unwrap_err();
        assert!(matches!(err, PrPublishError::FileMissing(_)));
    }
}
