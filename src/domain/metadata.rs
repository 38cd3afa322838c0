use std::fs;
use std::path::Path;

use crate::error::{PrPublishError, Result};

/// Fields every library metadata file must declare, in validation order.
///
/// The first missing field aborts the run; later fields are not inspected.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "name",
    "version",
    "author",
    "maintainer",
    "sentence",
    "paragraph",
    "category",
    "url",
];

/// A flat `key=value` library metadata record (`library.properties` format).
///
/// Lines are kept verbatim: there is no nesting and no quoting or escaping
/// semantics, and keys only count when anchored at the start of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryMetadata {
    lines: Vec<String>,
}

impl LibraryMetadata {
    /// Load the metadata file at `path`.
    ///
    /// # Returns
    /// * `Ok(LibraryMetadata)` - File read successfully
    /// * `Err(FileMissing)` - No file exists at the given path
    /// * `Err(Io)` - File exists but cannot be read
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PrPublishError::FileMissing(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse metadata from in-memory text (newline-separated `key=value`).
    pub fn parse(content: &str) -> Self {
        LibraryMetadata {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    /// Whether any line declares the given field, i.e. starts with `key=`.
    pub fn has_field(&self, key: &str) -> bool {
        let prefix = format!("{}=", key);
        self.lines.iter().any(|line| line.starts_with(&prefix))
    }

    /// Declared dependency names, one per `depends=` line.
    ///
    /// Each matching line contributes the substring after the first `=` with
    /// surrounding whitespace trimmed. A comma-separated list on a single
    /// line is deliberately not split; it surfaces as one (invalid) name.
    pub fn dependencies(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter(|line| line.starts_with("depends="))
            .filter_map(|line| line.split_once('=').map(|(_, value)| value.trim().to_string()))
            .collect()
    }
}
