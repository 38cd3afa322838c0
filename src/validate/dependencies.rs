use std::path::Path;

use regex::Regex;

use crate::domain::LibraryMetadata;
use crate::error::{PrPublishError, Result};

/// Pattern every declared dependency name must match
const NAME_PATTERN: &str = r"^[A-Za-z0-9_]+$";

/// Validate the dependency names declared in the metadata file.
///
/// Re-reads the metadata file and collects one name per `depends=` line (the
/// literal one-name-per-line convention; comma-separated lists are not
/// split). The first name outside `[A-Za-z0-9_]+` fails the run.
///
/// # Returns
/// * `Ok(Vec<String>)` - All declared names, possibly empty (zero
///   dependencies is a valid, informational outcome)
/// * `Err(FileMissing)` - No metadata file at the given path
/// * `Err(BadDependencyName)` - First name violating the pattern
pub fn validate_dependencies(path: &Path) -> Result<Vec<String>> {
    let metadata = LibraryMetadata::load(path)?;
    let names = metadata.dependencies();

    let pattern = Regex::new(NAME_PATTERN)
        .map_err(|e| PrPublishError::config(format!("invalid dependency pattern: {}", e)))?;

    for name in &names {
        if !pattern.is_match(name) {
            return Err(PrPublishError::BadDependencyName(name.clone()));
        }
    }

    Ok(names)
}
