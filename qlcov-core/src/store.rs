//! Persistence for the `.coverage.json` document.
//!
//! The document is an arbitrary JSON object; the pipeline only ever rewrites
//! its `queries` and `metadata` keys, so load/save operate on the full object
//! to keep unrelated keys intact.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{QlcovError, Result};

/// Well-known file name of the coverage document at the project root.
pub const COVERAGE_FILE_NAME: &str = ".coverage.json";

/// Load the coverage document from disk.
///
/// A missing file and malformed JSON are both fatal; the top-level value
/// must be a JSON object.
pub fn load_coverage_document(path: &Path) -> Result<Map<String, Value>> {
    if !path.is_file() {
        return Err(QlcovError::MissingStateFile(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    let value: Value =
        serde_json::from_str(&contents).map_err(|err| QlcovError::MalformedState(err.to_string()))?;

    match value {
        Value::Object(document) => Ok(document),
        other => Err(QlcovError::MalformedState(format!(
            "expected a JSON object at the top level, found {other}"
        ))),
    }
}

/// Save the coverage document back to disk.
///
/// Output is pretty-printed with 2-space indentation; non-ASCII characters
/// are written literally.
pub fn save_coverage_document(path: &Path, document: &Map<String, Value>) -> Result<()> {
    let contents = serde_json::to_string_pretty(document)
        .map_err(|err| QlcovError::Other(format!("error serializing coverage data: {err}")))?;
    std::fs::write(path, contents)?;
    Ok(())
}
