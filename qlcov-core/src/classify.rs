//! Query path classification.
//!
//! Pure functions of path structure; no filesystem access.

use std::path::Path;

/// Two-level prefix under which classified queries live.
pub const QUERY_SOURCE_PREFIX: [&str; 2] = ["ql", "src"];
/// Prefix marking a CWE identifier segment in a query path.
pub const CWE_PREFIX: &str = "CWE-";
/// Category assigned when a path does not match the expected layout.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Extract the category from a query path.
///
/// The category is the third path segment when the first two equal
/// `ql/src` (e.g. `ql/src/security/...` yields `security`), otherwise
/// [`UNKNOWN_CATEGORY`]. Paths shorter than the prefix fall through.
pub fn category_from_path(path: &Path) -> String {
    let parts = path_segments(path);
    if parts.len() >= 3 && parts[0] == QUERY_SOURCE_PREFIX[0] && parts[1] == QUERY_SOURCE_PREFIX[1]
    {
        return parts[2].clone();
    }
    UNKNOWN_CATEGORY.to_string()
}

/// Extract the CWE identifier from a query path, if present.
///
/// Returns the first path segment starting with [`CWE_PREFIX`], or an empty
/// string when no segment matches.
pub fn cwe_from_path(path: &Path) -> String {
    path_segments(path)
        .into_iter()
        .find(|segment| segment.starts_with(CWE_PREFIX))
        .unwrap_or_default()
}

fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect()
}
