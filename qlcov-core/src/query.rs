//! Query record construction from resolver output.

use std::path::Path;

use crate::classify::{category_from_path, cwe_from_path};
use crate::domain::QueryRecord;

/// Build one [`QueryRecord`] per resolved query path.
///
/// Paths are expressed relative to `project_root` when possible; paths
/// outside the root are kept verbatim rather than failing. Every record
/// starts out not covered with no associated test files: this builder does
/// no cross-referencing against any test inventory.
pub fn build_query_records(paths: &[String], project_root: &Path) -> Vec<QueryRecord> {
    paths
        .iter()
        .map(|raw| build_query_record(raw, project_root))
        .collect()
}

fn build_query_record(raw: &str, project_root: &Path) -> QueryRecord {
    let full = Path::new(raw);
    let relative = full.strip_prefix(project_root).unwrap_or(full);

    QueryRecord {
        path: relative.display().to_string(),
        name: full
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
        category: category_from_path(relative),
        cwe: cwe_from_path(relative),
        covered: false,
        test_files: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::build_query_records;
    use std::path::Path;

    #[test]
    fn builds_relative_record_with_classification() {
        let paths = vec!["/repo/ql/src/security/CWE-89/SqlInjection.ql".to_string()];
        let records = build_query_records(&paths, Path::new("/repo"));

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.path, "ql/src/security/CWE-89/SqlInjection.ql");
        assert_eq!(record.name, "SqlInjection");
        assert_eq!(record.category, "security");
        assert_eq!(record.cwe, "CWE-89");
    }

    #[test]
    fn path_outside_root_is_kept_verbatim() {
        let paths = vec!["/elsewhere/Query.ql".to_string()];
        let records = build_query_records(&paths, Path::new("/repo"));

        assert_eq!(records[0].path, "/elsewhere/Query.ql");
        assert_eq!(records[0].category, "unknown");
    }

    #[test]
    fn records_start_uncovered_with_no_test_files() {
        let paths = vec![
            "/repo/ql/src/security/CWE-89/SqlInjection.ql".to_string(),
            "/repo/tools/Helper.ql".to_string(),
            "weird".to_string(),
        ];
        let records = build_query_records(&paths, Path::new("/repo"));

        for record in &records {
            assert!(!record.covered);
            assert!(record.test_files.is_empty());
        }
    }

    #[test]
    fn name_is_file_stem_without_extension() {
        let paths = vec!["/repo/ql/src/diagnostics/Sanity.ql".to_string()];
        let records = build_query_records(&paths, Path::new("/repo"));
        assert_eq!(records[0].name, "Sanity");
    }
}
