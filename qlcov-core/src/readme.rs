//! Marker-delimited README patching for the coverage report.

use std::path::Path;

use crate::error::Result;

/// Marker line opening the coverage report section.
pub const COVERAGE_START_MARKER: &str = "<!-- COVERAGE-REPORT -->";
/// Marker line closing the coverage report section.
pub const COVERAGE_END_MARKER: &str = "<!-- COVERAGE-REPORT:END -->";

/// Outcome of a README patch attempt. Only `Updated` wrote to disk; the
/// other outcomes are warnings, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    /// The report was spliced between the markers and written back.
    Updated,
    /// The README file does not exist.
    MissingFile,
    /// One or both markers are absent from the README.
    MissingMarkers,
}

/// Splice a rendered report between the coverage markers.
///
/// Replaces whatever currently sits between the markers; returns `None`
/// when either marker is absent.
pub fn splice_coverage_report(contents: &str, report: &str) -> Option<String> {
    let start = contents.find(COVERAGE_START_MARKER)?;
    let end = contents.find(COVERAGE_END_MARKER)?;

    let mut updated = String::with_capacity(contents.len() + report.len());
    updated.push_str(&contents[..start + COVERAGE_START_MARKER.len()]);
    updated.push_str("\n\n");
    updated.push_str(report);
    updated.push_str("\n\n");
    updated.push_str(&contents[end..]);
    Some(updated)
}

/// Patch the README at `path` with the rendered report.
pub fn update_readme(path: &Path, report: &str) -> Result<PatchStatus> {
    if !path.is_file() {
        return Ok(PatchStatus::MissingFile);
    }

    let contents = std::fs::read_to_string(path)?;
    match splice_coverage_report(&contents, report) {
        Some(updated) => {
            std::fs::write(path, updated)?;
            Ok(PatchStatus::Updated)
        }
        None => Ok(PatchStatus::MissingMarkers),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        COVERAGE_END_MARKER, COVERAGE_START_MARKER, PatchStatus, splice_coverage_report,
        update_readme,
    };
    use std::path::PathBuf;

    #[test]
    fn splice_replaces_content_between_markers() {
        let contents = format!(
            "# Demo\n\n{COVERAGE_START_MARKER}\n\nstale report\n\n{COVERAGE_END_MARKER}\n\nFooter\n"
        );

        let updated = splice_coverage_report(&contents, "fresh report").expect("spliced");

        assert!(updated.contains("fresh report"));
        assert!(!updated.contains("stale report"));
        assert!(updated.starts_with("# Demo\n"));
        assert!(updated.ends_with("Footer\n"));
        assert!(updated.contains(&format!(
            "{COVERAGE_START_MARKER}\n\nfresh report\n\n{COVERAGE_END_MARKER}"
        )));
    }

    #[test]
    fn splice_is_idempotent() {
        let contents =
            format!("{COVERAGE_START_MARKER}\n\nold\n\n{COVERAGE_END_MARKER}\n");

        let once = splice_coverage_report(&contents, "report").expect("first splice");
        let twice = splice_coverage_report(&once, "report").expect("second splice");

        assert_eq!(once, twice);
    }

    #[test]
    fn splice_requires_both_markers() {
        assert!(splice_coverage_report("no markers here", "report").is_none());
        assert!(
            splice_coverage_report(&format!("{COVERAGE_START_MARKER} only"), "report").is_none()
        );
        assert!(splice_coverage_report(&format!("{COVERAGE_END_MARKER} only"), "report").is_none());
    }

    #[test]
    fn update_readme_reports_missing_file() {
        let path = std::env::temp_dir()
            .join(unique_dir_name())
            .join("README.md");

        let status = update_readme(&path, "report").expect("update");

        assert_eq!(status, PatchStatus::MissingFile);
    }

    #[test]
    fn update_readme_reports_missing_markers() {
        let root = temp_dir();
        let path = root.join("README.md");
        std::fs::write(&path, "# Demo without markers\n").expect("write readme");

        let status = update_readme(&path, "report").expect("update");

        assert_eq!(status, PatchStatus::MissingMarkers);
        cleanup_dir(&root);
    }

    #[test]
    fn update_readme_writes_patched_contents() {
        let root = temp_dir();
        let path = root.join("README.md");
        std::fs::write(
            &path,
            format!("{COVERAGE_START_MARKER}\n{COVERAGE_END_MARKER}\n"),
        )
        .expect("write readme");

        let status = update_readme(&path, "badge and tables").expect("update");

        assert_eq!(status, PatchStatus::Updated);
        let contents = std::fs::read_to_string(&path).expect("read readme");
        assert!(contents.contains("badge and tables"));
        cleanup_dir(&root);
    }

    fn temp_dir() -> PathBuf {
        let root = std::env::temp_dir().join(unique_dir_name());
        std::fs::create_dir_all(&root).expect("create temp dir");
        root
    }

    fn unique_dir_name() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        PathBuf::from(format!("qlcov_readme_test_{nanos}"))
    }

    fn cleanup_dir(root: &PathBuf) {
        std::fs::remove_dir_all(root).expect("cleanup temp dir");
    }
}
