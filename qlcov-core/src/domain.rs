//! Domain entities for qlcov.
//!
//! Field names mirror the keys persisted in `.coverage.json`.

use serde::{Deserialize, Serialize};

/// One coverage entry per discovered CodeQL query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Project-relative path to the query file.
    pub path: String,
    /// Short identifier derived from the file stem.
    pub name: String,
    /// Classification label derived from the path layout, `"unknown"` when
    /// the path does not match the expected shape.
    pub category: String,
    /// CWE identifier extracted from a path segment, empty when none.
    pub cwe: String,
    /// Whether the query is considered covered by tests.
    pub covered: bool,
    /// Test file paths associated with the query.
    pub test_files: Vec<String>,
}

/// Aggregate coverage statistics recomputed on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetadata {
    /// Number of discovered queries.
    pub total_queries: usize,
    /// Number of queries marked covered.
    pub covered_queries: usize,
    /// Distinct category labels, sorted.
    pub categories: Vec<String>,
    /// Distinct non-empty CWE identifiers, sorted.
    pub cwes: Vec<String>,
    /// `covered_queries / total_queries * 100`, 0 when there are no queries.
    pub coverage_percentage: f64,
}

/// Covered/total counters for one category or CWE group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageStats {
    /// Queries in the group marked covered.
    pub covered: usize,
    /// Total queries in the group.
    pub total: usize,
}

impl CoverageStats {
    /// Account for one query in the group.
    pub fn record(&mut self, covered: bool) {
        self.total += 1;
        if covered {
            self.covered += 1;
        }
    }

    /// Covered percentage for the group, 0 when the group is empty.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.covered as f64 / self.total as f64 * 100.0
    }
}
