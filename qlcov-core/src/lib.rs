#![deny(missing_docs)]
//! Qlcov core library.
//!
//! This crate contains the coverage pipeline that reconciles a persisted
//! `.coverage.json` document against the set of CodeQL queries resolvable
//! under a project's `ql/src` tree and renders a markdown coverage report.

pub mod classify;
pub mod domain;
pub mod error;
pub mod merge;
pub mod query;
pub mod readme;
pub mod report;
pub mod resolver;
pub mod store;

pub use classify::{
    CWE_PREFIX, QUERY_SOURCE_PREFIX, UNKNOWN_CATEGORY, category_from_path, cwe_from_path,
};
pub use domain::{CoverageMetadata, CoverageStats, QueryRecord};
pub use error::{QlcovError, Result};
pub use merge::{apply_to_document, category_stats, compute_metadata, cwe_stats};
pub use query::build_query_records;
pub use readme::{
    COVERAGE_END_MARKER, COVERAGE_START_MARKER, PatchStatus, splice_coverage_report, update_readme,
};
pub use report::{
    badge_color, cwe_description, render_coverage_markdown, render_coverage_markdown_at,
};
pub use resolver::{CodeqlResolver, QueryResolver};
pub use store::{COVERAGE_FILE_NAME, load_coverage_document, save_coverage_document};
