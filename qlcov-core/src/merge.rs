//! Coverage aggregation over freshly built query records.
//!
//! Every run replaces the persisted query list wholesale and recomputes the
//! metadata from scratch; prior covered flags are never carried forward.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use crate::domain::{CoverageMetadata, CoverageStats, QueryRecord};

/// Recompute aggregate metadata from a query list.
///
/// The result is independent of the input ordering: category and CWE labels
/// are deduplicated and returned sorted.
pub fn compute_metadata(queries: &[QueryRecord]) -> CoverageMetadata {
    let total_queries = queries.len();
    let covered_queries = queries.iter().filter(|query| query.covered).count();
    let categories: BTreeSet<String> = queries.iter().map(|query| query.category.clone()).collect();
    let cwes: BTreeSet<String> = queries
        .iter()
        .filter(|query| !query.cwe.is_empty())
        .map(|query| query.cwe.clone())
        .collect();

    let coverage_percentage = if total_queries > 0 {
        covered_queries as f64 / total_queries as f64 * 100.0
    } else {
        0.0
    };

    CoverageMetadata {
        total_queries,
        covered_queries,
        categories: categories.into_iter().collect(),
        cwes: cwes.into_iter().collect(),
        coverage_percentage,
    }
}

/// Covered/total counters per category label, ordered by label.
pub fn category_stats(queries: &[QueryRecord]) -> BTreeMap<String, CoverageStats> {
    let mut stats: BTreeMap<String, CoverageStats> = BTreeMap::new();
    for query in queries {
        stats
            .entry(query.category.clone())
            .or_default()
            .record(query.covered);
    }
    stats
}

/// Covered/total counters per CWE identifier, ordered by identifier.
///
/// Queries without a CWE label are excluded.
pub fn cwe_stats(queries: &[QueryRecord]) -> BTreeMap<String, CoverageStats> {
    let mut stats: BTreeMap<String, CoverageStats> = BTreeMap::new();
    for query in queries {
        if query.cwe.is_empty() {
            continue;
        }
        stats
            .entry(query.cwe.clone())
            .or_default()
            .record(query.covered);
    }
    stats
}

/// Overwrite the `queries` and `metadata` keys of a coverage document.
///
/// All other keys in the document are left untouched.
pub fn apply_to_document(
    document: &mut Map<String, Value>,
    queries: &[QueryRecord],
    metadata: &CoverageMetadata,
) -> serde_json::Result<()> {
    document.insert("queries".to_string(), serde_json::to_value(queries)?);
    document.insert("metadata".to_string(), serde_json::to_value(metadata)?);
    Ok(())
}
