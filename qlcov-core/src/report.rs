//! Markdown rendering for coverage reports.

use std::fmt::Write;

use chrono::Utc;

use crate::domain::{CoverageMetadata, QueryRecord};
use crate::merge::{category_stats, cwe_stats};

/// Badge color tier for a coverage percentage.
///
/// Lower bounds are inclusive: exactly 60.0 is yellow, not orange.
pub fn badge_color(percentage: f64) -> &'static str {
    if percentage >= 80.0 {
        "brightgreen"
    } else if percentage >= 60.0 {
        "yellow"
    } else if percentage >= 40.0 {
        "orange"
    } else {
        "red"
    }
}

/// Human-readable description for a CWE identifier.
///
/// Identifiers outside the fixed mapping get a generic placeholder.
pub fn cwe_description(cwe: &str) -> &'static str {
    match cwe {
        "CWE-200" => "Information Exposure",
        "CWE-272" => "Least Privilege Violation",
        "CWE-284" => "Improper Access Control",
        "CWE-295" => "Improper Certificate Validation",
        "CWE-306" => "Missing Authentication",
        "CWE-311" => "Missing Encryption",
        "CWE-319" => "Cleartext Transmission",
        "CWE-327" => "Broken/Risky Crypto Algorithm",
        "CWE-352" => "Cross-Site Request Forgery",
        "CWE-400" => "Resource Exhaustion",
        "CWE-404" => "Improper Resource Shutdown",
        "CWE-693" => "Protection Mechanism Failure",
        "CWE-798" => "Hard-coded Credentials",
        "CWE-942" => "Overly Permissive CORS",
        _ => "Security Vulnerability",
    }
}

/// Render the coverage report as Markdown with the current UTC time as the
/// trailing timestamp.
pub fn render_coverage_markdown(queries: &[QueryRecord], metadata: &CoverageMetadata) -> String {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    render_coverage_markdown_at(queries, metadata, &timestamp)
}

/// Render the coverage report as Markdown with a fixed timestamp line.
///
/// Output is deterministic given identical queries and metadata.
pub fn render_coverage_markdown_at(
    queries: &[QueryRecord],
    metadata: &CoverageMetadata,
    timestamp: &str,
) -> String {
    let mut output = String::new();
    let percentage = metadata.coverage_percentage;

    let _ = writeln!(
        output,
        "![Coverage](https://img.shields.io/badge/Query_Coverage-{percentage:.1}%25-{})",
        badge_color(percentage)
    );
    let _ = writeln!(output);

    let _ = writeln!(output, "| Metric | Value |");
    let _ = writeln!(output, "|--------|-------|");
    let _ = writeln!(output, "| Total Queries | {} |", metadata.total_queries);
    let _ = writeln!(output, "| Covered Queries | {} |", metadata.covered_queries);
    let _ = writeln!(output, "| Coverage Percentage | {percentage:.1}% |");
    let _ = writeln!(output, "| Categories | {} |", metadata.categories.len());
    let _ = writeln!(output, "| CWE Categories | {} |", metadata.cwes.len());
    let _ = writeln!(output);

    if !queries.is_empty() {
        let _ = writeln!(output, "### Coverage by Category");
        let _ = writeln!(output);
        let _ = writeln!(output, "| Category | Covered | Total | Percentage |");
        let _ = writeln!(output, "|----------|---------|-------|------------|");
        for (category, stats) in category_stats(queries) {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {:.1}% |",
                title_case(&category),
                stats.covered,
                stats.total,
                stats.percentage()
            );
        }
        let _ = writeln!(output);
    }

    if !metadata.cwes.is_empty() {
        let _ = writeln!(output, "### Coverage by CWE");
        let _ = writeln!(output);
        let _ = writeln!(output, "| CWE | Description | Covered | Total | Percentage |");
        let _ = writeln!(output, "|-----|-------------|---------|-------|------------|");
        for (cwe, stats) in cwe_stats(queries) {
            let _ = writeln!(
                output,
                "| {cwe} | {} | {} | {} | {:.1}% |",
                cwe_description(&cwe),
                stats.covered,
                stats.total,
                stats.percentage()
            );
        }
        let _ = writeln!(output);
    }

    let _ = write!(output, "*Last updated: {timestamp}*");
    output
}

/// Title-case a category label for display only; the underlying key stays
/// case-sensitive as classified.
fn title_case(label: &str) -> String {
    let mut output = String::with_capacity(label.len());
    let mut boundary = true;
    for ch in label.chars() {
        if ch.is_alphabetic() {
            if boundary {
                output.extend(ch.to_uppercase());
            } else {
                output.extend(ch.to_lowercase());
            }
            boundary = false;
        } else {
            output.push(ch);
            boundary = true;
        }
    }
    output
}
