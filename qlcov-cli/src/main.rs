#![deny(missing_docs)]
//! Qlcov command-line interface.
//!
//! Reconciles `.coverage.json` against the CodeQL queries resolvable under
//! `ql/src`, renders a markdown coverage report, and splices it into the
//! project README between marker comments.

use clap::Parser;
use qlcov_core::{
    COVERAGE_END_MARKER, COVERAGE_FILE_NAME, COVERAGE_START_MARKER, CodeqlResolver,
    CoverageMetadata, PatchStatus, QueryResolver, apply_to_document, build_query_records,
    compute_metadata, load_coverage_document, render_coverage_markdown, save_coverage_document,
    update_readme,
};
use std::path::{Path, PathBuf};

pub(crate) type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(name = "qlcov", version, about = "CodeQL query coverage reporter")]
struct Cli {
    /// Print only the rendered markdown report to stdout; do not touch any files.
    #[arg(long)]
    markdown_only: bool,
    /// Persist the coverage file but skip updating README.md.
    #[arg(long)]
    no_readme_update: bool,
    /// Project root containing .coverage.json. Discovered by walking up from
    /// the current directory when omitted.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli, &CodeqlResolver::new()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run<R: QueryResolver>(cli: &Cli, resolver: &R) -> CliResult<()> {
    let quiet = cli.markdown_only;
    let project_root = match &cli.root {
        Some(root) => root.clone(),
        None => find_project_root(&std::env::current_dir()?),
    };

    if !quiet {
        println!("Loading CodeQL query coverage data...");
        println!("Project root: {}", project_root.display());
    }

    let coverage_path = project_root.join(COVERAGE_FILE_NAME);
    let mut document = load_coverage_document(&coverage_path)?;
    if !quiet {
        println!("Loaded existing coverage data");
        println!("Running codeql resolve queries...");
    }

    let query_src = project_root.join("ql").join("src");
    let paths = resolver.resolve_queries(&query_src)?;
    if !quiet {
        println!("Found {} queries", paths.len());
    }

    let queries = build_query_records(&paths, &project_root);
    let metadata = compute_metadata(&queries);
    let report = render_coverage_markdown(&queries, &metadata);

    if cli.markdown_only {
        println!("{report}");
        return Ok(());
    }

    apply_to_document(&mut document, &queries, &metadata)?;
    save_coverage_document(&coverage_path, &document)?;
    println!("Successfully updated {}", coverage_path.display());

    if !cli.no_readme_update {
        println!("Generating coverage report...");
        patch_readme(&project_root.join("README.md"), &report)?;
    }

    print_summary(&metadata);
    Ok(())
}

fn patch_readme(path: &Path, report: &str) -> CliResult<()> {
    match update_readme(path, report)? {
        PatchStatus::Updated => {
            println!("Successfully updated coverage report in {}", path.display());
        }
        PatchStatus::MissingFile => {
            println!("Warning: README.md not found at {}", path.display());
        }
        PatchStatus::MissingMarkers => {
            println!(
                "Warning: coverage report markers not found in {}",
                path.display()
            );
            println!("Add the following markers where the coverage report should appear:");
            println!("  {COVERAGE_START_MARKER}");
            println!("  {COVERAGE_END_MARKER}");
        }
    }
    Ok(())
}

fn print_summary(metadata: &CoverageMetadata) {
    println!();
    println!("Coverage Summary:");
    println!("  Total queries: {}", metadata.total_queries);
    println!("  Covered queries: {}", metadata.covered_queries);
    println!(
        "  Coverage percentage: {:.1}%",
        metadata.coverage_percentage
    );
    println!("  Categories: {}", metadata.categories.join(", "));
    println!("  CWEs covered: {}", metadata.cwes.len());
}

/// Walk up from `start` looking for the directory containing `.coverage.json`;
/// fall back to `start` when no ancestor holds one.
fn find_project_root(start: &Path) -> PathBuf {
    let mut current = start;
    loop {
        if current.join(COVERAGE_FILE_NAME).is_file() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return start.to_path_buf(),
        }
    }
}
