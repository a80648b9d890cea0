//! Query resolution via the external `codeql` command.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::error::{QlcovError, Result};

/// Abstraction over query discovery for testability.
#[cfg_attr(test, mockall::automock)]
pub trait QueryResolver {
    /// Resolve the query file paths under the given source directory.
    fn resolve_queries(&self, query_src: &Path) -> Result<Vec<String>>;
}

/// Resolver backed by `codeql resolve queries --format=json`.
#[derive(Debug, Clone)]
pub struct CodeqlResolver {
    program: OsString,
}

impl CodeqlResolver {
    /// Create a resolver invoking the `codeql` binary from `PATH`.
    pub fn new() -> Self {
        Self {
            program: OsString::from("codeql"),
        }
    }

    /// Create a resolver invoking a specific program instead of `codeql`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CodeqlResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryResolver for CodeqlResolver {
    fn resolve_queries(&self, query_src: &Path) -> Result<Vec<String>> {
        if !query_src.is_dir() {
            return Err(QlcovError::MissingQuerySource(query_src.to_path_buf()));
        }

        let output = Command::new(&self.program)
            .args(["resolve", "queries", "--format=json"])
            .arg(query_src)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(QlcovError::Resolver(format!(
                "{} resolve queries failed with {}: {}",
                self.program.to_string_lossy(),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .map_err(|err| QlcovError::MalformedResolverOutput(err.to_string()))
    }
}
