//! Error types for qlcov core.

use std::path::PathBuf;
use std::{error::Error, fmt, io};

/// Error type for qlcov core operations.
#[derive(Debug)]
pub enum QlcovError {
    /// An underlying I/O error.
    Io(io::Error),
    /// The coverage state file does not exist.
    MissingStateFile(PathBuf),
    /// The coverage state file is not valid JSON, or not a JSON object.
    MalformedState(String),
    /// The query source directory does not exist.
    MissingQuerySource(PathBuf),
    /// The query resolver exited unsuccessfully.
    Resolver(String),
    /// The query resolver produced output that is not a JSON array of paths.
    MalformedResolverOutput(String),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for QlcovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::MissingStateFile(path) => {
                write!(f, ".coverage.json not found at {}", path.display())
            }
            Self::MalformedState(message) => {
                write!(f, "invalid JSON in .coverage.json: {message}")
            }
            Self::MissingQuerySource(path) => {
                write!(f, "query source directory not found at {}", path.display())
            }
            Self::Resolver(message) => write!(f, "{message}"),
            Self::MalformedResolverOutput(message) => {
                write!(f, "error parsing resolver output as JSON: {message}")
            }
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for QlcovError {}

impl From<io::Error> for QlcovError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Convenience result type for qlcov core.
pub type Result<T> = std::result::Result<T, QlcovError>;

#[cfg(test)]
mod tests {
    use super::QlcovError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn io_error_formats_message() {
        let error = QlcovError::Io(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(format!("{error}"), "io error: boom");
    }

    #[test]
    fn missing_state_file_names_path() {
        let error = QlcovError::MissingStateFile(PathBuf::from("/repo/.coverage.json"));
        assert_eq!(
            format!("{error}"),
            ".coverage.json not found at /repo/.coverage.json"
        );
    }

    #[test]
    fn malformed_state_formats_message() {
        let error = QlcovError::MalformedState("expected value at line 1".to_string());
        assert_eq!(
            format!("{error}"),
            "invalid JSON in .coverage.json: expected value at line 1"
        );
    }

    #[test]
    fn missing_query_source_names_path() {
        let error = QlcovError::MissingQuerySource(PathBuf::from("/repo/ql/src"));
        assert_eq!(
            format!("{error}"),
            "query source directory not found at /repo/ql/src"
        );
    }

    #[test]
    fn from_io_error_maps_variant() {
        let error: QlcovError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match error {
            QlcovError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Io variant, got {other:?}"),
        }
    }
}
