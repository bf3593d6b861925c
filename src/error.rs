//! Recoverable failures hit while scanning a tree.
//!
//! None of these stop a scan: each is printed as it happens, the offending
//! file or directory is skipped, and traversal moves on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised by a parser (or the dispatcher) when a manifest's content is
/// structurally unusable.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InvalidManifest(pub String);

impl InvalidManifest {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Invalid format in {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: InvalidManifest,
    },

    #[error("Unexpected error parsing {}: {cause:#}", .path.display())]
    Unexpected { path: PathBuf, cause: anyhow::Error },
}

/// How loudly a [`ScanError`] is reported. Behavior is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl ScanError {
    /// Classify a parser failure: content rejections stay warnings,
    /// anything else is reported as an error.
    pub fn from_parse(path: PathBuf, err: anyhow::Error) -> Self {
        match err.downcast::<InvalidManifest>() {
            Ok(source) => ScanError::Format { path, source },
            Err(cause) => ScanError::Unexpected { path, cause },
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ScanError::Read { .. } | ScanError::Walk { .. } | ScanError::Format { .. } => {
                Severity::Warning
            }
            ScanError::Unexpected { .. } => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_manifest_is_a_format_warning() {
        let err = anyhow::Error::new(InvalidManifest::new("binary content"));
        let scan_err = ScanError::from_parse(PathBuf::from("go.mod"), err);
        assert!(matches!(scan_err, ScanError::Format { .. }));
        assert_eq!(scan_err.severity(), Severity::Warning);
        assert_eq!(
            scan_err.to_string(),
            "Invalid format in go.mod: binary content"
        );
    }

    #[test]
    fn test_other_parse_failures_are_errors() {
        let err = anyhow::anyhow!("pattern blew up");
        let scan_err = ScanError::from_parse(PathBuf::from("pom.xml"), err);
        assert!(matches!(scan_err, ScanError::Unexpected { .. }));
        assert_eq!(scan_err.severity(), Severity::Error);
        assert!(scan_err.to_string().starts_with("Unexpected error parsing pom.xml"));
    }

    #[test]
    fn test_read_error_message() {
        let scan_err = ScanError::Read {
            path: PathBuf::from("a/package.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(scan_err.severity(), Severity::Warning);
        assert_eq!(scan_err.to_string(), "Cannot read a/package.json: denied");
    }
}
