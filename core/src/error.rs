//! Error types for labelcheck-core.
//!
//! Only resource handling can fail. Correction itself is total: an
//! uncorrectable token is passed through, never reported as an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A dictionary, snapshot, config or watch-list resource could not be used.
///
/// Returned by every constructor that touches the filesystem. A corrector is
/// never handed out after one of these.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The resource could not be opened at all.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resource was opened but reading it failed part way.
    #[error("failed reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A compiled snapshot could not be decoded.
    #[error("invalid snapshot {}: {source}", path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// A compiled snapshot could not be written.
    #[error("cannot write snapshot {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// A TOML config or watch-list file did not parse.
    #[error("invalid TOML in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ResourceError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// The path of the resource that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Snapshot { path, .. }
            | Self::Encode { path, .. }
            | Self::Config { path, .. } => path,
        }
    }
}

/// Result alias for fallible resource operations.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Why a dictionary line was skipped during loading.
///
/// These are never fatal; the loader logs them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    #[error("line {line}: missing column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("line {line}: count {value:?} is not a non-negative integer")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: empty term")]
    EmptyTerm { line: usize },
}

impl ParseWarning {
    /// 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingColumn { line, .. }
            | Self::InvalidCount { line, .. }
            | Self::EmptyTerm { line } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_names_the_path() {
        let err = ResourceError::open(
            "missing/unigrams.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing/unigrams.txt"));
        assert_eq!(err.path(), std::path::Path::new("missing/unigrams.txt"));
    }

    #[test]
    fn parse_warning_reports_line() {
        let w = ParseWarning::InvalidCount {
            line: 7,
            value: "abc".into(),
        };
        assert_eq!(w.line(), 7);
        assert!(w.to_string().contains("abc"));
    }
}
