use std::fmt;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`LoadError`], for callers that only need to
/// report which kind of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source could not be opened or read.
    Resource,
    /// A line could not be turned into a record.
    Parse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Resource => write!(f, "resource error"),
            ErrorKind::Parse => write!(f, "parse error"),
        }
    }
}

/// Why a single line was rejected.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("source is empty, expected a header line")]
    MissingHeader,

    #[error("expected 6 comma-separated fields, found {found}")]
    FieldCount { found: usize },

    #[error("{column}: '{value}' is not a number")]
    InvalidNumber {
        column: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Failure of a load call. Rows appended before the failure stay loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}", display_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Io { .. } => ErrorKind::Resource,
            LoadError::Parse { .. } => ErrorKind::Parse,
        }
    }

    /// Attach a path to a resource error raised by a path-less reader.
    pub(crate) fn with_path(self, path: PathBuf) -> Self {
        match self {
            LoadError::Io { path: None, source } => LoadError::Io {
                path: Some(path),
                source,
            },
            other => other,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "input".to_string(),
    }
}
