// WHY: callers must tell an unreadable source apart from an exceeded bound
// without parsing messages, so the library surfaces a typed error

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which configured bound was exceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Number of dictionary tokens
    Dictionary,
    /// Number of unique sample words that are also dictionary words
    SampleWords,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Dictionary => write!(f, "dictionary"),
            Bound::SampleWords => write!(f, "sample words"),
        }
    }
}

/// Terminal failures of a run. None of these are retried.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Dictionary or sample source could not be opened or read
    #[error("could not read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source was readable but is not valid UTF-8 text
    #[error("{} is not valid UTF-8 text", .path.display())]
    InvalidEncoding { path: PathBuf },

    /// More words arrived than the configured bound allows
    #[error("{what} array is full (limit {limit} words)")]
    CapacityExceeded { what: Bound, limit: usize },

    /// Opt-in sortedness check found a descending pair
    #[error("dictionary is not sorted: word {position} precedes a smaller word")]
    UnsortedDictionary { position: usize },
}

impl ScanError {
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn capacity(what: Bound, limit: usize) -> Self {
        ScanError::CapacityExceeded { what, limit }
    }

    /// True for taxonomy (a): the input itself could not be obtained
    pub fn is_source(&self) -> bool {
        matches!(
            self,
            ScanError::SourceUnavailable { .. } | ScanError::InvalidEncoding { .. }
        )
    }

    /// True for taxonomy (b): a configured bound was exceeded
    pub fn is_capacity(&self) -> bool {
        matches!(self, ScanError::CapacityExceeded { .. })
    }
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
