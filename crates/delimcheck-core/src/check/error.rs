//! Error types for delimiter checking.

use thiserror::Error;

/// A delimiter table could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table has no pairs.
    #[error("delimiter table is empty")]
    Empty,
    /// A flat delimiter list had an opener without a closer.
    #[error("flat delimiter list must alternate opener and closer, got {0} entries")]
    OddLength(usize),
    /// An opener was the empty string.
    #[error("opener at index {0} is empty")]
    EmptyOpener(usize),
    /// A closer was the empty string.
    #[error("closer at index {0} is empty")]
    EmptyCloser(usize),
    /// The same opener appears more than once.
    #[error("opener {0:?} appears more than once")]
    DuplicateOpener(String),
    /// A tag name was the empty string.
    #[error("tag name at index {0} is empty")]
    EmptyTagName(usize),
}

/// Why a scan rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A closer did not match the innermost open delimiter.
    #[error("expected {expected:?}, found {found:?}")]
    Mismatch {
        /// Closer that would have balanced the innermost opener.
        expected: String,
        /// Closer actually found.
        found: String,
    },
    /// A closer appeared with nothing open.
    #[error("unexpected {closer:?} with no open delimiter")]
    Underflow {
        /// The unmatched closer.
        closer: String,
    },
    /// Text ended with delimiters still open.
    #[error("{remaining} delimiter(s) left unclosed")]
    Unclosed {
        /// How many openers were never closed.
        remaining: usize,
    },
}

/// Comment markers were invalid or unbalanced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    /// A comment marker was the empty string.
    #[error("comment markers must not be empty")]
    EmptyMarker,
    /// Start and end markers are the same string.
    #[error("comment start and end markers must differ, both are {0:?}")]
    SymmetricMarkers(String),
    /// A start marker has no end marker after it.
    #[error("unterminated comment: {start:?} without a following {end:?}")]
    Unterminated {
        /// Start marker.
        start: String,
        /// End marker.
        end: String,
    },
    /// An end marker remains with no start marker before it.
    #[error("unterminated comment: {end:?} without a preceding {start:?}")]
    Unopened {
        /// Start marker.
        start: String,
        /// End marker.
        end: String,
    },
}

/// Any failure of a full check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The delimiter table was invalid.
    #[error(transparent)]
    Table(#[from] TableError),
    /// Comment stripping failed.
    #[error(transparent)]
    Comment(#[from] CommentError),
    /// Delimiters were not properly nested.
    #[error(transparent)]
    Scan(#[from] ScanError),
}
