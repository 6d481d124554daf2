//! Application error types.
//!
//! Citation failures are split into distinct kinds so callers (and tests)
//! can tell a bad book name from a verse the table does not contain.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Denomination, Triple};

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Alignment data parsing error
    #[error("Parse error in {file:?} at line {line:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<PathBuf>,
        /// 1-based line number, if the failure is tied to one line.
        line: Option<usize>,
        /// Description of the parse failure.
        message: String,
    },

    /// A range was inserted with its start after its end
    #[error("Decreasing range [{start}, {end}]")]
    InvalidRange {
        /// First position of the rejected range.
        start: usize,
        /// Last position of the rejected range.
        end: usize,
    },

    /// Text in book position does not name any known book
    #[error("Unrecognized book name: {0:?}")]
    UnresolvedBookName(String),

    /// A fully resolved reference is absent from the denomination's table
    #[error("{triple} does not exist in the {denomination} table")]
    TripleNotFound {
        /// The reference that was looked up.
        triple: Triple,
        /// Table that was searched.
        denomination: Denomination,
    },

    /// A citation position past the end of the table it is rendered against
    #[error("Position {position} is outside the {denomination} table of {rows} rows")]
    PositionOutOfRange {
        /// The offending table position.
        position: usize,
        /// Column that was read.
        denomination: Denomination,
        /// Rows in that column.
        rows: usize,
    },

    /// Citation text that does not fit the `book chapter:verse` grammar
    #[error("Malformed reference {text:?}: {reason}")]
    MalformedCitation {
        /// The offending fragment.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: Option<PathBuf>) -> Self {
        Self::Parse { file, line: None, message: message.into() }
    }

    /// Create a parse error pointing at one line of alignment data
    pub fn parse_at(message: impl Into<String>, line: usize) -> Self {
        Self::Parse { file: None, line: Some(line), message: message.into() }
    }

    /// Create a malformed-citation error for a fragment
    pub fn malformed(text: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedCitation { text: text.into(), reason }
    }

    /// Attach a file path to a parse error that lacks one
    #[must_use]
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse { file: None, line, message } => {
                Self::Parse { file: Some(path.into()), line, message }
            }
            other => other,
        }
    }

    /// True for the kinds a user causes by typing a bad reference.
    pub const fn is_invalid_reference(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::UnresolvedBookName(_)
                | Self::TripleNotFound { .. }
                | Self::MalformedCitation { .. }
        )
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
