//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Parse errors** are fatal for the whole transcript: no partial record set
//!   is ever returned
//! - **Missing resources** (the stop-word list) are local to the functions that
//!   need them; every other aggregation keeps working
//! - **Empty input** is not an error at all

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the transcript file doesn't exist or an
    /// output file cannot be created.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse the transcript.
    ///
    /// Contains the format being parsed, the underlying parse error,
    /// and optionally the file path.
    #[error("Failed to parse {format}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// An external resource required by one analysis could not be loaded.
    ///
    /// Raised by the word-frequency and word-cloud functions when the
    /// configured stop-word list is absent. Other aggregations are unaffected.
    #[error("Missing {resource} at {}: {source}", path.display())]
    MissingResource {
        /// Human-readable resource name (e.g. "stop-word list")
        resource: &'static str,
        /// Where the resource was expected
        path: PathBuf,
        /// The underlying read error
        #[source]
        source: io::Error,
    },

    /// A scope selector could not be interpreted.
    #[error("Invalid scope '{input}': expected \"Overall\" or a sender name")]
    InvalidScope {
        /// The rejected selector
        input: String,
    },

    /// Unknown or unavailable output format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was requested (e.g. "output")
        format: &'static str,
        /// Description of the problem
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when the transcript or generated output is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Kinds of transcript parse errors.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// A delimiter matched structurally but is not a real date/time.
    #[error("malformed timestamp '{delimiter}' at entry {index}: {reason}")]
    MalformedTimestamp {
        /// 1-based position of the entry in the transcript
        index: usize,
        /// The delimiter text as it appeared
        delimiter: String,
        /// Why decoding failed
        reason: String,
    },

    /// The delimiter list and the body list did not line up.
    #[error("found {delimiters} timestamps but {segments} message bodies")]
    EntryMismatch {
        /// Number of matched delimiters
        delimiters: usize,
        /// Number of body segments after the preamble
        segments: usize,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Format name used in transcript parse errors.
    pub const TRANSCRIPT_FORMAT: &'static str = "chat transcript";

    /// Creates a transcript parse error.
    pub fn transcript_parse(source: ParseErrorKind, path: Option<PathBuf>) -> Self {
        ChatlensError::Parse {
            format: Self::TRANSCRIPT_FORMAT,
            source,
            path,
        }
    }

    /// Creates a malformed-timestamp parse error.
    pub fn malformed_timestamp(
        index: usize,
        delimiter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::transcript_parse(
            ParseErrorKind::MalformedTimestamp {
                index,
                delimiter: delimiter.into(),
                reason: reason.into(),
            },
            None,
        )
    }

    /// Creates a delimiter/body mismatch parse error.
    pub fn entry_mismatch(delimiters: usize, segments: usize) -> Self {
        Self::transcript_parse(
            ParseErrorKind::EntryMismatch {
                delimiters,
                segments,
            },
            None,
        )
    }

    /// Creates a missing-resource error.
    pub fn missing_resource(
        resource: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        ChatlensError::MissingResource {
            resource,
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid scope error.
    pub fn invalid_scope(input: impl Into<String>) -> Self {
        ChatlensError::InvalidScope {
            input: input.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Attaches a file path to a parse error; other variants pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatlensError::Parse {
                format,
                source,
                path: None,
            } => ChatlensError::Parse {
                format,
                source,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatlensError::Parse { .. })
    }

    /// Returns `true` if this is a missing-resource error.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, ChatlensError::MissingResource { .. })
    }

    /// Returns `true` if this is an invalid scope error.
    pub fn is_invalid_scope(&self) -> bool {
        matches!(self, ChatlensError::InvalidScope { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
