//! Transcript parser entry point.
//!
//! This module turns raw transcript text into an ordered `Vec<MessageRecord>`.
//! Parsing is all-or-nothing: a single malformed timestamp or a
//! stamp/segment mismatch fails the whole transcript.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! let raw = "\
//! 1/1/23, 10:00 - Alice: Hi
//! 1/1/23, 10:05 - Bob: Hello
//! 1/1/23, 10:06 - Carol joined using this group's invite link
//! ";
//!
//! let records = TranscriptParser::new().parse_str(raw)?;
//! assert_eq!(records.len(), 3);
//! assert!(records[2].is_system());
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::message::MessageRecord;
use crate::parsing::{decode_timestamp, split_entries, split_sender};

/// Parser for timestamp-delimited chat transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::config::ParserConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(ParserConfig::new().with_line_start_only(true));
/// let records = parser.parse_file("chat.txt")?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses transcript text already in memory.
    ///
    /// Empty input, or input without a single stamp, yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Parse`] if a stamp does not decode to a real
    /// date/time or if stamps and segments cannot be paired.
    pub fn parse_str(&self, raw: &str) -> Result<Vec<MessageRecord>> {
        let split = split_entries(raw, &self.config)?;
        debug!("Found {} transcript entries", split.len());

        split
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let timestamp = decode_timestamp(&entry.stamp).map_err(|reason| {
                    ChatlensError::malformed_timestamp(i + 1, entry.stamp.text, reason)
                })?;
                let (sender, body) = split_sender(entry.text);
                Ok(MessageRecord::new(timestamp, sender, body))
            })
            .collect()
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`] if the file cannot be read,
    /// [`ChatlensError::Utf8`] if it is not valid UTF-8, and parse errors
    /// (with the file path attached) as for [`parse_str`](Self::parse_str).
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| ChatlensError::Utf8 {
            context: format!("transcript {}", path.display()),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());

        self.parse_str(&content).map_err(|e| e.with_path(path))
    }

    /// Parses a transcript file (convenience method accepting `&str` path).
    ///
    /// This is equivalent to `parse(Path::new(path))`.
    pub fn parse_file(&self, path: &str) -> Result<Vec<MessageRecord>> {
        self.parse(Path::new(path))
    }
}

/// Parses transcript text with the default configuration.
///
/// # Example
///
/// ```rust
/// let records = chatlens::parse("14/03/2023, 21:07 - Alice: see you")?;
/// assert_eq!(records[0].sender().as_str(), "Alice");
/// assert_eq!(records[0].hour_bucket().as_str(), "21-22");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
///
/// # Errors
///
/// See [`TranscriptParser::parse_str`].
pub fn parse(raw: &str) -> Result<Vec<MessageRecord>> {
    TranscriptParser::new().parse_str(raw)
}
