//! # Chatlens
//!
//! A Rust library for parsing exported chat transcripts into typed records and
//! computing the statistics a chat dashboard shows.
//!
//! ## Overview
//!
//! A transcript is plain text where every message starts with a stamp like
//! `12/03/23, 21:07 - `, followed by `Sender: body`. Entries without a sender
//! prefix (joins, leaves, description changes) are attributed to the
//! `group_notification` sentinel.
//!
//! Chatlens:
//! - **parses** the transcript into [`MessageRecord`]s with derived calendar
//!   fields (year, month name, day name, hour bucket, ...)
//! - **aggregates** them per [`Scope`](core::Scope): message/word/media/link
//!   counts, monthly and daily timelines, weekday and month rankings, a day x
//!   hour heatmap, busiest users, common words and emoji
//! - **lays out** a word cloud and renders it to SVG
//! - **writes** the combined report as text, JSON or CSV
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let raw = "\
//! 12/3/23, 21:07 - Alice: chai ready? 😂
//! 12/3/23, 21:08 - Bob: coming
//! 12/3/23, 21:10 - Bob added Carol
//! ";
//!
//! let session = Session::from_text(raw, AnalysisConfig::default())?;
//!
//! assert_eq!(session.stats(&Scope::Overall).messages, 3);
//! assert_eq!(session.stats(&Scope::user("Bob")).words, 1);
//! assert_eq!(session.most_busy_users().top.len(), 2);
//! assert_eq!(session.emoji_helper(&Scope::Overall)[0].emoji, '😂');
//! # Ok::<(), ChatlensError>(())
//! ```
//!
//! ## Lower-level API
//!
//! Every aggregation is also a free function over a record slice:
//!
//! ```rust
//! use chatlens::core::{Scope, weak_activity_map};
//!
//! let records = chatlens::parse("1/1/23, 10:00 - Alice: Hi\n")?;
//! assert_eq!(weak_activity_map(&records, &Scope::Overall)[0].label, "Sunday");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`parse`]
//! - [`parsing`] - delimiter splitting, timestamp decoding, sender detection
//! - [`message`] - [`MessageRecord`], [`Sender`], [`HourBucket`](message::HourBucket)
//! - [`config`] - [`ParserConfig`](config::ParserConfig),
//!   [`AnalysisConfig`](config::AnalysisConfig), [`WordCloudConfig`](config::WordCloudConfig)
//! - [`core`] - aggregations, [`Session`](core::Session),
//!   [`AnalysisReport`](core::AnalysisReport), word cloud and report writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`cli`] - CLI arguments (`cli` feature)
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `full` | All features (default) | all below |
//! | `csv-output` | CSV report writer | `csv` |
//! | `json-output` | JSON report writer | `serde_json` |
//! | `cli` | `chatlens` binary | `clap`, `env_logger` |
//! | `gen-test` | `gen_test` synthetic transcript generator | - |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{MessageRecord, Sender};
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::message::{HourBucket, MessageRecord, Sender};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{TranscriptParser, parse};

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig, WordCloudConfig};

    // Analysis
    pub use crate::core::{AnalysisReport, Scope, Session, StopWords, WordCloud};

    // Output
    pub use crate::core::output::{SvgStyle, to_svg, write_svg};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
