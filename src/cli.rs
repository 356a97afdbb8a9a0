//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - Output format options
//!
//! `Args` also turns the flags into the library's configuration types, so the
//! binary only wires them together:
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "chat.txt", "--user", "Alice", "--top-words", "5"]);
//!
//! assert_eq!(args.analysis_config().top_words, 5);
//! assert_eq!(args.scope().unwrap().to_string(), "Alice");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{
    AnalysisConfig, DEFAULT_MEDIA_PLACEHOLDER, DEFAULT_STOP_WORDS_PATH, ParserConfig,
    WordCloudConfig,
};
use crate::core::Scope;
use crate::error::Result;

/// Analyse an exported chat transcript: message counts, activity timelines,
/// busiest users, common words, emoji and word clouds.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice --stop-words stop_hinglish.txt
    chatlens chat.txt --format json -o report.json
    chatlens chat.txt --wordcloud cloud.svg --top-words 30")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Analyse a single sender instead of the whole chat
    #[arg(short, long, value_name = "NAME", default_value = Scope::OVERALL)]
    pub user: String,

    /// Stop-word list, one word per line
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STOP_WORDS_PATH)]
    pub stop_words: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Render a word cloud to this SVG file
    #[arg(long, value_name = "PATH")]
    pub wordcloud: Option<PathBuf>,

    /// Number of most common words to report
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of busiest users to report
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Body text that marks an omitted media attachment
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_MEDIA_PLACEHOLDER)]
    pub media_placeholder: String,

    /// Only treat timestamps at the start of a line as message boundaries
    #[arg(long)]
    pub line_start_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parser settings from the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_line_start_only(self.line_start_only)
    }

    /// Analysis settings from the flags.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_media_placeholder(self.media_placeholder.clone())
            .with_top_users(self.top_users)
            .with_top_words(self.top_words)
            .with_stop_words_path(self.stop_words.clone())
    }

    /// Word-cloud settings, if a word cloud was requested.
    pub fn wordcloud_config(&self) -> Option<WordCloudConfig> {
        self.wordcloud.as_ref().map(|_| WordCloudConfig::default())
    }

    /// The scope named by `--user`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidScope`](crate::ChatlensError::InvalidScope)
    /// for an empty name.
    pub fn scope(&self) -> Result<Scope> {
        self.user.parse()
    }
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use chatlens::cli::ReportFormat;
///
/// let format = ReportFormat::Json;
/// assert_eq!(format.to_string(), "JSON");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// The full report as pretty JSON
    Json,

    /// Every table as `section;key;value` rows
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&crate::format::OutputFormat::from(*self), f)
    }
}

// Conversion to library format type
impl From<ReportFormat> for crate::format::OutputFormat {
    fn from(format: ReportFormat) -> crate::format::OutputFormat {
        match format {
            ReportFormat::Text => crate::format::OutputFormat::Text,
            ReportFormat::Json => crate::format::OutputFormat::Json,
            ReportFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
