//! Configuration types for parsing and analysis.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - transcript delimiter matching
//! - [`AnalysisConfig`] - aggregation settings (media placeholder, top-N sizes, stop words)
//! - [`WordCloudConfig`] - word cloud canvas and layout settings
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, WordCloudConfig};
//!
//! let analysis = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .with_stop_words_path("stop_hinglish.txt");
//!
//! let cloud = WordCloudConfig::new().with_size(800, 400);
//! assert_eq!(cloud.width, 800);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Placeholder body the exporter writes instead of attached media.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Stop-word list read when no other location is configured.
pub const DEFAULT_STOP_WORDS_PATH: &str = "stop_hinglish.txt";

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_line_start_only(true);
/// assert!(config.line_start_only);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Only recognise timestamp stamps at the start of a line (default: false).
    ///
    /// By default every occurrence of the stamp pattern splits the transcript,
    /// including one quoted in the middle of a message.
    pub line_start_only: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether stamps must start a line.
    #[must_use]
    pub fn with_line_start_only(mut self, enabled: bool) -> Self {
        self.line_start_only = enabled;
        self
    }
}

/// Configuration for the aggregation library.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_media_placeholder("<Без медиафайлов>")
///     .with_top_users(3);
/// assert_eq!(config.top_users, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Body text that marks a media message (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Number of senders in the busiest-users ranking (default: 5)
    pub top_users: usize,

    /// Number of words in the most-common-words table (default: 20)
    pub top_words: usize,

    /// Stop-word list file (default: `stop_hinglish.txt`)
    pub stop_words_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            top_users: 5,
            top_words: 20,
            stop_words_path: PathBuf::from(DEFAULT_STOP_WORDS_PATH),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the size of the busiest-users ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the size of the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the stop-word list location.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = path.into();
        self
    }
}

/// Canvas and layout settings for [`create_wordcloud`](crate::core::wordcloud::create_wordcloud).
///
/// Passed explicitly to every layout call; there is no global styling state.
///
/// # Example
///
/// ```rust
/// use chatlens::config::WordCloudConfig;
///
/// let config = WordCloudConfig::new()
///     .with_font_range(12, 64)
///     .with_seed(7);
/// assert_eq!(config.min_font_size, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudConfig {
    /// Canvas width in pixels (default: 500)
    pub width: u32,

    /// Canvas height in pixels (default: 500)
    pub height: u32,

    /// Smallest font size a word may shrink to before it is dropped (default: 10)
    pub min_font_size: u32,

    /// Font size of the most frequent word (default: 80)
    pub max_font_size: u32,

    /// Maximum number of words placed (default: 200)
    pub max_words: usize,

    /// Font size decrement when a word does not fit (default: 2)
    pub font_step: u32,

    /// Probability that a word is laid out horizontally (default: 0.9)
    pub prefer_horizontal: f64,

    /// Background colour used when rendering (default: "white")
    pub background: String,

    /// Seed for the orientation choices (default: 1)
    pub seed: u64,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            min_font_size: 10,
            max_font_size: 80,
            max_words: 200,
            font_step: 2,
            prefer_horizontal: 0.9,
            background: "white".to_string(),
            seed: 1,
        }
    }
}

impl WordCloudConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the font size range.
    #[must_use]
    pub fn with_font_range(mut self, min: u32, max: u32) -> Self {
        self.min_font_size = min;
        self.max_font_size = max.max(min);
        self
    }

    /// Sets the maximum number of words.
    #[must_use]
    pub fn with_max_words(mut self, n: usize) -> Self {
        self.max_words = n;
        self
    }

    /// Sets the horizontal orientation probability (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn with_prefer_horizontal(mut self, p: f64) -> Self {
        self.prefer_horizontal = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the background colour.
    #[must_use]
    pub fn with_background(mut self, colour: impl Into<String>) -> Self {
        self.background = colour.into();
        self
    }

    /// Sets the layout seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
