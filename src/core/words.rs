//! Word frequencies with stop-word filtering.
//!
//! Tokens come from human, non-media messages: bodies are lower-cased, split
//! on whitespace, and stripped of leading and trailing punctuation. Empty
//! tokens and stop words are dropped.
//!
//! # Example
//!
//! ```
//! use chatlens::core::words::{StopWords, WordFilter, most_common_words};
//! use chatlens::core::Scope;
//!
//! let records = chatlens::parse("1/1/23, 10:00 - A: Hello, hello world!\n1/1/23, 10:01 - B: the world\n")?;
//! let stop_words = StopWords::from_text("the a an");
//! let filter = WordFilter::new(&stop_words);
//!
//! let top = most_common_words(&records, &Scope::Overall, &filter, 20);
//! assert_eq!(top[0].word, "hello");
//! assert_eq!(top[0].count, 2);
//! assert_eq!(top[1].word, "world");
//! assert_eq!(top.len(), 2);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::config::DEFAULT_MEDIA_PLACEHOLDER;
use crate::core::scope::Scope;
use crate::core::tally::Tally;
use crate::error::{ChatlensError, Result};
use crate::message::MessageRecord;

/// Resource name reported when the stop-word list cannot be read.
pub const STOP_WORDS_RESOURCE: &str = "stop-word list";

/// A set of lower-cased tokens excluded from word statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list; filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a list from whitespace-separated text.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Loads a list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::MissingResource`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ChatlensError::missing_resource(STOP_WORDS_RESOURCE, path, e))?;

        let stop_words = Self::from_text(&text);
        debug!(
            "Loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(stop_words)
    }

    /// Returns `true` if `token` (already normalized) is a stop word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2018}'..='\u{201F}' | '\u{2026}' | '\u{00AB}' | '\u{00BB}' | '\u{00A1}' | '\u{00BF}'
        )
}

/// Lower-cases a token and trims punctuation from both ends.
///
/// Inner punctuation is kept, so `don't` and `e-mail` stay whole.
///
/// ```
/// use chatlens::core::words::normalize_token;
///
/// assert_eq!(normalize_token("Hello!!"), "hello");
/// assert_eq!(normalize_token("(don't)"), "don't");
/// assert_eq!(normalize_token("..."), "");
/// ```
pub fn normalize_token(token: &str) -> String {
    token.trim_matches(is_punctuation).to_lowercase()
}

/// Decides which records and tokens feed word statistics.
#[derive(Debug, Clone, Copy)]
pub struct WordFilter<'a> {
    stop_words: &'a StopWords,
    media_placeholder: &'a str,
}

impl<'a> WordFilter<'a> {
    /// Creates a filter with the default media placeholder.
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self {
            stop_words,
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER,
        }
    }

    /// Sets the media placeholder whose records are skipped.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: &'a str) -> Self {
        self.media_placeholder = placeholder;
        self
    }

    /// Returns `true` if the record contributes words.
    pub fn accepts(&self, record: &MessageRecord) -> bool {
        !record.is_system() && record.body() != self.media_placeholder
    }

    /// Kept tokens of one body, in order.
    pub fn tokens<'b>(&'b self, body: &'b str) -> impl Iterator<Item = String> + 'b {
        body.split_whitespace()
            .map(normalize_token)
            .filter(move |t| !t.is_empty() && !self.stop_words.contains(t))
    }
}

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Every kept word in `scope`, most frequent first; ties keep first-seen order.
pub fn word_frequencies(
    records: &[MessageRecord],
    scope: &Scope,
    filter: &WordFilter<'_>,
) -> Vec<WordCount> {
    scope
        .filter(records)
        .filter(|r| filter.accepts(r))
        .flat_map(|r| filter.tokens(r.body()))
        .collect::<Tally<String>>()
        .into_ranked()
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// The `top_n` most frequent kept words in `scope`.
pub fn most_common_words(
    records: &[MessageRecord],
    scope: &Scope,
    filter: &WordFilter<'_>,
    top_n: usize,
) -> Vec<WordCount> {
    let mut words = word_frequencies(records, scope, filter);
    words.truncate(top_n);
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn record(sender: Sender, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new(ts, sender, body)
    }

    fn words_of(result: &[WordCount]) -> Vec<(&str, usize)> {
        result.iter().map(|w| (w.word.as_str(), w.count)).collect()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_token("WORLD."), "world");
        assert_eq!(normalize_token("“quoted”"), "quoted");
        assert_eq!(normalize_token("e-mail"), "e-mail");
        assert_eq!(normalize_token("🔥"), "🔥");
    }

    #[test]
    fn test_excludes_system_and_media() {
        let records = vec![
            record(Sender::user("A"), "pizza tonight"),
            record(Sender::user("B"), "<Media omitted>"),
            record(Sender::GroupNotification, "A created group pizza"),
        ];
        let stop = StopWords::empty();
        let filter = WordFilter::new(&stop);
        let result = word_frequencies(&records, &Scope::Overall, &filter);
        assert_eq!(words_of(&result), [("pizza", 1), ("tonight", 1)]);
    }

    #[test]
    fn test_stop_words_are_exact_tokens() {
        let records = vec![record(Sender::user("A"), "hai haina theek hai")];
        let stop = StopWords::from_text("hai");
        let filter = WordFilter::new(&stop);
        let result = word_frequencies(&records, &Scope::Overall, &filter);
        // "haina" contains "hai" but is not itself a stop word
        assert_eq!(words_of(&result), [("haina", 1), ("theek", 1)]);
    }

    #[test]
    fn test_stop_words_case_insensitive() {
        let stop = StopWords::from_text("The\nAND");
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
        assert_eq!(stop.len(), 2);
    }

    #[test]
    fn test_top_n_and_ties() {
        let records = vec![
            record(Sender::user("A"), "b a c"),
            record(Sender::user("B"), "a b d"),
        ];
        let stop = StopWords::empty();
        let filter = WordFilter::new(&stop);
        let result = most_common_words(&records, &Scope::Overall, &filter, 3);
        assert_eq!(words_of(&result), [("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_scoped_and_custom_placeholder() {
        let records = vec![
            record(Sender::user("A"), "image omitted"),
            record(Sender::user("A"), "hello"),
            record(Sender::user("B"), "bye"),
        ];
        let stop = StopWords::empty();
        let filter = WordFilter::new(&stop).with_media_placeholder("image omitted");
        let result = word_frequencies(&records, &Scope::user("A"), &filter);
        assert_eq!(words_of(&result), [("hello", 1)]);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hai\nhe\nthe").unwrap();
        let stop = StopWords::from_file(file.path()).unwrap();
        assert_eq!(stop.len(), 3);
    }

    #[test]
    fn test_from_file_missing() {
        let err = StopWords::from_file("/nonexistent/stop_hinglish.txt").unwrap_err();
        assert!(err.is_missing_resource());
        assert!(err.to_string().contains("stop-word list"));
    }

    #[test]
    fn test_empty_input() {
        let stop = StopWords::empty();
        let filter = WordFilter::new(&stop);
        assert!(most_common_words(&[], &Scope::Overall, &filter, 20).is_empty());
    }
}
