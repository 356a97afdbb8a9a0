//! Analysis session over one parsed transcript.
//!
//! A [`Session`] owns the records of one transcript together with the
//! [`AnalysisConfig`] and forwards to the aggregation functions. Loading a new
//! transcript means building a new session.
//!
//! The word functions need a stop-word list. It is either handed over with
//! [`Session::with_stop_words`] or read from
//! [`AnalysisConfig::stop_words_path`] the first time it is needed. If it
//! cannot be read, only [`Session::most_common_words`] and
//! [`Session::create_wordcloud`] fail; every other method keeps working.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{Scope, Session};
//!
//! let raw = "1/1/23, 10:00 - Alice: Hi\n1/1/23, 10:05 - Bob: Hello\n1/1/23, 10:06 - Alice: 👋\n";
//! let session = Session::from_text(raw, AnalysisConfig::default())?;
//!
//! assert_eq!(session.stats(&Scope::Overall).messages, 3);
//! assert_eq!(session.most_busy_users().top[0].name, "Alice");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::path::Path;
use std::sync::OnceLock;

use log::warn;

use crate::config::{AnalysisConfig, WordCloudConfig};
use crate::core::activity::{self, ActivityCount, Heatmap};
use crate::core::emoji::{self, EmojiCount};
use crate::core::report::AnalysisReport;
use crate::core::scope::Scope;
use crate::core::stats::{self, Stats};
use crate::core::timeline::{self, DailyCount, MonthlyCount};
use crate::core::users::{self, BusyUsers};
use crate::core::wordcloud::{self, WordCloud};
use crate::core::words::{self, StopWords, WordCount, WordFilter};
use crate::error::Result;
use crate::message::{MessageRecord, Sender};
use crate::parser::TranscriptParser;

/// Parsed records plus analysis settings.
#[derive(Debug)]
pub struct Session {
    records: Vec<MessageRecord>,
    config: AnalysisConfig,
    stop_words: OnceLock<StopWords>,
}

impl Session {
    /// Wraps already parsed records.
    pub fn new(records: Vec<MessageRecord>, config: AnalysisConfig) -> Self {
        Self {
            records,
            config,
            stop_words: OnceLock::new(),
        }
    }

    /// Supplies the stop-word list directly instead of reading
    /// `config.stop_words_path`.
    ///
    /// ```rust
    /// use chatlens::config::AnalysisConfig;
    /// use chatlens::core::{Scope, Session, StopWords};
    ///
    /// let session = Session::from_text("1/1/23, 10:00 - A: the chai\n", AnalysisConfig::default())?
    ///     .with_stop_words(StopWords::from_text("the"));
    /// assert_eq!(session.most_common_words(&Scope::Overall)?[0].word, "chai");
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    #[must_use]
    pub fn with_stop_words(self, stop_words: StopWords) -> Self {
        Self {
            stop_words: OnceLock::from(stop_words),
            ..self
        }
    }

    /// Parses `raw` with the default parser and wraps the records.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the transcript is malformed.
    pub fn from_text(raw: &str, config: AnalysisConfig) -> Result<Self> {
        Ok(Self::new(crate::parser::parse(raw)?, config))
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// See [`TranscriptParser::parse`].
    pub fn open(
        path: impl AsRef<Path>,
        parser: &TranscriptParser,
        config: AnalysisConfig,
    ) -> Result<Self> {
        Ok(Self::new(parser.parse(path.as_ref())?, config))
    }

    /// Returns the records in transcript order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Returns the analysis configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the stop words, loading them on first use.
    ///
    /// A failed load is not cached, so a file that appears later is picked up.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::MissingResource`](crate::ChatlensError::MissingResource)
    /// if the configured file cannot be read.
    pub fn stop_words(&self) -> Result<&StopWords> {
        if let Some(loaded) = self.stop_words.get() {
            return Ok(loaded);
        }

        let loaded = StopWords::from_file(&self.config.stop_words_path)?;
        Ok(self.stop_words.get_or_init(|| loaded))
    }

    fn word_filter(&self) -> Result<WordFilter<'_>> {
        Ok(WordFilter::new(self.stop_words()?).with_media_placeholder(&self.config.media_placeholder))
    }

    // =========================================================================
    // Aggregations
    // =========================================================================

    pub fn stats(&self, scope: &Scope) -> Stats {
        stats::fetch_stats(&self.records, scope, &self.config.media_placeholder)
    }

    pub fn monthly_timeline(&self, scope: &Scope) -> Vec<MonthlyCount> {
        timeline::monthly_timeline(&self.records, scope)
    }

    pub fn daily_timeline(&self, scope: &Scope) -> Vec<DailyCount> {
        timeline::daily_timeline(&self.records, scope)
    }

    pub fn weak_activity_map(&self, scope: &Scope) -> Vec<ActivityCount> {
        activity::weak_activity_map(&self.records, scope)
    }

    pub fn month_activity_map(&self, scope: &Scope) -> Vec<ActivityCount> {
        activity::month_activity_map(&self.records, scope)
    }

    pub fn activity_heatmap(&self, scope: &Scope) -> Heatmap {
        activity::activity_heatmap(&self.records, scope)
    }

    /// Busiest senders, limited to `config.top_users`.
    pub fn most_busy_users(&self) -> BusyUsers {
        users::most_busy_users(&self.records, self.config.top_users)
    }

    pub fn sender_list(&self) -> Vec<Sender> {
        users::sender_list(&self.records)
    }

    pub fn scope_options(&self) -> Vec<Scope> {
        users::scope_options(&self.records)
    }

    pub fn emoji_helper(&self, scope: &Scope) -> Vec<EmojiCount> {
        emoji::emoji_helper(&self.records, scope)
    }

    /// Most common words, limited to `config.top_words`.
    ///
    /// # Errors
    ///
    /// Fails if the configured stop-word list cannot be read.
    pub fn most_common_words(&self, scope: &Scope) -> Result<Vec<WordCount>> {
        let filter = self.word_filter()?;
        Ok(words::most_common_words(
            &self.records,
            scope,
            &filter,
            self.config.top_words,
        ))
    }

    /// Lays out a word cloud for `scope`.
    ///
    /// # Errors
    ///
    /// Fails if the configured stop-word list cannot be read.
    pub fn create_wordcloud(&self, scope: &Scope, config: &WordCloudConfig) -> Result<WordCloud> {
        let filter = self.word_filter()?;
        Ok(wordcloud::create_wordcloud(
            &self.records,
            scope,
            &filter,
            config,
        ))
    }

    /// Runs every aggregation for `scope`.
    ///
    /// A word cloud is laid out only when `wordcloud` is given. Failures of
    /// the word functions are logged and listed in
    /// [`AnalysisReport::warnings`].
    pub fn report(&self, scope: &Scope, wordcloud: Option<&WordCloudConfig>) -> AnalysisReport {
        let mut warnings = Vec::new();
        let common_words = keep_or_warn(self.most_common_words(scope), &mut warnings);
        let wordcloud = wordcloud
            .and_then(|config| keep_or_warn(self.create_wordcloud(scope, config), &mut warnings));

        AnalysisReport {
            scope: scope.clone(),
            stats: self.stats(scope),
            monthly_timeline: self.monthly_timeline(scope),
            daily_timeline: self.daily_timeline(scope),
            weekday_activity: self.weak_activity_map(scope),
            month_activity: self.month_activity_map(scope),
            heatmap: self.activity_heatmap(scope),
            busy_users: scope.is_overall().then(|| self.most_busy_users()),
            common_words,
            emoji: self.emoji_helper(scope),
            wordcloud,
            warnings,
        }
    }
}

fn keep_or_warn<T>(result: Result<T>, warnings: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("{e}");
            warnings.push(e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RAW: &str = "\
12/3/23, 9:00 - Alice: the chai is ready
12/3/23, 9:02 - Bob: the best chai
12/3/23, 9:03 - Bob: <Media omitted>
12/3/23, 9:04 - Alice changed the group description
";

    #[test]
    fn test_session_basics() {
        let session = Session::from_text(RAW, AnalysisConfig::default()).unwrap();
        assert_eq!(session.len(), 4);
        assert_eq!(session.stats(&Scope::Overall).media, 1);
        assert_eq!(
            session.sender_list(),
            vec![Sender::user("Alice"), Sender::user("Bob")]
        );
        assert_eq!(session.scope_options().len(), 3);
    }

    fn session_without_stop_words(config: AnalysisConfig) -> Session {
        Session::from_text(RAW, config)
            .unwrap()
            .with_stop_words(StopWords::empty())
    }

    #[test]
    fn test_default_config_requires_stop_list() {
        // the default list is not present in the working directory
        let session = Session::from_text(
            "1/1/23, 10:00 - Alice: the chai is the best\n",
            AnalysisConfig::default(),
        )
        .unwrap();

        let err = session.most_common_words(&Scope::Overall).unwrap_err();
        assert!(err.is_missing_resource());
        assert!(err.to_string().contains("stop_hinglish.txt"));

        let report = session.report(&Scope::Overall, Some(&WordCloudConfig::default()));
        assert!(report.common_words.is_none());
        assert!(report.wordcloud.is_none());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("stop-word list"));
    }

    #[test]
    fn test_words_with_supplied_list() {
        let session = Session::from_text(RAW, AnalysisConfig::default())
            .unwrap()
            .with_stop_words(StopWords::from_text("the is"));
        let words = session.most_common_words(&Scope::Overall).unwrap();
        assert_eq!(words[0].word, "chai");
        assert_eq!(words[0].count, 2);

        let unfiltered = session_without_stop_words(AnalysisConfig::default());
        let words = unfiltered.most_common_words(&Scope::Overall).unwrap();
        assert_eq!(words[0].word, "the");
        assert_eq!(words[0].count, 2);
    }

    #[test]
    fn test_words_with_stop_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "the\nis").unwrap();

        let config = AnalysisConfig::new().with_stop_words_path(file.path());
        let session = Session::from_text(RAW, config).unwrap();
        let words = session.most_common_words(&Scope::Overall).unwrap();
        assert_eq!(words[0].word, "chai");
        assert!(words.iter().all(|w| w.word != "the"));
    }

    #[test]
    fn test_missing_stop_list_is_local() {
        let config = AnalysisConfig::new().with_stop_words_path("/nonexistent/stop_hinglish.txt");
        let session = Session::from_text(RAW, config).unwrap();

        assert!(session.most_common_words(&Scope::Overall).unwrap_err().is_missing_resource());
        assert!(
            session
                .create_wordcloud(&Scope::Overall, &WordCloudConfig::default())
                .unwrap_err()
                .is_missing_resource()
        );
        // everything else still works
        assert_eq!(session.stats(&Scope::Overall).messages, 4);
        assert_eq!(session.most_busy_users().top.len(), 2);
        assert_eq!(session.weak_activity_map(&Scope::Overall)[0].label, "Sunday");
    }

    #[test]
    fn test_custom_media_placeholder() {
        let session =
            session_without_stop_words(AnalysisConfig::new().with_media_placeholder("the best chai"));
        assert_eq!(session.stats(&Scope::Overall).media, 1);
        // the placeholder record is now skipped by the word functions
        let words = session.most_common_words(&Scope::user("Bob")).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_report_sections() {
        let session = session_without_stop_words(AnalysisConfig::default());

        let overall = session.report(&Scope::Overall, Some(&WordCloudConfig::default()));
        assert!(overall.busy_users.is_some());
        assert!(overall.wordcloud.is_some());
        assert!(overall.warnings.is_empty());
        assert_eq!(overall.heatmap.total(), 4);

        let alice = session.report(&Scope::user("Alice"), None);
        assert!(alice.busy_users.is_none());
        assert!(alice.wordcloud.is_none());
        assert_eq!(alice.stats.messages, 1);
    }

    #[test]
    fn test_empty_session() {
        let session = Session::from_text("", AnalysisConfig::default())
            .unwrap()
            .with_stop_words(StopWords::empty());
        assert!(session.is_empty());
        let report = session.report(&Scope::Overall, Some(&WordCloudConfig::default()));
        assert_eq!(report.stats, Stats::default());
        assert!(report.busy_users.unwrap().is_empty());
        assert!(report.common_words.unwrap().is_empty());
        assert!(report.wordcloud.unwrap().is_empty());
    }
}
