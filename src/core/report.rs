//! Every aggregation for one scope, bundled.

use std::fmt;

use serde::Serialize;

use crate::core::activity::{ActivityCount, Heatmap};
use crate::core::emoji::EmojiCount;
use crate::core::scope::Scope;
use crate::core::stats::Stats;
use crate::core::timeline::{DailyCount, MonthlyCount};
use crate::core::users::BusyUsers;
use crate::core::wordcloud::WordCloud;
use crate::core::words::WordCount;

/// Results of a full analysis run.
///
/// Word-dependent sections are `None` when the stop-word list could not be
/// loaded; the reason is recorded in `warnings` and every other section is
/// still filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub scope: Scope,
    pub stats: Stats,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub weekday_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
    /// Only present for [`Scope::Overall`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_words: Option<Vec<WordCount>>,
    pub emoji: Vec<EmojiCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordcloud: Option<WordCloud>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl AnalysisReport {
    /// Renders a plain-text summary; same as the [`Display`](fmt::Display) output.
    ///
    /// The emoji table is cut to its first entries; use the JSON or CSV
    /// writers for the complete data.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SHOWN: usize = 10;

        writeln!(f, "Scope: {}", self.scope)?;
        writeln!(f)?;
        writeln!(f, "Messages: {}", self.stats.messages)?;
        writeln!(f, "Words:    {}", self.stats.words)?;
        writeln!(f, "Media:    {}", self.stats.media)?;
        writeln!(f, "Links:    {}", self.stats.links)?;

        if !self.monthly_timeline.is_empty() {
            writeln!(f, "\nMonthly timeline:")?;
            for month in &self.monthly_timeline {
                writeln!(f, "  {:<16} {}", month.label, month.messages)?;
            }
        }

        if !self.weekday_activity.is_empty() {
            writeln!(f, "\nBusiest days:")?;
            for day in &self.weekday_activity {
                writeln!(f, "  {:<10} {}", day.label, day.messages)?;
            }
        }

        if !self.month_activity.is_empty() {
            writeln!(f, "\nBusiest months:")?;
            for month in &self.month_activity {
                writeln!(f, "  {:<10} {}", month.label, month.messages)?;
            }
        }

        if let Some(busy) = self.busy_users.as_ref().filter(|b| !b.is_empty()) {
            writeln!(f, "\nMost busy users:")?;
            for user in &busy.top {
                writeln!(f, "  {:<20} {}", user.name, user.messages)?;
            }
            writeln!(f, "\nShare of messages:")?;
            for share in &busy.shares {
                writeln!(f, "  {:<20} {:.2}%", share.name, share.percent)?;
            }
        }

        if let Some(words) = self.common_words.as_ref().filter(|w| !w.is_empty()) {
            writeln!(f, "\nMost common words:")?;
            for word in words {
                writeln!(f, "  {:<20} {}", word.word, word.count)?;
            }
        }

        if !self.emoji.is_empty() {
            writeln!(f, "\nEmoji:")?;
            for emoji in self.emoji.iter().take(SHOWN) {
                writeln!(f, "  {}  {}", emoji.emoji, emoji.count)?;
            }
        }

        if let Some(cloud) = &self.wordcloud {
            writeln!(
                f,
                "\nWord cloud: {} words on {}x{}",
                cloud.len(),
                cloud.width,
                cloud.height
            )?;
        }

        for warning in &self.warnings {
            writeln!(f, "\nwarning: {warning}")?;
        }

        Ok(())
    }
}
