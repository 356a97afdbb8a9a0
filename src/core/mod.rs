//! Aggregations over parsed chat records.
//!
//! This module contains:
//! - [`scope`] - Overall vs. single-sender selection
//! - [`stats`] - Message, word, media and link counts
//! - [`timeline`] - Per-month and per-day message counts
//! - [`activity`] - Weekday/month rankings and the day x hour heatmap
//! - [`users`] - Busiest senders and their share of messages
//! - [`words`] - Stop words and word frequencies
//! - [`emoji`] - Emoji frequencies
//! - [`wordcloud`] - Word cloud layout
//! - [`session`] - Records plus settings, with every aggregation as a method
//! - [`report`] - All aggregations for one scope, bundled
//! - [`output`] - Report writers (JSON, CSV) and SVG rendering
//!
//! Every aggregation is a pure function of the records and a [`Scope`].
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{Scope, fetch_stats, monthly_timeline};
//!
//! let records = chatlens::parse("5/6/23, 20:15 - Alice: see www.example.com\n")?;
//! let stats = fetch_stats(&records, &Scope::Overall, "<Media omitted>");
//!
//! assert_eq!(stats.links, 1);
//! assert_eq!(monthly_timeline(&records, &Scope::Overall)[0].label, "June-2023");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod activity;
pub mod emoji;
pub mod output;
pub mod report;
pub mod scope;
pub mod session;
pub mod stats;
mod tally;
pub mod timeline;
pub mod users;
pub mod wordcloud;
pub mod words;

// Re-export main types for convenience
pub use activity::{
    ActivityCount, Heatmap, activity_heatmap, month_activity_map, weak_activity_map,
};
pub use emoji::{EmojiCount, emoji_helper};
pub use report::AnalysisReport;
pub use scope::Scope;
pub use session::Session;
pub use stats::{Stats, fetch_stats};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, UserCount, UserShare, most_busy_users, scope_options, sender_list};
pub use wordcloud::{Orientation, PlacedWord, WordCloud, create_wordcloud};
pub use words::{StopWords, WordCount, WordFilter, most_common_words};

// Conditionally re-export report writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
pub use output::{SvgStyle, to_svg, write_svg};
