//! Headline counters: messages, words, media and links.

use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::scope::Scope;
use crate::message::MessageRecord;

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).expect("URL pattern is a valid regex")
});

/// Summary counters for one scope.
///
/// Counters add up: the overall stats equal the sum of the per-sender stats.
///
/// # Example
///
/// ```
/// use chatlens::core::stats::Stats;
///
/// let a = Stats { messages: 2, words: 5, media: 0, links: 1 };
/// let b = Stats { messages: 1, words: 2, media: 1, links: 0 };
/// assert_eq!((a + b).messages, 3);
/// assert_eq!([a, b].into_iter().sum::<Stats>().words, 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Records in scope
    pub messages: usize,
    /// Whitespace-separated tokens across all bodies
    pub words: usize,
    /// Bodies equal to the media placeholder
    pub media: usize,
    /// URL occurrences across all bodies
    pub links: usize,
}

impl Stats {
    /// Returns `true` if the scope contained no records.
    pub fn is_empty(&self) -> bool {
        self.messages == 0
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            messages: self.messages + rhs.messages,
            words: self.words + rhs.words,
            media: self.media + rhs.media,
            links: self.links + rhs.links,
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        *self = *self + rhs;
    }
}

impl Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::default(), Add::add)
    }
}

/// Counts URL occurrences in `body`.
///
/// ```
/// use chatlens::core::stats::count_links;
///
/// assert_eq!(count_links("see https://a.example/x and www.b.example"), 2);
/// assert_eq!(count_links("no links here"), 0);
/// ```
pub fn count_links(body: &str) -> usize {
    URL.find_iter(body).count()
}

/// Computes the headline counters for `scope`.
///
/// `media_placeholder` must match a body exactly for it to count as media.
pub fn fetch_stats(records: &[MessageRecord], scope: &Scope, media_placeholder: &str) -> Stats {
    scope
        .filter(records)
        .map(|record| {
            let body = record.body();
            Stats {
                messages: 1,
                words: body.split_whitespace().count(),
                media: usize::from(body == media_placeholder),
                links: count_links(body),
            }
        })
        .sum()
}
