//! Sender rankings and scope choices.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::scope::Scope;
use crate::core::tally::Tally;
use crate::message::{MessageRecord, Sender};

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub name: String,
    pub messages: usize,
}

/// A sender's share of all human messages, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    /// Rounded to two decimals
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The `top_n` most active senders
    pub top: Vec<UserCount>,
    /// Every sender's share, same order as `top`
    pub shares: Vec<UserShare>,
}

impl BusyUsers {
    /// Returns `true` if the transcript had no human messages.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ranks human senders by message count.
///
/// System entries are excluded from both the ranking and the percentage
/// denominator. This is an overall-only view; it takes no scope.
///
/// # Example
///
/// ```
/// use chatlens::core::most_busy_users;
///
/// let records = chatlens::parse(
///     "1/1/23, 10:00 - A: x\n1/1/23, 10:01 - B: y\n1/1/23, 10:02 - A: z\n1/1/23, 10:03 - A joined\n",
/// )?;
/// let busy = most_busy_users(&records, 5);
///
/// assert_eq!(busy.top[0].name, "A");
/// assert_eq!(busy.top[0].messages, 2);
/// assert_eq!(busy.shares[1].percent, 33.33);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn most_busy_users(records: &[MessageRecord], top_n: usize) -> BusyUsers {
    let tally: Tally<&str> = records
        .iter()
        .filter(|r| !r.is_system())
        .map(|r| r.sender().as_str())
        .collect();

    let total = tally.total();
    if total == 0 {
        return BusyUsers::default();
    }

    let ranked = tally.into_ranked();

    let shares = ranked
        .iter()
        .map(|&(name, messages)| UserShare {
            name: name.to_string(),
            percent: round2(messages as f64 * 100.0 / total as f64),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(top_n)
        .map(|(name, messages)| UserCount {
            name: name.to_string(),
            messages,
        })
        .collect();

    BusyUsers { top, shares }
}

/// Distinct human senders, sorted by name.
pub fn sender_list(records: &[MessageRecord]) -> Vec<Sender> {
    records
        .iter()
        .map(MessageRecord::sender)
        .filter(|s| !s.is_system())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Scope choices for a transcript: `Overall` followed by every human sender.
///
/// ```
/// use chatlens::core::{Scope, scope_options};
///
/// let records = chatlens::parse("1/1/23, 10:00 - Bob: x\n1/1/23, 10:01 - Alice: y\n")?;
/// let options: Vec<String> = scope_options(&records).iter().map(Scope::to_string).collect();
///
/// assert_eq!(options, ["Overall", "Alice", "Bob"]);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn scope_options(records: &[MessageRecord]) -> Vec<Scope> {
    std::iter::once(Scope::Overall)
        .chain(sender_list(records).into_iter().map(Scope::Sender))
        .collect()
}
