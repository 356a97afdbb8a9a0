//! Emoji frequency table.
//!
//! Bodies are scanned one `char` at a time and each char is looked up in the
//! Unicode emoji table. Multi-codepoint sequences (flags, skin tones, ZWJ
//! families) therefore count as their individual emoji components.

use serde::Serialize;

use crate::core::scope::Scope;
use crate::core::tally::Tally;
use crate::message::MessageRecord;

/// An emoji and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub count: usize,
}

/// Returns `true` if `c` on its own is an emoji.
///
/// ASCII characters are never emoji here, even though `#`, `*` and the
/// digits begin keycap sequences.
///
/// ```
/// use chatlens::core::emoji::is_emoji;
///
/// assert!(is_emoji('😂'));
/// assert!(is_emoji('🔥'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('#'));
/// ```
pub fn is_emoji(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}

/// Counts emoji in `scope`, most frequent first; ties keep first-seen order.
///
/// ```
/// use chatlens::core::{Scope, emoji_helper};
///
/// let records = chatlens::parse("1/1/23, 10:00 - A: 😂😂 nice 👍\n1/1/23, 10:01 - B: 👍😂\n")?;
/// let emoji = emoji_helper(&records, &Scope::Overall);
///
/// assert_eq!(emoji[0].emoji, '😂');
/// assert_eq!(emoji[0].count, 3);
/// assert_eq!(emoji[1].count, 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn emoji_helper(records: &[MessageRecord], scope: &Scope) -> Vec<EmojiCount> {
    scope
        .filter(records)
        .flat_map(|r| r.body().chars())
        .filter(|c| is_emoji(*c))
        .collect::<Tally<char>>()
        .into_ranked()
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;
    use chrono::NaiveDate;

    fn record(sender: &str, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        MessageRecord::new(ts, Sender::user(sender), body)
    }

    #[test]
    fn test_counts_and_order() {
        let records = vec![record("A", "🎉 party 🎉"), record("B", "🍕🎉🍕")];
        let emoji = emoji_helper(&records, &Scope::Overall);
        let pairs: Vec<_> = emoji.iter().map(|e| (e.emoji, e.count)).collect();
        assert_eq!(pairs, [('🎉', 3), ('🍕', 2)]);
    }

    #[test]
    fn test_scoped() {
        let records = vec![record("A", "🎉"), record("B", "🍕")];
        let emoji = emoji_helper(&records, &Scope::user("B"));
        assert_eq!(emoji.len(), 1);
        assert_eq!(emoji[0].emoji, '🍕');
    }

    #[test]
    fn test_no_emoji() {
        let records = vec![record("A", "plain text, 123 #tag *bold*")];
        assert!(emoji_helper(&records, &Scope::Overall).is_empty());
        assert!(emoji_helper(&[], &Scope::Overall).is_empty());
    }

    #[test]
    fn test_non_emoji_unicode() {
        assert!(!is_emoji('é'));
        assert!(!is_emoji('中'));
        assert!(!is_emoji('\u{200d}'));
    }
}
