//! Sender/body separation.
//!
//! The sender prefix ends at the first `:` that is followed by whitespace and
//! is not the very first character of the entry. This is a plain left-to-right
//! scan; names that themselves contain `": "` are split at their first
//! occurrence.

use crate::message::Sender;

/// Finds the `name: ` separator.
///
/// Returns `(colon_index, body_start)` as byte offsets into `entry`.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::find_separator;
///
/// assert_eq!(find_separator("Alice: hi"), Some((5, 7)));
/// assert_eq!(find_separator("Group created"), None);
/// // the prefix must be non-empty
/// assert_eq!(find_separator(": hi"), None);
/// ```
pub fn find_separator(entry: &str) -> Option<(usize, usize)> {
    let skip = entry.chars().next()?.len_utf8();
    let rest = &entry[skip..];

    for (i, _) in rest.match_indices(':') {
        let after = &rest[i + 1..];
        if let Some(ws) = after.chars().next().filter(|c| c.is_whitespace()) {
            let colon = skip + i;
            return Some((colon, colon + 1 + ws.len_utf8()));
        }
    }

    None
}

/// Splits an entry into sender and trimmed body.
///
/// Entries without a separator, or whose prefix is blank, are system entries
/// and keep their whole (trimmed) text as body.
///
/// # Example
///
/// ```rust
/// use chatlens::Sender;
/// use chatlens::parsing::split_sender;
///
/// assert_eq!(split_sender("Alice: hello there"), (Sender::user("Alice"), "hello there"));
/// assert_eq!(split_sender("Group created\n"), (Sender::GroupNotification, "Group created"));
/// ```
pub fn split_sender(entry: &str) -> (Sender, &str) {
    if let Some((colon, body_start)) = find_separator(entry) {
        let name = entry[..colon].trim();
        if !name.is_empty() {
            return (Sender::user(name), entry[body_start..].trim());
        }
    }

    (Sender::GroupNotification, entry.trim())
}
