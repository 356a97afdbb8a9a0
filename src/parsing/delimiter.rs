//! Timestamp stamp recognition and entry splitting.
//!
//! A transcript is a concatenation of entries, each introduced by a stamp
//! such as `14/03/2023, 21:07 - `. The text is split on every stamp: matched
//! stamps and the segments between them are collected as two separate lists
//! and then paired, after the segment in front of the first stamp (the
//! preamble) has been set aside.

use std::sync::LazyLock;

use log::debug;
use regex::{Captures, Regex};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};

/// Stamp grammar: `D{1,2}/D{1,2}/D{2,4}, H{1,2}:MM - `.
pub const STAMP_PATTERN: &str = r"(\d{1,2})/(\d{1,2})/(\d{2,4}),\s(\d{1,2}):(\d{2})\s-\s";

static STAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STAMP_PATTERN).expect("stamp pattern is a valid regex"));

static LINE_START_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?m)^{STAMP_PATTERN}")).expect("stamp pattern is a valid regex")
});

fn stamp_regex(config: &ParserConfig) -> &'static Regex {
    if config.line_start_only {
        &LINE_START_STAMP
    } else {
        &STAMP
    }
}

/// A matched stamp and its numeric components, borrowed from the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp<'a> {
    /// The full delimiter text, separator included.
    pub text: &'a str,
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
}

impl<'a> Stamp<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        Self {
            text: group(0),
            day: group(1),
            month: group(2),
            year: group(3),
            hour: group(4),
            minute: group(5),
        }
    }
}

/// One entry before sender/body splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub stamp: Stamp<'a>,
    /// Everything up to the next stamp, untrimmed.
    pub text: &'a str,
}

/// Result of splitting a transcript on its stamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitTranscript<'a> {
    /// Text in front of the first stamp; discarded by the parser.
    pub preamble: &'a str,
    pub entries: Vec<RawEntry<'a>>,
}

impl SplitTranscript<'_> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no stamp was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenates preamble, stamps and entry texts back into the original text.
    pub fn reassemble(&self) -> String {
        let mut out = String::from(self.preamble);
        for entry in &self.entries {
            out.push_str(entry.stamp.text);
            out.push_str(entry.text);
        }
        out
    }
}

/// Splits `text` into stamped entries.
///
/// # Errors
///
/// Returns a [`ParseErrorKind::EntryMismatch`](crate::error::ParseErrorKind::EntryMismatch)
/// parse error if the stamp list and the segment list cannot be paired.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parsing::split_entries;
///
/// let text = "1/1/23, 10:00 - Alice: Hi\n1/1/23, 10:05 - Bob: Hello\n";
/// let split = split_entries(text, &ParserConfig::default())?;
///
/// assert_eq!(split.len(), 2);
/// assert_eq!(split.entries[0].stamp.text, "1/1/23, 10:00 - ");
/// assert_eq!(split.entries[0].text, "Alice: Hi\n");
/// assert_eq!(split.reassemble(), text);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn split_entries<'a>(text: &'a str, config: &ParserConfig) -> Result<SplitTranscript<'a>> {
    let regex = stamp_regex(config);

    let stamps: Vec<Stamp<'a>> = regex
        .captures_iter(text)
        .map(|caps| Stamp::from_captures(&caps))
        .collect();

    let mut segments = regex.split(text);
    // split always yields at least one (possibly empty) segment
    let preamble = segments.next().unwrap_or_default();
    let bodies: Vec<&'a str> = segments.collect();

    if stamps.len() != bodies.len() {
        return Err(ChatlensError::entry_mismatch(stamps.len(), bodies.len()));
    }

    if !preamble.is_empty() {
        debug!("Discarding {} bytes before the first timestamp", preamble.len());
    }

    let entries = stamps
        .into_iter()
        .zip(bodies)
        .map(|(stamp, text)| RawEntry { stamp, text })
        .collect();

    Ok(SplitTranscript { preamble, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> SplitTranscript<'_> {
        split_entries(text, &ParserConfig::default()).unwrap()
    }

    #[test]
    fn test_split_empty() {
        let result = split("");
        assert!(result.is_empty());
        assert_eq!(result.preamble, "");
    }

    #[test]
    fn test_split_without_stamps() {
        let result = split("just some text\nwith no stamps");
        assert!(result.is_empty());
        assert_eq!(result.preamble, "just some text\nwith no stamps");
    }

    #[test]
    fn test_split_components() {
        let result = split("14/03/2023, 9:07 - Alice: Hi");
        assert_eq!(result.len(), 1);
        let stamp = result.entries[0].stamp;
        assert_eq!(stamp.day, "14");
        assert_eq!(stamp.month, "03");
        assert_eq!(stamp.year, "2023");
        assert_eq!(stamp.hour, "9");
        assert_eq!(stamp.minute, "07");
        assert_eq!(result.entries[0].text, "Alice: Hi");
    }

    #[test]
    fn test_split_keeps_multiline_text() {
        let text = "1/1/23, 10:00 - Alice: line one\nline two\n1/1/23, 10:01 - Bob: ok";
        let result = split(text);
        assert_eq!(result.len(), 2);
        assert_eq!(result.entries[0].text, "Alice: line one\nline two\n");
        assert_eq!(result.entries[1].text, "Bob: ok");
    }

    #[test]
    fn test_split_preamble() {
        let text = "exported chat\n1/1/23, 10:00 - Alice: Hi";
        let result = split(text);
        assert_eq!(result.preamble, "exported chat\n");
        assert_eq!(result.len(), 1);
        assert_eq!(result.reassemble(), text);
    }

    #[test]
    fn test_split_matches_mid_line_by_default() {
        let text = "1/1/23, 10:00 - Alice: see 2/2/23, 11:00 - Bob: quoted";
        assert_eq!(split(text).len(), 2);
    }

    #[test]
    fn test_line_start_only() {
        let text = "1/1/23, 10:00 - Alice: see 2/2/23, 11:00 - Bob: quoted\n3/3/23, 12:00 - Carol: real";
        let config = ParserConfig::new().with_line_start_only(true);
        let result = split_entries(text, &config).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.entries[0].text,
            "Alice: see 2/2/23, 11:00 - Bob: quoted\n"
        );
        assert_eq!(result.reassemble(), text);
    }

    #[test]
    fn test_stamp_requires_separator() {
        assert!(split("1/1/23, 10:00 Alice: Hi").is_empty());
        assert!(split("1/1/23 10:00 - Alice: Hi").is_empty());
    }

    #[test]
    fn test_narrow_nbsp_is_whitespace() {
        let result = split("1/1/23, 10:00\u{202f}- Alice: Hi");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_reassemble_roundtrip() {
        let text = "\u{feff}header\n1/1/23, 10:00 - A: x\n\n1/1/2023, 23:59 - joined\n";
        assert_eq!(split(text).reassemble(), text);
    }
}
