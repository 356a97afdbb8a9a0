//! Low-level transcript parsing steps.
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) runs these in order:
//!
//! 1. [`split_entries`] - split the raw text on timestamp stamps
//! 2. [`decode_timestamp`] - strictly decode each stamp
//! 3. [`split_sender`] - separate the `name: ` prefix from the body
//!
//! They are public so callers can inspect the raw entry structure, e.g. to
//! check that a transcript reassembles byte for byte.

pub mod delimiter;
pub mod sender;
pub mod timestamp;

pub use delimiter::{RawEntry, STAMP_PATTERN, SplitTranscript, Stamp, split_entries};
pub use sender::{find_separator, split_sender};
pub use timestamp::decode_timestamp;
