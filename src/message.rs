//! Typed message records produced by the transcript parser.
//!
//! This module provides [`MessageRecord`], the fixed-shape representation of
//! one transcript entry, together with [`Sender`] and [`HourBucket`].
//!
//! All calendar fields (`year`, `month_name`, `day_name`, `hour_bucket`, ...)
//! are derived once from the timestamp when the record is built and are never
//! recomputed downstream.
//!
//! # Examples
//!
//! ```
//! use chatlens::{MessageRecord, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(14, 5, 0).unwrap();
//! let record = MessageRecord::new(ts, Sender::user("Alice"), "Hi");
//!
//! assert_eq!(record.sender().as_str(), "Alice");
//! assert_eq!(record.day_name(), "Sunday");
//! assert_eq!(record.month_name(), "January");
//! assert_eq!(record.hour_bucket().as_str(), "14-15");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// English month names, indexed by `month_number - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Hour bucket labels, indexed by hour.
///
/// Hour 0 is `"00-1"` and hour 23 is `"23-00"`; every other hour is
/// `"H-(H+1)"` without zero padding. Consumers match on these literal strings.
const HOUR_BUCKET_LABELS: [&str; 24] = [
    "00-1", "1-2", "2-3", "3-4", "4-5", "5-6", "6-7", "7-8", "8-9", "9-10", "10-11", "11-12",
    "12-13", "13-14", "14-15", "15-16", "16-17", "17-18", "18-19", "19-20", "20-21", "21-22",
    "22-23", "23-00",
];

/// Author of a transcript entry.
///
/// Entries without a `name: ` prefix (joins, encryption notices, subject
/// changes) belong to [`Sender::GroupNotification`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sender {
    /// A human participant, identified by the exported display name.
    User(String),
    /// System / group event with no human author.
    GroupNotification,
}

impl Sender {
    /// Textual form of [`Sender::GroupNotification`].
    pub const SENTINEL: &'static str = "group_notification";

    /// Creates a human sender.
    pub fn user(name: impl Into<String>) -> Self {
        Sender::User(name.into())
    }

    /// Returns the sender identifier, or the sentinel for system entries.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::User(name) => name,
            Sender::GroupNotification => Self::SENTINEL,
        }
    }

    /// Returns `true` for system entries.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::GroupNotification)
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One-hour window label used as the time axis of activity heatmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourBucket(u8);

impl HourBucket {
    /// All labels in hour order.
    pub const LABELS: [&'static str; 24] = HOUR_BUCKET_LABELS;

    /// Returns the bucket for `hour`, or `None` if `hour > 23`.
    pub fn new(hour: u32) -> Option<Self> {
        u8::try_from(hour).ok().filter(|h| *h < 24).map(HourBucket)
    }

    /// All 24 buckets in hour order.
    pub fn all() -> impl Iterator<Item = HourBucket> {
        (0..24u8).map(HourBucket)
    }

    /// The hour this bucket starts at.
    pub fn hour(self) -> u32 {
        u32::from(self.0)
    }

    /// The label, e.g. `"14-15"`.
    pub fn as_str(self) -> &'static str {
        HOUR_BUCKET_LABELS[usize::from(self.0)]
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A parsed transcript entry with its derived calendar fields.
///
/// Records are immutable: fields are private and only readable through
/// accessors, so the derived fields always agree with `timestamp`.
///
/// # Serialization
///
/// ```
/// use chatlens::{MessageRecord, Sender};
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(0, 30, 0).unwrap();
/// let record = MessageRecord::new(ts, Sender::GroupNotification, "Group created");
/// let json = serde_json::to_string(&record)?;
///
/// assert!(json.contains(r#""sender":"group_notification""#));
/// assert!(json.contains(r#""hour_bucket":"00-1""#));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: Sender,
    body: String,
    calendar_date: NaiveDate,
    year: i32,
    month_number: u32,
    month_name: &'static str,
    day_of_month: u32,
    day_name: &'static str,
    hour: u32,
    minute: u32,
    hour_bucket: HourBucket,
}

impl MessageRecord {
    /// Builds a record and derives every calendar field from `timestamp`.
    ///
    /// Seconds are dropped; transcripts carry minute precision.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        let timestamp = timestamp.with_second(0).unwrap_or(timestamp);
        let month_number = timestamp.month();
        let hour = timestamp.hour();

        Self {
            timestamp,
            sender,
            body: body.into(),
            calendar_date: timestamp.date(),
            year: timestamp.year(),
            month_number,
            month_name: MONTH_NAMES[month_number as usize - 1],
            day_of_month: timestamp.day(),
            day_name: DAY_NAMES[timestamp.weekday().num_days_from_monday() as usize],
            hour,
            minute: timestamp.minute(),
            // chrono guarantees hour < 24
            hour_bucket: HourBucket(hour as u8),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the wall-clock timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the calendar date.
    pub fn calendar_date(&self) -> NaiveDate {
        self.calendar_date
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    pub fn month_number(&self) -> u32 {
        self.month_number
    }

    /// Returns the English month name.
    pub fn month_name(&self) -> &'static str {
        self.month_name
    }

    /// Returns the day of month (1-31).
    pub fn day_of_month(&self) -> u32 {
        self.day_of_month
    }

    /// Returns the English weekday name.
    pub fn day_name(&self) -> &'static str {
        self.day_name
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the hour bucket.
    pub fn hour_bucket(&self) -> HourBucket {
        self.hour_bucket
    }

    /// Returns `true` if this is a system entry.
    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }
}
