//! Activity distributions over weekdays, months and hours.

use chrono::Datelike;
use serde::Serialize;

use crate::core::scope::Scope;
use crate::core::tally::Tally;
use crate::message::{DAY_NAMES, HourBucket, MessageRecord};

/// A calendar label and the number of messages carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub label: &'static str,
    pub messages: usize,
}

fn ranked_by(
    records: &[MessageRecord],
    scope: &Scope,
    key: fn(&MessageRecord) -> &'static str,
) -> Vec<ActivityCount> {
    scope
        .filter(records)
        .map(key)
        .collect::<Tally<_>>()
        .into_ranked()
        .into_iter()
        .map(|(label, messages)| ActivityCount { label, messages })
        .collect()
}

/// Messages per weekday, busiest first.
///
/// Only weekdays that occur are listed; ties keep first-appearance order.
pub fn weak_activity_map(records: &[MessageRecord], scope: &Scope) -> Vec<ActivityCount> {
    ranked_by(records, scope, MessageRecord::day_name)
}

/// Messages per month name (all years folded together), busiest first.
pub fn month_activity_map(records: &[MessageRecord], scope: &Scope) -> Vec<ActivityCount> {
    ranked_by(records, scope, MessageRecord::month_name)
}

/// Weekday × hour-bucket message counts.
///
/// Rows are Monday..Sunday, columns are the 24 hour buckets in hour order.
/// Every cell exists; combinations without messages are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    rows: [&'static str; 7],
    columns: [&'static str; 24],
    cells: [[usize; 24]; 7],
}

impl Default for Heatmap {
    fn default() -> Self {
        Self {
            rows: DAY_NAMES,
            columns: HourBucket::LABELS,
            cells: [[0; 24]; 7],
        }
    }
}

impl Heatmap {
    /// Row labels (weekday names).
    pub fn rows(&self) -> &[&'static str; 7] {
        &self.rows
    }

    /// Column labels (hour buckets).
    pub fn columns(&self) -> &[&'static str; 24] {
        &self.columns
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[[usize; 24]; 7] {
        &self.cells
    }

    /// Count for a weekday name and hour bucket.
    ///
    /// Returns `None` if `day_name` is not an English weekday.
    pub fn get(&self, day_name: &str, bucket: HourBucket) -> Option<usize> {
        let row = self.rows.iter().position(|d| *d == day_name)?;
        Some(self.cells[row][bucket.hour() as usize])
    }

    /// Sum over all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// Largest single cell.
    pub fn max(&self) -> usize {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Returns `true` if every cell is zero.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Builds the weekday × hour-bucket heatmap for `scope`.
///
/// ```
/// use chatlens::core::{Scope, activity_heatmap};
/// use chatlens::message::HourBucket;
///
/// // 2 January 2023 was a Monday
/// let records = chatlens::parse("2/1/23, 23:15 - A: late\n2/1/23, 23:50 - B: later\n")?;
/// let heatmap = activity_heatmap(&records, &Scope::Overall);
///
/// assert_eq!(heatmap.get("Monday", HourBucket::new(23).unwrap()), Some(2));
/// assert_eq!(heatmap.total(), 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn activity_heatmap(records: &[MessageRecord], scope: &Scope) -> Heatmap {
    let mut heatmap = Heatmap::default();
    for record in scope.filter(records) {
        let row = record.timestamp().weekday().num_days_from_monday() as usize;
        heatmap.cells[row][record.hour() as usize] += 1;
    }
    heatmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, h: u32, sender: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        MessageRecord::new(ts, Sender::user(sender), "x")
    }

    #[test]
    fn test_weekday_ranking() {
        // 2023-01-01 Sunday, 2023-01-02 Monday, 2023-01-03 Tuesday
        let records = vec![
            record(2023, 1, 1, 10, "A"),
            record(2023, 1, 3, 10, "A"),
            record(2023, 1, 2, 10, "A"),
            record(2023, 1, 3, 11, "B"),
            record(2023, 1, 2, 11, "B"),
        ];
        let map = weak_activity_map(&records, &Scope::Overall);
        let labels: Vec<_> = map.iter().map(|c| (c.label, c.messages)).collect();
        // Tuesday appears before Monday, so it wins the tie
        assert_eq!(labels, [("Tuesday", 2), ("Monday", 2), ("Sunday", 1)]);
    }

    #[test]
    fn test_month_ranking_folds_years() {
        let records = vec![
            record(2022, 3, 1, 10, "A"),
            record(2023, 1, 1, 10, "A"),
            record(2023, 3, 1, 10, "A"),
        ];
        let map = month_activity_map(&records, &Scope::Overall);
        assert_eq!(map[0].label, "March");
        assert_eq!(map[0].messages, 2);
        assert_eq!(map[1].label, "January");
    }

    #[test]
    fn test_heatmap_shape_and_cells() {
        let records = vec![
            record(2023, 1, 2, 0, "A"),
            record(2023, 1, 2, 0, "B"),
            record(2023, 1, 8, 23, "A"),
        ];
        let heatmap = activity_heatmap(&records, &Scope::Overall);

        assert_eq!(heatmap.rows()[0], "Monday");
        assert_eq!(heatmap.rows()[6], "Sunday");
        assert_eq!(heatmap.columns()[0], "00-1");
        assert_eq!(heatmap.columns()[23], "23-00");
        assert_eq!(heatmap.cells()[0][0], 2);
        assert_eq!(heatmap.cells()[6][23], 1);
        assert_eq!(heatmap.get("Sunday", HourBucket::new(23).unwrap()), Some(1));
        assert_eq!(heatmap.get("Funday", HourBucket::new(1).unwrap()), None);
        assert_eq!(heatmap.total(), 3);
        assert_eq!(heatmap.max(), 2);
    }

    #[test]
    fn test_heatmap_scoped() {
        let records = vec![record(2023, 1, 2, 5, "A"), record(2023, 1, 2, 5, "B")];
        assert_eq!(activity_heatmap(&records, &Scope::user("B")).total(), 1);
    }

    #[test]
    fn test_empty() {
        assert!(weak_activity_map(&[], &Scope::Overall).is_empty());
        assert!(month_activity_map(&[], &Scope::Overall).is_empty());
        let heatmap = activity_heatmap(&[], &Scope::Overall);
        assert!(heatmap.is_empty());
        assert_eq!(heatmap.max(), 0);
    }
}
