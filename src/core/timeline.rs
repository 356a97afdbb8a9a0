//! Chronological message counts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::scope::Scope;
use crate::message::{MONTH_NAMES, MessageRecord};

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    /// `"<month_name>-<year>"`, e.g. `"March-2023"`
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub messages: usize,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Counts messages per (year, month), oldest first.
///
/// Months without messages are omitted.
///
/// ```
/// use chatlens::core::{Scope, monthly_timeline};
///
/// let records = chatlens::parse("1/2/23, 10:00 - A: x\n5/1/23, 9:00 - B: y\n9/2/23, 8:00 - A: z\n")?;
/// let timeline = monthly_timeline(&records, &Scope::Overall);
///
/// assert_eq!(timeline[0].label, "January-2023");
/// assert_eq!(timeline[1].label, "February-2023");
/// assert_eq!(timeline[1].messages, 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn monthly_timeline(records: &[MessageRecord], scope: &Scope) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in scope.filter(records) {
        *months
            .entry((record.year(), record.month_number()))
            .or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month), messages)| MonthlyCount {
            label: format!("{}-{}", MONTH_NAMES[month as usize - 1], year),
            year,
            month,
            messages,
        })
        .collect()
}

/// Counts messages per calendar date, oldest first.
pub fn daily_timeline(records: &[MessageRecord], scope: &Scope) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in scope.filter(records) {
        *days.entry(record.calendar_date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}
