//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::core::report::AnalysisReport;
use crate::error::{ChatlensError, Result};

/// Flattens a report into `(section, key, value)` rows.
fn build_rows(report: &AnalysisReport) -> Vec<[String; 3]> {
    let mut rows = Vec::new();
    let mut push = |section: &str, key: String, value: String| {
        rows.push([section.to_string(), key, value]);
    };

    push("scope", String::new(), report.scope.to_string());

    let stats = &report.stats;
    for (key, value) in [
        ("messages", stats.messages),
        ("words", stats.words),
        ("media", stats.media),
        ("links", stats.links),
    ] {
        push("stats", key.to_string(), value.to_string());
    }

    for month in &report.monthly_timeline {
        push("monthly_timeline", month.label.clone(), month.messages.to_string());
    }
    for day in &report.daily_timeline {
        push(
            "daily_timeline",
            day.date.format("%Y-%m-%d").to_string(),
            day.messages.to_string(),
        );
    }
    for day in &report.weekday_activity {
        push("weekday_activity", day.label.to_string(), day.messages.to_string());
    }
    for month in &report.month_activity {
        push("month_activity", month.label.to_string(), month.messages.to_string());
    }

    let heatmap = &report.heatmap;
    for (day, row) in heatmap.rows().iter().zip(heatmap.cells()) {
        for (bucket, count) in heatmap.columns().iter().zip(row) {
            if *count > 0 {
                push("heatmap", format!("{day} {bucket}"), count.to_string());
            }
        }
    }

    if let Some(busy) = &report.busy_users {
        for user in &busy.top {
            push("busy_users", user.name.clone(), user.messages.to_string());
        }
        for share in &busy.shares {
            push("user_share", share.name.clone(), format!("{:.2}", share.percent));
        }
    }

    if let Some(words) = &report.common_words {
        for word in words {
            push("common_words", word.word.clone(), word.count.to_string());
        }
    }

    for emoji in &report.emoji {
        push("emoji", emoji.emoji.to_string(), emoji.count.to_string());
    }

    rows
}

fn write_rows<W: Write>(report: &AnalysisReport, out: W) -> Result<csv::Writer<W>> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(["Section", "Key", "Value"])?;
    for row in build_rows(report) {
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(writer)
}

/// Writes a report to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Section`, `Key`, `Value`
/// - One row per table entry; empty heatmap cells are left out
/// - Encoding: UTF-8
pub fn write_csv(report: &AnalysisReport, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let file = File::create(output_path)?;
    write_rows(report, file)?;
    info!("CSV report written to {}", output_path.display());
    Ok(())
}

/// Converts a report to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(report: &AnalysisReport) -> Result<String> {
    let writer = write_rows(report, Vec::new())?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
