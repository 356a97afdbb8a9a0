//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::core::report::AnalysisReport;
use crate::error::Result;

/// Writes a report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "scope": "Overall",
///   "stats": {"messages": 3, "words": 7, "media": 0, "links": 1},
///   "monthly_timeline": [{"label": "January-2023", "year": 2023, "month": 1, "messages": 3}],
///   ...
/// }
/// ```
///
/// Sections that were not computed (`busy_users` for a single sender, a
/// word cloud that was not requested) are omitted.
pub fn write_json(report: &AnalysisReport, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    info!(
        "JSON report written to {} ({} bytes)",
        output_path.display(),
        json.len()
    );
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
