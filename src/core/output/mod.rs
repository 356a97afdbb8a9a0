//! Report writers.
//!
//! - [`write_json`] / [`to_json`] - the whole [`AnalysisReport`](crate::core::AnalysisReport)
//!   as pretty JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - every table of the report in one
//!   `section;key;value` sheet - requires `csv-output` feature
//! - [`write_svg`] / [`to_svg`] - a [`WordCloud`](crate::core::WordCloud) as SVG
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::{AnalysisConfig, WordCloudConfig};
//! use chatlens::core::output::{SvgStyle, write_csv, write_json, write_svg};
//! use chatlens::core::{Scope, Session};
//! use chatlens::parser::TranscriptParser;
//!
//! let session = Session::open("chat.txt", &TranscriptParser::new(), AnalysisConfig::default())?;
//! let report = session.report(&Scope::Overall, Some(&WordCloudConfig::default()));
//!
//! write_json(&report, "report.json")?;
//! write_csv(&report, "report.csv")?;
//! if let Some(cloud) = &report.wordcloud {
//!     write_svg(cloud, &SvgStyle::default(), "cloud.svg")?;
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod svg_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use svg_writer::{SvgStyle, to_svg, write_svg};
