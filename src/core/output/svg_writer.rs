//! SVG word-cloud writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::wordcloud::{Orientation, PlacedWord, WordCloud};
use crate::error::{ChatlensError, Result};

/// Fraction of the line box above the baseline.
const ASCENT: f64 = 0.8;

/// Rendering settings for [`to_svg`].
///
/// Canvas size and background come from the [`WordCloud`] itself; this only
/// covers text styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgStyle {
    /// CSS font family (default: "sans-serif")
    pub font_family: String,
    /// Fill colours, cycled through in placement order
    pub palette: Vec<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            palette: ["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SvgStyle {
    /// Creates a style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Sets the colour palette. An empty palette renders everything black.
    #[must_use]
    pub fn with_palette<I, S>(mut self, colours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = colours.into_iter().map(Into::into).collect();
        self
    }

    fn colour(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            "black"
        } else {
            &self.palette[index % self.palette.len()]
        }
    }
}

/// Escapes text for use inside SVG elements and attributes.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_word(out: &mut String, word: &PlacedWord, fill: &str) {
    let text = escape_xml(&word.word);
    let line = match word.orientation {
        Orientation::Horizontal => format!(
            r#"  <text x="{:.1}" y="{:.1}" font-size="{}" fill="{}">{}</text>"#,
            word.x,
            word.y + word.height * ASCENT,
            word.font_size,
            fill,
            text
        ),
        Orientation::Vertical => {
            // Rotated text runs bottom to top, baseline on the right.
            let ax = word.x + word.width * ASCENT;
            let ay = word.y + word.height;
            format!(
                r#"  <text x="{ax:.1}" y="{ay:.1}" font-size="{}" fill="{}" transform="rotate(-90 {ax:.1} {ay:.1})">{}</text>"#,
                word.font_size, fill, text
            )
        }
    };
    out.push_str(&line);
    out.push('\n');
}

/// Renders a word cloud as a standalone SVG document.
///
/// # Example
///
/// ```
/// use chatlens::config::WordCloudConfig;
/// use chatlens::core::output::{SvgStyle, to_svg};
/// use chatlens::core::words::WordCount;
/// use chatlens::core::wordcloud::layout;
///
/// let cloud = layout(
///     &[WordCount { word: "chai".into(), count: 3 }],
///     &WordCloudConfig::default(),
/// );
/// let svg = to_svg(&cloud, &SvgStyle::default());
///
/// assert!(svg.starts_with("<?xml"));
/// assert!(svg.contains(">chai</text>"));
/// ```
pub fn to_svg(cloud: &WordCloud, style: &SvgStyle) -> String {
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = cloud.width,
        h = cloud.height
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        cloud.width,
        cloud.height,
        escape_xml(&cloud.background)
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"  <g font-family="{}">"#,
        escape_xml(&style.font_family)
    ));
    out.push('\n');

    for (i, word) in cloud.words.iter().enumerate() {
        push_word(&mut out, word, &escape_xml(style.colour(i)));
    }

    out.push_str("  </g>\n");
    out.push_str("</svg>\n");
    out
}

/// Renders a word cloud and writes it to a file.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns [`ChatlensError::InvalidFormat`] if `output_path` is empty or a
/// directory, and [`ChatlensError::Io`] if the file cannot be written.
pub fn write_svg(cloud: &WordCloud, style: &SvgStyle, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    info!("Writing word cloud SVG to: {}", output_path.display());

    validate_svg_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    let svg = to_svg(cloud, style);
    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(svg.as_bytes())?;
    writer.flush()?;

    info!(
        "SVG written successfully ({} words, {} bytes)",
        cloud.len(),
        svg.len()
    );
    Ok(())
}

fn validate_svg_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ChatlensError::invalid_format("svg", "output path is empty"));
    }

    if path.is_dir() {
        return Err(ChatlensError::invalid_format(
            "svg",
            format!("output path is a directory: {}", path.display()),
        ));
    }

    if path.extension().is_some_and(|ext| ext != "svg") {
        debug!("File does not have .svg extension: {}", path.display());
    }

    Ok(())
}
