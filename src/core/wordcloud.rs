//! Word-cloud layout.
//!
//! Words are placed greedily, most frequent first. Each word gets a font size
//! proportional to its frequency relative to the most frequent word, then
//! walks an Archimedean spiral out from the canvas centre until its bounding
//! box fits without overlapping anything already placed. A word that finds no
//! spot is shrunk by `font_step` and retried, and dropped once it would fall
//! below `min_font_size`.
//!
//! Text extents are estimated from the character count (no font metrics), so
//! the layout is a geometry plan for a renderer rather than a pixel-exact
//! image. Orientation choices come from a seeded RNG: the same frequencies
//! and config always give the same layout.

use std::cmp::Reverse;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::WordCloudConfig;
use crate::core::output::SvgStyle;
use crate::core::scope::Scope;
use crate::core::words::{WordCount, WordFilter, word_frequencies};
use crate::message::MessageRecord;

/// Estimated glyph advance as a fraction of the font size.
const CHAR_WIDTH: f64 = 0.6;
/// Line box height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;
/// Radial growth of the spiral, in pixels per radian.
const SPIRAL_SPACING: f64 = 1.0;
/// Angular step along the spiral, in radians.
const SPIRAL_STEP: f64 = 0.1;

/// Text direction of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    /// Rotated 90° counter-clockwise.
    Vertical,
}

/// A word with its position and bounding box on the canvas.
///
/// `x`/`y` is the top-left corner of the box; `width`/`height` already account
/// for the orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: u32,
    pub orientation: Orientation,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlacedWord {
    fn intersects(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x < self.x + self.width
            && self.x < x + width
            && y < self.y + self.height
            && self.y < y + height
    }

    /// Returns `true` if the two boxes overlap.
    pub fn overlaps(&self, other: &PlacedWord) -> bool {
        self.intersects(other.x, other.y, other.width, other.height)
    }
}

/// A laid-out word cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: String,
    /// Placed words, largest first
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    fn blank(config: &WordCloudConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            background: config.background.clone(),
            words: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Looks up a placed word.
    pub fn get(&self, word: &str) -> Option<&PlacedWord> {
        self.words.iter().find(|w| w.word == word)
    }

    /// Renders the cloud as an SVG document. See [`to_svg`](crate::core::output::to_svg).
    pub fn to_svg(&self, style: &SvgStyle) -> String {
        crate::core::output::to_svg(self, style)
    }
}

fn scaled_font(count: usize, max_count: usize, config: &WordCloudConfig) -> u32 {
    let min = f64::from(config.min_font_size);
    let max = f64::from(config.max_font_size.max(config.min_font_size));
    let size = min + (max - min) * count as f64 / max_count as f64;
    (size.round() as u32).max(1)
}

fn box_size(word: &str, font_size: u32, orientation: Orientation) -> (f64, f64) {
    let font = f64::from(font_size);
    let along = word.chars().count() as f64 * font * CHAR_WIDTH;
    let across = font * LINE_HEIGHT;
    match orientation {
        Orientation::Horizontal => (along, across),
        Orientation::Vertical => (across, along),
    }
}

fn find_position(
    width: f64,
    height: f64,
    canvas: (f64, f64),
    placed: &[PlacedWord],
) -> Option<(f64, f64)> {
    let (canvas_w, canvas_h) = canvas;
    if width > canvas_w || height > canvas_h {
        return None;
    }

    let (cx, cy) = (canvas_w / 2.0, canvas_h / 2.0);
    let max_radius = canvas_w.hypot(canvas_h) / 2.0;
    let mut theta: f64 = 0.0;

    loop {
        let r = SPIRAL_SPACING * theta;
        if r > max_radius {
            return None;
        }

        let x = cx + r * theta.cos() - width / 2.0;
        let y = cy + r * theta.sin() - height / 2.0;

        let inside = x >= 0.0 && y >= 0.0 && x + width <= canvas_w && y + height <= canvas_h;
        if inside && !placed.iter().any(|p| p.intersects(x, y, width, height)) {
            return Some((x, y));
        }

        theta += SPIRAL_STEP;
    }
}

fn horizontal_probability(config: &WordCloudConfig) -> f64 {
    if config.prefer_horizontal.is_finite() {
        config.prefer_horizontal.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Lays out precomputed word frequencies.
///
/// At most `config.max_words` words are considered, most frequent first.
/// Words with a zero count are ignored.
///
/// # Example
///
/// ```
/// use chatlens::config::WordCloudConfig;
/// use chatlens::core::words::WordCount;
/// use chatlens::core::wordcloud::layout;
///
/// let freqs = vec![
///     WordCount { word: "pizza".into(), count: 10 },
///     WordCount { word: "tonight".into(), count: 5 },
/// ];
/// let cloud = layout(&freqs, &WordCloudConfig::default());
///
/// assert_eq!(cloud.len(), 2);
/// assert_eq!(cloud.words[0].font_size, 80);
/// assert!(!cloud.words[0].overlaps(&cloud.words[1]));
/// ```
pub fn layout(frequencies: &[WordCount], config: &WordCloudConfig) -> WordCloud {
    let mut cloud = WordCloud::blank(config);

    let mut candidates: Vec<&WordCount> = frequencies.iter().filter(|w| w.count > 0).collect();
    candidates.sort_by_key(|w| Reverse(w.count));
    candidates.truncate(config.max_words);

    let Some(max_count) = candidates.first().map(|w| w.count) else {
        return cloud;
    };

    let canvas = (f64::from(config.width), f64::from(config.height));
    let p_horizontal = horizontal_probability(config);
    let mut rng = StdRng::seed_from_u64(config.seed);

    for entry in &candidates {
        let orientation = if rng.gen_bool(p_horizontal) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut font_size = scaled_font(entry.count, max_count, config);

        loop {
            let (width, height) = box_size(&entry.word, font_size, orientation);
            if let Some((x, y)) = find_position(width, height, canvas, &cloud.words) {
                cloud.words.push(PlacedWord {
                    word: entry.word.clone(),
                    count: entry.count,
                    font_size,
                    orientation,
                    x,
                    y,
                    width,
                    height,
                });
                break;
            }

            let next = font_size.saturating_sub(config.font_step);
            if config.font_step == 0 || next < config.min_font_size.max(1) {
                warn!("No room left for word '{}', skipping", entry.word);
                break;
            }
            font_size = next;
        }
    }

    debug!(
        "Word cloud placed {} of {} words",
        cloud.len(),
        candidates.len()
    );
    cloud
}

/// Builds a word cloud from the kept words of `scope`.
///
/// Uses the same record and token filtering as
/// [`most_common_words`](crate::core::words::most_common_words).
pub fn create_wordcloud(
    records: &[MessageRecord],
    scope: &Scope,
    filter: &WordFilter<'_>,
    config: &WordCloudConfig,
) -> WordCloud {
    layout(&word_frequencies(records, scope, filter), config)
}
