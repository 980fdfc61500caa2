//! Histogram of the first numeric column, rendered to PNG.
//!
//! The chart is drawn as an SVG document and rasterized with resvg, then
//! encoded with the `image` crate.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{ImageBuffer, ImageFormat, RgbaImage};
use polars::prelude::DataFrame;
use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::{Options, Tree};
use tracing::{debug, info};

use sweep_common::{format_numeric, numeric_column_names};

use crate::common::{VISUAL_SUMMARY_FILE, artifact_path, numeric_values};
use crate::error::{OutputError, Result};

/// Number of equal-width bins.
pub const HISTOGRAM_BINS: usize = 10;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const BAR_COLOR: &str = "#1f77b4";
const GRID_COLOR: &str = "#d9d9d9";
const Y_TICKS: usize = 5;

/// Equal-width bin counts over `[lo, hi]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into [`HISTOGRAM_BINS`] bins spanning their range.
    ///
    /// Every bin is half-open except the last, which also holds the maximum.
    /// Non-finite values are skipped. A single distinct value is centered in
    /// a range of width 1, and no values yield empty bins over `[0, 1]`.
    pub fn from_values(values: &[f64]) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let (mut lo, mut hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if finite.is_empty() {
            (lo, hi) = (0.0, 1.0);
        } else if lo == hi {
            (lo, hi) = (lo - 0.5, hi + 0.5);
        }

        let width = (hi - lo) / HISTOGRAM_BINS as f64;
        let mut counts = vec![0; HISTOGRAM_BINS];
        for value in finite {
            let idx = ((value - lo) / width).floor() as usize;
            counts[idx.min(HISTOGRAM_BINS - 1)] += 1;
        }
        Self { lo, hi, counts }
    }

    /// Bin boundaries, one more than the number of bins.
    pub fn edges(&self) -> Vec<f64> {
        let bins = self.counts.len();
        let width = (self.hi - self.lo) / bins as f64;
        (0..=bins).map(|i| self.lo + width * i as f64).collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Writes `visual_summary.png` for the first numeric column of `df`.
///
/// Returns `Ok(None)` when the frame has no numeric column. A histogram left
/// in `output_dir` by an earlier run is removed in that case.
pub fn write_histogram(df: &DataFrame, output_dir: &Path) -> Result<Option<PathBuf>> {
    let path = artifact_path(output_dir, VISUAL_SUMMARY_FILE);
    let Some(name) = numeric_column_names(df).into_iter().next() else {
        debug!("no numeric column, skipping histogram");
        remove_stale(&path)?;
        return Ok(None);
    };
    let column = df.column(&name)?;
    let histogram = Histogram::from_values(&numeric_values(column));
    let svg = render_histogram_svg(&name, &histogram);

    let render_error = |message: String| OutputError::Render {
        path: path.clone(),
        message,
    };
    let image = rasterize(&svg).map_err(render_error)?;
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|e| render_error(e.to_string()))?;

    info!(
        path = %path.display(),
        column = %name,
        values = histogram.total(),
        "wrote histogram"
    );
    Ok(Some(path))
}

fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed previous histogram");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(OutputError::io(path, e)),
    }
}

fn rasterize(svg: &str) -> std::result::Result<RgbaImage, String> {
    let mut options = Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = Tree::from_str(svg, &options).map_err(|e| e.to_string())?;

    let mut pixmap = Pixmap::new(WIDTH, HEIGHT).ok_or("failed to allocate pixmap")?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    ImageBuffer::from_raw(WIDTH, HEIGHT, pixmap.take())
        .ok_or_else(|| "failed to create image buffer".to_string())
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn tick_label(value: f64) -> String {
    format_numeric((value * 100.0).round() / 100.0)
}

/// Smallest whole step that covers `max` in at most [`Y_TICKS`] ticks.
fn count_step(max: usize) -> usize {
    max.max(1).div_ceil(Y_TICKS)
}

/// Renders the histogram as a standalone SVG document.
///
/// Title is `"<column> Distribution"`, the x axis is labelled with the column
/// name and the y axis with `Frequency`.
pub fn render_histogram_svg(column_name: &str, histogram: &Histogram) -> String {
    let name = escape_xml(column_name);
    let plot_w = f64::from(WIDTH) - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = f64::from(HEIGHT) - MARGIN_TOP - MARGIN_BOTTOM;
    let bottom = MARGIN_TOP + plot_h;

    let max_count = histogram.counts.iter().copied().max().unwrap_or(0);
    let step = count_step(max_count);
    let y_max = (step * max_count.max(1).div_ceil(step)) as f64;
    let y_of = |count: f64| bottom - count / y_max * plot_h;

    let mut elements = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
        ),
        format!(r#"<rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#),
    ];

    // Horizontal grid and y ticks
    let mut tick = 0;
    while tick as f64 <= y_max {
        let y = y_of(tick as f64);
        elements.push(format!(
            r#"<line x1="{MARGIN_LEFT}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{GRID_COLOR}" stroke-width="1"/>"#,
            MARGIN_LEFT + plot_w
        ));
        elements.push(format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{tick}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 4.0
        ));
        tick += step;
    }

    // Bars
    let bins = histogram.counts.len().max(1);
    let bar_w = plot_w / bins as f64;
    for (idx, &count) in histogram.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let x = MARGIN_LEFT + bar_w * idx as f64;
        let y = y_of(count as f64);
        elements.push(format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{bar_w:.2}" height="{:.2}" fill="{BAR_COLOR}" stroke="white" stroke-width="1"/>"#,
            bottom - y
        ));
    }

    // Vertical grid and x ticks at bin edges
    for (idx, edge) in histogram.edges().iter().enumerate() {
        let x = MARGIN_LEFT + bar_w * idx as f64;
        elements.push(format!(
            r#"<line x1="{x:.2}" y1="{MARGIN_TOP}" x2="{x:.2}" y2="{bottom}" stroke="{GRID_COLOR}" stroke-width="1" stroke-opacity="0.6"/>"#
        ));
        if idx % 2 == 0 {
            elements.push(format!(
                r#"<text x="{x:.2}" y="{:.2}" font-size="11" text-anchor="middle">{}</text>"#,
                bottom + 16.0,
                tick_label(*edge)
            ));
        }
    }

    let center_x = MARGIN_LEFT + plot_w / 2.0;
    let mid_y = MARGIN_TOP + plot_h / 2.0;
    elements.extend([
        // Axes
        format!(
            r#"<path d="M {MARGIN_LEFT} {MARGIN_TOP} V {bottom} H {:.2}" fill="none" stroke="black" stroke-width="1"/>"#,
            MARGIN_LEFT + plot_w
        ),
        // Labels
        format!(
            r#"<text x="{center_x:.2}" y="30" font-size="16" text-anchor="middle">{name} Distribution</text>"#
        ),
        format!(
            r#"<text x="{center_x:.2}" y="{:.2}" font-size="13" text-anchor="middle">{name}</text>"#,
            f64::from(HEIGHT) - 18.0
        ),
        format!(
            r#"<text x="20" y="{mid_y:.2}" font-size="13" text-anchor="middle" transform="rotate(-90 20 {mid_y:.2})">Frequency</text>"#
        ),
        "</svg>".to_string(),
    ]);

    let mut svg = elements.join("\n");
    svg.push('\n');
    svg
}
