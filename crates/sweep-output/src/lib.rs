//! Artifact generation for datasweep.
//!
//! Each writer takes a cleaned frame and an output directory and produces one
//! file:
//!
//! - [`write_cleaned_data`] → `cleaned_data.csv`
//! - [`write_summary_report`] → `summary_report.txt`
//! - [`write_histogram`] → `visual_summary.png` (only when a numeric column exists)

pub mod common;
mod error;
pub mod report;
pub mod stats;
pub mod visual;
pub mod writer;

pub use common::{CLEANED_DATA_FILE, SUMMARY_REPORT_FILE, VISUAL_SUMMARY_FILE, ensure_output_dir};
pub use error::{OutputError, Result};
pub use report::{render_summary_report, write_summary_report};
pub use stats::{DescriptiveStats, describe_column};
pub use visual::{HISTOGRAM_BINS, Histogram, render_histogram_svg, write_histogram};
pub use writer::write_cleaned_data;
