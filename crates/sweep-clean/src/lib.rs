//! Dataset cleaning.
//!
//! Cleaning never mutates its input; every operation returns a new frame.
//!
//! 1. [`drop_duplicate_rows`] removes exact full-row duplicates, keeping the
//!    first occurrence.
//! 2. [`coerce_column`] normalizes each column: text columns get
//!    [`MISSING_SENTINEL`](sweep_common::MISSING_SENTINEL) in place of missing
//!    values, numeric columns are coerced to `f64` with unparseable entries
//!    left missing.
//!
//! [`fill_missing_with_sentinel`] is the final pass applied before the last
//! write, filling what the numeric coercion left missing.

mod coerce;
mod dedupe;
mod error;

pub use coerce::{clean_dataset, coerce_column, fill_missing_with_sentinel};
pub use dedupe::drop_duplicate_rows;
pub use error::{CleanError, Result};
