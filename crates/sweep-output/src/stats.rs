//! Descriptive statistics for numeric columns.

use polars::prelude::Column;

use crate::common::numeric_values;

/// Summary statistics of one numeric column, ignoring missing values.
///
/// Undefined statistics (for example the mean of no values or the standard
/// deviation of a single value) are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl DescriptiveStats {
    /// Compute statistics over `values`.
    pub fn from_values(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = values.iter().sum::<f64>() / count as f64;
        let std = if count < 2 {
            f64::NAN
        } else {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        };
        Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    /// Rows of the describe table as `(label, value)` pairs.
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.median),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Linear-interpolated quantile of pre-sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Statistics of a numeric column.
pub fn describe_column(column: &Column) -> DescriptiveStats {
    DescriptiveStats::from_values(&numeric_values(column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn four_values() {
        let stats = DescriptiveStats::from_values(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(stats.count, 4);
        assert_close(stats.mean, 2.5);
        assert_close(stats.std, 1.2909944487358056);
        assert_close(stats.min, 1.0);
        assert_close(stats.q25, 1.75);
        assert_close(stats.median, 2.5);
        assert_close(stats.q75, 3.25);
        assert_close(stats.max, 4.0);
    }

    #[test]
    fn single_value_has_undefined_std() {
        let stats = DescriptiveStats::from_values(&[7.0]);
        assert_eq!(stats.count, 1);
        assert!(stats.std.is_nan());
        assert_close(stats.median, 7.0);
    }

    #[test]
    fn no_values() {
        let stats = DescriptiveStats::from_values(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.max.is_nan());
    }

    #[test]
    fn describe_column_skips_missing() {
        let column = Series::new("x".into(), &[Some(1.0f64), None, Some(3.0)]).into_column();
        let stats = describe_column(&column);
        assert_eq!(stats.count, 2);
        assert_close(stats.mean, 2.0);
    }
}
