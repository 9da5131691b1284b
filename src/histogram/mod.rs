//! Histogram of TMRCA values with fixed-width buckets, and its exports.
//!
//! A [Histogram] can be written as comma-separated (CSV) or tab-separated
//! (TXT) two-column data, or plotted to a PNG image with gnuplot
//! (see [Histogram::write_png]).

mod gnuplot;

pub use gnuplot::PlotConfig;

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Maximal number of buckets of a histogram, including empty ones
pub const MAX_BINS: usize = 1_000_000;

/// Errors when building or exporting a [Histogram]
#[derive(Error, Debug)]
pub enum HistogramError {
    /// No values to build buckets from
    #[error("cannot build histogram from empty input")]
    EmptyInput,

    /// Bucket width must be positive
    #[error("invalid histogram step {0}, must be positive")]
    InvalidStep(i64),

    /// Value is not finite or its bucket does not fit into an `i64`
    #[error("value {0} cannot be put into a histogram bucket")]
    ValueOutOfRange(f64),

    /// Range between smallest and largest bucket needs too many buckets
    #[error("histogram range {min}..={max} needs more than {} buckets", MAX_BINS)]
    RangeTooWide { min: i64, max: i64 },

    /// Writing an export failed
    #[error("{0}")]
    Io(#[from] io::Error),

    /// gnuplot could not be launched or failed
    #[error("could not run Gnuplot, maybe it is not installed: {0}")]
    Gnuplot(String),
}

/// Histogram with buckets of equal width.
///
/// Buckets cover the range from the smallest to the largest rounded value
/// without gaps; empty buckets have count `0`.
///
/// # Example
/// ```
/// use phylogrowth::histogram::Histogram;
///
/// let hist = Histogram::new(&[95.0, 105.0, 210.0, 420.0], 100)?;
/// assert_eq!(hist.bins(), &[(100, 2), (200, 1), (300, 0), (400, 1)]);
/// assert_eq!(hist.to_csv(), "100,2\r\n200,1\r\n300,0\r\n400,1\r\n");
/// # Ok::<(), phylogrowth::histogram::HistogramError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    step: i64,
    bins: Vec<(i64, usize)>,
}

impl Histogram {
    /// Builds a histogram of `values` with bucket width `step`.
    ///
    /// Each value is rounded half up to the nearest multiple of `step`,
    /// i.e. `floor(v / step + 0.5) * step`.
    ///
    /// # Errors
    /// * [HistogramError::EmptyInput] - if `values` is empty
    /// * [HistogramError::InvalidStep] - if `step` is not positive
    /// * [HistogramError::ValueOutOfRange] - if a value is not finite or
    ///   its bucket does not fit into an `i64`
    /// * [HistogramError::RangeTooWide] - if more than [MAX_BINS] buckets
    ///   would be needed
    pub fn new(values: &[f64], step: i64) -> Result<Self, HistogramError> {
        if step <= 0 {
            return Err(HistogramError::InvalidStep(step));
        }
        if values.is_empty() {
            return Err(HistogramError::EmptyInput);
        }

        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &value in values {
            let bucket = bucket_of(value, step).ok_or(HistogramError::ValueOutOfRange(value))?;
            *counts.entry(bucket).or_default() += 1;
        }

        // Non-empty input, so both ends exist
        let (Some((&min, _)), Some((&max, _))) = (counts.first_key_value(), counts.last_key_value())
        else {
            return Err(HistogramError::EmptyInput);
        };

        let num_bins = max
            .checked_sub(min)
            .and_then(|span| usize::try_from(span / step).ok())
            .and_then(|n| n.checked_add(1));
        if num_bins.is_none_or(|n| n > MAX_BINS) {
            return Err(HistogramError::RangeTooWide { min, max });
        }

        let bins = (min..=max)
            .step_by(step as usize)
            .map(|bucket| (bucket, counts.get(&bucket).copied().unwrap_or(0)))
            .collect();

        log::debug!("built histogram from {} values, range {min}..={max}", values.len());
        Ok(Self { step, bins })
    }

    /// Returns the bucket width.
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Returns `(bucket, count)` pairs in ascending bucket order.
    pub fn bins(&self) -> &[(i64, usize)] {
        &self.bins
    }

    /// Returns the histogram as comma-separated lines `x,y`.
    pub fn to_csv(&self) -> String {
        self.join_bins(",")
    }

    /// Returns the histogram as tab-separated lines `x<TAB>y`.
    pub fn to_txt(&self) -> String {
        self.join_bins("\t")
    }

    /// Writes [Histogram::to_csv] to `path`.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), HistogramError> {
        log::debug!("writing CSV histogram to {}", path.as_ref().display());
        fs::write(path, self.to_csv())?;
        Ok(())
    }

    /// Writes [Histogram::to_txt] to `path`.
    pub fn write_txt<P: AsRef<Path>>(&self, path: P) -> Result<(), HistogramError> {
        log::debug!("writing TXT histogram to {}", path.as_ref().display());
        fs::write(path, self.to_txt())?;
        Ok(())
    }

    fn join_bins(&self, separator: &str) -> String {
        self.bins
            .iter()
            .map(|(bucket, count)| format!("{bucket}{separator}{count}\r\n"))
            .collect()
    }
}

/// Rounds `value` half up to a multiple of `step`, `None` if the result
/// is not representable.
fn bucket_of(value: f64, step: i64) -> Option<i64> {
    let multiple = (value / step as f64 + 0.5).floor();
    // Exclusive upper bound, i64::MAX as f64 rounds up to 2^63
    if !(i64::MIN as f64..i64::MAX as f64).contains(&multiple) {
        return None;
    }
    (multiple as i64).checked_mul(step)
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bucket, count) in &self.bins {
            write!(f, "{bucket}, {count}\r\n")?;
        }
        Ok(())
    }
}
