//! Binning of samples into a [Histogram].
//!
//! The library does not plot anything, but the binned data is what a plotting
//! sink needs to draw the histogram of the draws next to the density.
//!

use crate::configuration;
use crate::errors::DistrError;

/// A histogram with `bins` bins of equal width.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The `bins + 1` edges of the bins, in ascending order.
    pub edges: Vec<f64>,
    /// The height of each bin: the count of samples or, if it was built with
    /// `density = true`, the count divided by `(total_in_range * bin_width)`.
    pub heights: Vec<f64>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        return self.heights.len();
    }

    /// Returns the width of the bins, or [None] if there are less than 2 edges.
    pub fn bin_width(&self) -> Option<f64> {
        return match self.edges.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        };
    }

    /// Returns the area covered by the bars. It is `1.0` for a density
    /// histogram with at least 1 sample in range, and `0.0` if there are
    /// no bins.
    pub fn area(&self) -> f64 {
        return match self.bin_width() {
            Some(width) => self.heights.iter().sum::<f64>() * width,
            None => 0.0,
        };
    }
}

/// Bins `samples` into a [Histogram].
///
///  - `bins`: the number of bins. Deafult: [configuration::histogram::DEFAULT_BIN_COUNT].
///  - `range`: the `(min, max)` covered by the bins. Samples outside of it
///     are ignored. Deafult: the minimum and maximum of `samples` (if they are
///     equal, the range is widened by `0.5` on each side).
///  - `density`: if true, normalize the heights so the area of the histogram is `1.0`.
///
/// Every bin is half open `[a, b)` except the last one, that also includes
/// its upper edge.
///
/// Returns an error if `samples` is empty or contains non-finite values, if
/// `bins == 0` or if the range is not a finite non-empty interval.
///
/// ```
/// use ProbabilityLaws::histogram::histogram;
///
/// let hist = histogram().samples(&[0.1, 0.2, 0.9]).bins(2).range((0.0, 1.0)).call().unwrap();
/// assert_eq!(hist.heights, vec![2.0, 1.0]);
/// ```
#[bon::builder]
pub fn histogram(
    samples: &[f64],
    #[builder(default = configuration::histogram::DEFAULT_BIN_COUNT)] bins: usize,
    range: Option<(f64, f64)>,
    #[builder(default)] density: bool,
) -> Result<Histogram, DistrError> {
    if samples.is_empty() {
        return Err(DistrError::invalid("samples", "must contain at least 1 value"));
    }
    if let Some(v) = samples.iter().find(|f: &&f64| !f.is_finite()) {
        return Err(DistrError::invalid(
            "samples",
            format!("all values must be finite, found {v}"),
        ));
    }
    if bins == 0 {
        return Err(DistrError::invalid("bins", "must be at least 1"));
    }

    let (low, high): (f64, f64) = match range {
        Some(r) => r,
        None => {
            let min: f64 = samples.iter().copied().fold(f64::INFINITY, f64::min);
            let max: f64 = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if min == max {
                (min - 0.5, max + 0.5)
            } else {
                (min, max)
            }
        }
    };

    #[allow(clippy::nonminimal_bool)]
    if !low.is_finite() || !high.is_finite() || !(low < high) {
        return Err(DistrError::invalid(
            "range",
            format!("must be a finite non-empty interval, got ({low}, {high})"),
        ));
    }

    let width: f64 = (high - low) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i: usize| if i == bins { high } else { low + width * i as f64 })
        .collect();

    let mut heights: Vec<f64> = vec![0.0; bins];
    let mut in_range: usize = 0;
    for &x in samples {
        if x < low || high < x {
            continue;
        }
        let idx: usize = (((x - low) / width) as usize).min(bins - 1);
        heights[idx] += 1.0;
        in_range += 1;
    }

    if density && in_range != 0 {
        let norm: f64 = 1.0 / (in_range as f64 * width);
        heights.iter_mut().for_each(|h: &mut f64| *h *= norm);
    }

    return Ok(Histogram { edges, heights });
}
