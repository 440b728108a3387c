//! This script contains the interface used to comunicate with the continuous distributions.

use log::debug;
use rand::{Rng, RngCore};

use crate::configuration;
use crate::domain::ContinuousDomain;
use crate::errors::{DistrError, check_positive};
use crate::euclid;

/// The trait for any continuous distribution.
///
/// The only requiered methods are [Distribution::pdf] and [Distribution::get_domain].
/// Everything else has a deafult implementation based on numerical integration
/// or rejection sampling. Implementing the other methods is recommended if there
/// is an analytical solution for them.
///
/// None of the provided methods are guaranteed to work if the implemented [Distribution::pdf]
/// is NOT a [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued (an integrable singularity at the
///     bound of the domain is tolerated)
///  - The function must have a total area of 1 under the curve.
///     (Can be checked with [Distribution::total_probability])
pub trait Distribution {
    //Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    /// Must return exactly `0.0` if `x` is outside the domain (including
    /// the points of the domain where the formula of the density is not valid).
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates the
    /// lower and upper bound of the distribution. The returned domain should
    /// be constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    // Provided methods:
    // Manual implementation for a specific distribution is recommended.

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function).
    ///
    /// Returns `0.0` below the domain, `1.0` above it and NaN if `x` is NaN.
    ///
    /// Note that the deafult implemetation requieres numerical integration and
    /// may be expensive.
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }

        let bounds: (f64, f64) = self.get_domain().get_bounds();
        if x <= bounds.0 {
            return 0.0;
        }
        if bounds.1 <= x {
            return 1.0;
        }

        let area: f64 = euclid::numerical_integration(|t: f64| self.pdf(t), (bounds.0, x));
        return area.clamp(0.0, 1.0);
    }

    /// Draws a single sample of the distribution.
    ///
    /// The method [Distribution::sample_multiple] is more effitient for
    /// multiple sampling.
    fn sample(&self) -> Result<f64, DistrError> {
        let mut aux: Vec<f64> = self.sample_multiple(1)?;
        return aux
            .pop()
            .ok_or_else(|| DistrError::invalid("n", "the sampler returned no values"));
    }

    /// Draws `n` independent samples of the distribution using the thread
    /// local random number generator.
    ///
    /// See [Distribution::sample_multiple_with].
    fn sample_multiple(&self, n: usize) -> Result<Vec<f64>, DistrError> {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_multiple_with(n, &mut rng);
    }

    /// Draws `n` independent samples of the distribution using `rng`.
    ///
    /// The deafult method is [rejection sampling](https://en.wikipedia.org/wiki/Rejection_sampling)
    /// over the domain (or over an effective range if the domain is infinite).
    /// The height of the envelope is found by scanning the pdf over a grid.
    ///
    /// Returns an error if the pdf is unbounded (or negligible) on the scanned
    /// range. Distributions with a singular density must override this method.
    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        let range: (f64, f64) = effective_range(self)?;
        let pdf_max: f64 = estimate_pdf_max(self, range)?;

        debug!(
            "Rejection sampling {n} values in [{}, {}] with envelope height {pdf_max}",
            range.0, range.1
        );

        return self.rejection_sample_range(n, pdf_max, range, rng);
    }

    // Statistics

    /// Returns the [raw moment](https://en.wikipedia.org/wiki/Moment_(mathematics))
    /// of the given `order`: `E[X^order]`.
    ///
    /// Returns an error if `order < 1`.
    ///
    /// The deafult implementation integrates `x^order * pdf(x)` over the
    /// domain numerically.
    fn moment(&self, order: i32) -> Result<f64, DistrError> {
        if order < 1 {
            return Err(DistrError::invalid(
                "order",
                format!("the order of a moment must be >= 1, got {order}"),
            ));
        }

        let integration_fn = |x: f64| x.powi(order) * self.pdf(x);
        let moment: f64 = euclid::integrate_over_domain(integration_fn, self.get_domain());

        return Ok(moment);
    }

    /// Returns the [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// of the distribution if it exists.
    fn expected_value(&self) -> Option<f64> {
        return self.moment(1).ok().filter(|m: &f64| m.is_finite());
    }

    /// Returns the [variance](https://en.wikipedia.org/wiki/Variance) of
    /// the distribution if it exists.
    fn variance(&self) -> Option<f64> {
        let mean: f64 = self.expected_value()?;
        let second: f64 = self.moment(2).ok()?;
        let variance: f64 = second - mean * mean;
        if !variance.is_finite() {
            return None;
        }
        return Some(variance.max(0.0));
    }

    /// Returns the area under the pdf over the whole domain.
    ///
    /// For a valid pdf it should be `1.0` (up to the precision of the
    /// numerical integration).
    fn total_probability(&self) -> f64 {
        return euclid::integrate_over_domain(|x: f64| self.pdf(x), self.get_domain());
    }

    // Other provided methods:
    // (methods that don't need to be replaced and should be here)

    /// Sample the distribution with the [rejection sampling](https://en.wikipedia.org/wiki/Rejection_sampling)
    /// method.
    ///
    /// Important: [Distribution::rejection_sample] assumes a valid [Distribution::pdf] and
    /// a valid domain in [Distribution::get_domain]. Also the **domain must be finite**.
    /// If it is not, an error is returned: use [Distribution::rejection_sample_range].
    ///
    /// Note: `pdf_max` does **not** need to be the real global maximum, it just needs
    /// to be equal or greater to it. Note that using a greater `pdf_max` value will incur
    /// a performance penalty.
    fn rejection_sample(
        &self,
        n: usize,
        pdf_max: f64,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        let domain: &ContinuousDomain = self.get_domain();
        if !domain.is_bounded() {
            return Err(DistrError::invalid(
                "domain",
                "rejection sampling needs a finite domain, use `rejection_sample_range`",
            ));
        }

        return self.rejection_sample_range(n, pdf_max, domain.get_bounds(), rng);
    }

    /// Same as [Distribution::rejection_sample] but only in the selected range.
    ///
    /// This can be usefull for distributions with a stricly infinite domain but that
    /// virtually all their mass is concentrated in a smaller region (`range`).
    ///
    /// For example, we could sample from the standard normal distribution with only
    /// the range `(-8.0, 8.0)` since the density left out of this range is negligible.
    ///
    /// Gives up (returning an error) if a single sample is rejected more than
    /// [configuration::sampling::MAX_REJECTION_ATTEMPTS] times.
    fn rejection_sample_range(
        &self,
        n: usize,
        pdf_max: f64,
        range: (f64, f64),
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        check_positive("pdf_max", pdf_max)?;
        if !range.0.is_finite() || !range.1.is_finite() || range.1 <= range.0 {
            return Err(DistrError::invalid(
                "range",
                format!("must be a finite non-empty interval, got {range:?}"),
            ));
        }

        let domain: &ContinuousDomain = self.get_domain();
        let pdf_checked = |x: f64| {
            if domain.contains(x) {
                self.pdf(x)
            } else {
                0.0
            }
        };

        let bound_range: f64 = range.1 - range.0;
        let max_attempts: usize = configuration::sampling::MAX_REJECTION_ATTEMPTS;

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            let mut accepted: Option<f64> = None;
            for _ in 0..max_attempts {
                let x: f64 = range.0 + rng.random::<f64>() * bound_range;
                let y: f64 = rng.random::<f64>();
                if y * pdf_max < pdf_checked(x) {
                    accepted = Some(x);
                    break;
                }
            }

            match accepted {
                Some(x) => ret.push(x),
                None => {
                    return Err(DistrError::invalid(
                        "pdf",
                        format!("no proposal was accepted after {max_attempts} attempts"),
                    ));
                }
            }
        }

        return Ok(ret);
    }
}

/// Finds a finite range that contains virtually all the mass of `distribution`.
///
/// Finite bounds are kept. For each infinite side we start at the finite bound
/// (or at `0.0` if both are infinite) and keep doubling the distance. The range
/// ends at the next doubling after the furthest point where the density is not
/// negligible.
fn effective_range<D: Distribution + ?Sized>(distribution: &D) -> Result<(f64, f64), DistrError> {
    let bounds: (f64, f64) = distribution.get_domain().get_bounds();
    if bounds.0.is_finite() && bounds.1.is_finite() {
        return Ok(bounds);
    }

    let anchor: f64 = if bounds.0.is_finite() {
        bounds.0
    } else if bounds.1.is_finite() {
        bounds.1
    } else {
        0.0
    };

    let negligible: f64 = configuration::sampling::NEGLIGIBLE_DENSITY;
    let furthest_relevant = |direction: f64| -> Option<f64> {
        let mut distance: f64 = 1.0 / 16.0;
        let mut furthest: Option<f64> = None;
        for _ in 0..configuration::sampling::MAX_RANGE_DOUBLINGS {
            if negligible <= distribution.pdf(anchor + direction * distance) {
                furthest = Some(distance);
            }
            distance *= 2.0;
        }
        return furthest.map(|d: f64| anchor + direction * 2.0 * d);
    };

    let low: f64 = if bounds.0.is_finite() {
        bounds.0
    } else {
        furthest_relevant(-1.0).unwrap_or(anchor)
    };
    let high: f64 = if bounds.1.is_finite() {
        bounds.1
    } else {
        furthest_relevant(1.0).unwrap_or(anchor)
    };

    if !(low < high) {
        return Err(DistrError::invalid(
            "pdf",
            "the density is negligible everywhere around its domain bounds",
        ));
    }

    return Ok((low, high));
}

/// Scans the pdf over a grid in `range` and returns the maximum found times
/// [configuration::sampling::ENVELOPE_SAFETY_FACTOR].
fn estimate_pdf_max<D: Distribution + ?Sized>(
    distribution: &D,
    range: (f64, f64),
) -> Result<f64, DistrError> {
    let num_points: usize = configuration::sampling::PDF_MAX_GRID_POINTS;
    let step: f64 = (range.1 - range.0) / (num_points - 1) as f64;

    let mut pdf_max: f64 = 0.0;
    for i in 0..num_points {
        let value: f64 = distribution.pdf(range.0 + step * i as f64);
        if !value.is_finite() {
            return Err(DistrError::invalid(
                "pdf",
                "the density is unbounded, rejection sampling is not possible",
            ));
        }
        pdf_max = pdf_max.max(value);
    }

    if pdf_max <= 0.0 {
        return Err(DistrError::invalid("pdf", "the density is 0 on the whole range"));
    }

    return Ok(pdf_max * configuration::sampling::ENVELOPE_SAFETY_FACTOR);
}
