//! # PMF builders
//!
//! Functions that build a [DiscreteLaw] for the common discrete families from
//! their closed form [pmf](https://en.wikipedia.org/wiki/Probability_mass_function).
//!
//! Every builder evaluates the formula over a finite support and then
//! **renormalizes** the weights so they sum to `1.0`. For families with an
//! infinite support ([poisson], [geometric], [negative_binomial]) the caller
//! chooses the truncation length `truncation_n`.
//!
//! [binomial] and [hypergeometric] stop one value short of the natural upper
//! bound of the support (`n` and `min(M, K)` are left out). This is kept for
//! compatibility with the tables these builders historically produced.
//! Use [binomial_complete] and [hypergeometric_complete] for the full support.
//!
//! Combinatorial terms are evaluated in log space to avoid overflow.
//!

use log::{debug, warn};
use statrs::function::factorial::ln_factorial;

use crate::configuration;
use crate::discrete_law::DiscreteLaw;
use crate::errors::{DistrError, check_open_probability, check_positive};

/// Uniform law over the integers `low..=high`. Each weight is exactly
/// `1 / (high - low + 1)`.
///
/// Returns an error if `high < low`.
pub fn uniform_discrete(low: i64, high: i64) -> Result<DiscreteLaw, DistrError> {
    if high < low {
        return Err(DistrError::invalid(
            "high",
            format!("must be >= low ({low}), got {high}"),
        ));
    }

    let support: Vec<i64> = (low..=high).collect();
    let weight: Vec<f64> = vec![1.0; support.len()];
    debug!("Building Uniform Discrete PMF with {} points", support.len());

    return DiscreteLaw::new(support, weight);
}

/// [Hypergeometric](https://en.wikipedia.org/wiki/Hypergeometric_distribution) law:
/// number of successes in `draws` (`K`) draws without replacement from a
/// population of `population_size` (`N`) with `success_states` (`M`) successes.
///
/// `P(X = x) = C(M, x) * C(N - M, K - x) / C(N, K)` over `x` in `0..min(M, K)`
/// (`min(M, K)` itself excluded, see the module docs), renormalized.
///
/// Returns an error if any count is negative, if `M > N` or `K > N`, or if
/// `min(M, K) == 0` (the support would be empty).
pub fn hypergeometric(
    population_size: i64,
    success_states: i64,
    draws: i64,
) -> Result<DiscreteLaw, DistrError> {
    check_hypergeometric(population_size, success_states, draws)?;

    let upper: i64 = success_states.min(draws);
    if upper == 0 {
        return Err(DistrError::invalid(
            "success_states",
            "min(success_states, draws) must be >= 1 for a non-empty support",
        ));
    }

    let support: Vec<i64> = (0..upper).collect();
    let weight: Vec<f64> = support
        .iter()
        .map(|&x| hypergeometric_weight(population_size, success_states, draws, x))
        .collect();

    return build("Hypergeometric", support, weight);
}

/// Same as [hypergeometric] but over the complete support
/// `max(0, K - (N - M))..=min(M, K)`.
pub fn hypergeometric_complete(
    population_size: i64,
    success_states: i64,
    draws: i64,
) -> Result<DiscreteLaw, DistrError> {
    check_hypergeometric(population_size, success_states, draws)?;

    let lower: i64 = (draws - (population_size - success_states)).max(0);
    let upper: i64 = success_states.min(draws);

    let support: Vec<i64> = (lower..=upper).collect();
    let weight: Vec<f64> = support
        .iter()
        .map(|&x| hypergeometric_weight(population_size, success_states, draws, x))
        .collect();

    return build("Hypergeometric", support, weight);
}

/// [Binomial](https://en.wikipedia.org/wiki/Binomial_distribution) law with
/// `trials` (`n`) trials and success probability `p`.
///
/// `P(X = x) = C(n, x) * p^x * (1 - p)^(n - x)` over `x` in `0..n`
/// (`n` itself excluded, see the module docs), renormalized.
///
/// Returns an error if `p` is not in `(0, 1)` or if `trials < 1`.
pub fn binomial(trials: i64, p: f64) -> Result<DiscreteLaw, DistrError> {
    check_open_probability("p", p)?;
    check_count("trials", trials, 1)?;

    let support: Vec<i64> = (0..trials).collect();
    let weight: Vec<f64> = support.iter().map(|&x| binomial_weight(trials, p, x)).collect();

    return build("Binomial", support, weight);
}

/// Same as [binomial] but over the complete support `0..=n`.
///
/// Returns an error if `p` is not in `(0, 1)` or if `trials < 0`.
pub fn binomial_complete(trials: i64, p: f64) -> Result<DiscreteLaw, DistrError> {
    check_open_probability("p", p)?;
    check_count("trials", trials, 0)?;

    let support: Vec<i64> = (0..=trials).collect();
    let weight: Vec<f64> = support.iter().map(|&x| binomial_weight(trials, p, x)).collect();

    return build("Binomial", support, weight);
}

/// [Poisson](https://en.wikipedia.org/wiki/Poisson_distribution) law with
/// rate `lambda` truncated to the support `0..truncation_n`.
///
/// `P(X = x) = exp(-lambda) * lambda^x / x!`, renormalized.
///
/// Returns an error if `lambda` is not finite and positive or if `truncation_n < 1`.
pub fn poisson(lambda: f64, truncation_n: i64) -> Result<DiscreteLaw, DistrError> {
    check_positive("lambda", lambda)?;
    check_count("truncation_n", truncation_n, 1)?;

    let ln_lambda: f64 = lambda.ln();
    let support: Vec<i64> = (0..truncation_n).collect();
    let weight: Vec<f64> = support
        .iter()
        .map(|&x| (x as f64 * ln_lambda - lambda - ln_factorial(x as u64)).exp())
        .collect();

    return build("Poisson", support, weight);
}

/// [Geometric](https://en.wikipedia.org/wiki/Geometric_distribution) law
/// (number of trials until the first success) truncated to `1..=truncation_n`.
///
/// `P(X = x) = p * (1 - p)^(x - 1)`, renormalized.
///
/// Returns an error if `p` is not in `(0, 1)` or if `truncation_n < 1`.
pub fn geometric(p: f64, truncation_n: i64) -> Result<DiscreteLaw, DistrError> {
    check_open_probability("p", p)?;
    check_count("truncation_n", truncation_n, 1)?;

    let ln_q: f64 = (-p).ln_1p();
    let support: Vec<i64> = (1..=truncation_n).collect();
    let weight: Vec<f64> = support
        .iter()
        .map(|&x| p * ((x - 1) as f64 * ln_q).exp())
        .collect();

    return build("Geometric", support, weight);
}

/// [Negative binomial](https://en.wikipedia.org/wiki/Negative_binomial_distribution)
/// law (number of failures before the `successes`-th success, `r`) truncated
/// to `0..truncation_n`.
///
/// `P(X = x) = C(r + x - 1, r - 1) * p^r * (1 - p)^x`, renormalized.
///
/// Returns an error if `p` is not in `(0, 1)`, `successes < 1` or `truncation_n < 1`.
pub fn negative_binomial(
    successes: i64,
    p: f64,
    truncation_n: i64,
) -> Result<DiscreteLaw, DistrError> {
    check_open_probability("p", p)?;
    check_count("successes", successes, 1)?;
    check_count("truncation_n", truncation_n, 1)?;

    let r: i64 = successes;
    let ln_p: f64 = p.ln();
    let ln_q: f64 = (-p).ln_1p();
    let support: Vec<i64> = (0..truncation_n).collect();
    let weight: Vec<f64> = support
        .iter()
        .map(|&x| (ln_choose(r + x - 1, r - 1) + r as f64 * ln_p + x as f64 * ln_q).exp())
        .collect();

    return build("Negative Binomial", support, weight);
}

/// Returns `P(X = k)` for the law, or `0.0` if `k` is not in its support.
///
/// Same as [DiscreteLaw::point_mass].
pub fn point_mass(law: &DiscreteLaw, k: i64) -> f64 {
    return law.point_mass(k);
}

fn build(family: &'static str, support: Vec<i64>, weight: Vec<f64>) -> Result<DiscreteLaw, DistrError> {
    let raw_mass: f64 = weight.iter().sum();
    debug!(
        "Building {family} PMF with {} points, raw mass before renormalization: {raw_mass}",
        support.len()
    );

    if configuration::discrete::MASS_LOSS_WARNING < (raw_mass - 1.0).abs() {
        warn!("{family} PMF raw mass is {raw_mass}, the truncated support leaves out a noticeable part of the law");
    }

    return DiscreteLaw::new(support, weight);
}

/// `ln(C(n, k))` for `0 <= k <= n`. `-inf` (so a weight of `0.0`) otherwise.
fn ln_choose(n: i64, k: i64) -> f64 {
    if k < 0 || n < k {
        return f64::NEG_INFINITY;
    }
    return ln_factorial(n as u64) - ln_factorial(k as u64) - ln_factorial((n - k) as u64);
}

fn binomial_weight(n: i64, p: f64, x: i64) -> f64 {
    let ln_w: f64 = ln_choose(n, x) + x as f64 * p.ln() + (n - x) as f64 * (-p).ln_1p();
    return ln_w.exp();
}

fn hypergeometric_weight(population_size: i64, success_states: i64, draws: i64, x: i64) -> f64 {
    let ln_w: f64 = ln_choose(success_states, x)
        + ln_choose(population_size - success_states, draws - x)
        - ln_choose(population_size, draws);
    return ln_w.exp();
}

fn check_hypergeometric(
    population_size: i64,
    success_states: i64,
    draws: i64,
) -> Result<(), DistrError> {
    check_count("population_size", population_size, 0)?;
    check_count("success_states", success_states, 0)?;
    check_count("draws", draws, 0)?;
    if population_size < success_states {
        return Err(DistrError::invalid(
            "success_states",
            format!("must be <= population_size ({population_size}), got {success_states}"),
        ));
    }
    if population_size < draws {
        return Err(DistrError::invalid(
            "draws",
            format!("must be <= population_size ({population_size}), got {draws}"),
        ));
    }
    return Ok(());
}

fn check_count(name: &'static str, value: i64, minimum: i64) -> Result<(), DistrError> {
    if value < minimum {
        return Err(DistrError::invalid(name, format!("must be >= {minimum}, got {value}")));
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ln_choose_values() {
        assert!((ln_choose(5, 2).exp() - 10.0).abs() < 1e-9);
        assert!((ln_choose(7, 0).exp() - 1.0).abs() < 1e-12);
        assert_eq!(ln_choose(3, 4), f64::NEG_INFINITY);
        assert_eq!(ln_choose(3, -1), f64::NEG_INFINITY);
    }

    #[test]
    fn counts() {
        assert!(check_count("n", 0, 0).is_ok());
        assert!(check_count("n", 0, 1).is_err());
        assert!(check_count("n", -3, 0).is_err());
    }
}
