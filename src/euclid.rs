//! Euclid contains uscefull math functions.
//!
//! Mainly the numerical integration used by the deafult methods of
//! [crate::distribution_trait::Distribution]. Special functions (gamma, erf,
//! binomial coefficients...) come from [statrs].

use crate::{configuration, domain::ContinuousDomain};

/// `1 / sqrt(2 * pi)`
pub const INV_SQRT_2_PI: f64 = 0.398942280401432677939946059934381868475858631164934657665925829670657925899301838501252333907306936430302558862635182685510991954555837242996212730625507;

/// The kind of interval we are integrating over. Infinite intervals need
/// a change of variable before Simpson's rule can be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationType {
    /// `[a, b]`
    Finite,
    /// `(-inf, b]`
    InfiniteToConst,
    /// `[a, inf)`
    ConstToInfinite,
    /// `(-inf, inf)`
    FullInfinite,
}

impl IntegrationType {
    #[must_use]
    pub fn from_bounds(bounds: (f64, f64)) -> IntegrationType {
        match (bounds.0.is_finite(), bounds.1.is_finite()) {
            (true, true) => IntegrationType::Finite,
            (true, false) => IntegrationType::ConstToInfinite,
            (false, true) => IntegrationType::InfiniteToConst,
            (false, false) => IntegrationType::FullInfinite,
        }
    }
}

/// Chooses the step length and the number of steps to integrate
/// in the interval `bounds` (already finite, after any change of variable).
///
/// See [configuration::integration] for the rules.
#[must_use]
pub fn choose_integration_precision_and_steps(bounds: (f64, f64)) -> (f64, usize) {
    let length: f64 = bounds.1 - bounds.0;

    if length <= configuration::integration::SMALL_INTERVAL_LENGTH {
        let num_steps: usize = configuration::integration::SMALL_INTEGRATION_NUM_STEPS;
        return (length / num_steps as f64, num_steps);
    }

    let ideal_steps: f64 = (length / configuration::integration::DEFAULT_INTEGRATION_PRECISION).ceil();
    let num_steps: usize = (ideal_steps as usize).clamp(
        configuration::integration::DEFAULT_INTEGRATION_MINIMUM_STEPS,
        configuration::integration::DEFAULT_INTEGRATION_MAXIMUM_STEPS,
    );

    return (length / num_steps as f64, num_steps);
}

/// Composite [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// over the finite interval `bounds` with `num_steps` panels.
///
/// Each panel of length `h` adds `h/6 * (f(x) + 4*f(x + h/2) + f(x + h))`.
/// If `func` is not finite at an end of the interval (an integrable
/// singularity, like `x^(-2/3)` at `0`), the value is extrapolated from
/// the next 2 evaluations.
pub fn simpson(func: impl Fn(f64) -> f64, bounds: (f64, f64), num_steps: usize) -> f64 {
    let (a, b): (f64, f64) = bounds;
    if !(a < b) || num_steps == 0 {
        return 0.0;
    }

    let step_length: f64 = (b - a) / num_steps as f64;
    let half_step_length: f64 = 0.5 * step_length;
    let step_len_over_6: f64 = step_length / 6.0;

    let mut last_evaluation: f64 = func(a);
    if !last_evaluation.is_finite() {
        let middle: f64 = func(a + half_step_length);
        let end: f64 = func(a + step_length);
        last_evaluation = finite_or_zero(2.0 * middle - end);
    }

    let mut accumulator: f64 = 0.0;
    for i in 0..num_steps {
        let current_position: f64 = a + step_length * i as f64;
        let middle: f64 = finite_or_zero(func(current_position + half_step_length));

        let end_position: f64 = if i + 1 == num_steps {
            b
        } else {
            current_position + step_length
        };

        let mut end: f64 = func(end_position);
        if !end.is_finite() {
            // only expected at `b`
            end = finite_or_zero(2.0 * middle - last_evaluation);
        }

        accumulator += step_len_over_6 * (last_evaluation + 4.0 * middle + end);
        last_evaluation = end;
    }

    return accumulator;
}

#[inline]
fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

/// The power used in [finite_integration] to flatten the ends of the interval.
///
/// With `x = a + h * u^3`, a singularity like `(x - a)^(-p)` with `p < 1`
/// becomes `u^(2 - 3p)`, wich is bounded for every `p <= 2/3`.
pub const ENDPOINT_SUBSTITUTION_POWER: i32 = 3;

/// Integrates `func` over the finite interval `bounds` using [simpson],
/// after removing integrable power-law singularities at both ends.
///
/// The interval is split in 2 halves at its `middle`, and each half is
/// integrated with the change of variable
///
/// ```text
/// integral {a -> m} f(x) dx = integral {0 -> 1} f(a + (m - a) * u^k) * k * (m - a) * u^(k-1) du
/// ```
///
/// (and the same from `b` towards `m`), with `k =` [ENDPOINT_SUBSTITUTION_POWER].
/// Densities like `x^(-2/3)` or `x^(-1/2)` near `0` become bounded.
pub fn finite_integration(func: impl Fn(f64) -> f64, bounds: (f64, f64)) -> f64 {
    let (a, b): (f64, f64) = bounds;
    if !(a < b) {
        return 0.0;
    }

    let k: f64 = ENDPOINT_SUBSTITUTION_POWER as f64;
    let middle: f64 = a + 0.5 * (b - a);
    let mut accumulator: f64 = 0.0;

    // (end of the interval, signed distance from the end to the middle)
    for (end, offset) in [(a, middle - a), (b, middle - b)] {
        let scale: f64 = k * offset.abs();
        let integration_fn = |u: f64| {
            let u_pow: f64 = u.powi(ENDPOINT_SUBSTITUTION_POWER - 1);
            // `inf * 0` at `u = 0` gives NaN, wich is extrapolated by `simpson`
            func(end + offset * u_pow * u) * scale * u_pow
        };

        let half_bounds: (f64, f64) = if offset < 0.0 {
            (middle, end)
        } else {
            (end, middle)
        };
        let (_, num_steps): (f64, usize) = choose_integration_precision_and_steps(half_bounds);
        accumulator += simpson(integration_fn, (0.0, 1.0), num_steps);
    }

    return accumulator;
}

/// Numerically integrates `func` over `bounds`. The bounds may be infinite.
///
/// Finite intervals are integrated with [finite_integration]. To compute
/// integrals over an infinite range, we perform a
/// [change of variable](https://en.wikipedia.org/wiki/Numerical_integration#Integrals_over_infinite_intervals):
///
/// ```text
///     For -infinite to const:
/// integral {-inf -> b} f(x) dx = integral {0 -> 1} f(b - (1 - t)/t)  /  t^2  dt
///
///     For const to infinite:
/// integral {a -> inf} f(x) dx  = integral {0 -> 1} f(a + t/(1 - t))  /  (1 - t)^2  dt
///
///     For -infinite to infinite:
/// integral {-inf -> inf} f(x) dx  = integral {-1 -> 1} f(t/(1 - t^2))  *  (1 + t^2) / (1 - t^2)^2  dt
/// ```
///
/// The singularities of the new integrands (`t = 0` or `t = +-1`) are
/// skipped (evaluated as `0.0`), wich is correct for any function that
/// decays fast enough to be integrable.
///
/// On half-infinite ranges, the unit interval next to the finite bound is
/// integrated apart with [finite_integration], so a density that diverges
/// at the bound (Gamma or Weibull with shape `< 1`) is still integrated
/// accurately.
///
/// Returns `0.0` if `bounds.1 <= bounds.0`.
pub fn numerical_integration(func: impl Fn(f64) -> f64, bounds: (f64, f64)) -> f64 {
    if bounds.0.is_nan() || bounds.1.is_nan() || bounds.1 <= bounds.0 {
        return 0.0;
    }

    match IntegrationType::from_bounds(bounds) {
        IntegrationType::Finite => finite_integration(func, bounds),
        IntegrationType::InfiniteToConst => {
            let split: f64 = bounds.1 - 1.0;
            let near_bound: f64 = finite_integration(&func, (split, bounds.1));

            let integration_fn = |t: f64| 'integration: {
                // t will go from 0.0 to 1.0
                if t.abs() < f64::EPSILON {
                    // too near singularity, skip
                    break 'integration 0.0;
                }
                let inv_t: f64 = 1.0 / t;
                let fn_input: f64 = split - (1.0 - t) * inv_t;
                func(fn_input) * inv_t * inv_t
            };

            let new_bounds: (f64, f64) = (0.0, 1.0);
            let (_, num_steps): (f64, usize) = choose_integration_precision_and_steps(new_bounds);
            near_bound + simpson(integration_fn, new_bounds, num_steps)
        }
        IntegrationType::ConstToInfinite => {
            let split: f64 = bounds.0 + 1.0;
            let near_bound: f64 = finite_integration(&func, (bounds.0, split));

            let integration_fn = |t: f64| 'integration: {
                // t will go from 0.0 to 1.0
                let one_minus: f64 = 1.0 - t;
                if one_minus.abs() < f64::EPSILON {
                    // too near singularity, skip
                    break 'integration 0.0;
                }
                let u: f64 = 1.0 / one_minus;
                let fn_input: f64 = split + t * u;
                func(fn_input) * u * u
            };

            let new_bounds: (f64, f64) = (0.0, 1.0);
            let (_, num_steps): (f64, usize) = choose_integration_precision_and_steps(new_bounds);
            near_bound + simpson(integration_fn, new_bounds, num_steps)
        }
        IntegrationType::FullInfinite => {
            let integration_fn = |t: f64| 'integration: {
                // t will go from -1.0 to 1.0
                let u: f64 = 1.0 - t * t;
                if u.abs() < f64::EPSILON {
                    // too near singularity, skip
                    break 'integration 0.0;
                }
                let v: f64 = 1.0 / u;
                let fn_input: f64 = t * v;
                func(fn_input) * (1.0 + t * t) * v * v
            };

            let new_bounds: (f64, f64) = (-1.0, 1.0);
            let (_, num_steps): (f64, usize) = choose_integration_precision_and_steps(new_bounds);
            simpson(integration_fn, new_bounds, num_steps)
        }
    }
}

/// Integrates `func` over all the points of `domain`.
///
/// If `func` is a pdf, the result should be `1.0`: it can be used to
/// check that a density is properly normalized.
pub fn integrate_over_domain(func: impl Fn(f64) -> f64, domain: &ContinuousDomain) -> f64 {
    return numerical_integration(func, domain.get_bounds());
}
