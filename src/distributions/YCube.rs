//! # YCube (power) distribution
//!
//! If `U` follows a [Uniform](crate::distributions::Uniform) distribution in `[0, 2]`,
//! then `Y = U^3` takes values in `[0, 8]` and has the density
//!
//! ```text
//! pdf(y) = (1/6) * y^(-2/3)        (0 <= y <= b)
//! ```
//!
//! The density diverges as `y -> 0`: evaluating it at `0.0` returns `+inf`.
//! This is a known property of the distribution, not an error, and the
//! numerical methods of the library tolerate it.
//!
//! The formula only integrates to `1` when `b = 8` ([YCube::standard]).
//! Other upper bounds are accepted (the caller is responsible for the
//! normalitzation of the density). The cdf and the samplers always follow the
//! normalized law on `[0, b]`, with `cdf(y) = (y/b)^(1/3)`.
//!

use log::warn;
use rand::{Rng, RngCore};

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistrError, check_positive},
};

/// The upper bound that makes the density integrate to `1`.
pub const YCUBE_STANDARD_UPPER_BOUND: f64 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct YCube {
    domain: ContinuousDomain,
    /// upper bound of the domain
    b: f64,
}

impl YCube {
    /// Creates a [YCube] distribution on `[0, b]`.
    ///
    /// `b` must be finite and stricly positive. A warning is logged if the
    /// density does not integrate to `1` on `[0, b]` (any `b != 8`).
    pub fn new(b: f64) -> Result<YCube, DistrError> {
        check_positive("b", b)?;

        let mass: f64 = total_mass(b);
        if 1.0e-12 < (mass - 1.0).abs() {
            warn!("YCube density integrates to {mass} on [0, {b}] (only b = 8 is normalized)");
        }

        return Ok(YCube {
            domain: ContinuousDomain::Range(0.0, b),
            b,
        });
    }

    /// The law of `U^3` with `U` uniform in `[0, 2]`: `b = 8`.
    pub const fn standard() -> YCube {
        return YCube {
            domain: ContinuousDomain::Range(0.0, YCUBE_STANDARD_UPPER_BOUND),
            b: YCUBE_STANDARD_UPPER_BOUND,
        };
    }

    /// Returns the upper bound `b`.
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }

    /// Returns the exact area under the density on `[0, b]`: `b^(1/3) / 2`.
    pub fn total_mass(&self) -> f64 {
        return total_mass(self.b);
    }
}

fn total_mass(b: f64) -> f64 {
    return 0.5 * b.cbrt();
}

impl Distribution for YCube {
    fn pdf(&self, x: f64) -> f64 {
        if !self.domain.contains(x) {
            return 0.0;
        }
        // `x = 0` gives `+inf`
        return (1.0 / 6.0) * x.powf(-2.0 / 3.0);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if self.b <= x {
            return 1.0;
        }
        // normalized: equal to `total_mass(x)` when `b = 8`
        return (x / self.b).cbrt();
    }

    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        // Inverse transform sampling of the normalized density:
        // cdf(x) = (x/b)^(1/3)   =>   x = b * u^3
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            let u: f64 = rng.random::<f64>();
            ret.push(self.b * u * u * u);
        }
        return Ok(ret);
    }
}
