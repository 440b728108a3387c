//! # Laplace distribution
//!
//! The [Laplace distribution](https://en.wikipedia.org/wiki/Laplace_distribution)
//! (or double exponential) is 2 [Exponential](crate::distributions::Exponential)
//! distributions glued back to back at the location `mu`. `sigma` is the scale.
//!

use rand::{Rng, RngCore};
use rand::distr::Open01;

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistrError, check_finite, check_positive},
};

pub const LAPLACE_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

#[derive(Debug, Clone, PartialEq)]
pub struct Laplace {
    mu: f64,
    sigma: f64,
}

impl Laplace {
    /// Create a [Laplace] distribution with location `mu` and scale `sigma`.
    ///
    ///  - `mu` must be finite (No `+-inf` or NaNs)
    ///  - `sigma` must be finite and stricly greater than `0.0`.
    pub fn new(mu: f64, sigma: f64) -> Result<Laplace, DistrError> {
        check_finite("mu", mu)?;
        check_positive("sigma", sigma)?;
        return Ok(Laplace { mu, sigma });
    }

    pub const fn get_mu(&self) -> f64 {
        return self.mu;
    }

    pub const fn get_sigma(&self) -> f64 {
        return self.sigma;
    }
}

impl Distribution for Laplace {
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        return (-(x - self.mu).abs() / self.sigma).exp() / (2.0 * self.sigma);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &LAPLACE_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let z: f64 = (x - self.mu) / self.sigma;
        if z < 0.0 {
            return 0.5 * z.exp();
        }
        return 1.0 - 0.5 * (-z).exp();
    }

    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        // Inverse transform sampling:
        // u in (-1/2, 1/2)   =>   x = mu - sigma * sign(u) * ln(1 - 2|u|)
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            let r: f64 = rng.sample(Open01);
            let u: f64 = r - 0.5;
            let x: f64 = self.mu - self.sigma * u.signum() * (1.0 - 2.0 * u.abs()).ln();
            ret.push(x);
        }
        return Ok(ret);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.mu);
    }

    fn variance(&self) -> Option<f64> {
        return Some(2.0 * self.sigma * self.sigma);
    }
}
