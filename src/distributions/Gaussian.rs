//! # Gaussian distribution
//!
//! The [Gaussian (or Normal) distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is a very important continuous distribution. It is parametrized by the
//! mean `mu` and the standard deviation `sigma`.
//!
//! Thanks to the [CLT](https://en.wikipedia.org/wiki/Central_limit_theorem),
//! the sum of many independent random variables is aproximately Gaussian.
//!

use core::f64::consts::SQRT_2;

use rand::RngCore;
use rand_distr::{Distribution as _, Normal};

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistrError, check_finite, check_positive},
    euclid,
};

pub const GAUSSIAN_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

#[derive(Debug, Clone, PartialEq)]
pub struct Gaussian {
    mu: f64,
    sigma: f64,
}

impl Gaussian {
    /// Create a [Gaussian] distribution.
    ///
    ///  - The mean `mu` must be finite (No `+-inf` or NaNs)
    ///  - The standard deviation `sigma` must be finite and stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, an error will be returned.
    pub fn new(mu: f64, sigma: f64) -> Result<Gaussian, DistrError> {
        check_finite("mu", mu)?;
        check_positive("sigma", sigma)?;
        return Ok(Gaussian { mu, sigma });
    }

    /// The standard Gaussian: `mu = 0` and `sigma = 1`.
    pub const fn standard() -> Gaussian {
        return Gaussian {
            mu: 0.0,
            sigma: 1.0,
        };
    }

    pub const fn get_mu(&self) -> f64 {
        return self.mu;
    }

    pub const fn get_sigma(&self) -> f64 {
        return self.sigma;
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        return Gaussian::standard();
    }
}

impl Distribution for Gaussian {
    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.0;
        }
        let z: f64 = (x - self.mu) / self.sigma;
        return euclid::INV_SQRT_2_PI / self.sigma * (-0.5 * z * z).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &GAUSSIAN_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let z: f64 = (x - self.mu) / (self.sigma * SQRT_2);
        return 0.5 * (1.0 + statrs::function::erf::erf(z));
    }

    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        let normal: Normal<f64> =
            Normal::new(self.mu, self.sigma).map_err(|e| DistrError::invalid("sigma", e.to_string()))?;

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(normal.sample(rng));
        }
        return Ok(ret);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.mu);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.sigma * self.sigma);
    }
}
