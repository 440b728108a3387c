//! # Weibull distribution
//!
//! The [Weibull distribution](https://en.wikipedia.org/wiki/Weibull_distribution)
//! is a continuous distribution on the positive reals, usually used to model
//! lifetimes and failure rates.
//!
//! It is parametrized with the shape `gamma` and the parameter `beta`:
//!
//! ```text
//! pdf(x) = (gamma / beta) * x^(gamma - 1) * exp(-x^gamma / beta)      (0 < x)
//! ```
//!
//! Note that `beta` here is `scale^gamma` in the usual `(scale, shape)`
//! parametritzation. If `gamma < 1` the density diverges at `0`.
//!

use rand::RngCore;
use rand_distr::Distribution as _;

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistrError, check_positive},
};

pub const WEIBULL_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Weibull {
    /// shape
    gamma: f64,
    beta: f64,
}

impl Weibull {
    /// Creates a new [Weibull] distribution. Both `gamma` and `beta` must be
    /// finite and stricly positive or an error will be returned.
    pub fn new(gamma: f64, beta: f64) -> Result<Weibull, DistrError> {
        check_positive("gamma", gamma)?;
        check_positive("beta", beta)?;
        return Ok(Weibull { gamma, beta });
    }

    /// Returns the shape `gamma`.
    pub const fn get_gamma(&self) -> f64 {
        return self.gamma;
    }

    /// Returns `beta`.
    pub const fn get_beta(&self) -> f64 {
        return self.beta;
    }

    /// Returns the scale in the usual `(scale, shape)` parametritzation:
    /// `beta^(1/gamma)`.
    pub fn scale(&self) -> f64 {
        return self.beta.powf(1.0 / self.gamma);
    }
}

impl Distribution for Weibull {
    fn pdf(&self, x: f64) -> f64 {
        if !(0.0 < x) {
            return 0.0;
        }
        let x_pow: f64 = x.powf(self.gamma);
        return (self.gamma / self.beta) * (x_pow / x) * (-x_pow / self.beta).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &WEIBULL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        return -(-x.powf(self.gamma) / self.beta).exp_m1();
    }

    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        let weibull: rand_distr::Weibull<f64> = rand_distr::Weibull::new(self.scale(), self.gamma)
            .map_err(|e| DistrError::invalid("gamma", e.to_string()))?;

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(weibull.sample(rng));
        }
        return Ok(ret);
    }

    fn expected_value(&self) -> Option<f64> {
        // scale * Gamma(1 + 1/gamma)
        let g1: f64 = statrs::function::gamma::gamma(1.0 + 1.0 / self.gamma);
        return Some(self.scale() * g1);
    }

    fn variance(&self) -> Option<f64> {
        // scale^2 * (Gamma(1 + 2/gamma) - Gamma(1 + 1/gamma)^2)
        let g1: f64 = statrs::function::gamma::gamma(1.0 + 1.0 / self.gamma);
        let g2: f64 = statrs::function::gamma::gamma(1.0 + 2.0 / self.gamma);
        let scale: f64 = self.scale();
        let variance: f64 = scale * scale * (g2 - g1 * g1);
        if !variance.is_finite() {
            return None;
        }
        return Some(variance);
    }
}
