//! # Gamma distribution
//!
//! The [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
//! is a continuous probability distribution.
//!
//! It has 2 parameters:
//!
//! 1. `alpha` or shape
//! 2. `beta` or scale
//!
//! (The rate parametritzation uses `lambda = 1/beta`.)
//!
//! All parameters are stricly positive. If `alpha < 1` the density diverges at `0`.
//!

use rand::RngCore;
use rand_distr::Distribution as _;

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistrError, check_positive},
};

pub const GAMMA_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Gamma {
    /// alpha or shape
    alpha: f64,
    /// beta or scale
    beta: f64,
    /// `1 / (beta^alpha * Gamma(alpha))`
    normalitzation_constant: f64,
}

impl Gamma {
    /// Creates a new [Gamma] distribution with parameters `alpha` and `beta`.
    ///
    /// It will return error under the following conditions:
    ///  - `alpha` is `+-inf` or a NaN
    ///  - `beta` is `+-inf` or a NaN
    ///  - `alpha <= 0.0`
    ///  - `beta <= 0.0`
    ///  - The values for `alpha` and `beta` are too large to model properly
    ///      - This means that a [f64] value is not precise enough.
    ///
    pub fn new(alpha: f64, beta: f64) -> Result<Gamma, DistrError> {
        check_positive("alpha", alpha)?;
        check_positive("beta", beta)?;

        let norm_const: f64 = statrs::function::gamma::gamma(alpha) * beta.powf(alpha);

        if !norm_const.is_finite() || norm_const <= 0.0 {
            // we do not have enough precision to do the computations
            return Err(DistrError::invalid(
                "alpha",
                format!("beta^alpha * Gamma(alpha) is not representable for alpha = {alpha}, beta = {beta}"),
            ));
        }

        return Ok(Gamma {
            alpha,
            beta,
            normalitzation_constant: 1.0 / norm_const,
        });
    }

    /// Get the parameter alpha (shape)
    pub const fn get_alpha(&self) -> f64 {
        return self.alpha;
    }

    /// Get the parameter beta (scale)
    pub const fn get_beta(&self) -> f64 {
        return self.beta;
    }
}

impl Distribution for Gamma {
    fn pdf(&self, x: f64) -> f64 {
        if !(0.0 < x) {
            return 0.0;
        }
        let shape: f64 = x.powf(self.alpha - 1.0) * (-x / self.beta).exp();
        return self.normalitzation_constant * shape;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &GAMMA_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        // regularized lower incomplete gamma function
        return statrs::function::gamma::gamma_lr(self.alpha, x / self.beta);
    }

    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        // Marsaglia and Tsang (with the `alpha < 1` boost) as implemented by rand_distr
        let gamma: rand_distr::Gamma<f64> = rand_distr::Gamma::new(self.alpha, self.beta)
            .map_err(|e| DistrError::invalid("alpha", e.to_string()))?;

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(gamma.sample(rng));
        }
        return Ok(ret);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.alpha * self.beta);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.alpha * self.beta * self.beta);
    }
}
