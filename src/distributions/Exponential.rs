//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! A poission event does not have memory. Mathematically, if `e` follows
//! an Exponential distribution and `t_1 < t_2`
//! `P(t_1 < e) = P(t_1 < e | t_2 < e)`
//!
//! Here the Exponential distribution is parametrized by the scale `beta`
//! (the mean time between events). The rate is `lambda = 1/beta`.

use rand::RngCore;
use rand_distr::{Distribution as _, Exp};

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::{DistrError, check_positive},
};

pub const EXPONENTIAL_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// An [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    beta: f64,
}

impl Exponential {
    /// Creates a new [Exponential] distribution. It is requiered that `0.0 < beta`
    /// (and finite) or an error will be returned.
    pub fn new(beta: f64) -> Result<Exponential, DistrError> {
        check_positive("beta", beta)?;
        return Ok(Exponential { beta });
    }

    /// Returns the scale `beta`.
    pub const fn get_beta(&self) -> f64 {
        return self.beta;
    }
}

impl Distribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if !(0.0 < x) {
            return 0.0;
        }
        return (-x / self.beta).exp() / self.beta;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &EXPONENTIAL_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        return -(-x / self.beta).exp_m1();
    }

    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        let exp: Exp<f64> =
            Exp::new(1.0 / self.beta).map_err(|e| DistrError::invalid("beta", e.to_string()))?;

        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(exp.sample(rng));
        }
        return Ok(ret);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.beta);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.beta * self.beta);
    }
}
