//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[a, b]` have
//! equal likelyhood of happening.
//!
//! Note that this distribution is different from the discrete uniform law built by
//! [uniform_discrete](crate::pmf_builders::uniform_discrete).
//!

use rand::{Rng, RngCore};

use crate::{distribution_trait::Distribution, domain::ContinuousDomain, errors::DistrError};

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    domain: ContinuousDomain,
    /// The minimum value
    a: f64,
    /// The maximum value
    b: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `a` indicates the minimum value.
    ///  - `b` indicates the maximum value.
    ///  - `a < b` must be fulfilled or an error will be returned.
    ///  - `a` and `b` must both be finite values (no `+-inf` or NaNs)
    pub fn new(a: f64, b: f64) -> Result<Uniform, DistrError> {
        let domain: ContinuousDomain = ContinuousDomain::new_range(a, b)
            .map_err(|_| DistrError::invalid("b", format!("need finite a < b, got a = {a}, b = {b}")))?;

        return Ok(Uniform { domain, a, b });
    }

    /// Return `a` (minimum value).
    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    /// Return `b` (maximum value).
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }
}

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if !self.domain.contains(x) {
            return 0.0;
        }
        return 1.0 / (self.b - self.a);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }

        if x < self.a {
            return 0.0;
        }

        if self.b < x {
            return 1.0;
        }

        return (x - self.a) / (self.b - self.a);
    }

    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        let range: f64 = self.b - self.a;
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(self.a + rng.random::<f64>() * range);
        }
        return Ok(ret);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.5 * (self.a + self.b));
    }

    fn variance(&self) -> Option<f64> {
        let range: f64 = self.b - self.a;
        return Some(range * range / 12.0);
    }
}
