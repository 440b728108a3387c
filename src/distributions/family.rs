//! # Continuous families
//!
//! [ContinuousFamily] is a closed set of all the continuous distributions of
//! the library. It implements [Distribution] by matching on the variant, wich
//! allows to store different families in the same collection (see
//! [crate::gallery]) without dynamic dispatch.
//!

use rand::RngCore;

use crate::{
    distribution_trait::Distribution,
    distributions::{
        Exponential::Exponential, Gamma::Gamma, Gaussian::Gaussian, Laplace::Laplace,
        Uniform::Uniform, Weibull::Weibull, YCube::YCube,
    },
    domain::ContinuousDomain,
    errors::DistrError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ContinuousFamily {
    Uniform(Uniform),
    Exponential(Exponential),
    Gamma(Gamma),
    Weibull(Weibull),
    Gaussian(Gaussian),
    Laplace(Laplace),
    YCube(YCube),
}

impl ContinuousFamily {
    /// The name of the family.
    pub const fn name(&self) -> &'static str {
        match self {
            ContinuousFamily::Uniform(_) => "Uniform Continuous",
            ContinuousFamily::Exponential(_) => "Exponential",
            ContinuousFamily::Gamma(_) => "Gamma",
            ContinuousFamily::Weibull(_) => "Weibull",
            ContinuousFamily::Gaussian(_) => "Gaussian",
            ContinuousFamily::Laplace(_) => "Laplace",
            ContinuousFamily::YCube(_) => "YCube",
        }
    }
}

impl Distribution for ContinuousFamily {
    fn pdf(&self, x: f64) -> f64 {
        match self {
            ContinuousFamily::Uniform(d) => d.pdf(x),
            ContinuousFamily::Exponential(d) => d.pdf(x),
            ContinuousFamily::Gamma(d) => d.pdf(x),
            ContinuousFamily::Weibull(d) => d.pdf(x),
            ContinuousFamily::Gaussian(d) => d.pdf(x),
            ContinuousFamily::Laplace(d) => d.pdf(x),
            ContinuousFamily::YCube(d) => d.pdf(x),
        }
    }

    fn get_domain(&self) -> &ContinuousDomain {
        match self {
            ContinuousFamily::Uniform(d) => d.get_domain(),
            ContinuousFamily::Exponential(d) => d.get_domain(),
            ContinuousFamily::Gamma(d) => d.get_domain(),
            ContinuousFamily::Weibull(d) => d.get_domain(),
            ContinuousFamily::Gaussian(d) => d.get_domain(),
            ContinuousFamily::Laplace(d) => d.get_domain(),
            ContinuousFamily::YCube(d) => d.get_domain(),
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self {
            ContinuousFamily::Uniform(d) => d.cdf(x),
            ContinuousFamily::Exponential(d) => d.cdf(x),
            ContinuousFamily::Gamma(d) => d.cdf(x),
            ContinuousFamily::Weibull(d) => d.cdf(x),
            ContinuousFamily::Gaussian(d) => d.cdf(x),
            ContinuousFamily::Laplace(d) => d.cdf(x),
            ContinuousFamily::YCube(d) => d.cdf(x),
        }
    }

    fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<f64>, DistrError> {
        match self {
            ContinuousFamily::Uniform(d) => d.sample_multiple_with(n, rng),
            ContinuousFamily::Exponential(d) => d.sample_multiple_with(n, rng),
            ContinuousFamily::Gamma(d) => d.sample_multiple_with(n, rng),
            ContinuousFamily::Weibull(d) => d.sample_multiple_with(n, rng),
            ContinuousFamily::Gaussian(d) => d.sample_multiple_with(n, rng),
            ContinuousFamily::Laplace(d) => d.sample_multiple_with(n, rng),
            ContinuousFamily::YCube(d) => d.sample_multiple_with(n, rng),
        }
    }

    fn expected_value(&self) -> Option<f64> {
        match self {
            ContinuousFamily::Uniform(d) => d.expected_value(),
            ContinuousFamily::Exponential(d) => d.expected_value(),
            ContinuousFamily::Gamma(d) => d.expected_value(),
            ContinuousFamily::Weibull(d) => d.expected_value(),
            ContinuousFamily::Gaussian(d) => d.expected_value(),
            ContinuousFamily::Laplace(d) => d.expected_value(),
            ContinuousFamily::YCube(d) => d.expected_value(),
        }
    }

    fn variance(&self) -> Option<f64> {
        match self {
            ContinuousFamily::Uniform(d) => d.variance(),
            ContinuousFamily::Exponential(d) => d.variance(),
            ContinuousFamily::Gamma(d) => d.variance(),
            ContinuousFamily::Weibull(d) => d.variance(),
            ContinuousFamily::Gaussian(d) => d.variance(),
            ContinuousFamily::Laplace(d) => d.variance(),
            ContinuousFamily::YCube(d) => d.variance(),
        }
    }
}

impl From<Uniform> for ContinuousFamily {
    fn from(d: Uniform) -> Self {
        return ContinuousFamily::Uniform(d);
    }
}

impl From<Exponential> for ContinuousFamily {
    fn from(d: Exponential) -> Self {
        return ContinuousFamily::Exponential(d);
    }
}

impl From<Gamma> for ContinuousFamily {
    fn from(d: Gamma) -> Self {
        return ContinuousFamily::Gamma(d);
    }
}

impl From<Weibull> for ContinuousFamily {
    fn from(d: Weibull) -> Self {
        return ContinuousFamily::Weibull(d);
    }
}

impl From<Gaussian> for ContinuousFamily {
    fn from(d: Gaussian) -> Self {
        return ContinuousFamily::Gaussian(d);
    }
}

impl From<Laplace> for ContinuousFamily {
    fn from(d: Laplace) -> Self {
        return ContinuousFamily::Laplace(d);
    }
}

impl From<YCube> for ContinuousFamily {
    fn from(d: YCube) -> Self {
        return ContinuousFamily::YCube(d);
    }
}
