//! Ready made sets of laws with fixed parameters.
//!
//! These are the laws drawn in the reference figures: six continuous
//! densities, the law of the cube of a uniform variable and six discrete pmfs.
//!

use crate::discrete_law::DiscreteLaw;
use crate::distributions::{
    ContinuousFamily, Exponential::Exponential, Gamma::Gamma,
    Gaussian::Gaussian, Laplace::Laplace, Uniform::Uniform, Weibull::Weibull, YCube::YCube,
};
use crate::errors::DistrError;
use crate::pmf_builders;

/// A discrete law together with the title of its family.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedDiscreteLaw {
    pub title: &'static str,
    pub law: DiscreteLaw,
}

/// The six continuous laws of the gallery, in order:
///
/// | Family | Parameters |
/// |---|---|
/// | Uniform | `a = 0`, `b = 1` |
/// | Exponential | `beta = 2` |
/// | Gamma | `alpha = 1`, `beta = 0.5` |
/// | Weibull | `gamma = 0.5`, `beta = 1` |
/// | Gaussian | `mu = 0`, `sigma = 1` |
/// | Laplace | `mu = 0`, `sigma = 1` |
///
/// The title of each one is [ContinuousFamily::name].
pub fn continuous_gallery() -> Result<Vec<ContinuousFamily>, DistrError> {
    let ret: Vec<ContinuousFamily> = vec![
        Uniform::new(0.0, 1.0)?.into(),
        Exponential::new(2.0)?.into(),
        Gamma::new(1.0, 0.5)?.into(),
        Weibull::new(0.5, 1.0)?.into(),
        Gaussian::new(0.0, 1.0)?.into(),
        Laplace::new(0.0, 1.0)?.into(),
    ];
    return Ok(ret);
}

/// The law of `U^3` where `U` is uniform in `[0, 2]`.
pub fn ycube() -> ContinuousFamily {
    return ContinuousFamily::YCube(YCube::standard());
}

/// The six discrete laws of the gallery, in order:
///
/// | Family | Parameters |
/// |---|---|
/// | Uniform Discrete | `low = 1`, `high = 20` |
/// | Hypergeometric | `N = 100`, `M = 50`, `K = 10` |
/// | Binomial | `n = 20`, `p = 0.4` |
/// | Poisson | `lambda = 4`, `truncation_n = 50` |
/// | Geometric | `p = 0.4`, `truncation_n = 20` |
/// | Negative Binomial | `r = 10`, `p = 0.4`, `truncation_n = 40` |
pub fn discrete_gallery() -> Result<Vec<NamedDiscreteLaw>, DistrError> {
    let ret: Vec<NamedDiscreteLaw> = vec![
        NamedDiscreteLaw {
            title: "Uniform Discrete",
            law: pmf_builders::uniform_discrete(1, 20)?,
        },
        NamedDiscreteLaw {
            title: "Hypergeometric",
            law: pmf_builders::hypergeometric(100, 50, 10)?,
        },
        NamedDiscreteLaw {
            title: "Binomial",
            law: pmf_builders::binomial(20, 0.4)?,
        },
        NamedDiscreteLaw {
            title: "Poisson",
            law: pmf_builders::poisson(4.0, 50)?,
        },
        NamedDiscreteLaw {
            title: "Geometric",
            law: pmf_builders::geometric(0.4, 20)?,
        },
        NamedDiscreteLaw {
            title: "Negative Binomial",
            law: pmf_builders::negative_binomial(10, 0.4, 40)?,
        },
    ];
    return Ok(ret);
}
