#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
#![warn(clippy::all)]
// ^Disable warning "crate `ProbabilityLaws` should have a snake case name convert the identifier to snake case: `probability_laws`"
// The files of the distributions are also named after the family. The rest of
// the names follow the snake_case convention.

//! # Probability Laws
//!
//! This library provides:
//!
//! - [x] Interface to create continuous distributions
//! - [x] Common continuous distributions (ready to be used in any calculation)
//! - [x] Exact sampling of the common distributions
//! - [x] Moments by numerical integration
//! - [x] Finite discrete laws (pmfs) built from closed formulas
//! - [x] Histograms of the samples
//! - [ ] Plotting (we only produce the data)
//!
//! ## Continuous distributions
//!
//! We have defined the trait [Distribution] that defines a basic interface to
//! work with continuous distributions. The only requiered methods to implement are:
//!  - [pdf](distribution_trait::Distribution::pdf): the pdf of the distribution.
//!  - [get_domain](distribution_trait::Distribution::get_domain): the [domain]
//!     of the pdf of the distribution.
//!
//! After this, the cdf, the samplers and the moments are avaliable (check
//! [distribution_trait::Distribution] for more details). Note that this deafult
//! implementations can be computationally costly, therefore we recommend
//! implementing the other methods if there is an avaliable analytical solution
//! for them.
//!
//! The common families are already implemented:
//!
//!  - [x] [Uniform distribution](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Exponential](crate::distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Gamma distribution](crate::distributions::Gamma) ([Wiki](https://en.wikipedia.org/wiki/Gamma_distribution))
//!  - [x] [Weibull distribution](crate::distributions::Weibull) ([Wiki](https://en.wikipedia.org/wiki/Weibull_distribution))
//!  - [x] [Gaussian distribution](crate::distributions::Gaussian) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] [Laplace distribution](crate::distributions::Laplace) ([Wiki](https://en.wikipedia.org/wiki/Laplace_distribution))
//!  - [x] [YCube distribution](crate::distributions::YCube) (the law of `U^3` for `U` uniform in `[0, 2]`)
//!
//! [ContinuousFamily](distributions::ContinuousFamily) groups
//! all of them in a single type.
//!
//! ## Discrete laws
//!
//! A [DiscreteLaw](discrete_law::DiscreteLaw) is a finite table of values and
//! probabilities. The [pmf_builders] create them for:
//!
//!  - [x] [Discrete Uniform](pmf_builders::uniform_discrete) ([Wiki](https://en.wikipedia.org/wiki/Discrete_uniform_distribution))
//!  - [x] [Hypergeometric](pmf_builders::hypergeometric) ([Wiki](https://en.wikipedia.org/wiki/Hypergeometric_distribution))
//!  - [x] [Binomial](pmf_builders::binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] [Poisson distribution](pmf_builders::poisson) ([Wiki](https://en.wikipedia.org/wiki/Poisson_distribution))
//!  - [x] [Geometric distribution](pmf_builders::geometric) ([Wiki](https://en.wikipedia.org/wiki/Geometric_distribution))
//!  - [x] [Negative binomial distribution](pmf_builders::negative_binomial) ([Wiki](https://en.wikipedia.org/wiki/Negative_binomial_distribution))
//!
//! ## Data
//!
//! Draws can be stored in [Samples](samples::Samples) to compute their
//! statistics and binned with [histogram](histogram::histogram). The [gallery]
//! contains the laws with the parameters used in the reference figures.
//!
//! ***
//!

pub use distribution_trait::Distribution;

pub mod configuration;
pub mod discrete_law;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod gallery;
pub mod histogram;
pub mod pmf_builders;
pub mod samples;
