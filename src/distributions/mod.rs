// Continuous
pub mod Exponential;
pub mod Gamma;
pub mod Gaussian;
pub mod Laplace;
pub mod Uniform;
pub mod Weibull;
pub mod YCube;

// Closed set of all of the above
pub mod family;

pub use family::ContinuousFamily;
