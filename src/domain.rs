//! A Domain represents the set of points where a density is defined.
//!
//! In this library we use it for the pdf of the continuous distributions (see
//! [crate::distribution_trait]). Discrete laws carry their support explicitly
//! (see [crate::discrete_law::DiscreteLaw]).
//!

use crate::errors::{DistrError, check_finite};

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min < max`. Use [ContinuousDomain::new_range]
    /// to make sure it is fullfilled.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
    /// All the numbers until the given value.
    To(f64),
}

impl ContinuousDomain {
    /// Creates a [ContinuousDomain::Range] checking that both bounds are
    /// finite and that `min < max`.
    pub fn new_range(min: f64, max: f64) -> Result<ContinuousDomain, DistrError> {
        check_finite("min", min)?;
        check_finite("max", max)?;
        if max <= min {
            return Err(DistrError::invalid(
                "max",
                format!("must be greater than min ({min}), got {max}"),
            ));
        }
        return Ok(ContinuousDomain::Range(min, max));
    }

    /// Returns true if `x` belongs to the domain. NaNs never do.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => !x.is_nan(),
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
            ContinuousDomain::To(max) => x <= *max,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, *max),
        }
    }

    /// Returns true if both bounds are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        return matches!(self, ContinuousDomain::Range(_, _));
    }
}
