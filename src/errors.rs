use thiserror::Error;

/// The error returned by every fallible operation of the library.
///
/// All the failures are deterministic parameter validation failures: there is
/// nothing to retry and no partial result is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistrError {
    /// A parameter did not fullfill the preconditions of the function.
    /// Maybe it was infinite or a NaN when it was not allowed, was not
    /// stricly positive when the function asks for a scale, or was not
    /// in `(0, 1)` when the function asks for a probability.
    ///
    /// `name` is the name of the offending parameter and `reason` a
    /// human readable description of the violated condition.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl DistrError {
    /// Shorthand to build a [DistrError::InvalidParameter].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> DistrError {
        return DistrError::InvalidParameter {
            name,
            reason: reason.into(),
        };
    }
}

/// Returns an error if `value` is not finite and stricly positive.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), DistrError> {
    if !value.is_finite() {
        return Err(DistrError::invalid(name, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(DistrError::invalid(name, format!("must be > 0, got {value}")));
    }
    return Ok(());
}

/// Returns an error if `value` is not finite.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), DistrError> {
    if !value.is_finite() {
        return Err(DistrError::invalid(name, format!("must be finite, got {value}")));
    }
    return Ok(());
}

/// Returns an error if `p` is not a probability in the open interval `(0, 1)`.
pub(crate) fn check_open_probability(name: &'static str, p: f64) -> Result<(), DistrError> {
    #[allow(clippy::nonminimal_bool)]
    if p.is_nan() || !(0.0 < p && p < 1.0) {
        return Err(DistrError::invalid(name, format!("must be in (0, 1), got {p}")));
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_checks() {
        assert!(check_positive("beta", 2.0).is_ok());
        assert!(check_positive("beta", 0.0).is_err());
        assert!(check_positive("beta", -1.0).is_err());
        assert!(check_positive("beta", f64::NAN).is_err());
        assert!(check_positive("beta", f64::INFINITY).is_err());
    }

    #[test]
    fn probability_checks() {
        assert!(check_open_probability("p", 0.4).is_ok());
        assert!(check_open_probability("p", 0.0).is_err());
        assert!(check_open_probability("p", 1.0).is_err());
        assert!(check_open_probability("p", 1.5).is_err());
        assert!(check_open_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn message_names_the_parameter() {
        let err: DistrError = DistrError::invalid("sigma", "must be > 0, got -1");
        assert_eq!(err.to_string(), "Invalid parameter `sigma`: must be > 0, got -1");
    }
}
