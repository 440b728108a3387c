use assert_approx_eq::assert_approx_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use ProbabilityLaws::{discrete_law::DiscreteLaw, errors::DistrError, pmf_builders::*};

fn assert_normalized(law: &DiscreteLaw) {
    assert_eq!(law.support().len(), law.weights().len());
    let total: f64 = law.weights().iter().sum();
    assert_approx_eq!(total, 1.0, 1e-9);
    assert!(law.weights().iter().all(|&w| 0.0 <= w));
    assert!(law.support().windows(2).all(|w| w[0] < w[1]));
}

#[cfg(test)]
mod uniform_discrete_tests {
    use super::*;

    #[test]
    fn test_support_and_weights() {
        let law: DiscreteLaw = uniform_discrete(1, 20).expect("Parameters should be valid");
        assert_eq!(law.support(), (1..=20).collect::<Vec<i64>>().as_slice());
        assert!(law.weights().iter().all(|&w| w == 1.0 / 20.0));
        assert_normalized(&law);
    }

    #[test]
    fn test_single_point() {
        let law: DiscreteLaw = uniform_discrete(3, 3).expect("Parameters should be valid");
        assert_eq!(law.len(), 1);
        assert_eq!(law.point_mass(3), 1.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(uniform_discrete(5, 1).is_err());
    }
}

#[cfg(test)]
mod binomial_tests {
    use super::*;

    #[test]
    fn test_truncated_support() {
        let law: DiscreteLaw = binomial(20, 0.4).expect("Parameters should be valid");
        assert_eq!(law.support(), (0..20).collect::<Vec<i64>>().as_slice());
        assert_normalized(&law);
        // `n` itself is not part of the support
        assert_eq!(point_mass(&law, 20), 0.0);
    }

    #[test]
    fn test_unimodal() {
        let law: DiscreteLaw = binomial(20, 0.4).expect("Parameters should be valid");
        let w: &[f64] = law.weights();
        assert_eq!(law.mode(), 8);
        assert!(w[..=8].windows(2).all(|p| p[0] < p[1]));
        assert!(w[8..].windows(2).all(|p| p[1] < p[0]));
    }

    #[test]
    fn test_complete_support() {
        let law: DiscreteLaw = binomial_complete(20, 0.4).expect("Parameters should be valid");
        assert_eq!(law.len(), 21);
        assert_normalized(&law);
        assert_approx_eq!(law.expected_value(), 8.0, 1e-9);
        assert_approx_eq!(law.variance(), 4.8, 1e-9);
        // C(20, 1) * 0.4 * 0.6^19
        assert_approx_eq!(law.point_mass(1), 20.0 * 0.4 * 0.6f64.powi(19), 1e-12);
    }

    #[test]
    fn test_invalid_parameters() {
        let err: DistrError = binomial(10, 1.5).unwrap_err();
        assert!(matches!(err, DistrError::InvalidParameter { name: "p", .. }));
        assert!(binomial(10, 0.0).is_err());
        assert!(binomial(10, 1.0).is_err());
        assert!(binomial(-1, 0.5).is_err());
        // empty support
        assert!(binomial(0, 0.5).is_err());
        assert!(binomial_complete(0, 0.5).is_ok());
    }
}

#[cfg(test)]
mod hypergeometric_tests {
    use super::*;

    #[test]
    fn test_truncated_support() {
        let law: DiscreteLaw = hypergeometric(100, 50, 10).expect("Parameters should be valid");
        assert_eq!(law.support(), (0..10).collect::<Vec<i64>>().as_slice());
        assert_normalized(&law);
        // M = N - M, so the law is symmetric around K/2 = 5.
        // Renormalizing keeps the ratios.
        assert_approx_eq!(law.point_mass(3), law.point_mass(7), 1e-12);
        assert_approx_eq!(law.point_mass(1), law.point_mass(9), 1e-12);
        assert_eq!(law.mode(), 5);
    }

    #[test]
    fn test_complete_support() {
        let law: DiscreteLaw =
            hypergeometric_complete(100, 50, 10).expect("Parameters should be valid");
        assert_eq!(law.support(), (0..=10).collect::<Vec<i64>>().as_slice());
        assert_normalized(&law);
        // K * M / N
        assert_approx_eq!(law.expected_value(), 5.0, 1e-9);

        // The lower bound is max(0, K - (N - M))
        let law: DiscreteLaw = hypergeometric_complete(10, 8, 5).expect("Parameters should be valid");
        assert_eq!(law.support(), &[3, 4, 5]);
        assert_normalized(&law);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(hypergeometric(10, 11, 2).is_err());
        assert!(hypergeometric(10, 5, 11).is_err());
        assert!(hypergeometric(-10, 5, 2).is_err());
        assert!(hypergeometric(10, -5, 2).is_err());
        assert!(hypergeometric(10, 0, 2).is_err());
    }

    #[test]
    fn test_truncated_support_without_mass() {
        // M = N: every draw is a success, so only k = K has mass and
        // k = K is left out of the truncated support.
        let err: DistrError = hypergeometric(10, 10, 5).unwrap_err();
        assert!(matches!(err, DistrError::InvalidParameter { name: "weight", .. }));

        let law: DiscreteLaw = hypergeometric_complete(10, 10, 5).expect("Parameters should be valid");
        assert_eq!(law.support(), &[5]);
        assert_eq!(law.point_mass(5), 1.0);
    }
}

#[cfg(test)]
mod poisson_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let law: DiscreteLaw = poisson(4.0, 50).expect("Parameters should be valid");
        assert_eq!(law.support(), (0..50).collect::<Vec<i64>>().as_slice());
        assert_normalized(&law);
        assert_approx_eq!(law.point_mass(0), (-4.0f64).exp(), 1e-12);
        // exp(-4) * 4^3 / 3!
        assert_approx_eq!(law.point_mass(3), 0.19536681481316454, 1e-12);
        assert_approx_eq!(law.expected_value(), 4.0, 1e-9);
        assert_approx_eq!(law.variance(), 4.0, 1e-9);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(poisson(-1.0, 10).is_err());
        assert!(poisson(0.0, 10).is_err());
        assert!(poisson(4.0, 0).is_err());
        assert!(poisson(f64::NAN, 10).is_err());
    }
}

#[cfg(test)]
mod geometric_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let law: DiscreteLaw = geometric(0.4, 20).expect("Parameters should be valid");
        assert_eq!(law.support(), (1..=20).collect::<Vec<i64>>().as_slice());
        assert_normalized(&law);

        let kept_mass: f64 = 1.0 - 0.6f64.powi(20);
        assert_approx_eq!(law.point_mass(1), 0.4 / kept_mass, 1e-12);
        assert_approx_eq!(law.point_mass(2), 0.4 * 0.6 / kept_mass, 1e-12);
        assert_eq!(law.point_mass(0), 0.0);
        assert_eq!(law.mode(), 1);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(geometric(0.0, 10).is_err());
        assert!(geometric(1.2, 10).is_err());
        assert!(geometric(0.4, -3).is_err());
    }
}

#[cfg(test)]
mod negative_binomial_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let law: DiscreteLaw = negative_binomial(10, 0.4, 40).expect("Parameters should be valid");
        assert_eq!(law.support(), (0..40).collect::<Vec<i64>>().as_slice());
        assert_normalized(&law);
        // P(1) / P(0) = C(10, 9) * (1 - p)
        assert_approx_eq!(law.point_mass(1) / law.point_mass(0), 6.0, 1e-9);
    }

    #[test]
    fn test_single_success_is_geometric_shape() {
        // with r = 1, P(x) = p (1 - p)^x
        let law: DiscreteLaw = negative_binomial(1, 0.5, 4).expect("Parameters should be valid");
        let expected: [f64; 4] = [8.0 / 15.0, 4.0 / 15.0, 2.0 / 15.0, 1.0 / 15.0];
        for (w, e) in law.weights().iter().zip(expected) {
            assert_approx_eq!(*w, e, 1e-12);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(negative_binomial(0, 0.4, 40).is_err());
        assert!(negative_binomial(10, 1.0, 40).is_err());
        assert!(negative_binomial(10, 0.4, 0).is_err());
    }
}

#[cfg(test)]
mod discrete_law_tests {
    use super::*;

    #[test]
    fn test_point_mass_outside_support() {
        let law: DiscreteLaw = uniform_discrete(1, 20).expect("Parameters should be valid");
        assert_eq!(point_mass(&law, 0), 0.0);
        assert_eq!(point_mass(&law, 21), 0.0);
        assert_eq!(point_mass(&law, -7), 0.0);
        assert_eq!(point_mass(&law, 7), 0.05);
    }

    #[test]
    fn test_cdf_and_moments() {
        let law: DiscreteLaw = uniform_discrete(1, 4).expect("Parameters should be valid");
        assert_eq!(law.cdf(0), 0.0);
        assert_approx_eq!(law.cdf(2), 0.5, 1e-12);
        assert_eq!(law.cdf(4), 1.0);
        assert_approx_eq!(law.expected_value(), 2.5, 1e-12);
        assert_approx_eq!(law.moment(2).unwrap(), 7.5, 1e-12);
        assert_approx_eq!(law.variance(), 1.25, 1e-12);
        assert!(law.moment(0).is_err());
    }

    #[test]
    fn test_iter() {
        let law: DiscreteLaw = binomial(4, 0.5).expect("Parameters should be valid");
        let pairs: Vec<(i64, f64)> = law.iter().collect();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].0, 0);
        assert_eq!(pairs[3].0, 3);
        // 1, 4, 6, 4 over 15
        assert_approx_eq!(pairs[2].1, 6.0 / 15.0, 1e-12);
    }

    #[test]
    fn test_sampling() {
        let law: DiscreteLaw = binomial(20, 0.4).expect("Parameters should be valid");
        let mut rng: StdRng = StdRng::seed_from_u64(1234);
        let samples: Vec<i64> = law.sample_multiple_with(10_000, &mut rng).unwrap();
        assert_eq!(samples.len(), 10_000);
        assert!(samples.iter().all(|k| law.support().contains(k)));

        let mean: f64 = samples.iter().map(|&k| k as f64).sum::<f64>() / 10_000.0;
        assert_approx_eq!(mean, law.expected_value(), 0.1);
    }
}
