//! # Discrete laws
//!
//! A [DiscreteLaw] is a finite [probability mass function](https://en.wikipedia.org/wiki/Probability_mass_function):
//! an ascending support of integers and the probability of each of them.
//!
//! The usual way to obtain one is with the builders in [crate::pmf_builders],
//! but any finite table of non-negative weights can be turned into a law with
//! [DiscreteLaw::new].
//!

use rand::RngCore;
use rand::distr::Distribution as _;
use rand::distr::weighted::WeightedIndex;

use crate::errors::DistrError;

/// A finite discrete probability law.
///
/// Invariants (guaranteed by [DiscreteLaw::new]):
///  - `support` and `weight` have the same non-zero length.
///  - `support` is stricly ascending (so its values are unique).
///  - All weights are finite, non-negative and sum to `1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteLaw {
    support: Vec<i64>,
    weight: Vec<f64>,
}

impl DiscreteLaw {
    /// Creates a new [DiscreteLaw] and renormalizes `weight` so it sums to `1.0`.
    ///
    /// The weights do **not** need to be normalized, they only need to be
    /// finite, non-negative and have a stricly positive sum.
    ///
    /// Returns an error if:
    ///  - `support` is empty or has a different length than `weight`.
    ///  - `support` is not stricly ascending.
    ///  - Any weight is negative, infinite or NaN.
    ///  - All the weights are `0.0`.
    pub fn new(support: Vec<i64>, weight: Vec<f64>) -> Result<DiscreteLaw, DistrError> {
        if support.is_empty() {
            return Err(DistrError::invalid("support", "must not be empty"));
        }
        if support.len() != weight.len() {
            return Err(DistrError::invalid(
                "weight",
                format!(
                    "must have the same length as the support ({}), got {}",
                    support.len(),
                    weight.len()
                ),
            ));
        }
        if support.windows(2).any(|w: &[i64]| w[1] <= w[0]) {
            return Err(DistrError::invalid("support", "must be stricly ascending"));
        }
        if let Some(w) = weight.iter().find(|w: &&f64| !w.is_finite() || **w < 0.0) {
            return Err(DistrError::invalid(
                "weight",
                format!("all weights must be finite and non-negative, found {w}"),
            ));
        }

        let total: f64 = weight.iter().sum();
        if !(0.0 < total) || !total.is_finite() {
            return Err(DistrError::invalid(
                "weight",
                format!("the weights must have a finite positive sum, got {total}"),
            ));
        }

        let weight: Vec<f64> = weight.into_iter().map(|w: f64| w / total).collect();

        return Ok(DiscreteLaw { support, weight });
    }

    /// The ascending support of the law.
    pub fn support(&self) -> &[i64] {
        return &self.support;
    }

    /// The normalized weights, in the same order as [DiscreteLaw::support].
    pub fn weights(&self) -> &[f64] {
        return &self.weight;
    }

    /// Number of points in the support. Always at least `1`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        return self.support.len();
    }

    /// Iterates over the `(k, P(X = k))` pairs in ascending order of `k`.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        return self.support.iter().copied().zip(self.weight.iter().copied());
    }

    /// Returns `P(X = k)`, or `0.0` if `k` is not in the support.
    pub fn point_mass(&self, k: i64) -> f64 {
        return match self.support.binary_search(&k) {
            Ok(idx) => self.weight[idx],
            Err(_) => 0.0,
        };
    }

    /// Returns `P(X <= k)`.
    pub fn cdf(&self, k: i64) -> f64 {
        // number of support values `<= k`
        let end: usize = self.support.partition_point(|&s: &i64| s <= k);
        if end == self.support.len() {
            return 1.0;
        }
        let acc: f64 = self.weight[..end].iter().sum();
        return acc.clamp(0.0, 1.0);
    }

    /// Returns the raw moment `E[X^order]`.
    ///
    /// Returns an error if `order < 1`.
    pub fn moment(&self, order: i32) -> Result<f64, DistrError> {
        if order < 1 {
            return Err(DistrError::invalid(
                "order",
                format!("the order of a moment must be >= 1, got {order}"),
            ));
        }

        let moment: f64 = self.iter().map(|(k, w)| (k as f64).powi(order) * w).sum();
        return Ok(moment);
    }

    pub fn expected_value(&self) -> f64 {
        return self.iter().map(|(k, w)| k as f64 * w).sum();
    }

    pub fn variance(&self) -> f64 {
        let mean: f64 = self.expected_value();
        let variance: f64 = self
            .iter()
            .map(|(k, w)| {
                let d: f64 = k as f64 - mean;
                d * d * w
            })
            .sum();
        return variance;
    }

    /// Returns the value of the support with the greatest weight.
    ///
    /// On ties, the smallest value is returned.
    pub fn mode(&self) -> i64 {
        let mut best: usize = 0;
        for (i, &w) in self.weight.iter().enumerate().skip(1) {
            if self.weight[best] < w {
                best = i;
            }
        }
        return self.support[best];
    }

    /// Draws `n` independent values of the law using the thread local random
    /// number generator.
    pub fn sample_multiple(&self, n: usize) -> Result<Vec<i64>, DistrError> {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_multiple_with(n, &mut rng);
    }

    /// Draws `n` independent values of the law using `rng`.
    pub fn sample_multiple_with(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<i64>, DistrError> {
        let index: WeightedIndex<f64> = WeightedIndex::new(&self.weight)
            .map_err(|e| DistrError::invalid("weight", e.to_string()))?;

        let mut ret: Vec<i64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(self.support[index.sample(rng)]);
        }
        return Ok(ret);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renormalizes_weights() {
        let law: DiscreteLaw = DiscreteLaw::new(vec![1, 2, 3], vec![1.0, 2.0, 1.0]).unwrap();
        assert_eq!(law.weights(), &[0.25, 0.5, 0.25]);
        assert_eq!(law.mode(), 2);
    }

    #[test]
    fn renormalization_divides_by_the_sum() {
        let raw: Vec<f64> = vec![0.1, 0.7, 0.3, 1.0 / 3.0];
        let total: f64 = raw.iter().sum();
        let law: DiscreteLaw = DiscreteLaw::new(vec![0, 1, 2, 3], raw.clone()).unwrap();
        for (w, r) in law.weights().iter().zip(&raw) {
            assert_eq!(*w, r / total);
        }
    }

    #[test]
    fn rejects_bad_tables() {
        assert!(DiscreteLaw::new(vec![], vec![]).is_err());
        assert!(DiscreteLaw::new(vec![1, 2], vec![1.0]).is_err());
        assert!(DiscreteLaw::new(vec![2, 1], vec![1.0, 1.0]).is_err());
        assert!(DiscreteLaw::new(vec![1, 1], vec![1.0, 1.0]).is_err());
        assert!(DiscreteLaw::new(vec![1, 2], vec![1.0, -1.0]).is_err());
        assert!(DiscreteLaw::new(vec![1, 2], vec![0.0, 0.0]).is_err());
        assert!(DiscreteLaw::new(vec![1, 2], vec![f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn cdf_steps() {
        let law: DiscreteLaw = DiscreteLaw::new(vec![0, 2, 4], vec![1.0, 1.0, 2.0]).unwrap();
        assert_eq!(law.cdf(-1), 0.0);
        assert_eq!(law.cdf(0), 0.25);
        assert_eq!(law.cdf(1), 0.25);
        assert_eq!(law.cdf(3), 0.5);
        assert_eq!(law.cdf(4), 1.0);
        assert_eq!(law.cdf(100), 1.0);
    }
}
