//! Summary statistics of a set of draws.
//!
//! [Samples] is used to compare the output of the samplers with the
//! theoretical moments of the laws.

use crate::errors::DistrError;

#[derive(Debug, Clone)]
pub struct Samples {
    // non-empty, finite
    data: Vec<f64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, Default)]
pub struct SampleProperties {
    /// the average of the sample
    pub mean: Option<f64>,
    /// the (unbiased) variance of the sample
    ///
    /// Or None if `data.len() <= 1`
    pub variance: Option<f64>,
    /// The maximum value of the sample
    pub maximum: Option<f64>,
    /// The minimum value of the sample
    pub minimum: Option<f64>,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not be empty or contain NaNs or infinities (`+-inf`).
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, DistrError> {
        return Samples::new_move(Vec::from(data));
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not be empty or contain NaNs or infinities (`+-inf`).
    ///
    /// If you don't want to move the data (to keep ownership of it),
    /// use [Samples::new].
    pub fn new_move(data: Vec<f64>) -> Result<Samples, DistrError> {
        if data.is_empty() {
            return Err(DistrError::invalid("data", "must contain at least 1 value"));
        }
        if let Some(v) = data.iter().find(|f: &&f64| !f.is_finite()) {
            return Err(DistrError::invalid(
                "data",
                format!("all values must be finite, found {v}"),
            ));
        }

        return Ok(Samples {
            data,
            properties: SampleProperties::default(),
        });
    }

    /// Gives a reference to the contained data.
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    /// Number of values.
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// Returns a reference to the internal field that contains
    /// all computed statistics ([SampleProperties]).
    pub fn peek_properties(&self) -> &SampleProperties {
        return &self.properties;
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean) and returns it.
    ///
    /// If the mean was already computed, it just returns the value
    /// stored in [SampleProperties] and the operation is constant time.
    pub fn mean(&mut self) -> f64 {
        if let Some(mean) = self.properties.mean {
            return mean;
        }

        let n: f64 = self.data.len() as f64;
        let mean: f64 = self.data.iter().sum::<f64>() / n;

        self.properties.mean = Some(mean);
        return mean;
    }

    /// Computes the unbiased sample [variance](https://en.wikipedia.org/wiki/Variance)
    /// and returns it.
    ///
    /// Returns [None] if there is only 1 sample.
    pub fn variance(&mut self) -> Option<f64> {
        if self.properties.variance.is_some() {
            return self.properties.variance;
        }

        let n: usize = self.data.len();
        if n < 2 {
            return None;
        }

        let mean: f64 = self.mean();
        let mut variance: f64 = 0.0;
        for &s in &self.data {
            let centered: f64 = s - mean;
            variance += centered * centered;
        }
        variance = variance / (n as f64 - 1.0);

        self.properties.variance = Some(variance);
        return Some(variance);
    }

    /// Returns the sample raw moment `1/n * sum(x_i^order)`, the plug-in
    /// estimator of `E[X^order]`.
    ///
    /// Returns an error if `order < 1`.
    pub fn raw_moment(&self, order: i32) -> Result<f64, DistrError> {
        if order < 1 {
            return Err(DistrError::invalid(
                "order",
                format!("the order of a moment must be >= 1, got {order}"),
            ));
        }

        let n: f64 = self.data.len() as f64;
        let acc: f64 = self.data.iter().map(|x: &f64| x.powi(order)).sum();
        return Ok(acc / n);
    }

    /// Returns the minimum among the data.
    pub fn minimum(&mut self) -> f64 {
        if let Some(min) = self.properties.minimum {
            return min;
        }

        let min: f64 = self.data.iter().copied().fold(f64::INFINITY, f64::min);
        self.properties.minimum = Some(min);
        return min;
    }

    /// Returns the maximum among the data.
    pub fn maximum(&mut self) -> f64 {
        if let Some(max) = self.properties.maximum {
            return max;
        }

        let max: f64 = self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.properties.maximum = Some(max);
        return max;
    }
}
