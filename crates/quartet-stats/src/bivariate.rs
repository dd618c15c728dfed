//! Paired-series statistics: covariance, Pearson correlation, r².
//!
//! Correlation is `cov(x, y) / (σx · σy)`. When either series has zero
//! variance the quotient is 0/0 and the correlation is mathematically
//! undefined; this module reports that state as an explicit `None` rather
//! than coercing it to zero or letting a NaN propagate.

use crate::descriptive::{mean, population_variance};

/// Summary statistics for a paired `(x, y)` series.
#[derive(Debug, Clone, PartialEq)]
pub struct BivariateStats {
    /// Number of observation pairs.
    pub len: usize,
    /// Mean of the x series.
    pub mean_x: f64,
    /// Population variance of the x series.
    pub var_x: f64,
    /// Mean of the y series.
    pub mean_y: f64,
    /// Population variance of the y series.
    pub var_y: f64,
    /// Population covariance of x and y.
    pub covariance: f64,
    /// Pearson correlation coefficient, or `None` when either series has
    /// zero variance (the 0/0 case).
    pub correlation: Option<f64>,
    /// Squared correlation, `None` exactly when `correlation` is.
    pub r_squared: Option<f64>,
}

/// Errors from bivariate statistics computation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BivariateError {
    /// The x and y series have different lengths.
    #[display("Series length mismatch: x has {x_len} values, y has {y_len}")]
    MismatchedLengths { x_len: usize, y_len: usize },
    /// Fewer than two observation pairs were supplied.
    #[display("At least 2 observations are required, got {len}")]
    TooFewObservations { len: usize },
}

impl BivariateStats {
    /// Computes paired-series statistics over `xs` and `ys`.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lengths differ or fewer than two
    /// pairs are supplied.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, BivariateError> {
        if xs.len() != ys.len() {
            return Err(BivariateError::MismatchedLengths {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(BivariateError::TooFewObservations { len: xs.len() });
        }

        let mean_x = mean(xs);
        let mean_y = mean(ys);
        let var_x = population_variance(xs, mean_x);
        let var_y = population_variance(ys, mean_y);
        let covariance = population_covariance(xs, ys, mean_x, mean_y);

        let correlation = if var_x == 0.0 || var_y == 0.0 {
            None
        } else {
            Some(covariance / (var_x.sqrt() * var_y.sqrt()))
        };
        let r_squared = correlation.map(|r| r * r);

        Ok(Self {
            len: xs.len(),
            mean_x,
            var_x,
            mean_y,
            var_y,
            covariance,
            correlation,
            r_squared,
        })
    }
}

/// Population covariance of two equal-length slices given their means.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn population_covariance(xs: &[f64], ys: &[f64], mean_x: f64, mean_y: f64) -> f64 {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum::<f64>()
        / xs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        let stats = BivariateStats::new(&xs, &ys).unwrap();
        assert!((stats.correlation.unwrap() - 1.0).abs() < 1e-12);
        assert!((stats.r_squared.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [6.0, 4.0, 2.0];
        let stats = BivariateStats::new(&xs, &ys).unwrap();
        assert!((stats.correlation.unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_x_is_undefined_not_zero() {
        let xs = [5.0, 5.0, 5.0];
        let ys = [1.0, 2.0, 3.0];
        let stats = BivariateStats::new(&xs, &ys).unwrap();
        assert_eq!(stats.var_x, 0.0);
        assert_eq!(stats.correlation, None);
        assert_eq!(stats.r_squared, None);
    }

    #[test]
    fn test_constant_y_is_undefined() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [7.0, 7.0, 7.0];
        let stats = BivariateStats::new(&xs, &ys).unwrap();
        assert_eq!(stats.correlation, None);
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = BivariateStats::new(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert_eq!(err, BivariateError::MismatchedLengths { x_len: 2, y_len: 1 });
    }

    #[test]
    fn test_too_few_observations() {
        let err = BivariateStats::new(&[1.0], &[1.0]).unwrap_err();
        assert_eq!(err, BivariateError::TooFewObservations { len: 1 });
    }

    #[test]
    fn test_covariance_hand_computed() {
        // means are 2 and 4; products of deviations: (-1)(-2), 0, (1)(2) => 4/3
        let xs = [1.0, 2.0, 3.0];
        let ys = [2.0, 4.0, 6.0];
        let stats = BivariateStats::new(&xs, &ys).unwrap();
        assert!((stats.covariance - 4.0 / 3.0).abs() < 1e-12);
    }
}
