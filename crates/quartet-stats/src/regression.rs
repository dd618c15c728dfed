//! Ordinary least-squares regression for a single predictor.
//!
//! The fit uses the closed-form solution: `slope = cov(x, y) / var(x)` and
//! `intercept = mean(y) - slope * mean(x)`. A constant x series makes the
//! slope a division by zero (the vertical-line degenerate case); that is a
//! hard error so callers can decide whether to skip or abort.

use crate::{
    bivariate::population_covariance,
    descriptive::{mean, population_variance},
};

/// A fitted least-squares line `y = intercept + slope * x` with its
/// goodness-of-fit measures.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Fitted value for each input x, in input order.
    pub predictions: Vec<f64>,
    /// Coefficient of determination computed from residuals:
    /// `1 - SS_res / SS_tot`.
    pub r_squared: f64,
    /// Mean squared error of the fit.
    pub mse: f64,
}

/// Errors from least-squares fitting.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RegressionError {
    /// The x and y series have different lengths.
    #[display("Series length mismatch: x has {x_len} values, y has {y_len}")]
    MismatchedLengths { x_len: usize, y_len: usize },
    /// Fewer than two observation pairs were supplied.
    #[display("At least 2 observations are required to fit a line, got {len}")]
    TooFewObservations { len: usize },
    /// All x values are equal, so the slope is a division by zero.
    #[display("All x values are equal (variance 0); the regression slope is undefined")]
    ConstantX,
}

impl LinearFit {
    /// Fits a least-squares line to the given paired series.
    ///
    /// # Errors
    ///
    /// Returns [`RegressionError::ConstantX`] when the x series has zero
    /// variance, and length errors for mismatched or too-short input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quartet_stats::regression::LinearFit;
    /// let fit = LinearFit::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
    /// assert!((fit.slope - 2.0).abs() < 1e-12);
    /// assert!((fit.intercept - 1.0).abs() < 1e-12);
    /// assert!((fit.r_squared - 1.0).abs() < 1e-12);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, RegressionError> {
        if xs.len() != ys.len() {
            return Err(RegressionError::MismatchedLengths {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(RegressionError::TooFewObservations { len: xs.len() });
        }

        let mean_x = mean(xs);
        let mean_y = mean(ys);
        let var_x = population_variance(xs, mean_x);
        if var_x == 0.0 {
            return Err(RegressionError::ConstantX);
        }

        let slope = population_covariance(xs, ys, mean_x, mean_y) / var_x;
        let intercept = mean_y - slope * mean_x;
        let predictions = xs.iter().map(|x| intercept + slope * x).collect::<Vec<_>>();

        let ss_res = ys
            .iter()
            .zip(&predictions)
            .map(|(y, pred)| (y - pred).powi(2))
            .sum::<f64>();
        let ss_tot = ys.iter().map(|y| (y - mean_y).powi(2)).sum::<f64>();
        // ss_tot can only be zero for a constant y series, which the fit
        // reproduces exactly; report a perfect r² instead of dividing 0/0.
        let r_squared = if ss_tot == 0.0 { 1.0 } else { 1.0 - ss_res / ss_tot };
        let mse = ss_res / xs.len() as f64;

        Ok(Self {
            slope,
            intercept,
            predictions,
            r_squared,
            mse,
        })
    }

    /// Evaluates the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_fit() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [3.0, 5.0, 7.0, 9.0];
        let fit = LinearFit::fit(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert!(fit.mse.abs() < 1e-12);
        for (pred, y) in fit.predictions.iter().zip(&ys) {
            assert!((pred - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_noisy_fit_hand_computed() {
        // mean_x = 2, mean_y = 4; cov = ((-1)(-2) + 0 + (1)(1)) / 3 = 1,
        // var_x = 2/3, so slope = 1.5 and intercept = 1
        let xs = [1.0, 2.0, 3.0];
        let ys = [2.0, 5.0, 5.0];
        let fit = LinearFit::fit(&xs, &ys).unwrap();
        assert!((fit.slope - 1.5).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        // residuals: 2-2.5=-0.5, 5-4=1, 5-5.5=-0.5 => ss_res = 1.5
        assert!((fit.mse - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_constant_x_is_an_error() {
        let xs = [4.0, 4.0, 4.0];
        let ys = [1.0, 2.0, 3.0];
        assert_eq!(LinearFit::fit(&xs, &ys).unwrap_err(), RegressionError::ConstantX);
    }

    #[test]
    fn test_constant_y_fits_flat_line() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [7.0, 7.0, 7.0];
        let fit = LinearFit::fit(&xs, &ys).unwrap();
        assert!(fit.slope.abs() < 1e-12);
        assert!((fit.intercept - 7.0).abs() < 1e-12);
        assert_eq!(fit.r_squared, 1.0);
    }

    #[test]
    fn test_length_validation() {
        assert_eq!(
            LinearFit::fit(&[1.0, 2.0], &[1.0]).unwrap_err(),
            RegressionError::MismatchedLengths { x_len: 2, y_len: 1 }
        );
        assert_eq!(
            LinearFit::fit(&[1.0], &[1.0]).unwrap_err(),
            RegressionError::TooFewObservations { len: 1 }
        );
    }

    #[test]
    fn test_predict_matches_predictions() {
        let xs = [0.0, 2.0, 4.0, 6.0];
        let ys = [1.0, 2.0, 2.5, 4.0];
        let fit = LinearFit::fit(&xs, &ys).unwrap();
        for (x, pred) in xs.iter().zip(&fit.predictions) {
            assert!((fit.predict(*x) - pred).abs() < 1e-12);
        }
    }
}
