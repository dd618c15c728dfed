/// Descriptive statistics summarizing a single series.
///
/// Contains the common measures of central tendency and dispersion for a
/// dataset of `f64` values. Variance is the population variance (divided by
/// `n`, not `n - 1`), matching the convention used throughout this project.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The minimum value in the series.
    pub min: f64,
    /// The maximum value in the series.
    pub max: f64,
    /// The arithmetic mean of the series.
    pub mean: f64,
    /// The population variance of the series.
    pub variance: f64,
    /// The population standard deviation of the series.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics over the given values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the series contains at least one value
    /// * `None` - if the series is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use quartet_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Some(Self {
            min,
            max,
            mean,
            variance,
            std_dev,
        })
    }
}

/// Mean of a non-empty slice.
///
/// Internal building block shared with the bivariate and regression modules.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance of a non-empty slice given its precomputed mean.
#[expect(clippy::cast_precision_loss)]
pub(crate) fn population_variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        let values: Vec<f64> = vec![];
        assert!(DescriptiveStats::new(values).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([42.0]).unwrap();
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_population_variance_divides_by_n() {
        // Sample variance of [2, 4, 6] would be 4; population variance is 8/3.
        let stats = DescriptiveStats::new([2.0, 4.0, 6.0]).unwrap();
        assert_eq!(stats.mean, 4.0);
        assert!((stats.variance - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_unordered_input() {
        let stats = DescriptiveStats::new([3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.mean, 2.0);
    }

    #[test]
    fn test_std_dev_is_sqrt_of_variance() {
        let stats = DescriptiveStats::new([1.0, 5.0, 9.0, 13.0]).unwrap();
        assert!((stats.std_dev - stats.variance.sqrt()).abs() < 1e-12);
    }
}
