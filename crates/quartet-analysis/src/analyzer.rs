//! Per-group statistics and regression.
//!
//! Each group is analyzed independently: bivariate descriptive statistics
//! plus an ordinary least-squares fit. A degenerate group (constant x, so
//! no regression slope exists) is surfaced as a distinct error carrying the
//! offending group id; callers decide whether to skip the group or abort
//! the run.

use quartet_stats::{
    bivariate::{BivariateError, BivariateStats},
    regression::{LinearFit, RegressionError},
};

use crate::dataset::Dataset;

/// Statistics and fitted line for a single group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAnalysis {
    /// Group id this analysis belongs to.
    pub group: u32,
    /// Bivariate descriptive statistics (means, variances, correlation).
    pub stats: BivariateStats,
    /// Ordinary least-squares fit with residual-based r² and MSE.
    pub fit: LinearFit,
}

/// Errors from analyzing a group, tagged with the offending group id.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalyzeError {
    /// The group's x values are all equal, so its regression is undefined.
    #[display("Group {group} is degenerate: {source}")]
    DegenerateGroup {
        group: u32,
        source: RegressionError,
    },
    /// The group is too small or malformed for bivariate statistics.
    #[display("Group {group}: {source}")]
    Stats { group: u32, source: BivariateError },
    /// The group is too small or malformed for regression.
    #[display("Group {group}: {source}")]
    Regression { group: u32, source: RegressionError },
}

impl GroupAnalysis {
    /// Analyzes one group's paired series.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::DegenerateGroup`] when the group's x values
    /// are constant, and size/shape errors otherwise.
    pub fn analyze(group: u32, xs: &[f64], ys: &[f64]) -> Result<Self, AnalyzeError> {
        let stats =
            BivariateStats::new(xs, ys).map_err(|source| AnalyzeError::Stats { group, source })?;
        let fit = LinearFit::fit(xs, ys).map_err(|source| match source {
            RegressionError::ConstantX => AnalyzeError::DegenerateGroup { group, source },
            other => AnalyzeError::Regression {
                group,
                source: other,
            },
        })?;
        Ok(Self { group, stats, fit })
    }
}

/// Analyzes every group in the dataset, in ascending group-id order.
///
/// The first failing group aborts the analysis; no partial result is
/// returned.
///
/// # Errors
///
/// Propagates the first [`AnalyzeError`] encountered.
pub fn analyze_all(dataset: &Dataset) -> Result<Vec<GroupAnalysis>, AnalyzeError> {
    dataset
        .group_series()
        .iter()
        .map(|(group, (xs, ys))| GroupAnalysis::analyze(*group, xs, ys))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quartet_stats::regression::RegressionError;

    const ANSCOMBE_CSV: &str = include_str!("../../../data/anscombe.csv");

    fn reference_analyses() -> Vec<GroupAnalysis> {
        let dataset = Dataset::parse_csv(ANSCOMBE_CSV).unwrap();
        analyze_all(&dataset).unwrap()
    }

    #[test]
    fn test_quartet_shares_summary_statistics() {
        // The defining property: all four groups have near-identical
        // summary statistics despite very different shapes.
        for analysis in reference_analyses() {
            let stats = &analysis.stats;
            assert_eq!(stats.len, 11);
            assert!((stats.mean_x - 9.0).abs() < 1e-9, "group {}", analysis.group);
            assert!((stats.var_x - 10.0).abs() < 1e-9, "group {}", analysis.group);
            assert!((stats.mean_y - 7.50).abs() < 0.01, "group {}", analysis.group);
            assert!((stats.var_y - 3.75).abs() < 0.01, "group {}", analysis.group);
            let r = stats.correlation.unwrap();
            assert!((r - 0.816).abs() < 0.002, "group {}", analysis.group);
        }
    }

    #[test]
    fn test_quartet_shares_regression_line() {
        for analysis in reference_analyses() {
            assert!((analysis.fit.slope - 0.5).abs() < 0.001, "group {}", analysis.group);
            assert!(
                (analysis.fit.intercept - 3.0).abs() < 0.005,
                "group {}",
                analysis.group
            );
        }
    }

    #[test]
    fn test_correlation_squared_matches_residual_r_squared() {
        // For simple OLS the two r² definitions coincide.
        for analysis in reference_analyses() {
            let from_correlation = analysis.stats.r_squared.unwrap();
            let from_residuals = analysis.fit.r_squared;
            assert!(
                (from_correlation - from_residuals).abs() < 1e-9,
                "group {}",
                analysis.group
            );
        }
    }

    #[test]
    fn test_group_1_reference_fit() {
        let analyses = reference_analyses();
        let group_1 = &analyses[0];
        assert_eq!(group_1.group, 1);
        assert!((group_1.fit.intercept - 3.0001).abs() < 1e-3);
        assert!((group_1.fit.slope - 0.5001).abs() < 1e-3);
        assert!((group_1.fit.mse - 1.2512).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_group_is_an_error_not_a_slope() {
        let err = GroupAnalysis::analyze(9, &[8.0, 8.0, 8.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            AnalyzeError::DegenerateGroup {
                group: 9,
                source: RegressionError::ConstantX
            }
        );
    }

    #[test]
    fn test_degenerate_group_aborts_analyze_all() {
        let csv = "group,x,y\n1,1.0,1.0\n1,2.0,2.0\n2,5.0,1.0\n2,5.0,2.0\n";
        let dataset = Dataset::parse_csv(csv).unwrap();
        let err = analyze_all(&dataset).unwrap_err();
        assert!(matches!(err, AnalyzeError::DegenerateGroup { group: 2, .. }));
    }

    #[test]
    fn test_undersized_group_is_an_error() {
        let err = GroupAnalysis::analyze(3, &[1.0], &[2.0]).unwrap_err();
        assert!(matches!(err, AnalyzeError::Stats { group: 3, .. }));
    }

    #[test]
    fn test_analyses_ordered_by_group_id() {
        let groups = reference_analyses()
            .iter()
            .map(|a| a.group)
            .collect::<Vec<_>>();
        assert_eq!(groups, vec![1, 2, 3, 4]);
    }
}
