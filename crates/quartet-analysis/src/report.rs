//! Comparison table aggregation.
//!
//! Collects per-group analyses into one table with exactly one row per
//! group id, ordered ascending. The table does no computation of its own
//! beyond field selection and display rounding; the numbers come straight
//! from [`GroupAnalysis`](crate::analyzer::GroupAnalysis).

use std::fmt::Write as _;

use serde::Serialize;

use crate::analyzer::GroupAnalysis;

/// One comparison-table row: the summary fields of a single group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub group: u32,
    pub mean_x: f64,
    pub var_x: f64,
    pub mean_y: f64,
    pub var_y: f64,
    /// Pearson correlation; `None` when undefined (zero variance).
    pub correlation: Option<f64>,
    /// Squared correlation; `None` exactly when `correlation` is.
    pub r_squared: Option<f64>,
    pub intercept: f64,
    pub slope: f64,
}

impl ComparisonRow {
    /// Selects the reportable fields from a group analysis.
    #[must_use]
    pub fn from_analysis(analysis: &GroupAnalysis) -> Self {
        Self {
            group: analysis.group,
            mean_x: analysis.stats.mean_x,
            var_x: analysis.stats.var_x,
            mean_y: analysis.stats.mean_y,
            var_y: analysis.stats.var_y,
            correlation: analysis.stats.correlation,
            r_squared: analysis.stats.r_squared,
            intercept: analysis.fit.intercept,
            slope: analysis.fit.slope,
        }
    }
}

/// The full comparison table, one row per group in ascending id order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Builds the table from per-group analyses, sorting rows by group id.
    #[must_use]
    pub fn from_analyses(analyses: &[GroupAnalysis]) -> Self {
        let mut rows = analyses
            .iter()
            .map(ComparisonRow::from_analysis)
            .collect::<Vec<_>>();
        rows.sort_by_key(|row| row.group);
        Self { rows }
    }

    /// Renders the table as comma-delimited text with a header row.
    ///
    /// Numeric fields are rounded to three decimals; an undefined
    /// correlation (and its r²) is rendered as an empty field.
    #[must_use]
    pub fn to_delimited(&self) -> String {
        let mut out = String::from(
            "group,mean_x,var_x,mean_y,var_y,correlation,r_squared,intercept,slope\n",
        );
        for row in &self.rows {
            let correlation = format_optional(row.correlation);
            let r_squared = format_optional(row.r_squared);
            // fmt::Write to a String is infallible
            let _ = writeln!(
                out,
                "{},{:.3},{:.3},{:.3},{:.3},{},{},{:.3},{:.3}",
                row.group,
                row.mean_x,
                row.var_x,
                row.mean_y,
                row.var_y,
                correlation,
                r_squared,
                row.intercept,
                row.slope,
            );
        }
        out
    }
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.3}"))
}
