//! Anscombe quartet analysis: dataset loading, per-group regression, and
//! comparison reporting.
//!
//! # Overview
//!
//! The analysis pipeline has three stages, each independent of presentation
//! concerns (plot rendering and console formatting live in the CLI crate):
//!
//! 1. **Load** ([`dataset::Dataset`]): parse a delimited `group,x,y` table
//!    into observations
//! 2. **Analyze** ([`analyzer::GroupAnalysis`]): per group, compute bivariate
//!    statistics and fit an ordinary least-squares line
//! 3. **Report** ([`report::ComparisonTable`]): collect per-group results
//!    into one table, ordered by ascending group id
//!
//! The groups are mutually independent; analysis visits them in ascending
//! id order so output is deterministic.
//!
//! # Examples
//!
//! ```
//! use quartet_analysis::{analyzer, dataset::Dataset, report::ComparisonTable};
//!
//! let csv = "group,x,y\n\
//!            1,1.0,2.1\n\
//!            1,2.0,3.9\n\
//!            1,3.0,6.0\n";
//! let dataset = Dataset::parse_csv(csv)?;
//! let analyses = analyzer::analyze_all(&dataset)?;
//! let table = ComparisonTable::from_analyses(&analyses);
//! assert_eq!(table.rows.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analyzer;
pub mod dataset;
pub mod report;
