//! Statistical primitives for the quartet analysis tool.
//!
//! This crate provides the small numeric core shared by the analysis and CLI
//! layers:
//!
//! - **Descriptive statistics**: mean, population variance, standard deviation
//! - **Bivariate statistics**: covariance and Pearson correlation for paired
//!   series, with an explicit "undefined" state for zero-variance inputs
//! - **Linear regression**: closed-form ordinary least squares for a single
//!   predictor, with residual-based r² and mean squared error
//!
//! # Modules
//!
//! - [`descriptive`]: Single-series summary statistics
//! - [`bivariate`]: Paired-series statistics (covariance, correlation)
//! - [`regression`]: Ordinary least-squares line fitting
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use quartet_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.variance, 2.0);
//! ```
//!
//! ## Fitting a regression line
//!
//! ```
//! use quartet_stats::regression::LinearFit;
//!
//! let xs = [1.0, 2.0, 3.0, 4.0];
//! let ys = [3.0, 5.0, 7.0, 9.0];
//! let fit = LinearFit::fit(&xs, &ys).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.intercept - 1.0).abs() < 1e-12);
//! ```

pub mod bivariate;
pub mod descriptive;
pub mod regression;
