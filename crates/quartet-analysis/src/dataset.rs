//! Observation loading from delimited text.
//!
//! The input is a comma-delimited table with a header row naming at least
//! the `group`, `x`, and `y` columns (any column order; extra columns are
//! ignored). Parsing is fail-fast: the first malformed row aborts the load
//! with a diagnostic naming the line and column, so a partially loaded
//! dataset can never reach the analyzer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single `(group, x, y)` data point. Immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Observation {
    /// Group the observation belongs to (1..=4 for the reference quartet).
    pub group: u32,
    pub x: f64,
    pub y: f64,
}

/// The full collection of observations, in input order.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Dataset {
    pub observations: Vec<Observation>,
}

/// Errors from parsing delimited observation data.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// The input contains no header row.
    #[display("Input is empty; expected a header row with group, x, y columns")]
    Empty,
    /// The header row lacks a required column.
    #[display("Missing required column '{name}' in header")]
    MissingColumn { name: &'static str },
    /// A data row is shorter than the header.
    #[display("Line {line}: missing value for column '{column}'")]
    MissingField { line: usize, column: &'static str },
    /// A numeric cell failed to parse.
    #[display("Line {line}: invalid number in column '{column}'")]
    InvalidNumber { line: usize, column: &'static str },
    /// The group cell is not a positive integer.
    #[display("Line {line}: invalid group id (expected a positive integer)")]
    InvalidGroup { line: usize },
}

/// Positions of the required columns within the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    group: usize,
    x: usize,
    y: usize,
}

impl ColumnLayout {
    fn from_header(header: &str) -> Result<Self, ParseError> {
        let names = header.split(',').map(str::trim).collect::<Vec<_>>();
        let find = |name: &'static str| {
            names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(name))
                .ok_or(ParseError::MissingColumn { name })
        };
        Ok(Self {
            group: find("group")?,
            x: find("x")?,
            y: find("y")?,
        })
    }
}

impl Dataset {
    /// Parses a comma-delimited `group,x,y` table.
    ///
    /// Blank lines are skipped. Column order is taken from the header row;
    /// columns beyond the required three are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] identifying the offending line and column
    /// for the first malformed cell encountered.
    pub fn parse_csv(text: &str) -> Result<Self, ParseError> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header) = lines.next().ok_or(ParseError::Empty)?;
        let layout = ColumnLayout::from_header(header)?;

        let mut observations = Vec::new();
        for (index, row) in lines {
            let line = index + 1;
            let fields = row.split(',').map(str::trim).collect::<Vec<_>>();
            let field = |pos: usize, column: &'static str| {
                fields
                    .get(pos)
                    .copied()
                    .filter(|f| !f.is_empty())
                    .ok_or(ParseError::MissingField { line, column })
            };

            let group = field(layout.group, "group")?
                .parse::<u32>()
                .ok()
                .filter(|g| *g > 0)
                .ok_or(ParseError::InvalidGroup { line })?;
            let x = field(layout.x, "x")?
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber { line, column: "x" })?;
            let y = field(layout.y, "y")?
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber { line, column: "y" })?;

            observations.push(Observation { group, x, y });
        }

        Ok(Self { observations })
    }

    /// Number of observations across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Distinct group ids present in the dataset, in ascending order.
    #[must_use]
    pub fn group_ids(&self) -> Vec<u32> {
        self.group_series().into_keys().collect()
    }

    /// Splits the dataset into per-group `(xs, ys)` series, keyed by group
    /// id in ascending order.
    #[must_use]
    pub fn group_series(&self) -> BTreeMap<u32, (Vec<f64>, Vec<f64>)> {
        let mut groups: BTreeMap<u32, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
        for obs in &self.observations {
            let (xs, ys) = groups.entry(obs.group).or_default();
            xs.push(obs.x);
            ys.push(obs.y);
        }
        groups
    }
}
