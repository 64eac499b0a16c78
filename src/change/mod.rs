//! Denomination sets and the greedy change solver
//!
//! This module contains the `Denominations` type used as the partition key of
//! the change cache, and the solver that computes a single column of counts.

pub mod solver;

pub use solver::{solve_amount, GreedySolver, SolveError, Solver};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when building a denomination set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DenominationError {
    /// No denominations were given
    #[error("at least one denomination is required")]
    Empty,

    /// A denomination is zero
    #[error("denomination at position {0} must be positive")]
    NonPositive(usize),

    /// A denomination is not larger than the one before it
    #[error("denomination at position {0} is not larger than the previous one")]
    NotIncreasing(usize),

    /// A value in a textual list could not be parsed
    #[error("invalid denomination '{0}'")]
    Parse(String),
}

/// An ordered set of coin or bill values, smallest first
///
/// Values are strictly increasing and positive. The order defines the row
/// order of every change table, and two sets with different values never
/// share a table or an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Denominations(Vec<u64>);

impl Denominations {
    /// Validates and wraps a list of denominations
    ///
    /// # Arguments
    /// * `values` - Denominations from least to greatest
    ///
    /// # Returns
    /// * `Ok(Denominations)` if the list is non-empty, positive and strictly increasing
    /// * `Err(DenominationError)` describing the first offending position otherwise
    pub fn new(values: Vec<u64>) -> Result<Self, DenominationError> {
        if values.is_empty() {
            return Err(DenominationError::Empty);
        }
        for (index, &value) in values.iter().enumerate() {
            if value == 0 {
                return Err(DenominationError::NonPositive(index));
            }
            if index > 0 && value <= values[index - 1] {
                return Err(DenominationError::NotIncreasing(index));
            }
        }
        Ok(Self(values))
    }

    /// US coin set: penny, nickel, dime, quarter
    pub fn us_coins() -> Self {
        Self(vec![1, 5, 10, 25])
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the smallest denomination is 1, which makes every amount solvable
    pub fn has_unit(&self) -> bool {
        self.0.first() == Some(&1)
    }

    /// Sum of `counts[i] * denomination[i]`
    pub fn weighted_sum(&self, counts: &[u64]) -> u64 {
        self.0
            .iter()
            .zip(counts)
            .map(|(value, count)| value * count)
            .sum()
    }
}

impl TryFrom<Vec<u64>> for Denominations {
    type Error = DenominationError;

    fn try_from(values: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Denominations> for Vec<u64> {
    fn from(denominations: Denominations) -> Self {
        denominations.0
    }
}

impl fmt::Display for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", joined.join(","))
    }
}

impl FromStr for Denominations {
    type Err = DenominationError;

    /// Parses a comma-separated list such as `1, 5, 10, 25`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| DenominationError::Parse(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }
}
