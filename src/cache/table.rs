//! In-memory change table
//!
//! One row per denomination, one column per amount starting at 0. Column `n`
//! holds the counts that make up amount `n`.

use crate::change::Denominations;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a table fails validation against its denomination set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Number of rows differs from the number of denominations
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// Rows have different lengths
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A column does not add up to its own amount
    #[error("column {amount} adds up to {sum}")]
    WrongSum { amount: usize, sum: u64 },
}

/// Table of solved amounts for a single denomination set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeTable {
    rows: Vec<Vec<u64>>,
}

impl ChangeTable {
    /// Creates a table with `row_count` empty rows (frontier 0)
    pub fn empty(row_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); row_count],
        }
    }

    /// Number of computed columns, i.e. the highest cached amount plus one
    pub fn frontier(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns the counts stored for `amount`, if it has been computed
    pub fn column(&self, amount: usize) -> Option<Vec<u64>> {
        if amount >= self.frontier() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[amount]).collect())
    }

    /// Appends the column for amount `frontier()`
    ///
    /// `counts` must have one entry per row.
    pub fn push_column(&mut self, counts: &[u64]) {
        debug_assert_eq!(counts.len(), self.rows.len());
        for (row, &count) in self.rows.iter_mut().zip(counts) {
            row.push(count);
        }
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    /// Checks the table shape and that every column adds up to its amount
    pub fn validate(&self, denominations: &Denominations) -> Result<(), TableError> {
        if self.rows.len() != denominations.len() {
            return Err(TableError::RowCount {
                expected: denominations.len(),
                found: self.rows.len(),
            });
        }

        let frontier = self.frontier();
        if let Some((row, found)) = self
            .rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != frontier)
        {
            return Err(TableError::Ragged {
                row,
                expected: frontier,
                found,
            });
        }

        for amount in 0..frontier {
            let sum = self
                .rows
                .iter()
                .zip(denominations.values())
                .fold(0u64, |acc, (row, &value)| {
                    acc.saturating_add(row[amount].saturating_mul(value))
                });
            if sum != amount as u64 {
                return Err(TableError::WrongSum { amount, sum });
            }
        }

        Ok(())
    }
}
