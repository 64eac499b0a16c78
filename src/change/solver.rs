//! Greedy largest-denomination-first change solver
//!
//! The greedy rule is only optimal for canonical coin systems such as
//! `1, 5, 10, 25`. Cached tables hold exactly what this rule produces.

use super::Denominations;
use thiserror::Error;

/// Errors that can occur while solving a single amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No denomination fits the remaining amount
    #[error("cannot make change for {amount}: {remaining} left over and no denomination fits")]
    Unsolvable { amount: u64, remaining: u64 },
}

/// Computes one column of a change table
pub trait Solver {
    /// Returns the count of each denomination used to make `amount`
    fn solve(&self, amount: u64, denominations: &Denominations) -> Result<Vec<u64>, SolveError>;
}

impl<F> Solver for F
where
    F: Fn(u64, &Denominations) -> Result<Vec<u64>, SolveError>,
{
    fn solve(&self, amount: u64, denominations: &Denominations) -> Result<Vec<u64>, SolveError> {
        self(amount, denominations)
    }
}

/// The production solver, backed by [`solve_amount`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn solve(&self, amount: u64, denominations: &Denominations) -> Result<Vec<u64>, SolveError> {
        solve_amount(amount, denominations)
    }
}

/// Returns the number of coins of each denomination needed to total `amount`
///
/// Coins are taken one at a time, always the largest denomination that does
/// not overshoot the target.
///
/// # Arguments
/// * `amount` - Amount of change to make
/// * `denominations` - Coin values from least to greatest
///
/// # Returns
/// * `Ok(counts)` with one entry per denomination, in the same order
/// * `Err(SolveError::Unsolvable)` if the set has no coin small enough for what remains
///
/// # Example
/// ```
/// use makechange::change::{solve_amount, Denominations};
///
/// let coins = Denominations::us_coins();
/// assert_eq!(solve_amount(6, &coins).unwrap(), vec![1, 1, 0, 0]);
/// ```
pub fn solve_amount(amount: u64, denominations: &Denominations) -> Result<Vec<u64>, SolveError> {
    let values = denominations.values();
    let mut counts = vec![0; values.len()];
    let mut total = 0;

    while total < amount {
        let remaining = amount - total;
        let index = next_coin(values, remaining)
            .ok_or(SolveError::Unsolvable { amount, remaining })?;
        counts[index] += 1;
        total += values[index];
    }

    Ok(counts)
}

/// Index of the largest denomination not exceeding `remaining`
fn next_coin(values: &[u64], remaining: u64) -> Option<usize> {
    values.iter().rposition(|&value| value <= remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> Denominations {
        Denominations::us_coins()
    }

    #[test]
    fn test_zero_amount_is_all_zeros() {
        assert_eq!(solve_amount(0, &us()).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_six_cents() {
        assert_eq!(solve_amount(6, &us()).unwrap(), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_forty_one_cents_uses_one_of_each() {
        assert_eq!(solve_amount(41, &us()).unwrap(), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_large_amount_with_bills() {
        let denominations =
            Denominations::new(vec![1, 5, 10, 25, 100, 500, 1000, 2000]).unwrap();
        let counts = solve_amount(4683, &denominations).unwrap();

        assert_eq!(counts, vec![3, 1, 0, 3, 1, 1, 0, 2]);
        assert_eq!(denominations.weighted_sum(&counts), 4683);
    }

    #[test]
    fn test_greedy_is_kept_for_non_canonical_sets() {
        // Optimal would be 3 + 3; greedy takes 4 + 1 + 1.
        let denominations = Denominations::new(vec![1, 3, 4]).unwrap();
        assert_eq!(solve_amount(6, &denominations).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_unsolvable_without_unit_coin() {
        let denominations = Denominations::new(vec![2, 5]).unwrap();
        let err = solve_amount(3, &denominations).unwrap_err();

        assert_eq!(err, SolveError::Unsolvable { amount: 3, remaining: 1 });
        assert!(err.to_string().contains("cannot make change for 3"));
    }

    #[test]
    fn test_greedy_can_fail_where_change_exists() {
        // 6 = 2 + 2 + 2, but greedy takes 5 first and is left with 1.
        let denominations = Denominations::new(vec![2, 5]).unwrap();
        assert_eq!(
            solve_amount(6, &denominations),
            Err(SolveError::Unsolvable { amount: 6, remaining: 1 })
        );
    }

    #[test]
    fn test_sum_matches_amount_for_first_hundred() {
        let denominations = us();
        for amount in 0..100 {
            let counts = solve_amount(amount, &denominations).unwrap();
            assert_eq!(denominations.weighted_sum(&counts), amount);
        }
    }

    #[test]
    fn test_greedy_solver_and_closure_agree() {
        let closure = |amount: u64, denominations: &Denominations| solve_amount(amount, denominations);
        assert_eq!(
            GreedySolver.solve(76, &us()).unwrap(),
            closure.solve(76, &us()).unwrap()
        );
    }
}
