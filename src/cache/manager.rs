//! Cache manager for incrementally extended change tables
//!
//! Provides a `CacheManager` that answers change queries from an in-memory
//! table per denomination set, extends the table with the solver on a miss,
//! and persists it through an `ArtifactStore` so later processes start warm.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::store::ArtifactStore;
use super::table::ChangeTable;
use crate::change::{Denominations, GreedySolver, SolveError, Solver};

/// Errors returned by cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    /// The requested amount is negative
    #[error("invalid amount {0}: amount must not be negative")]
    InvalidAmount(i64),

    /// The solver could not produce a column
    #[error(transparent)]
    Unsolvable(#[from] SolveError),

    /// The extended table could not be written
    ///
    /// `counts` holds the answer that was computed before the write failed;
    /// the in-memory table stays extended.
    #[error("failed to persist change table to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        counts: Vec<u64>,
        #[source]
        source: io::Error,
    },

    /// The artifact exists but could not be deleted
    #[error("failed to clear change table at {}: {source}", .path.display())]
    Clear {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Serves minimum-coin queries from persisted, incrementally grown tables
///
/// Each denomination set is either not yet loaded (absent from `tables`) or
/// loaded. Loading happens on the first `get` for a set and reads the
/// artifact from the store; a missing or damaged artifact yields an empty
/// table. Extension only ever appends columns.
#[derive(Debug)]
pub struct CacheManager<S = GreedySolver> {
    solver: S,
    store: ArtifactStore,
    tables: HashMap<Denominations, ChangeTable>,
}

impl CacheManager<GreedySolver> {
    /// Creates a cache manager using the greedy solver
    pub fn new(store: ArtifactStore) -> Self {
        Self::with_solver(store, GreedySolver)
    }
}

impl<S: Solver> CacheManager<S> {
    /// Creates a cache manager with a custom solver
    pub fn with_solver(store: ArtifactStore, solver: S) -> Self {
        Self {
            solver,
            store,
            tables: HashMap::new(),
        }
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Current frontier for a set, or `None` if its table is not loaded
    pub fn frontier(&self, denominations: &Denominations) -> Option<usize> {
        self.tables.get(denominations).map(ChangeTable::frontier)
    }

    /// Returns the number of coins of each denomination needed to total `amount`
    ///
    /// # Arguments
    /// * `amount` - Amount of change; must not be negative
    /// * `denominations` - Coin values from least to greatest
    ///
    /// # Returns
    /// * `Ok(counts)` with one entry per denomination
    /// * `Err(CacheError::InvalidAmount)` for a negative amount
    /// * `Err(CacheError::Unsolvable)` if the solver fails while extending
    /// * `Err(CacheError::Persistence)` if the extended table could not be saved
    pub fn get(&mut self, amount: i64, denominations: &Denominations) -> Result<Vec<u64>, CacheError> {
        let index = usize::try_from(amount).map_err(|_| CacheError::InvalidAmount(amount))?;

        let table = self.load(denominations);
        if let Some(counts) = table.column(index) {
            tracing::debug!(amount, %denominations, "change table hit");
            return Ok(counts);
        }

        let counts = self.extend(index, denominations)?;
        self.persist(denominations, counts)
    }

    /// Deletes the persisted artifact for a set
    ///
    /// A missing artifact is not an error. Tables already loaded by this
    /// manager are kept; call [`CacheManager::reset`] to drop them too.
    pub fn clear(&self, denominations: &Denominations) -> Result<(), CacheError> {
        match self.store.remove(denominations) {
            Ok(removed) => {
                tracing::info!(%denominations, removed, "cleared change table artifact");
                Ok(())
            }
            Err(source) => Err(CacheError::Clear {
                path: self.store.artifact_path(denominations),
                source,
            }),
        }
    }

    /// Forgets the in-memory table for a set so the next `get` reloads it
    pub fn reset(&mut self, denominations: &Denominations) {
        self.tables.remove(denominations);
    }

    /// Returns the table for a set, restoring it from the store on first use
    fn load(&mut self, denominations: &Denominations) -> &mut ChangeTable {
        let store = &self.store;
        self.tables
            .entry(denominations.clone())
            .or_insert_with(|| restore(store, denominations))
    }

    /// Appends columns from the current frontier up to and including `amount`
    fn extend(&mut self, amount: usize, denominations: &Denominations) -> Result<Vec<u64>, CacheError> {
        let solver = &self.solver;
        let table = self
            .tables
            .entry(denominations.clone())
            .or_insert_with(|| ChangeTable::empty(denominations.len()));

        let start = table.frontier();
        tracing::debug!(from = start, to = amount, %denominations, "extending change table");

        let mut counts = Vec::new();
        for next in start..=amount {
            counts = solver.solve(next as u64, denominations)?;
            table.push_column(&counts);
        }
        Ok(counts)
    }

    /// Writes the table for a set, handing back `counts` on success
    fn persist(&self, denominations: &Denominations, counts: Vec<u64>) -> Result<Vec<u64>, CacheError> {
        let Some(table) = self.tables.get(denominations) else {
            return Ok(counts);
        };

        match self.store.write(denominations, table) {
            Ok(path) => {
                tracing::info!(path = %path.display(), frontier = table.frontier(), "persisted change table");
                Ok(counts)
            }
            Err(source) => {
                let path = self.store.artifact_path(denominations);
                tracing::warn!(path = %path.display(), error = %source, "failed to persist change table");
                Err(CacheError::Persistence { path, counts, source })
            }
        }
    }
}

/// Loads a validated table from the store, or an empty one
fn restore(store: &ArtifactStore, denominations: &Denominations) -> ChangeTable {
    let Some(artifact) = store.read(denominations) else {
        return ChangeTable::empty(denominations.len());
    };

    if artifact.denominations != *denominations {
        tracing::warn!(
            found = %artifact.denominations,
            expected = %denominations,
            "artifact belongs to another denomination set, starting empty"
        );
        return ChangeTable::empty(denominations.len());
    }

    match artifact.table.validate(denominations) {
        Ok(()) => {
            tracing::debug!(frontier = artifact.table.frontier(), %denominations, "restored change table");
            artifact.table
        }
        Err(e) => {
            tracing::warn!(error = %e, %denominations, "discarding inconsistent artifact");
            ChangeTable::empty(denominations.len())
        }
    }
}
