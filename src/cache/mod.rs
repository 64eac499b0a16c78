//! Cache module for storing solved change tables
//!
//! This module provides a cache manager that keeps one table of solved amounts
//! per denomination set, extends it on demand, and persists it to disk so that
//! amounts are never recomputed across process restarts. Missing or damaged
//! artifacts degrade to an empty table instead of an error.

mod manager;
mod store;
mod table;

pub use manager::{CacheError, CacheManager};
pub use store::{Artifact, ArtifactStore, DEFAULT_FILE_TEMPLATE, DENOMINATIONS_PLACEHOLDER};
pub use table::{ChangeTable, TableError};
