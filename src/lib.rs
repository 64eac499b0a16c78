//! Greedy coin change with a persistent solution table
//!
//! `change` holds the denomination type and the solver, `cache` the
//! incrementally extended, disk-backed table, and `cli` the argument parsing
//! used by the `makechange` binary.

pub mod cache;
pub mod change;
pub mod cli;
