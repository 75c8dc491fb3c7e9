//! Property-based tests for the aggregation and selection invariants
//!
//! Random case tables are generated, pushed through the full pipeline and
//! checked against brute-force sums over the raw rows.

mod aggregation_invariants;
mod generators;
