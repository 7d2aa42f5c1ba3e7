//! Property-based tests for dendrogram construction and cut selection.
//!
//! Generates weighted graphs across several topologies and checks the
//! structural invariants of the Paris dendrogram, the canonical ordering,
//! and the agreement between every slicer and the partition materialisers.

mod cuts;
mod strategies;
mod structural;
mod types;
