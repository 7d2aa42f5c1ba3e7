//! Benchmark support crate for Paris.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks for dendrogram construction and cut selection.

pub mod error;
pub mod params;
pub mod source;
