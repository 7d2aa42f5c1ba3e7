//! Paris hierarchical clustering of weighted graphs.
//!
//! [`paris`] builds a [`Dendrogram`] with the nearest-neighbour chain driven
//! by the Paris distance. The [`slicing`] module scores cuts through that
//! dendrogram and [`partition`] turns any cut back into groups of leaves.
//! [`Paris`] bundles the configurable strategies, built through
//! [`ParisBuilder`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
pub mod dendrogram;
mod error;
mod graph;
mod paris;
pub mod partition;
pub mod slicing;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_FILTER_THRESHOLD, ParisBuilder},
    dendrogram::{Dendrogram, Merge, paris, reorder_dendrogram},
    error::{
        DendrogramError, DendrogramErrorCode, ErrorKind, GraphError, GraphErrorCode, ParisError,
        ParisErrorCode, Result,
    },
    graph::{Graph, WeightedGraph},
    paris::Paris,
    partition::{
        Partition, clustering_from_cluster_cut, clustering_from_distance,
        clustering_from_heterogeneous_cut, clustering_from_homogeneous_cut,
    },
    slicing::Scored,
};
