//! Stable error codes and classification exposed by the public API.

mod common;

use std::collections::BTreeSet;

use common::{NamedEdges, two_triangles};
use paris_core::{
    Dendrogram, DendrogramError, DendrogramErrorCode, ErrorKind, Graph, GraphError,
    GraphErrorCode, Merge, ParisBuilder, ParisError, ParisErrorCode, paris, reorder_dendrogram,
};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::NodeOutOfRange { node: 4, node_count: 3 },
    GraphErrorCode::NodeOutOfRange,
    "GRAPH_NODE_OUT_OF_RANGE",
)]
#[case(
    GraphError::InvalidWeight { left: 0, right: 1, weight: -1.0 },
    GraphErrorCode::InvalidWeight,
    "GRAPH_INVALID_WEIGHT",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] text: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), text);
    assert_eq!(expected.to_string(), text);
}

#[rstest]
#[case(
    ParisError::DegenerateInput { node_count: 2 },
    ParisErrorCode::DegenerateInput,
    ErrorKind::DegenerateInput,
)]
#[case(
    ParisError::WeightOverflow { node_count: 2 },
    ParisErrorCode::WeightOverflow,
    ErrorKind::InvalidInput,
)]
#[case(
    ParisError::CutOutOfRange { cut: 9, max: 3 },
    ParisErrorCode::CutOutOfRange,
    ErrorKind::InvalidInput,
)]
#[case(
    ParisError::ClusterIdOutOfRange { id: 9, max: 6 },
    ParisErrorCode::ClusterIdOutOfRange,
    ErrorKind::InvalidInput,
)]
#[case(
    ParisError::InvalidDistanceThreshold { distance: -1.0 },
    ParisErrorCode::InvalidDistanceThreshold,
    ErrorKind::InvalidInput,
)]
#[case(
    ParisError::InvalidFilterThreshold { threshold: f64::NAN },
    ParisErrorCode::InvalidFilterThreshold,
    ErrorKind::InvalidInput,
)]
fn returns_expected_paris_code(
    #[case] error: ParisError,
    #[case] expected: ParisErrorCode,
    #[case] kind: ErrorKind,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.kind(), kind);
    assert_eq!(error.dendrogram_code(), None);
    assert_eq!(error.graph_code(), None);
}

#[test]
fn malformed_edges_surface_graph_codes() {
    let graph = NamedEdges {
        name: "broken",
        node_count: 2,
        edges: vec![(0, 1, 1.0), (1, 2, 1.0)],
    };
    let err = paris(&graph).expect_err("node 2 is unknown");
    assert_eq!(err.code(), ParisErrorCode::Graph);
    assert_eq!(err.graph_code(), Some(GraphErrorCode::NodeOutOfRange));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn weightless_graphs_are_degenerate() {
    let err = paris(&Graph::new(4)).expect_err("no weight to cluster on");
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    assert_eq!(err.code().as_str(), "PARIS_DEGENERATE_INPUT");
}

#[test]
fn inversions_surface_dendrogram_codes() {
    let inverted =
        Dendrogram::from_merges(vec![Merge::new(0, 1, 2.0, 2), Merge::new(3, 2, 1.0, 3)])
            .expect("structure is valid");
    let err = reorder_dendrogram(&inverted).expect_err("parent merges below its child");
    assert_eq!(err.code(), ParisErrorCode::Dendrogram);
    assert_eq!(err.dendrogram_code(), Some(DendrogramErrorCode::Inversion));
    assert_eq!(
        err,
        ParisError::Dendrogram {
            error: DendrogramError::Inversion { step: 1, child: 3 }
        }
    );
}

#[test]
fn materialisers_reject_out_of_range_cuts() {
    let engine = ParisBuilder::new().build().expect("defaults are valid");
    let dendrogram = engine
        .dendrogram(&two_triangles())
        .expect("paris must succeed");

    let err = engine
        .clustering_from_homogeneous_cut(&dendrogram, 6)
        .expect_err("six leaves allow cuts up to 5");
    assert_eq!(err, ParisError::CutOutOfRange { cut: 6, max: 5 });

    let err = engine
        .clustering_from_cluster_cut(&dendrogram, 11)
        .expect_err("ids stop at 10");
    assert_eq!(err, ParisError::ClusterIdOutOfRange { id: 11, max: 10 });

    let err = engine
        .clustering_from_heterogeneous_cut(&dendrogram, &BTreeSet::from([8, 11]))
        .expect_err("ids stop at 10");
    assert_eq!(err.code(), ParisErrorCode::ClusterIdOutOfRange);

    let err = engine
        .clustering_from_distance(&dendrogram, f64::NAN)
        .expect_err("NaN is not a threshold");
    assert_eq!(err.code(), ParisErrorCode::InvalidDistanceThreshold);
}

#[rstest]
#[case(&[[0.0, 1.0, 1.0, 2.0], [2.0, 4.0, 1.0, 3.0]], DendrogramErrorCode::ForwardReference)]
#[case(&[[0.0, 1.0, 1.0, 2.0], [0.0, 2.0, 1.0, 3.0]], DendrogramErrorCode::DuplicateOperand)]
#[case(&[[0.0, 1.0, 1.0, 3.0], [2.0, 3.0, 1.0, 4.0]], DendrogramErrorCode::SizeMismatch)]
#[case(&[[0.0, 1.0, -1.0, 2.0], [2.0, 3.0, 1.0, 3.0]], DendrogramErrorCode::InvalidDistance)]
#[case(&[[0.5, 1.0, 1.0, 2.0], [2.0, 3.0, 1.0, 3.0]], DendrogramErrorCode::NonIntegralField)]
#[case(&[[0.0, 9.0, 1.0, 2.0], [2.0, 3.0, 1.0, 3.0]], DendrogramErrorCode::OperandOutOfRange)]
fn malformed_rows_are_rejected(#[case] rows: &[[f64; 4]], #[case] expected: DendrogramErrorCode) {
    let err = Dendrogram::from_rows(rows).expect_err("rows must be rejected");
    assert_eq!(err.code(), expected);
}
