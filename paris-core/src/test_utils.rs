//! Shared test utilities for `paris-core`.

use paris_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{Dendrogram, Graph, Merge};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `PARIS_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Two unit-weight triangles `{0, 1, 2}` and `{3, 4, 5}` joined by `2 – 3`.
#[must_use]
pub(crate) fn two_triangles() -> Graph {
    Graph::from_edges(
        6,
        [
            (0, 1, 1.0),
            (0, 2, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 1.0),
            (3, 5, 1.0),
            (4, 5, 1.0),
        ],
    )
    .expect("two triangles must be a valid graph")
}

/// Four leaves merged pairwise at 1 and 2, then joined at 4.
#[must_use]
pub(crate) fn four_leaf_reference() -> Dendrogram {
    Dendrogram::from_merges(vec![
        Merge::new(0, 1, 1.0, 2),
        Merge::new(2, 3, 2.0, 2),
        Merge::new(4, 5, 4.0, 4),
    ])
    .expect("reference merges must be valid")
}
