//! Error types for the Paris core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building or reading a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint lies outside `[0, node_count)`.
    #[error("edge references node {node}, but node_count is {node_count}")]
    NodeOutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// An edge weight was negative, NaN or infinite.
    #[error("edge ({left}, {right}) has invalid weight {weight}")]
    InvalidWeight {
        /// First endpoint as supplied.
        left: usize,
        /// Second endpoint as supplied.
        right: usize,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint lies outside the graph.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// An edge weight was negative, NaN or infinite.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_INVALID_WEIGHT",
    }
}

/// A structural defect in a sequence of merge records.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DendrogramError {
    /// The number of merges does not match `leaf_count - 1`.
    #[error("{leaf_count} leaves require {expected} merges, got {merges}")]
    LengthMismatch {
        /// Declared number of leaves.
        leaf_count: usize,
        /// Number of merges required by the leaf count.
        expected: usize,
        /// Number of merges supplied.
        merges: usize,
    },
    /// An operand id does not name any leaf or cluster of the tree.
    #[error("merge {step} references id {id}, but the largest id is {max_id}")]
    OperandOutOfRange {
        /// Index of the offending merge.
        step: usize,
        /// The unknown operand id.
        id: usize,
        /// Largest id the dendrogram can contain.
        max_id: usize,
    },
    /// An operand refers to a cluster created by the same or a later merge.
    #[error("merge {step} references cluster {id} before it is created")]
    ForwardReference {
        /// Index of the offending merge.
        step: usize,
        /// The cluster referenced too early.
        id: usize,
    },
    /// An id is consumed by more than one merge.
    #[error("merge {step} reuses id {id}, which was already merged")]
    DuplicateOperand {
        /// Index of the offending merge.
        step: usize,
        /// The id merged twice.
        id: usize,
    },
    /// The recorded cluster size is not the sum of its operands' sizes.
    #[error("merge {step} records size {recorded}, but its operands hold {expected} leaves")]
    SizeMismatch {
        /// Index of the offending merge.
        step: usize,
        /// Size implied by the operands.
        expected: usize,
        /// Size stored in the record.
        recorded: usize,
    },
    /// A merge distance was negative or NaN.
    #[error("merge {step} has invalid distance {distance}")]
    InvalidDistance {
        /// Index of the offending merge.
        step: usize,
        /// The rejected distance.
        distance: f64,
    },
    /// An interchange row held a non-integral or negative id or size.
    #[error("row {row}, column {column} holds {value}, expected a non-negative integer")]
    NonIntegralField {
        /// Index of the offending row.
        row: usize,
        /// Column index within the row.
        column: usize,
        /// The rejected value.
        value: f64,
    },
    /// A cluster merges at a smaller distance than one of its children, so no
    /// distance ordering can keep children ahead of parents.
    #[error("merge {step} happens at a smaller distance than its child cluster {child}")]
    Inversion {
        /// Index of the offending merge in the input order.
        step: usize,
        /// Child cluster created at a larger distance.
        child: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DendrogramError`] variants.
    enum DendrogramErrorCode for DendrogramError {
        /// The number of merges does not match the leaf count.
        LengthMismatch => LengthMismatch { .. } => "DENDROGRAM_LENGTH_MISMATCH",
        /// An operand id does not name any leaf or cluster.
        OperandOutOfRange => OperandOutOfRange { .. } => "DENDROGRAM_OPERAND_OUT_OF_RANGE",
        /// An operand refers to a cluster that does not exist yet.
        ForwardReference => ForwardReference { .. } => "DENDROGRAM_FORWARD_REFERENCE",
        /// An id is consumed by more than one merge.
        DuplicateOperand => DuplicateOperand { .. } => "DENDROGRAM_DUPLICATE_OPERAND",
        /// A recorded size disagrees with the operand sizes.
        SizeMismatch => SizeMismatch { .. } => "DENDROGRAM_SIZE_MISMATCH",
        /// A merge distance was negative or NaN.
        InvalidDistance => InvalidDistance { .. } => "DENDROGRAM_INVALID_DISTANCE",
        /// An interchange row held a malformed field.
        NonIntegralField => NonIntegralField { .. } => "DENDROGRAM_NON_INTEGRAL_FIELD",
        /// Distances cannot be ordered consistently with the tree.
        Inversion => Inversion { .. } => "DENDROGRAM_INVERSION",
    }
}

/// Broad classification of a [`ParisError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// An argument was outside its valid range or a dendrogram was malformed.
    InvalidInput,
    /// The input graph has no weight, so the Paris distance is undefined.
    DegenerateInput,
}

/// Error type produced by Paris clustering and dendrogram slicing.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParisError {
    /// The input graph was malformed.
    #[error("invalid graph: {error}")]
    Graph {
        /// Underlying graph defect.
        #[from]
        error: GraphError,
    },
    /// A dendrogram violated its structural invariants.
    #[error("malformed dendrogram: {error}")]
    Dendrogram {
        /// Underlying structural defect.
        #[from]
        error: DendrogramError,
    },
    /// The total edge weight of a graph with at least two nodes is zero.
    #[error("graph with {node_count} nodes has zero total weight")]
    DegenerateInput {
        /// Number of nodes in the rejected graph.
        node_count: usize,
    },
    /// Edge weights are too large for the Paris distance to stay finite.
    #[error("edge weights of a graph with {node_count} nodes overflow the Paris distance")]
    WeightOverflow {
        /// Number of nodes in the rejected graph.
        node_count: usize,
    },
    /// A merge-index cut lies outside `[0, max]`.
    #[error("cut {cut} is outside [0, {max}]")]
    CutOutOfRange {
        /// The rejected cut.
        cut: usize,
        /// Largest accepted cut.
        max: usize,
    },
    /// A cluster id lies outside `[0, max]`.
    #[error("cluster id {id} is outside [0, {max}]")]
    ClusterIdOutOfRange {
        /// The rejected id.
        id: usize,
        /// Largest accepted id.
        max: usize,
    },
    /// A distance threshold was negative or NaN.
    #[error("distance threshold {distance} must be a non-negative number")]
    InvalidDistanceThreshold {
        /// The rejected threshold.
        distance: f64,
    },
    /// A ranking filter threshold was negative or not finite.
    #[error("filter threshold {threshold} must be finite and non-negative")]
    InvalidFilterThreshold {
        /// The rejected threshold.
        threshold: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`ParisError`] variants.
    enum ParisErrorCode for ParisError {
        /// The input graph was malformed.
        Graph => Graph { .. } => "PARIS_INVALID_GRAPH",
        /// A dendrogram violated its structural invariants.
        Dendrogram => Dendrogram { .. } => "PARIS_MALFORMED_DENDROGRAM",
        /// The graph has no weight.
        DegenerateInput => DegenerateInput { .. } => "PARIS_DEGENERATE_INPUT",
        /// The edge weights overflow the Paris distance.
        WeightOverflow => WeightOverflow { .. } => "PARIS_WEIGHT_OVERFLOW",
        /// A merge-index cut was out of range.
        CutOutOfRange => CutOutOfRange { .. } => "PARIS_CUT_OUT_OF_RANGE",
        /// A cluster id was out of range.
        ClusterIdOutOfRange => ClusterIdOutOfRange { .. } => "PARIS_CLUSTER_ID_OUT_OF_RANGE",
        /// A distance threshold was invalid.
        InvalidDistanceThreshold => InvalidDistanceThreshold { .. } => "PARIS_INVALID_DISTANCE_THRESHOLD",
        /// A ranking filter threshold was invalid.
        InvalidFilterThreshold => InvalidFilterThreshold { .. } => "PARIS_INVALID_FILTER_THRESHOLD",
    }
}

impl ParisError {
    /// Classifies the error as invalid or degenerate input.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DegenerateInput { .. } => ErrorKind::DegenerateInput,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// Retrieve the inner [`DendrogramErrorCode`] when a dendrogram was malformed.
    #[must_use]
    pub const fn dendrogram_code(&self) -> Option<DendrogramErrorCode> {
        match self {
            Self::Dendrogram { error } => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`GraphErrorCode`] when the graph was malformed.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ParisError>;
