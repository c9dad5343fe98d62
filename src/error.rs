use thiserror::Error;

use crate::edge::Vertex;

/// Reasons an [`Edge`](crate::Edge) may be refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidEdge {
    /// Both endpoints are the same vertex.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: Vertex,
    },
    /// A weight of zero was given; zero cannot be told apart from "no edge".
    #[error("edge ({a}, {b}) has weight 0")]
    ZeroWeight {
        /// One endpoint.
        a: Vertex,
        /// The other endpoint.
        b: Vertex,
    },
}

/// Reasons a network matrix could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// A cell is neither `-` nor a positive integer.
    #[error("column {column}: unrecognised cell {token:?}")]
    BadToken {
        /// Zero-based column of the cell.
        column: usize,
        /// The raw cell text.
        token: String,
    },
    /// The row does not have one cell per vertex.
    #[error("expected {expected} cells, found {found}")]
    RaggedRow {
        /// Number of rows in the matrix, which every row must match.
        expected: usize,
        /// Number of cells actually present.
        found: usize,
    },
    /// The cell differs from its mirror across the diagonal.
    #[error("column {column}: weight differs from its mirror cell")]
    Asymmetric {
        /// Zero-based column of the offending cell.
        column: usize,
    },
    /// A weight sits on the diagonal, which would be a self-loop.
    #[error("weight on the diagonal")]
    DiagonalWeight,
    /// The underlying reader failed.
    #[error("read failed: {0}")]
    Io(String),
}

/// Everything that can go wrong while building graphs or computing spanning forests.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index outside `[0, N)` was passed to a graph accessor or mutator.
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index.
        vertex: Vertex,
        /// Vertex count of the graph it was used against.
        vertex_count: usize,
    },
    /// The edge itself is not representable.
    #[error("invalid edge: {0}")]
    InvalidEdge(#[from] InvalidEdge),
    /// The text form of a network could not be parsed.
    #[error("malformed input at row {row}: {reason}")]
    MalformedInput {
        /// Zero-based row of the problem.
        row: usize,
        /// What was wrong with it.
        reason: MalformedReason,
    },
}
