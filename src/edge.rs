use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::num::NonZero;

use unordered_pair::UnorderedPair;

use crate::error::InvalidEdge;

/// A vertex index in `[0, N)`.
pub type Vertex = usize;
/// An edge weight. Zero is unrepresentable, so an absent edge is always `None` rather than `0`.
pub type Weight = NonZero<u64>;

/// An undirected, weighted edge between two distinct vertices.
///
/// Endpoints are stored lowest first, so `Edge::new(2, 0, w)` and `Edge::new(0, 2, w)` are the same edge.
///
/// Edges order by weight, then by `(v1, v2)`.
/// This total order is what makes spanning forests reproducible when weights tie.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    // stored (low, high) so v1 and v2 are stable
    vertices: UnorderedPair<Vertex>,
    weight: Weight,
}

impl Edge {
    /// Construct an edge between `a` and `b`, refusing self-loops and zero weights.
    pub fn new(a: Vertex, b: Vertex, weight: u64) -> Result<Self, InvalidEdge> {
        let weight = NonZero::new(weight).ok_or(InvalidEdge::ZeroWeight { a, b })?;
        Self::with_weight(a, b, weight)
    }

    /// Construct an edge from an already nonzero weight.
    pub fn with_weight(a: Vertex, b: Vertex, weight: Weight) -> Result<Self, InvalidEdge> {
        if a == b {
            return Err(InvalidEdge::SelfLoop { vertex: a });
        }

        Ok(Self {
            vertices: UnorderedPair(a.min(b), a.max(b)),
            weight,
        })
    }

    /// The lower-indexed endpoint.
    #[inline]
    pub fn v1(&self) -> Vertex {
        self.vertices.0
    }

    /// The higher-indexed endpoint.
    #[inline]
    pub fn v2(&self) -> Vertex {
        self.vertices.1
    }

    /// Both endpoints, lowest first.
    #[inline]
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.vertices.0, self.vertices.1)
    }

    /// The weight of this edge.
    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: Vertex) -> bool {
        self.vertices.0 == vertex || self.vertices.1 == vertex
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not on this edge.
    pub fn other(&self, vertex: Vertex) -> Option<Vertex> {
        match vertex {
            v if v == self.vertices.0 => Some(self.vertices.1),
            v if v == self.vertices.1 => Some(self.vertices.0),
            _ => None,
        }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
            // tie; lexicographic on endpoints
            .then_with(|| self.endpoints().cmp(&other.endpoints()))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}): {}", self.v1(), self.v2(), self.weight)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge {}", self)
    }
}
