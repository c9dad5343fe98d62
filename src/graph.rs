use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;

use crate::edge::{Edge, Vertex, Weight};
use crate::error::GraphError;
use crate::partition::{Partition, UnionFind};

/// An undirected weighted graph on a fixed number of vertices `[0, N)`.
///
/// Backed by a dense, always symmetric `N x N` matrix in which every cell holds an optional [`Weight`].
/// The diagonal is never populated since self-loops cannot be represented.
///
/// Use [`Self::with_vertices`] (or [`Self::set_vertices`] on an existing graph) and then [`Self::add_edge`],
/// or parse the text form described on the [`FromStr`](std::str::FromStr) impl.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedGraph {
    cells: Array2<Option<Weight>>,
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::with_vertices(0)
    }
}

impl WeightedGraph {
    /// A graph of `n` vertices and no edges.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            cells: Array2::from_elem((n, n), None),
        }
    }

    pub(crate) fn from_cells(cells: Array2<Option<Weight>>) -> Self {
        debug_assert_eq!(cells.nrows(), cells.ncols());
        Self { cells }
    }

    /// Discard every edge and resize to `n` vertices.
    pub fn set_vertices(&mut self, n: usize) {
        self.cells = Array2::from_elem((n, n), None);
    }

    /// The vertex count `N`.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    fn check(&self, vertex: Vertex) -> Result<(), GraphError> {
        if vertex < self.num_vertices() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange { vertex, vertex_count: self.num_vertices() })
        }
    }

    /// The edge between `i` and `j`, or `Ok(None)` if there is none.
    ///
    /// Fails with [`GraphError::IndexOutOfRange`] if either index is not a vertex of this graph.
    pub fn edge(&self, i: Vertex, j: Vertex) -> Result<Option<Edge>, GraphError> {
        self.check(i)?;
        self.check(j)?;

        Ok(self.cells[[i, j]]
            .map(|weight| Edge::with_weight(i, j, weight))
            .transpose()?)
    }

    /// Insert `edge`, replacing whatever edge was already present between the same two vertices.
    ///
    /// Returns the weight that was replaced, if any.
    pub fn add_edge(&mut self, edge: Edge) -> Result<Option<Weight>, GraphError> {
        let (a, b) = edge.endpoints();
        self.check(a)?;
        self.check(b)?;

        let previous = self.cells[[a, b]].replace(edge.weight());
        self.cells[[b, a]] = Some(edge.weight());
        Ok(previous)
    }

    /// Remove and return the edge between `i` and `j`, if there is one.
    pub fn remove_edge(&mut self, i: Vertex, j: Vertex) -> Result<Option<Edge>, GraphError> {
        let removed = self.edge(i, j)?;
        if removed.is_some() {
            self.cells[[i, j]] = None;
            self.cells[[j, i]] = None;
        }

        Ok(removed)
    }

    /// Every edge exactly once, in no particular order.
    ///
    /// The iterator borrows the graph and can be recreated at will.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.num_vertices())
            .tuple_combinations()
            // the upper triangle mirrors the lower one, so it alone is enough
            .filter_map(move |(a, b)| self.cells[[a, b]].and_then(|weight| Edge::with_weight(a, b, weight).ok()))
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Sum of the weights of all distinct edges.
    ///
    /// Widened to `u128` since a handful of large `u64` weights can already exceed `u64::MAX`.
    pub fn total_weight(&self) -> u128 {
        self.edges().map(|e| u128::from(e.weight().get())).sum()
    }

    /// Number of connected components, counting isolated vertices as components of their own.
    pub fn component_count(&self) -> usize {
        let mut partition = UnionFind::with_singletons(self.num_vertices());
        for edge in self.edges() {
            partition.union(edge.v1(), edge.v2());
        }

        partition.component_count()
    }

    /// Whether this graph has no cycles.
    pub fn is_forest(&self) -> bool {
        self.edge_count() + self.component_count() == self.num_vertices()
    }

    /// Copy this graph into a [`petgraph`] graph map with raw `u64` weights, keeping isolated vertices as nodes.
    pub fn to_graph_map(&self) -> UnGraphMap<Vertex, u64> {
        let mut graph = UnGraphMap::with_capacity(self.num_vertices(), self.edge_count());
        for vertex in 0..self.num_vertices() {
            graph.add_node(vertex);
        }
        for edge in self.edges() {
            graph.add_edge(edge.v1(), edge.v2(), edge.weight().get());
        }

        graph
    }
}

/// Renders the matrix in the format read by [`FromStr`](std::str::FromStr): one comma-separated row per vertex, `-` for no edge.
impl Display for WeightedGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            let line = row.iter()
                .map(|cell| match cell {
                    Some(weight) => weight.to_string(),
                    None => String::from("-"),
                })
                .join(",");
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
