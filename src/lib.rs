#![warn(missing_docs)]

//! # `spanwood`
//!
//! Minimum spanning trees, and forests, of small weighted undirected graphs.
//! Begin by building a [`WeightedGraph`], either edge by edge with [`WeightedGraph::add_edge`] or by parsing its text matrix form.
//! Hand it to [`compute_mst`] (or a configured [`Kruskal`]) and receive a new graph holding only the edges of a minimum spanning forest.
//! [`savings`] gives the weight that can be dropped from a network without disconnecting any part of it.
//!
//! ```
//! use spanwood::{savings, WeightedGraph};
//!
//! let network: WeightedGraph = "\
//! -,16,12,21,-,-,-
//! 16,-,-,17,20,-,-
//! 12,-,-,28,-,31,-
//! 21,17,28,-,18,19,23
//! -,20,-,18,-,-,11
//! -,-,31,19,-,-,27
//! -,-,-,23,11,27,-
//! ".parse()?;
//!
//! assert_eq!(network.total_weight(), 243);
//! assert_eq!(savings(&network)?, 150);
//! # Ok::<(), spanwood::GraphError>(())
//! ```
//!
//! # Internals
//! Graphs are dense symmetric matrices of optional nonzero weights, which suits the tens of vertices this crate targets.
//! The engine is Kruskal's algorithm: sort every edge by weight, then accept each edge whose endpoints lie in different components
//! of the forest built so far. Because spanning forests form a matroid, this greedy choice is globally optimal.
//!
//! Components are tracked by a [`Partition`](partition::Partition); see the [`partition`] module for the available implementations.
//! Ties between equal weights are broken by endpoint indices, so a given input always produces the same forest.

pub use edge::{Edge, Vertex, Weight};
pub use error::{GraphError, InvalidEdge, MalformedReason};
pub use graph::WeightedGraph;
pub use mst::{compute_mst, savings, Kruskal};
pub use partition::PartitionStrategy;

pub(crate) mod edge;
pub(crate) mod error;
pub(crate) mod graph;
pub(crate) mod mst;
pub(crate) mod network;
pub mod partition;
mod tests;
