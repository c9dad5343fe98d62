use std::any::type_name;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::GraphError;
use crate::graph::WeightedGraph;
use crate::partition::{Partition, PartitionStrategy, RelabelPartition, UnionFind};

/// Kruskal's algorithm, with its knobs.
///
/// Edges are considered cheapest first (ties broken by endpoints, see [`Edge`](crate::Edge)'s ordering);
/// each one is kept unless its endpoints are already connected by edges kept earlier.
/// Disconnected inputs yield a spanning forest with one tree per connected component.
///
/// Neither knob changes the result, only how it is reached.
///
/// ```
/// use spanwood::{Edge, Kruskal, PartitionStrategy, WeightedGraph};
///
/// let mut graph = WeightedGraph::with_vertices(3);
/// graph.add_edge(Edge::new(0, 1, 1)?)?;
/// graph.add_edge(Edge::new(1, 2, 5)?)?;
/// graph.add_edge(Edge::new(0, 2, 2)?)?;
///
/// let forest = Kruskal::default()
///     .strategy(PartitionStrategy::Relabel)
///     .run(&graph)?;
/// assert_eq!(forest.total_weight(), 3);
/// # Ok::<(), spanwood::GraphError>(())
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Kruskal {
    strategy: PartitionStrategy,
    stop_when_spanning: bool,
}

impl Default for Kruskal {
    fn default() -> Self {
        Self {
            strategy: PartitionStrategy::default(),
            stop_when_spanning: true,
        }
    }
}

impl Kruskal {
    /// Choose the [`Partition`] used to track components.
    pub fn strategy(mut self, strategy: PartitionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Whether to stop scanning edges once every vertex is in a single component.
    pub fn stop_when_spanning(mut self, stop: bool) -> Self {
        self.stop_when_spanning = stop;
        self
    }

    /// Compute a minimum spanning forest of `graph` as a new graph on the same vertices.
    pub fn run(&self, graph: &WeightedGraph) -> Result<WeightedGraph, GraphError> {
        match self.strategy {
            PartitionStrategy::Relabel => self.run_with::<RelabelPartition>(graph),
            PartitionStrategy::UnionFind => self.run_with::<UnionFind>(graph),
        }
    }

    /// As [`Self::run`], but with a caller-supplied [`Partition`] type; the configured strategy is ignored.
    pub fn run_with<P: Partition>(&self, graph: &WeightedGraph) -> Result<WeightedGraph, GraphError> {
        let vertices = graph.num_vertices();
        let queue = graph.edges().sorted().collect_vec();
        debug!(vertices, edges = queue.len(), partition = type_name::<P>(), "computing minimum spanning forest");

        let mut components = P::with_singletons(vertices);
        let mut forest = WeightedGraph::with_vertices(vertices);

        for edge in queue {
            if self.stop_when_spanning && components.component_count() <= 1 {
                trace!("all vertices connected; skipping remaining edges");
                break;
            }

            let (a, b) = edge.endpoints();
            if components.connected(a, b) {
                trace!(%edge, "rejected, would close a cycle");
                continue;
            }

            forest.add_edge(edge)?;
            components.union(a, b);
            trace!(%edge, "accepted");
        }

        debug!(
            weight = forest.total_weight(),
            components = components.component_count(),
            "minimum spanning forest complete"
        );
        Ok(forest)
    }
}

/// A minimum spanning forest of `graph` using the default [`Kruskal`] configuration.
pub fn compute_mst(graph: &WeightedGraph) -> Result<WeightedGraph, GraphError> {
    Kruskal::default().run(graph)
}

/// The most total weight that can be removed from `graph` without disconnecting any two vertices that are currently connected.
pub fn savings(graph: &WeightedGraph) -> Result<u128, GraphError> {
    let forest = compute_mst(graph)?;
    Ok(graph.total_weight() - forest.total_weight())
}
