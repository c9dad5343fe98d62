//! Partitions of the vertex set into disjoint components.
//!
//! The spanning forest engine only needs to ask "which component is this vertex in" and "merge these two components".
//! Both operations are expressed by the [`Partition`] trait so the cheap-to-follow [`RelabelPartition`]
//! and the asymptotically faster [`UnionFind`] can be swapped freely; they always agree on which vertices share a component.

use strum::{Display, EnumString, VariantArray};

use crate::edge::Vertex;

/// Identifier of a component. Meaningful only for comparison against other ids from the same partition in the same state.
pub type ComponentId = usize;

/// A partition of `[0, n)` into disjoint components, initially all singletons.
pub trait Partition {
    /// A partition of `n` singleton components, where vertex `i` is in component `i`.
    fn with_singletons(n: usize) -> Self
    where
        Self: Sized;
    /// The component containing `vertex`.
    ///
    /// Panics if `vertex` is outside `[0, n)`; callers validate indices beforehand.
    fn find(&mut self, vertex: Vertex) -> ComponentId;
    /// Merge the components containing `a` and `b`.
    ///
    /// Returns `true` if they were distinct and have now been merged, `false` if they were already one component.
    fn union(&mut self, a: Vertex, b: Vertex) -> bool;
    /// The current number of components.
    fn component_count(&self) -> usize;
    /// The number of elements being partitioned.
    fn len(&self) -> usize;

    /// Whether this partition has no elements at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `a` and `b` are currently in the same component.
    fn connected(&mut self, a: Vertex, b: Vertex) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Names for the built-in [`Partition`] implementations.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "snake_case")]
pub enum PartitionStrategy {
    /// [`RelabelPartition`].
    Relabel,
    /// [`UnionFind`].
    #[default]
    UnionFind,
}

/// One label per vertex; merging rewrites the label of every vertex in the absorbed component.
///
/// `find` is O(1) and `union` is O(n), which is entirely adequate for graphs of a few dozen vertices.
#[derive(Clone, Debug)]
pub struct RelabelPartition {
    labels: Vec<ComponentId>,
    components: usize,
}

impl Partition for RelabelPartition {
    fn with_singletons(n: usize) -> Self {
        Self {
            labels: (0..n).collect(),
            components: n,
        }
    }

    fn find(&mut self, vertex: Vertex) -> ComponentId {
        self.labels[vertex]
    }

    fn union(&mut self, a: Vertex, b: Vertex) -> bool {
        let keep = self.labels[a];
        let absorb = self.labels[b];
        if keep == absorb {
            return false;
        }

        self.labels.iter_mut()
            .filter(|label| **label == absorb)
            .for_each(|label| *label = keep);
        self.components -= 1;
        true
    }

    fn component_count(&self) -> usize {
        self.components
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

/// Disjoint-set forest with path halving and union by rank.
///
/// When two roots of equal rank are merged, the lower ordinal becomes the root,
/// so the representative returned by `find` depends only on the sequence of unions performed.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<Vertex>,
    rank: Vec<u8>,
    components: usize,
}

impl Partition for UnionFind {
    fn with_singletons(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
            components: n,
        }
    }

    fn find(&mut self, mut x: Vertex) -> ComponentId {
        while self.parent[x] != x {
            // point at the grandparent as we go
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    fn union(&mut self, a: Vertex, b: Vertex) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.parent[child] = root;
                self.rank[root] += 1;
            }
        }

        self.components -= 1;
        true
    }

    fn component_count(&self) -> usize {
        self.components
    }

    fn len(&self) -> usize {
        self.parent.len()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn singletons<P: Partition>() {
        let mut p = P::with_singletons(5);
        assert_eq!(p.len(), 5);
        assert_eq!(p.component_count(), 5);
        for i in 0..5 {
            assert_eq!(p.find(i), i, "vertex {i} should start in its own component");
        }
    }

    fn union_merges_only_its_arguments<P: Partition>() {
        let mut p = P::with_singletons(4);
        assert!(p.union(0, 1));
        assert!(p.connected(0, 1));
        assert!(!p.connected(0, 2));
        assert!(!p.connected(2, 3));
        assert_eq!(p.component_count(), 3);
    }

    fn transitive<P: Partition>() {
        let mut p = P::with_singletons(3);
        p.union(0, 1);
        p.union(1, 2);
        assert!(p.connected(0, 2));
        assert_eq!(p.component_count(), 1);
    }

    fn repeated_union_is_a_no_op<P: Partition>() {
        let mut p = P::with_singletons(3);
        assert!(p.union(2, 0));
        let before = p.find(0);
        assert!(!p.union(0, 2));
        assert_eq!(p.find(0), before);
        assert_eq!(p.component_count(), 2);
    }

    fn chain_of_merges<P: Partition>() {
        const N: usize = 64;
        let mut p = P::with_singletons(N);
        for i in (1..N).rev() {
            p.union(i, i - 1);
        }
        let root = p.find(0);
        for i in 0..N {
            assert_eq!(p.find(i), root, "vertex {i} should share the root");
        }
        assert_eq!(p.component_count(), 1);
    }

    fn empty<P: Partition>() {
        let p = P::with_singletons(0);
        assert!(p.is_empty());
        assert_eq!(p.component_count(), 0);
    }

    fn all<P: Partition>() {
        singletons::<P>();
        union_merges_only_its_arguments::<P>();
        transitive::<P>();
        repeated_union_is_a_no_op::<P>();
        chain_of_merges::<P>();
        empty::<P>();
    }

    #[test]
    fn relabel_partition() {
        all::<RelabelPartition>();
    }

    #[test]
    fn union_find() {
        all::<UnionFind>();
    }

    #[test]
    fn relabel_absorbs_second_argument() {
        let mut p = RelabelPartition::with_singletons(4);
        p.union(1, 3);
        p.union(0, 1);
        assert_eq!(p.find(3), 0);
        assert_eq!(p.find(1), 0);
        assert_eq!(p.find(2), 2);
    }

    #[test]
    fn union_find_lower_ordinal_wins_ties() {
        let mut p = UnionFind::with_singletons(5);
        p.union(3, 1);
        assert_eq!(p.find(3), 1);

        // rank 1 root absorbs a singleton regardless of argument order
        p.union(0, 3);
        assert_eq!(p.find(0), 1);
    }

    #[test]
    fn strategy_names() {
        assert_eq!(PartitionStrategy::Relabel.to_string(), "relabel");
        assert_eq!(PartitionStrategy::UnionFind.to_string(), "union_find");
        assert_eq!(PartitionStrategy::from_str("union_find"), Ok(PartitionStrategy::UnionFind));
        assert!(PartitionStrategy::from_str("quick_find").is_err());
        assert_eq!(PartitionStrategy::VARIANTS.len(), 2);
        assert_eq!(PartitionStrategy::default(), PartitionStrategy::UnionFind);
    }
}
