#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{compute_mst, savings, Edge, GraphError, InvalidEdge, Kruskal, PartitionStrategy, WeightedGraph};

    const SAMPLE_NETWORK: &str = "-,16,12,21,-,-,-
16,-,-,17,20,-,-
12,-,-,28,-,31,-
21,17,28,-,18,19,23
-,20,-,18,-,-,11
-,-,31,19,-,-,27
-,-,-,23,11,27,-
";

    #[test]
    fn build_replace_and_weigh() {
        let mut g = WeightedGraph::with_vertices(3);
        g.add_edge(Edge::new(0, 1, 1).unwrap()).unwrap();
        g.add_edge(Edge::new(1, 2, 5).unwrap()).unwrap();
        g.add_edge(Edge::new(0, 2, 2).unwrap()).unwrap();
        assert_eq!(g.edge(1, 2).unwrap().map(|e| e.weight().get()), Some(5));

        g.add_edge(Edge::new(1, 2, 13).unwrap()).unwrap();
        assert_eq!(g.edge(1, 2).unwrap().map(|e| e.weight().get()), Some(13));
        assert_eq!(g.total_weight(), 16);
    }

    #[test]
    fn sample_network() {
        let network: WeightedGraph = SAMPLE_NETWORK.parse().unwrap();
        assert_eq!(network.num_vertices(), 7);
        assert_eq!(network.edge_count(), 12);
        assert_eq!(network.total_weight(), 243);

        let forest = compute_mst(&network).unwrap();
        assert_eq!(forest.total_weight(), 93);
        assert_eq!(forest.edge_count(), 6);
        assert!(forest.is_forest());
        assert_eq!(forest.component_count(), 1);
        assert_eq!(savings(&network).unwrap(), 150);

        assert_eq!(
            forest.edges().sorted().map(|e| e.endpoints()).collect_vec(),
            vec![(4, 6), (0, 2), (0, 1), (1, 3), (3, 4), (3, 5)]
        );
    }

    #[test]
    fn strategies_agree_on_sample() {
        let network: WeightedGraph = SAMPLE_NETWORK.parse().unwrap();
        let relabel = Kruskal::default().strategy(PartitionStrategy::Relabel).run(&network).unwrap();
        let union_find = Kruskal::default().strategy(PartitionStrategy::UnionFind).run(&network).unwrap();
        assert_eq!(relabel, union_find);
    }

    #[test]
    fn forest_survives_a_second_pass() {
        let network: WeightedGraph = SAMPLE_NETWORK.parse().unwrap();
        let once = compute_mst(&network).unwrap();
        let twice = compute_mst(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn repeated_runs_are_identical() {
        // every weight the same, so only the tie-break decides
        let mut g = WeightedGraph::with_vertices(5);
        for (a, b) in (0..5).tuple_combinations() {
            g.add_edge(Edge::new(a, b, 1).unwrap()).unwrap();
        }

        let first = compute_mst(&g).unwrap();
        let second = compute_mst(&g).unwrap();
        assert_eq!(first, second);
        // a star around vertex 0
        assert_eq!(
            first.edges().sorted().map(|e| e.endpoints()).collect_vec(),
            vec![(0, 1), (0, 2), (0, 3), (0, 4)]
        );
    }

    #[test]
    fn bad_edges_never_reach_the_graph() {
        let mut g = WeightedGraph::with_vertices(3);
        assert_eq!(Edge::new(1, 1, 4).map_err(GraphError::from), Err(GraphError::InvalidEdge(InvalidEdge::SelfLoop { vertex: 1 })));
        assert_eq!(Edge::new(0, 1, 0), Err(InvalidEdge::ZeroWeight { a: 0, b: 1 }));
        assert_eq!(
            g.add_edge(Edge::new(0, 3, 4).unwrap()),
            Err(GraphError::IndexOutOfRange { vertex: 3, vertex_count: 3 })
        );
        assert_eq!(g.edge_count(), 0);
    }
}
