use quickcheck::Arbitrary;

use crate::prelude::*;
use crate::tracing_support::{TimingScope, info_span, init_tracing, set_timing_scope};

/// A randomly built graph together with the edges that were added to it, in
/// insertion order.
#[derive(Debug, Clone)]
pub struct ArbGraph<V> {
    pub graph: Graph<V>,
    pub added: Vec<Edge>,
}

impl<V> Arbitrary for ArbGraph<V>
where
    V: Arbitrary + Clone + 'static,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_self_loops = usize::arbitrary(g) % 5;

        let mut graph = Graph::from_vertices((0..num_vertices).map(|_| V::arbitrary(g)));
        let mut added = Vec::new();
        if num_vertices > 0 {
            for i in 0..num_edges {
                let u = usize::arbitrary(g) % num_vertices;
                let v = usize::arbitrary(g) % num_vertices;
                let edge = Edge::new(u, v);
                graph
                    .add_edge(edge)
                    .expect("generated indices are in range");
                added.push(edge);
                if i < num_extra_self_loops {
                    let edge = Edge::new(u, u);
                    graph
                        .add_edge(edge)
                        .expect("generated indices are in range");
                    added.push(edge);
                }
            }
        }

        ArbGraph { graph, added }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Drop trailing edges one at a time, rebuilding from the same vertices.
        let vertices = self.graph.vertices().to_vec();
        let added = self.added.clone();
        Box::new((0..added.len()).rev().map(move |keep| {
            let mut graph = Graph::from_vertices(vertices.clone());
            for &edge in &added[..keep] {
                graph
                    .add_edge(edge)
                    .expect("edges were valid when first added");
            }
            ArbGraph {
                graph,
                added: added[..keep].to_vec(),
            }
        }))
    }
}

/// Checks the structural invariants of a graph, panicking on the first
/// violation.
pub fn check_graph_consistency<V>(graph: &Graph<V>) {
    init_tracing();
    let _scope = set_timing_scope(TimingScope::Consistency);
    let _span = info_span!("check_graph_consistency").entered();

    let n = graph.vertex_count();
    assert_eq!(graph.vertices().len(), n);

    let mut total = 0;
    for index in 0..n {
        let edges = graph
            .edges_for_index(index)
            .expect("every vertex has an adjacency list");
        total += edges.len();
        for edge in edges {
            assert_eq!(edge.u, index, "edge {edge} stored under vertex {index}");
            assert!(edge.v < n, "edge {edge} points past {n} vertices");
        }
    }
    assert_eq!(graph.edge_count(), total);
    assert_eq!(total % 2, 0, "odd number of directed edges");

    // Every directed edge must be matched by its reversal, counting
    // multiplicity. Self loops pair up with themselves.
    let mut unmatched: Vec<Edge> = graph.edges().copied().collect();
    unmatched.sort();
    let mut reversed: Vec<Edge> = graph.edges().map(Edge::reversed).collect();
    reversed.sort();
    assert_eq!(unmatched, reversed, "adjacency lists are not symmetric");
    assert!(graph.edges_for_index(n).is_err());
}
