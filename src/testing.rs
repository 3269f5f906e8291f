//! Crate-internal test utilities: the `test_graph_ops!` conformance tests for graph
//! representations and a handful of graph fixtures shared by the algorithm tests.

/// Every graph representation should pass the conformance tests for the traits it implements
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random normalized edges without loops for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).filter_map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);

                    (u != v).then(|| Edge(u, v).normalized())
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.is_isolated(u)));
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                        }

                        // feed both orientations to make sure duplicates are ignored
                        let graph = <$graph>::from_edges(
                            n,
                            edges.iter().map(|e| e.reverse()).chain(edges.iter().copied()),
                        );

                        let m = edges.len() as NumEdges;

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(edges, graph.ordered_edges(true));

                        for u in 0..n {
                            assert_eq!(
                                graph.neighbors_of(u).collect_vec(),
                                adj_matrix[u as usize].iter_set_bits().collect_vec()
                            );
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);
                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];

                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                            assert!(!graph.try_add_edge(u, v));
                            assert!(graph.try_add_edge(v, u));
                        }

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            if adj_matrix[u as usize].clear_bit(v) {
                                assert!(adj_matrix[v as usize].clear_bit(u));
                                assert!(graph.try_remove_edge(v, u));
                                m -= 1;
                            } else {
                                assert!(!graph.try_remove_edge(u, v));
                            }

                            assert_eq!(m, graph.number_of_edges());
                        }

                        for Edge(u, v) in graph.clone().edges(true) {
                            graph.remove_edge(u, v);
                        }
                        assert!(graph.has_no_edges());
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
pub(crate) use fixtures::*;

#[cfg(test)]
mod fixtures {
    use itertools::Itertools;
    use rand::Rng;

    use crate::{gens::*, prelude::*};

    /// G(n, p) without self-loops
    pub fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> AdjMatrix {
        let mut graph = AdjMatrix::new(n);
        for (u, v) in (0..n).tuple_combinations() {
            if rng.random_bool(p) {
                graph.add_edge(u, v);
            }
        }
        graph
    }

    pub fn complete_graph(n: NumNodes) -> AdjMatrix {
        let mut graph = AdjMatrix::new(n);
        graph.connect_clique(0..n);
        graph
    }

    pub fn complete_bipartite(a: NumNodes, b: NumNodes) -> AdjMatrix {
        let mut graph = AdjMatrix::new(a + b);
        graph.connect_biclique(0..a, a..(a + b));
        graph
    }

    pub fn cycle_graph(n: NumNodes) -> AdjMatrix {
        let mut graph = AdjMatrix::new(n);
        graph.connect_cycle(0..n);
        graph
    }

    /// Star with center `0` and leaves `1..n`
    pub fn star_graph(n: NumNodes) -> AdjMatrix {
        let mut graph = AdjMatrix::new(n);
        graph.connect_star(0, 1..n);
        graph
    }

    /// Hub `0` connected to every node of the rim `1..n`
    pub fn wheel_graph(n: NumNodes) -> AdjMatrix {
        let mut graph = AdjMatrix::new(n);
        graph.connect_cycle(1..n);
        graph.connect_star(0, 1..n);
        graph
    }

    pub fn cube_graph() -> AdjMatrix {
        let mut graph = AdjMatrix::new(8);
        graph.connect_cycle([0, 1, 2, 3]);
        graph.connect_cycle([4, 5, 6, 7]);
        graph.add_edges([(0, 4), (1, 5), (2, 6), (3, 7)]);
        graph
    }

    pub fn petersen_graph() -> AdjMatrix {
        let mut graph = AdjMatrix::new(10);
        graph.connect_cycle(0..5);
        graph.connect_cycle([5, 7, 9, 6, 8]);
        graph.add_edges((0..5).map(|u| (u, u + 5)));
        graph
    }

    /// Random subgraph of a triangulated `rows x cols` grid. A snake path through all
    /// grid cells is always kept, so the result is connected (and, as a subgraph of a
    /// plane triangulation, planar).
    pub fn triangulated_grid<R: Rng>(rng: &mut R, rows: NumNodes, cols: NumNodes, p: f64) -> AdjMatrix {
        let idx = |r: NumNodes, c: NumNodes| r * cols + c;
        let mut graph = AdjMatrix::new(rows * cols);

        let snake = (0..rows)
            .flat_map(|r| {
                (0..cols).map(move |c| if r % 2 == 0 { idx(r, c) } else { idx(r, cols - 1 - c) })
            })
            .collect_vec();
        graph.connect_path(snake);

        for r in 0..rows {
            for c in 0..cols {
                let mut candidates = Vec::with_capacity(3);
                if c + 1 < cols {
                    candidates.push(idx(r, c + 1));
                }
                if r + 1 < rows {
                    candidates.push(idx(r + 1, c));
                }
                if r + 1 < rows && c + 1 < cols {
                    candidates.push(idx(r + 1, c + 1));
                }
                for v in candidates {
                    if rng.random_bool(p) {
                        graph.try_add_edge(idx(r, c), v);
                    }
                }
            }
        }
        graph
    }
}
