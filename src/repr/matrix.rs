use std::fmt::Debug;

use itertools::Itertools;

use super::*;
use crate::testing::test_graph_ops;

/// An undirected simple graph stored as a symmetric adjacency matrix.
///
/// Row `u` is a [`NodeBitSet`] with bit `v` set iff the edge `{u, v}` exists.
/// The matrix is kept symmetric by every editing operation and never contains self-loops.
/// Working copies (`difference`, `union`, ...) are always fresh values, never views.
#[derive(Clone, PartialEq)]
pub struct AdjMatrix {
    rows: Vec<NodeBitSet>,
    num_edges: NumEdges,
}

impl Debug for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjMatrix")
            .field("n", &self.number_of_nodes())
            .field("edges", &self.ordered_edges(true))
            .finish()
    }
}

impl GraphNew for AdjMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![NodeBitSet::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.rows[u as usize].iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].cardinality()
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.rows[u as usize].get_bit(v)
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        debug_assert_ne!(u, v, "self-loops are not supported");
        if self.rows[u as usize].set_bit(v) {
            true
        } else {
            assert!(!self.rows[v as usize].set_bit(u));
            self.num_edges += 1;
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.rows[u as usize].clear_bit(v) {
            assert!(self.rows[v as usize].clear_bit(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl AdjMatrix {
    /// Returns a copy of `self` with every edge of `other` removed.
    ///
    /// Both matrices must have the same number of nodes.
    pub fn difference(&self, other: &Self) -> Self {
        debug_assert_eq!(self.number_of_nodes(), other.number_of_nodes());

        let mut result = self.clone();
        for Edge(u, v) in other.edges(true) {
            result.try_remove_edge(u, v);
        }
        result
    }

    /// Returns a copy of `self` that additionally contains every edge of `other`.
    ///
    /// Both matrices must have the same number of nodes.
    pub fn union(&self, other: &Self) -> Self {
        debug_assert_eq!(self.number_of_nodes(), other.number_of_nodes());

        let mut result = self.clone();
        result.add_edges(other.edges(true));
        result
    }

    /// Builds the graph of a closed vertex sequence: consecutive nodes are connected
    /// and the last node is connected back to the first.
    pub fn from_cycle(n: NumNodes, cycle: &[Node]) -> Self {
        let mut graph = Self::from_path(n, cycle);
        if let (Some(&first), Some(&last)) = (cycle.first(), cycle.last()) {
            if first != last {
                graph.try_add_edge(last, first);
            }
        }
        graph
    }

    /// Builds the graph of an open vertex sequence: only consecutive nodes are connected.
    pub fn from_path(n: NumNodes, path: &[Node]) -> Self {
        let mut graph = Self::new(n);
        for (&u, &v) in path.iter().tuple_windows() {
            if u != v {
                graph.try_add_edge(u, v);
            }
        }
        graph
    }

    /// Returns *true* if every edge of `self` is also an edge of `other`
    pub fn is_subgraph_of(&self, other: &Self) -> bool {
        self.number_of_nodes() == other.number_of_nodes()
            && self.edges(true).all(|Edge(u, v)| other.has_edge(u, v))
    }
}

test_graph_ops!(
    test_adj_matrix,
    AdjMatrix,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
