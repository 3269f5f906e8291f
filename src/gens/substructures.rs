/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques** and **complete bipartite graphs**
- **Stars**

# Example

```rust
use uplanar::{prelude::*, gens::*};

let mut g = AdjMatrix::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
///
/// Edges that already exist are kept, and self-loops are never created.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use uplanar::{prelude::*, gens::*};
    ///
    /// let mut g = AdjMatrix::new(4);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and
    /// the last node is connected back to the first.
    ///
    /// # Example
    /// ```rust
    /// use uplanar::{prelude::*, gens::*};
    ///
    /// let mut g = AdjMatrix::new(3);
    /// g.connect_cycle([0, 1, 2]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 0));
    /// ```
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects every node of `left` with every node of `right`.
    fn connect_biclique<L, R>(&mut self, left: L, right: R)
    where
        L: IntoIterator<Item = Node>,
        R: IntoIterator<Item = Node>;

    /// Connects `center` with every node of `leaves`.
    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            if u != v {
                self.try_add_edge(u, v);
            }
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                if prev != cur {
                    self.try_add_edge(prev, cur);
                }
                prev = cur;
            }

            if prev != first {
                self.try_add_edge(prev, first);
            }
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            if u != v {
                self.try_add_edge(u, v);
            }
        }
    }

    fn connect_biclique<L, R>(&mut self, left: L, right: R)
    where
        L: IntoIterator<Item = Node>,
        R: IntoIterator<Item = Node>,
    {
        let right = right.into_iter().collect_vec();
        for u in left {
            for &v in &right {
                if u != v {
                    self.try_add_edge(u, v);
                }
            }
        }
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>,
    {
        self.connect_biclique([center], leaves);
    }
}
