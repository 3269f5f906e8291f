use super::*;

/// Extraction of the cycle the embedding starts from.
pub trait SeedFace: AdjacencyList {
    /// Runs a DFS from `start` (neighbors in ascending order) that stops as soon as the
    /// current node has a neighbor other than its DFS parent that is `start` itself.
    /// The current DFS path is returned; closing it with the edge back to `start` yields
    /// a cycle.
    ///
    /// Only cycles through `start` are found: if `start` lies on no cycle, the returned
    /// face is empty even if the graph contains cycles elsewhere.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNode`] if `start` is not a node of the graph.
    fn get_face(&self, start: Node) -> Result<CycleFace>;

    /// Same as [`SeedFace::get_face`] but reports an empty face as [`Error::NoCycle`],
    /// so that callers can retry with another start node.
    fn try_seed_face(&self, start: Node) -> Result<CycleFace> {
        let face = self.get_face(start)?;
        if face.is_empty() {
            return Err(Error::NoCycle(start));
        }
        Ok(face)
    }
}

impl<G> SeedFace for G
where
    G: AdjacencyList,
{
    fn get_face(&self, start: Node) -> Result<CycleFace> {
        if !self.contains_node(start) {
            return Err(Error::InvalidNode {
                node: start,
                n: self.number_of_nodes(),
            });
        }

        let mut visited = self.vertex_bitset_unset();
        visited.set_bit(start);

        let mut path = vec![start];
        let mut stack = vec![(start, start, self.neighbors_of(start))];

        while let Some((u, parent, neighbors)) = stack.last_mut() {
            let (u, parent) = (*u, *parent);

            let Some(v) = neighbors.next() else {
                stack.pop();
                path.pop();
                continue;
            };

            if v == start && v != parent {
                return Ok(CycleFace::new(path));
            }

            if !visited.set_bit(v) {
                path.push(v);
                stack.push((v, u, self.neighbors_of(v)));
            }
        }

        Ok(CycleFace::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;

    #[test]
    fn faces_of_k4() {
        let graph = complete_graph(4);
        assert_eq!(graph.get_face(0).unwrap().nodes(), &[0, 1, 2]);
        assert_eq!(graph.get_face(3).unwrap().nodes(), &[3, 0, 1, 2]);
    }

    #[test]
    fn face_of_cycle() {
        for n in [3, 4, 10] {
            let graph = cycle_graph(n);
            let face = graph.try_seed_face(0).unwrap();
            assert_eq!(face.nodes(), (0..n).collect::<Vec<_>>().as_slice());
            assert_eq!(face.to_graph(n), graph);
        }
    }

    #[test]
    fn no_face_in_tree() {
        let graph = star_graph(5);
        assert!(graph.get_face(0).unwrap().is_empty());
        assert!(graph.get_face(3).unwrap().is_empty());
        assert!(matches!(graph.try_seed_face(0), Err(Error::NoCycle(0))));
    }

    #[test]
    fn only_cycles_through_start() {
        // triangle 1-2-3 with pendant node 0
        let graph = AdjMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]);

        assert!(graph.get_face(0).unwrap().is_empty());
        assert!(matches!(graph.try_seed_face(0), Err(Error::NoCycle(0))));
        assert_eq!(graph.get_face(1).unwrap().nodes(), &[1, 2, 3]);
    }

    #[test]
    fn isolated_and_invalid_start() {
        let graph = AdjMatrix::from_edges(3, [(0, 1)]);
        assert!(graph.get_face(2).unwrap().is_empty());

        let err = graph.get_face(3).unwrap_err();
        assert!(matches!(err, Error::InvalidNode { node: 3, n: 3 }));
        assert!(err.is_format_error());
    }
}
