//! Faces of a plane graph under construction.
//!
//! Two face models are available to decide into which face a segment may be drawn:
//! - [`ApproximateFaces`] derives cycles from the back edges of a DFS. They are recomputed
//!   from the plane graph whenever needed but are not the faces of any drawing.
//! - [`TrackedFaces`] maintains the actual faces of the drawing, starting with both sides of
//!   the seed cycle and splitting a face in two whenever a path is drawn into it.
//!
//! Both produce [`CycleFace`]s which are only ever used for admissibility tests; the faces
//! reported for a planar graph are [`FacialWalk`](super::FacialWalk)s.

use std::collections::BTreeSet;

use super::*;

/// A cyclic sequence of nodes; the last node is implicitly connected to the first one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CycleFace(Vec<Node>);

impl CycleFace {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, u: Node) -> bool {
        self.0.contains(&u)
    }

    /// Returns *true* if every node of `nodes` lies on the face
    pub fn contains_all(&self, nodes: &BTreeSet<Node>) -> bool {
        nodes.iter().all(|&u| self.contains(u))
    }

    /// Returns the face with reversed orientation
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }

    /// Builds the cycle graph of this face on `n` nodes
    pub fn to_graph(&self, n: NumNodes) -> AdjMatrix {
        AdjMatrix::from_cycle(n, &self.0)
    }

    pub fn into_inner(self) -> Vec<Node> {
        self.0
    }
}

impl From<Vec<Node>> for CycleFace {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl AsRef<[Node]> for CycleFace {
    fn as_ref(&self) -> &[Node] {
        &self.0
    }
}

/// Which faces the embedding driver tests segments against
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FaceModel {
    /// Cycles closed by DFS back edges, recomputed every iteration
    BackEdgeCycles,
    /// The faces of the drawing, split along every embedded path
    #[default]
    Tracked,
}

/// Cycles closed by back edges of a depth-first search.
pub trait ApproximateFaces: AdjacencyList {
    /// Runs a DFS from every unvisited node (neighbors in ascending order). Whenever the
    /// search meets an already visited node `w` other than its parent and `w` lies on the
    /// current DFS path, the path from `w` to the current node is emitted as a face.
    fn approximate_faces(&self) -> Vec<CycleFace>;
}

impl<G> ApproximateFaces for G
where
    G: AdjacencyList,
{
    fn approximate_faces(&self) -> Vec<CycleFace> {
        let mut visited = self.vertex_bitset_unset();
        let mut faces = Vec::new();

        for root in self.vertices_range() {
            if visited.set_bit(root) {
                continue;
            }

            let mut path = vec![root];
            let mut stack = vec![(root, INVALID_NODE, self.neighbors_of(root))];

            while let Some((u, parent, neighbors)) = stack.last_mut() {
                let (u, parent) = (*u, *parent);

                let Some(w) = neighbors.next() else {
                    stack.pop();
                    path.pop();
                    continue;
                };

                if w == parent {
                    continue;
                }

                if !visited.set_bit(w) {
                    path.push(w);
                    stack.push((w, u, self.neighbors_of(w)));
                } else if let Some(pos) = path.iter().position(|&x| x == w) {
                    faces.push(CycleFace::new(path[pos..].to_vec()));
                }
            }
        }

        faces
    }
}

/// The faces of a plane graph, consistently oriented: every directed edge of the plane
/// graph lies on exactly one tracked face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFaces {
    faces: Vec<CycleFace>,
}

impl TrackedFaces {
    /// Both sides of the seed cycle
    pub fn new(seed: &CycleFace) -> Self {
        Self {
            faces: vec![seed.clone(), seed.reversed()],
        }
    }

    pub fn faces(&self) -> &[CycleFace] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Draws `path` into face `idx`, splitting it in two.
    /// The face is replaced by the part running from the first to the last node of the path
    /// and closed by the reversed path; the other part is appended.
    ///
    /// ** Panics if `idx` is out of bounds, the path has less than 2 nodes or one of its ends
    /// does not lie on the face **
    pub fn split(&mut self, idx: usize, path: &[Node]) {
        assert!(path.len() >= 2);
        let (a, b) = (path[0], path[path.len() - 1]);
        let inner = &path[1..path.len() - 1];

        let face = self.faces[idx].nodes();
        let start = face.iter().position(|&u| u == a).expect("path start is on the face");
        let rotated: Vec<Node> = face[start..].iter().chain(&face[..start]).copied().collect();
        let end = rotated.iter().position(|&u| u == b).expect("path end is on the face");

        let first: Vec<Node> = rotated[..=end]
            .iter()
            .chain(inner.iter().rev())
            .copied()
            .collect();
        let second: Vec<Node> = rotated[end..]
            .iter()
            .chain(std::iter::once(&a))
            .chain(inner)
            .copied()
            .collect();

        self.faces[idx] = CycleFace::new(first);
        self.faces.push(CycleFace::new(second));
    }

    pub fn into_faces(self) -> Vec<CycleFace> {
        self.faces
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;

    fn nodes(faces: &[CycleFace]) -> Vec<Vec<Node>> {
        faces.iter().map(|f| f.nodes().to_vec()).collect_vec()
    }

    #[test]
    fn approximate_faces_of_k4() {
        assert_eq!(
            nodes(&complete_graph(4).approximate_faces()),
            vec![vec![0, 1, 2], vec![0, 1, 2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn approximate_faces_of_forest() {
        assert!(star_graph(6).approximate_faces().is_empty());
        assert!(AdjMatrix::new(4).approximate_faces().is_empty());
    }

    #[test]
    fn approximate_faces_are_cycles() {
        for graph in [cube_graph(), petersen_graph(), wheel_graph(7)] {
            let faces = graph.approximate_faces();
            // one back edge per independent cycle
            assert_eq!(
                faces.len() as NumEdges,
                graph.number_of_edges() - graph.number_of_nodes() + 1
            );
            for face in faces {
                assert!(face.len() >= 3);
                assert!(face.to_graph(graph.number_of_nodes()).is_subgraph_of(&graph));
            }
        }
    }

    #[test]
    fn contains_all() {
        let face = CycleFace::new(vec![4, 2, 7]);
        assert!(face.contains_all(&BTreeSet::from([2, 7])));
        assert!(face.contains_all(&BTreeSet::new()));
        assert!(!face.contains_all(&BTreeSet::from([2, 3])));
    }

    #[test]
    fn split_keeps_orientation() {
        let mut faces = TrackedFaces::new(&CycleFace::new(vec![0, 1, 2]));
        assert_eq!(nodes(faces.faces()), vec![vec![0, 1, 2], vec![2, 1, 0]]);

        faces.split(0, &[0, 3, 1]);
        assert_eq!(
            nodes(faces.faces()),
            vec![vec![0, 1, 3], vec![2, 1, 0], vec![1, 2, 0, 3]]
        );

        faces.split(2, &[2, 3]);
        assert_eq!(
            nodes(faces.faces()),
            vec![vec![0, 1, 3], vec![2, 1, 0], vec![2, 0, 3], vec![3, 1, 2]]
        );

        // every directed edge of K4 on exactly one face
        let darts = faces
            .faces()
            .iter()
            .flat_map(|f| {
                let nodes = f.nodes();
                (0..nodes.len()).map(move |i| (nodes[i], nodes[(i + 1) % nodes.len()]))
            })
            .sorted()
            .collect_vec();
        assert_eq!(darts.len(), 12);
        assert!(darts.iter().tuple_windows().all(|(a, b)| a != b));
    }
}
