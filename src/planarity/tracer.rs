//! Faces of a drawing described by a rotation system.
//!
//! A [`RotationSystem`] stores for every node the cyclic order of its neighbors around it.
//! Walking a directed edge `(a, b)` always continues with `(b, c)` where `c` follows `a`
//! in the rotation of `b`; the closed walks obtained this way are the faces of the
//! drawing described by the rotation system.

use fxhash::FxHashSet;
use smallvec::SmallVec;

use super::*;

type Rotation = SmallVec<[Node; 8]>;

/// A cyclic order of the neighbors of every node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationSystem {
    rotations: Vec<Rotation>,
}

impl RotationSystem {
    /// Creates a rotation system on `n` nodes without any edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            rotations: vec![Rotation::new(); n as usize],
        }
    }

    /// Every node's neighbors ordered by id. Deterministic, but in general not the
    /// rotation system of a planar drawing.
    pub fn sorted<G: AdjacencyList>(graph: &G) -> Self {
        Self {
            rotations: graph
                .vertices_range()
                .map(|u| graph.neighbors_of(u).collect())
                .collect(),
        }
    }

    /// Derives the rotation system from consistently oriented faces: if a face contains
    /// `u -> v -> w`, then `w` follows `u` around `v`. Each rotation starts at the
    /// smallest neighbor.
    pub fn from_faces<F: AsRef<[Node]>>(n: NumNodes, faces: &[F]) -> Self {
        // (predecessor, successor) pairs around every node
        let mut turns: Vec<Vec<(Node, Node)>> = vec![Vec::new(); n as usize];
        for face in faces {
            let face = face.as_ref();
            let len = face.len();
            for (i, &v) in face.iter().enumerate() {
                let u = face[(i + len - 1) % len];
                let w = face[(i + 1) % len];
                turns[v as usize].push((u, w));
            }
        }

        let rotations = turns
            .into_iter()
            .map(|mut turns| {
                turns.sort_unstable();
                let mut rotation = Rotation::new();
                let Some(&(first, _)) = turns.first() else {
                    return rotation;
                };

                let mut u = first;
                while rotation.len() < turns.len() {
                    rotation.push(u);
                    let Ok(pos) = turns.binary_search_by_key(&u, |&(pred, _)| pred) else {
                        break;
                    };
                    u = turns[pos].1;
                    if u == first {
                        break;
                    }
                }
                rotation
            })
            .collect();

        Self { rotations }
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.rotations.len() as NumNodes
    }

    /// Number of directed edges, i.e. twice the number of edges
    pub fn number_of_darts(&self) -> usize {
        self.rotations.iter().map(|r| r.len()).sum()
    }

    pub fn rotation_of(&self, u: Node) -> &[Node] {
        &self.rotations[u as usize]
    }

    /// Inserts the edge `(u, v)` at the end of both rotations
    pub fn add_edge(&mut self, u: Node, v: Node) {
        self.rotations[u as usize].push(v);
        self.rotations[v as usize].push(u);
    }

    /// Appends the rotation of every node in `other` to the one in `self`.
    /// Used to glue the rotation systems of blocks sharing a cut vertex.
    ///
    /// ** Panics if `other` has more nodes than `self` **
    pub fn splice(&mut self, other: &RotationSystem) {
        assert!(other.rotations.len() <= self.rotations.len());
        for (rotation, appended) in self.rotations.iter_mut().zip(&other.rotations) {
            rotation.extend_from_slice(appended);
        }
    }

    /// Returns the neighbor following `u` in the rotation of `v`, or `None` if `u` is
    /// not a neighbor of `v`
    pub fn next_after(&self, v: Node, u: Node) -> Option<Node> {
        let rotation = &self.rotations[v as usize];
        let pos = rotation.iter().position(|&x| x == u)?;
        Some(rotation[(pos + 1) % rotation.len()])
    }
}

/// A closed walk of directed edges; the `i`-th node is the tail of the `i`-th directed edge.
/// A node may occur several times, e.g. on both sides of a bridge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FacialWalk(Vec<Node>);

impl FacialWalk {
    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    /// Number of directed edges of the walk
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Node> {
        self.0
    }
}

impl AsRef<[Node]> for FacialWalk {
    fn as_ref(&self) -> &[Node] {
        &self.0
    }
}

/// Computes the facial walks of a [`RotationSystem`].
pub struct FaceTracer<'a> {
    rotation: &'a RotationSystem,
}

impl<'a> FaceTracer<'a> {
    pub fn new(rotation: &'a RotationSystem) -> Self {
        Self { rotation }
    }

    /// Starts a walk at every not yet visited directed edge in lexicographic order.
    /// Walks returning to their first directed edge with at least 3 directed edges are
    /// reported.
    pub fn trace(&self) -> Vec<FacialWalk> {
        let mut darts = (0..self.rotation.number_of_nodes())
            .flat_map(|u| self.rotation.rotation_of(u).iter().map(move |&v| (u, v)))
            .collect_vec();
        darts.sort_unstable();

        let mut visited: FxHashSet<(Node, Node)> = FxHashSet::default();
        let mut walks = Vec::new();

        for &start in &darts {
            if visited.contains(&start) {
                continue;
            }

            let mut walk = Vec::new();
            let mut dart = start;
            let closed = loop {
                visited.insert(dart);
                walk.push(dart.0);

                let (a, b) = dart;
                let Some(c) = self.rotation.next_after(b, a) else {
                    break false;
                };

                dart = (b, c);
                if dart == start {
                    break true;
                }
                if visited.contains(&dart) {
                    break false;
                }
            };

            if closed && walk.len() >= 3 {
                walks.push(FacialWalk(walk));
            }
        }

        walks
    }

    /// The facial walks without the outer face of every connected component.
    /// The outer face is the walk with the most directed edges, the later one on ties.
    pub fn bounded_faces(&self) -> Vec<FacialWalk> {
        let walks = self.trace();
        let labels = self.component_labels();

        let mut outer: Vec<Option<usize>> = vec![None; self.rotation.number_of_nodes() as usize];
        for (idx, walk) in walks.iter().enumerate() {
            let label = labels[walk.nodes()[0] as usize] as usize;
            if outer[label].is_none_or(|current| walk.len() >= walks[current].len()) {
                outer[label] = Some(idx);
            }
        }

        let outer: FxHashSet<usize> = outer.into_iter().flatten().collect();
        walks
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| !outer.contains(idx))
            .map(|(_, walk)| walk)
            .collect()
    }

    /// Labels every node with the smallest node of its connected component
    fn component_labels(&self) -> Vec<Node> {
        let n = self.rotation.number_of_nodes();
        let mut labels = vec![INVALID_NODE; n as usize];

        for root in 0..n {
            if labels[root as usize] != INVALID_NODE {
                continue;
            }

            labels[root as usize] = root;
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for &v in self.rotation.rotation_of(u) {
                    if labels[v as usize] == INVALID_NODE {
                        labels[v as usize] = root;
                        stack.push(v);
                    }
                }
            }
        }

        labels
    }
}
