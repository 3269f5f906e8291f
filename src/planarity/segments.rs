//! Decomposition of the not yet embedded edges into segments.

use std::collections::{BTreeSet, VecDeque};

use super::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A single edge between two nodes of the plane graph
    Chord,
    /// Edges hanging off the plane graph through nodes not yet embedded
    Pendant,
}

/// A piece of the graph that is not yet embedded, relative to a plane graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Nodes of the plane graph the segment attaches to
    pub contacts: BTreeSet<Node>,
    /// Nodes of the segment not yet in the plane graph (empty for chords)
    pub component: BTreeSet<Node>,
    /// Edges owned by the segment, normalized
    pub edges: Vec<Edge>,
}

impl Segment {
    fn chord(u: Node, v: Node) -> Self {
        Self {
            kind: SegmentKind::Chord,
            contacts: BTreeSet::from([u, v]),
            component: BTreeSet::new(),
            edges: vec![Edge(u, v)],
        }
    }

    fn pendant() -> Self {
        Self {
            kind: SegmentKind::Pendant,
            contacts: BTreeSet::new(),
            component: BTreeSet::new(),
            edges: Vec::new(),
        }
    }
}

/// How pendant edges are grouped into segments
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SegmentGrouping {
    /// All pendant edges form a single segment
    Merged,
    /// One segment per connected group of nodes outside of the plane graph
    #[default]
    Split,
}

/// Splits `origin - plane` into segments relative to `plane`.
///
/// Chords are reported first (in lexicographic order), followed by the pendant segments
/// in the order their first edge appears in a lexicographic scan.
/// Every edge of `origin - plane` is owned by exactly one segment.
pub struct SegmentDecomposer<'a> {
    origin: &'a AdjMatrix,
    plane: &'a AdjMatrix,
    grouping: SegmentGrouping,
}

impl<'a> SegmentDecomposer<'a> {
    pub fn new(origin: &'a AdjMatrix, plane: &'a AdjMatrix) -> Self {
        Self {
            origin,
            plane,
            grouping: SegmentGrouping::default(),
        }
    }

    pub fn grouping(mut self, grouping: SegmentGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    fn in_plane(&self, u: Node) -> bool {
        !self.plane.is_isolated(u)
    }

    pub fn compute(&self) -> Vec<Segment> {
        let mut segments = self
            .origin
            .edges(true)
            .filter(|&Edge(u, v)| {
                self.in_plane(u) && self.in_plane(v) && !self.plane.has_edge(u, v)
            })
            .map(|Edge(u, v)| Segment::chord(u, v))
            .collect_vec();

        let pendant_edges = self
            .origin
            .difference(self.plane)
            .edges(true)
            .filter(|&Edge(u, v)| !(self.in_plane(u) && self.in_plane(v)))
            .collect_vec();

        if pendant_edges.is_empty() {
            return segments;
        }

        match self.grouping {
            SegmentGrouping::Merged => {
                let mut segment = Segment::pendant();
                for edge in pendant_edges {
                    self.assign(&mut segment, edge);
                }
                segments.push(segment);
            }
            SegmentGrouping::Split => segments.extend(self.split(pendant_edges)),
        }

        segments
    }

    fn assign(&self, segment: &mut Segment, edge: Edge) {
        for u in [edge.0, edge.1] {
            if self.in_plane(u) {
                segment.contacts.insert(u);
            } else {
                segment.component.insert(u);
            }
        }
        segment.edges.push(edge);
    }

    /// Labels the nodes outside of the plane graph by their connected group within
    /// `pendant_edges` and distributes the edges accordingly.
    fn split(&self, pendant_edges: Vec<Edge>) -> Vec<Segment> {
        let n = self.origin.number_of_nodes();
        let mut outside = AdjMatrix::new(n);
        for &Edge(u, v) in &pendant_edges {
            if !self.in_plane(u) && !self.in_plane(v) {
                outside.add_edge(u, v);
            }
        }

        let mut labels = vec![usize::MAX; n as usize];
        let mut groups: Vec<Segment> = Vec::new();
        let mut queue = VecDeque::new();

        for edge in pendant_edges {
            let inner = if self.in_plane(edge.0) { edge.1 } else { edge.0 };

            if labels[inner as usize] == usize::MAX {
                let label = groups.len();
                groups.push(Segment::pendant());

                labels[inner as usize] = label;
                queue.push_back(inner);
                while let Some(u) = queue.pop_front() {
                    for v in outside.neighbors_of(u) {
                        if labels[v as usize] == usize::MAX {
                            labels[v as usize] = label;
                            queue.push_back(v);
                        }
                    }
                }
            }

            self.assign(&mut groups[labels[inner as usize]], edge);
        }

        groups
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Triangle 0-1-2 embedded, two pendant nodes 3 and 4 attached to it
    fn example() -> (AdjMatrix, AdjMatrix) {
        let plane = AdjMatrix::from_cycle(5, &[0, 1, 2]);
        let origin = AdjMatrix::from_edges(5, [(0, 3), (1, 3), (0, 4), (2, 4)]);
        (origin, plane)
    }

    #[test]
    fn merged_pendants() {
        let (origin, plane) = example();
        let segments = SegmentDecomposer::new(&origin, &plane)
            .grouping(SegmentGrouping::Merged)
            .compute();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Pendant);
        assert_eq!(segments[0].contacts, BTreeSet::from([0, 1, 2]));
        assert_eq!(segments[0].component, BTreeSet::from([3, 4]));
        assert_eq!(segments[0].edges.len(), 4);
    }

    #[test]
    fn split_pendants() {
        let (origin, plane) = example();
        let segments = SegmentDecomposer::new(&origin, &plane).compute();

        assert_eq!(
            segments,
            vec![
                Segment {
                    kind: SegmentKind::Pendant,
                    contacts: BTreeSet::from([0, 1]),
                    component: BTreeSet::from([3]),
                    edges: vec![Edge(0, 3), Edge(1, 3)],
                },
                Segment {
                    kind: SegmentKind::Pendant,
                    contacts: BTreeSet::from([0, 2]),
                    component: BTreeSet::from([4]),
                    edges: vec![Edge(0, 4), Edge(2, 4)],
                },
            ]
        );
    }

    #[test]
    fn chords_come_first() {
        let plane = AdjMatrix::from_cycle(5, &[0, 1, 2, 3]);
        let origin = AdjMatrix::from_edges(5, [(0, 2), (1, 3), (3, 4), (1, 4)]);

        let segments = SegmentDecomposer::new(&origin, &plane).compute();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::chord(0, 2));
        assert_eq!(segments[1], Segment::chord(1, 3));
        assert_eq!(segments[2].kind, SegmentKind::Pendant);
        assert_eq!(segments[2].contacts, BTreeSet::from([1, 3]));
        assert_eq!(segments[2].component, BTreeSet::from([4]));
    }

    #[test]
    fn nothing_left() {
        let plane = cycle_graph(4);
        assert!(SegmentDecomposer::new(&plane.difference(&plane), &plane).compute().is_empty());
    }

    #[test]
    fn no_edge_is_dropped() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5e67);

        for grouping in [SegmentGrouping::Merged, SegmentGrouping::Split] {
            for _ in 0..100 {
                let graph = random_graph(rng, 20, 0.2);
                let cycle_len: Node = rng.random_range(3..10);
                let plane = AdjMatrix::from_cycle(20, &(0..cycle_len).collect_vec());
                let origin = graph.difference(&plane);

                let segments = SegmentDecomposer::new(&origin, &plane)
                    .grouping(grouping)
                    .compute();

                let mut owned = segments.iter().flat_map(|s| s.edges.iter().copied()).collect_vec();
                owned.sort();
                assert_eq!(owned, origin.ordered_edges(true));

                for segment in &segments {
                    assert!(segment.contacts.iter().all(|&u| !plane.is_isolated(u)));
                    assert!(segment.component.iter().all(|&u| plane.is_isolated(u)));
                }
            }
        }
    }
}
