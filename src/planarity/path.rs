use std::collections::VecDeque;

use fxhash::FxHashMap;

use super::*;

/// Finds a path between two contacts of a segment that only uses the segment's own edges.
///
/// A BFS is started from every contact in ascending order. Only nodes of the segment's
/// component are expanded; the first contact other than the source that is reached ends
/// the search. The path runs from the source to that contact.
pub struct PathFinder<'a> {
    segment: &'a Segment,
    neighbors: FxHashMap<Node, Vec<Node>>,
}

impl<'a> PathFinder<'a> {
    pub fn new(segment: &'a Segment) -> Self {
        let mut neighbors: FxHashMap<Node, Vec<Node>> = FxHashMap::default();
        for &Edge(u, v) in &segment.edges {
            neighbors.entry(u).or_default().push(v);
            neighbors.entry(v).or_default().push(u);
        }
        for list in neighbors.values_mut() {
            list.sort_unstable();
            list.dedup();
        }

        Self { segment, neighbors }
    }

    /// Returns an empty path if no two contacts are connected through the segment
    pub fn compute(&self) -> Vec<Node> {
        self.segment
            .contacts
            .iter()
            .find_map(|&source| self.search_from(source))
            .unwrap_or_default()
    }

    fn neighbors_of(&self, u: Node) -> &[Node] {
        self.neighbors.get(&u).map(Vec::as_slice).unwrap_or_default()
    }

    fn search_from(&self, source: Node) -> Option<Vec<Node>> {
        let mut parent: FxHashMap<Node, Node> = FxHashMap::default();
        parent.insert(source, source);

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for &v in self.neighbors_of(u) {
                if v == source || parent.contains_key(&v) {
                    continue;
                }

                parent.insert(v, u);
                if self.segment.contacts.contains(&v) {
                    return Some(Self::rebuild(&parent, source, v));
                }

                if self.segment.component.contains(&v) {
                    queue.push_back(v);
                }
            }
        }

        None
    }

    fn rebuild(parent: &FxHashMap<Node, Node>, source: Node, target: Node) -> Vec<Node> {
        let mut path = vec![target];
        let mut u = target;
        while u != source {
            u = parent[&u];
            path.push(u);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;

    fn pendant(contacts: &[Node], component: &[Node], edges: &[(Node, Node)]) -> Segment {
        Segment {
            kind: SegmentKind::Pendant,
            contacts: contacts.iter().copied().collect(),
            component: component.iter().copied().collect(),
            edges: edges.iter().map(|&e| Edge::from(e).normalized()).collect(),
        }
    }

    #[test]
    fn chord_is_its_own_path() {
        let chord = Segment {
            kind: SegmentKind::Chord,
            contacts: BTreeSet::from([2, 5]),
            component: BTreeSet::new(),
            edges: vec![Edge(2, 5)],
        };
        assert_eq!(PathFinder::new(&chord).compute(), vec![2, 5]);
    }

    #[test]
    fn shortest_path_from_smallest_contact() {
        // contacts 0, 1, 2; component 3-4-5 with 0-3, 5-1 and 4-2
        let segment = pendant(
            &[0, 1, 2],
            &[3, 4, 5],
            &[(0, 3), (3, 4), (4, 5), (5, 1), (4, 2)],
        );
        assert_eq!(PathFinder::new(&segment).compute(), vec![0, 3, 4, 2]);
    }

    #[test]
    fn source_is_never_a_target() {
        // both ends of the component touch contact 0, only node 4 reaches contact 1
        let segment = pendant(&[0, 1], &[2, 3, 4], &[(0, 2), (0, 3), (2, 3), (3, 4), (4, 1)]);
        assert_eq!(PathFinder::new(&segment).compute(), vec![0, 3, 4, 1]);
    }

    #[test]
    fn disconnected_contacts() {
        let segment = pendant(&[0, 1], &[2, 3], &[(0, 2), (1, 3)]);
        assert!(PathFinder::new(&segment).compute().is_empty());

        let single = pendant(&[0], &[2], &[(0, 2)]);
        assert!(PathFinder::new(&single).compute().is_empty());
    }
}
