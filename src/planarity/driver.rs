//! The incremental embedding loop for a single biconnected block.

use std::time::Instant;

use super::*;

/// Result of an [`EmbeddingDriver`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every edge of the graph was embedded
    Embedded,
    /// The segment fits into no face of the plane graph
    Blocked(Segment),
}

#[derive(Debug, Clone)]
pub struct EmbeddingRun {
    pub verdict: Verdict,
    /// The plane graph reached when the driver stopped
    pub plane: AdjMatrix,
    /// Number of plane edges after the seed and after every iteration
    pub history: Vec<NumEdges>,
    /// Faces of the plane graph under the configured [`FaceModel`] when the driver stopped
    pub faces: Vec<CycleFace>,
}

impl EmbeddingRun {
    pub fn is_embedded(&self) -> bool {
        self.verdict == Verdict::Embedded
    }

    pub fn iterations(&self) -> usize {
        self.history.len() - 1
    }
}

/// Embeds a graph starting from a seed cycle by repeatedly drawing a path through the
/// segment with the fewest admissible faces (the first such segment on ties).
///
/// The driver expects a biconnected graph containing a cycle; on graphs with cut vertices
/// it may report [`Error::Stalled`] or a spurious [`Verdict::Blocked`].
pub struct EmbeddingDriver<'a> {
    graph: &'a AdjMatrix,
    grouping: SegmentGrouping,
    face_model: FaceModel,
    deadline: Option<Instant>,
}

impl<'a> EmbeddingDriver<'a> {
    pub fn new(graph: &'a AdjMatrix) -> Self {
        Self {
            graph,
            grouping: SegmentGrouping::default(),
            face_model: FaceModel::default(),
            deadline: None,
        }
    }

    pub fn segment_grouping(mut self, grouping: SegmentGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn face_model(mut self, face_model: FaceModel) -> Self {
        self.face_model = face_model;
        self
    }

    /// Aborts with [`Error::DeadlineExceeded`] if an iteration starts after `deadline`
    pub fn deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Seeds from the first node (in ascending order) that lies on a cycle found by
    /// [`SeedFace::get_face`]
    fn seed(&self) -> Result<CycleFace> {
        let first = self.graph.vertices_with_neighbors().next().unwrap_or(0);
        self.graph
            .vertices_with_neighbors()
            .find_map(|u| self.graph.try_seed_face(u).ok())
            .ok_or(Error::NoCycle(first))
    }

    /// # Errors
    /// - [`Error::NoCycle`] if the graph has no cycle to start from,
    /// - [`Error::Stalled`] if the selected segment has no path between two contacts,
    /// - [`Error::DeadlineExceeded`] if the deadline passed.
    pub fn run(&self) -> Result<EmbeddingRun> {
        let n = self.graph.number_of_nodes();

        let seed = self.seed()?;
        let mut plane = seed.to_graph(n);
        let mut origin = self.graph.clone();
        let mut tracked = (self.face_model == FaceModel::Tracked).then(|| TrackedFaces::new(&seed));
        let mut history = vec![plane.number_of_edges()];

        loop {
            let iteration = history.len() - 1;
            if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Err(Error::DeadlineExceeded {
                    iterations: iteration,
                });
            }

            origin = origin.difference(&plane);
            let segments = SegmentDecomposer::new(&origin, &plane)
                .grouping(self.grouping)
                .compute();

            let approximate;
            let faces = match &tracked {
                Some(tracked) => tracked.faces(),
                None => {
                    approximate = plane.approximate_faces();
                    approximate.as_slice()
                }
            };

            // (number of admissible faces, segment, first admissible face)
            let mut best: Option<(usize, usize, usize)> = None;
            for (idx, segment) in segments.iter().enumerate() {
                let mut admissible = faces
                    .iter()
                    .positions(|face| face.contains_all(&segment.contacts));

                let Some(first) = admissible.next() else {
                    tracing::debug!(
                        iteration,
                        contacts = ?segment.contacts,
                        "segment fits into no face"
                    );
                    return Ok(EmbeddingRun {
                        verdict: Verdict::Blocked(segment.clone()),
                        faces: faces.to_vec(),
                        plane,
                        history,
                    });
                };

                let count = 1 + admissible.count();
                if best.is_none_or(|(best_count, _, _)| count < best_count) {
                    best = Some((count, idx, first));
                }
            }

            let Some((count, idx, face)) = best else {
                tracing::debug!(iteration, edges = plane.number_of_edges(), "block embedded");
                let faces = match tracked {
                    Some(tracked) => tracked.into_faces(),
                    None => plane.approximate_faces(),
                };
                return Ok(EmbeddingRun {
                    verdict: Verdict::Embedded,
                    plane,
                    history,
                    faces,
                });
            };

            let segment = &segments[idx];
            let path = PathFinder::new(segment).compute();
            let next = plane.union(&AdjMatrix::from_path(n, &path));
            if next.number_of_edges() <= plane.number_of_edges() {
                return Err(Error::Stalled {
                    contacts: segment.contacts.iter().copied().collect(),
                });
            }

            if let Some(tracked) = tracked.as_mut() {
                tracked.split(face, &path);
            }

            plane = next;
            history.push(plane.number_of_edges());

            tracing::trace!(
                iteration,
                segments = segments.len(),
                admissible = count,
                path = ?path,
                edges = plane.number_of_edges(),
                "embedded path"
            );
        }
    }
}
