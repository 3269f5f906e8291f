/*!
# Planarity

Decides whether a graph can be drawn in the plane without crossings and reconstructs the
faces of such a drawing.

The graph is split into its biconnected blocks; a graph is planar iff all its blocks are.
Every block with more than one edge is handed to an [`EmbeddingDriver`] which
1. seeds the plane graph with a cycle ([`SeedFace`]),
2. splits the remaining edges into [`Segment`]s ([`SegmentDecomposer`]),
3. counts for every segment the faces containing all of its contacts,
4. draws a path ([`PathFinder`]) through the segment with the fewest such faces,

until either nothing is left or some segment fits into no face. The rotation systems of
all blocks are glued together and traced ([`FaceTracer`]) to report the bounded faces.

```
use uplanar::{prelude::*, planarity::*};

let k5 = AdjMatrix::from_edges(5, (0..5).flat_map(|u| ((u + 1)..5).map(move |v| (u, v))));
assert!(!k5.is_planar().unwrap());

let triangle = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
let faces = triangle.find_faces().unwrap().unwrap();
assert_eq!(faces.len(), 1);
assert_eq!(faces[0].nodes(), &[0, 1, 2]);
```
*/

mod driver;
mod faces;
mod path;
mod seed;
mod segments;
mod tracer;

use std::time::Instant;

use itertools::Itertools;

use crate::{algo::*, error::*, prelude::*};

pub use driver::*;
pub use faces::*;
pub use path::*;
pub use seed::*;
pub use segments::*;
pub use tracer::*;

/// A planar drawing of a graph, described by its rotation system
#[derive(Debug, Clone)]
pub struct PlanarEmbedding {
    plane: AdjMatrix,
    rotation: RotationSystem,
    histories: Vec<Vec<NumEdges>>,
    faces: Vec<FacialWalk>,
}

impl PlanarEmbedding {
    /// The embedded graph; equals the input graph
    pub fn plane(&self) -> &AdjMatrix {
        &self.plane
    }

    pub fn rotation(&self) -> &RotationSystem {
        &self.rotation
    }

    /// Edge count history of the embedding driver for every block with more than one edge
    pub fn histories(&self) -> &[Vec<NumEdges>] {
        &self.histories
    }

    /// The bounded faces of the drawing
    pub fn faces(&self) -> &[FacialWalk] {
        &self.faces
    }

    /// All facial walks of the drawing, including the outer face of every component
    pub fn facial_walks(&self) -> Vec<FacialWalk> {
        FaceTracer::new(&self.rotation).trace()
    }

    pub fn into_faces(self) -> Vec<FacialWalk> {
        self.faces
    }
}

/// Witness for a graph that could not be embedded
#[derive(Debug, Clone)]
pub struct Obstruction {
    /// The block the driver failed on
    pub block: AdjMatrix,
    /// The plane subgraph of the block reached before failing
    pub plane: AdjMatrix,
    /// The segment that fits into no face of `plane`
    pub segment: Segment,
}

#[derive(Debug, Clone)]
pub enum PlanarityOutcome {
    Planar(PlanarEmbedding),
    NonPlanar(Obstruction),
}

impl PlanarityOutcome {
    pub fn is_planar(&self) -> bool {
        matches!(self, PlanarityOutcome::Planar(_))
    }

    pub fn embedding(&self) -> Option<&PlanarEmbedding> {
        match self {
            PlanarityOutcome::Planar(embedding) => Some(embedding),
            PlanarityOutcome::NonPlanar(_) => None,
        }
    }

    pub fn into_embedding(self) -> Option<PlanarEmbedding> {
        match self {
            PlanarityOutcome::Planar(embedding) => Some(embedding),
            PlanarityOutcome::NonPlanar(_) => None,
        }
    }
}

/// Configurable planarity test.
///
/// The defaults ([`SegmentGrouping::Split`], [`FaceModel::Tracked`]) decide planarity
/// correctly. [`SegmentGrouping::Merged`] and [`FaceModel::BackEdgeCycles`] are kept for
/// comparison; with either of them planar graphs such as `K4` may be reported as non-planar,
/// and with [`FaceModel::BackEdgeCycles`] faces are traced on the sorted rotation system.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarityTest {
    grouping: SegmentGrouping,
    face_model: FaceModel,
    deadline: Option<Instant>,
}

impl PlanarityTest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment_grouping(mut self, grouping: SegmentGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn face_model(mut self, face_model: FaceModel) -> Self {
        self.face_model = face_model;
        self
    }

    /// Aborts with [`Error::DeadlineExceeded`] if an embedding step starts after `deadline`
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Tests `graph` for planarity.
    ///
    /// # Errors
    /// Non-planarity is not an error. Errors are only returned if the deadline passed or
    /// the embedding driver got stuck, which only happens with non-default settings.
    pub fn run(&self, graph: &AdjMatrix) -> Result<PlanarityOutcome> {
        let n = graph.number_of_nodes();
        let blocks = graph.biconnected_components();
        tracing::debug!(
            nodes = n,
            edges = graph.number_of_edges(),
            blocks = blocks.len(),
            "testing planarity"
        );

        let mut plane = AdjMatrix::new(n);
        let mut rotation = RotationSystem::new(n);
        let mut histories = Vec::new();

        for block in blocks {
            if let [Edge(u, v)] = block[..] {
                plane.add_edge(u, v);
                rotation.add_edge(u, v);
                continue;
            }

            let block = AdjMatrix::from_edges(n, block);
            let run = EmbeddingDriver::new(&block)
                .segment_grouping(self.grouping)
                .face_model(self.face_model)
                .deadline(self.deadline)
                .run()?;

            match run.verdict {
                Verdict::Blocked(segment) => {
                    tracing::debug!(
                        block_edges = block.number_of_edges(),
                        embedded = run.plane.number_of_edges(),
                        "graph is not planar"
                    );
                    return Ok(PlanarityOutcome::NonPlanar(Obstruction {
                        block,
                        plane: run.plane,
                        segment,
                    }));
                }
                Verdict::Embedded => {
                    if self.face_model == FaceModel::Tracked {
                        rotation.splice(&RotationSystem::from_faces(n, &run.faces));
                    }
                    plane = plane.union(&run.plane);
                    histories.push(run.history);
                }
            }
        }

        if self.face_model == FaceModel::BackEdgeCycles {
            rotation = RotationSystem::sorted(graph);
        }

        let faces = FaceTracer::new(&rotation).bounded_faces();
        tracing::debug!(faces = faces.len(), "graph is planar");

        Ok(PlanarityOutcome::Planar(PlanarEmbedding {
            plane,
            rotation,
            histories,
            faces,
        }))
    }
}

/// Planarity queries with the default [`PlanarityTest`]
pub trait Planarity {
    /// Returns *true* if the graph can be drawn without crossings
    fn is_planar(&self) -> Result<bool>;

    /// Returns the bounded faces of a planar drawing or `None` if the graph is not planar
    fn find_faces(&self) -> Result<Option<Vec<FacialWalk>>>;

    /// Returns a planar drawing or `None` if the graph is not planar
    fn planar_embedding(&self) -> Result<Option<PlanarEmbedding>>;
}

impl Planarity for AdjMatrix {
    fn is_planar(&self) -> Result<bool> {
        Ok(PlanarityTest::default().run(self)?.is_planar())
    }

    fn find_faces(&self) -> Result<Option<Vec<FacialWalk>>> {
        Ok(self.planar_embedding()?.map(PlanarEmbedding::into_faces))
    }

    fn planar_embedding(&self) -> Result<Option<PlanarEmbedding>> {
        Ok(PlanarityTest::default().run(self)?.into_embedding())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use std::time::Duration;

    fn faces_of(graph: &AdjMatrix) -> Vec<Vec<Node>> {
        graph
            .find_faces()
            .unwrap()
            .expect("graph is planar")
            .into_iter()
            .map(FacialWalk::into_inner)
            .collect_vec()
    }

    fn merged_back_edge_cycles() -> PlanarityTest {
        PlanarityTest::new()
            .segment_grouping(SegmentGrouping::Merged)
            .face_model(FaceModel::BackEdgeCycles)
    }

    #[test]
    fn triangle() {
        assert_eq!(faces_of(&cycle_graph(3)), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn cycles_have_one_bounded_face() {
        for n in [4, 5, 9] {
            let faces = faces_of(&cycle_graph(n));
            assert_eq!(faces.len(), 1);
            assert_eq!(faces[0].len(), n as usize);
        }
    }

    #[test]
    fn kuratowski_graphs() {
        assert!(!complete_graph(5).is_planar().unwrap());
        assert!(!complete_bipartite(3, 3).is_planar().unwrap());
        assert!(complete_bipartite(2, 5).is_planar().unwrap());
    }

    #[test]
    fn known_planar_and_non_planar() {
        assert!(!petersen_graph().is_planar().unwrap());

        for graph in [complete_graph(4), wheel_graph(5), wheel_graph(9), cube_graph()] {
            let embedding = graph.planar_embedding().unwrap().expect("planar");
            let euler = graph.number_of_nodes() as i64 - graph.number_of_edges() as i64
                + embedding.faces().len() as i64;
            assert_eq!(euler, 1);
        }
    }

    #[test]
    fn trees_have_no_bounded_face() {
        assert!(faces_of(&star_graph(5)).is_empty());
        assert!(faces_of(&AdjMatrix::from_edges(4, [(0, 1), (1, 2), (2, 3)])).is_empty());
    }

    #[test]
    fn empty_graphs() {
        assert!(faces_of(&AdjMatrix::new(0)).is_empty());
        assert!(faces_of(&AdjMatrix::new(5)).is_empty());
    }

    #[test]
    fn k4_faces() {
        let embedding = complete_graph(4).planar_embedding().unwrap().unwrap();
        assert_eq!(
            embedding
                .facial_walks()
                .into_iter()
                .map(FacialWalk::into_inner)
                .collect_vec(),
            vec![vec![0, 1, 3], vec![0, 2, 1], vec![0, 3, 2], vec![1, 2, 3]]
        );
        assert_eq!(
            faces_of(&complete_graph(4)),
            vec![vec![0, 1, 3], vec![0, 2, 1], vec![0, 3, 2]]
        );
        assert_eq!(embedding.histories(), &[vec![3, 5, 6]]);
    }

    #[test]
    fn cut_vertices_and_bridges() {
        // two triangles sharing node 2, node 4 carries a pendant path 4-5-6
        let graph = AdjMatrix::from_edges(
            7,
            [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2), (4, 5), (5, 6)],
        );
        let embedding = graph.planar_embedding().unwrap().unwrap();

        assert_eq!(embedding.plane(), &graph);
        assert_eq!(embedding.faces().len(), 2);
        assert!(embedding.faces().iter().all(|f| f.len() == 3));
        assert_eq!(embedding.rotation().number_of_darts(), 16);
    }

    #[test]
    fn one_outer_face_per_component() {
        let mut graph = AdjMatrix::new(8);
        graph.connect_clique(0..4);
        graph.connect_clique(4..8);

        assert_eq!(faces_of(&graph).len(), 6);
    }

    #[test]
    fn merged_back_edge_cycles_misreport_k4() {
        let test = merged_back_edge_cycles();
        assert!(test.run(&cycle_graph(3)).unwrap().is_planar());
        assert!(!test.run(&complete_graph(4)).unwrap().is_planar());
        assert!(!test.run(&wheel_graph(5)).unwrap().is_planar());

        let PlanarityOutcome::NonPlanar(obstruction) = test.run(&complete_graph(4)).unwrap() else {
            panic!("K4 is expected to be rejected");
        };
        assert_eq!(obstruction.segment.edges, vec![Edge(2, 3)]);
        assert_eq!(obstruction.plane.number_of_edges(), 5);
    }

    #[test]
    fn merged_grouping_misreports_split_pendants() {
        let graph = AdjMatrix::from_edges(
            6,
            [(0, 1), (0, 2), (0, 4), (0, 5), (1, 2), (1, 4), (1, 5), (2, 3), (2, 5), (3, 4)],
        );

        let merged = PlanarityTest::new().segment_grouping(SegmentGrouping::Merged);
        assert!(!merged.run(&graph).unwrap().is_planar());
        assert!(PlanarityTest::new().run(&graph).unwrap().is_planar());
    }

    #[test]
    fn deadline_in_the_past() {
        let past = Instant::now() - Duration::from_millis(1);
        let result = PlanarityTest::new().deadline(past).run(&complete_graph(4));
        assert!(matches!(result, Err(Error::DeadlineExceeded { .. })));
    }

    #[test]
    fn too_many_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xdead);

        for _ in 0..50 {
            let graph = random_graph(rng, 12, 0.7);
            if graph.number_of_edges() > 3 * 12 - 6 {
                assert!(!graph.is_planar().unwrap());
            }
        }
    }

    #[test]
    fn random_grids() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x6e1d);

        for _ in 0..300 {
            let rows = rng.random_range(2..6);
            let cols = rng.random_range(2..6);
            let p = rng.random();
            let graph = triangulated_grid(rng, rows, cols, p);

            let embedding = graph.planar_embedding().unwrap().expect("grids are planar");
            assert_eq!(embedding.plane(), &graph);

            for history in embedding.histories() {
                assert!(history.iter().tuple_windows().all(|(a, b)| a < b));
                assert!(history.len() <= graph.number_of_edges() as usize);
            }

            let walks = embedding.facial_walks();
            let darts: usize = walks.iter().map(FacialWalk::len).sum();
            assert_eq!(darts, 2 * graph.number_of_edges() as usize);

            let nodes = graph.number_of_nodes() as i64;
            let edges = graph.number_of_edges() as i64;
            assert_eq!(nodes - edges + walks.len() as i64, 2);
            assert_eq!(embedding.faces().len() + 1, walks.len());
        }
    }
}
