/*!
`uplanar` decides whether an **u**ndirected, **u**nlabelled graph can be drawn in the
plane without crossing edges and, if it can, reports the faces of such a drawing.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)` where `Edge(u, v)` and
`Edge(v, u)` describe the same undirected edge.
Graphs are stored as symmetric adjacency matrices ([`AdjMatrix`](crate::repr::AdjMatrix)) with
one bitset row per node; the embedding engine relies on cheap adjacency tests and set
differences between subgraphs.

# Algorithm

The planarity test follows the incremental path-addition scheme of Demoucron, Malgrange and
Pertuiset, run independently on every biconnected block of the input:

1. seed the embedding with a cycle of the block ([`planarity::SeedFace`]),
2. split the not yet embedded rest into segments relative to the embedding ([`planarity::SegmentDecomposer`]),
3. count for each segment the faces that contain all of its contacts,
4. embed a path through the most constrained segment into one of its faces ([`planarity::PathFinder`]),
5. repeat until nothing is left (planar) or some segment fits into no face (non-planar).

The faces of the final drawing are recovered from a rotation system by walking it
([`planarity::FaceTracer`]).

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representation,
- [`planarity`] includes the [`Planarity`](crate::planarity::Planarity) trait (`graph.is_planar()`, `graph.find_faces()`) and the configurable [`PlanarityTest`](crate::planarity::PlanarityTest),
- [`io`] includes readers for the TGF and edge-list formats and writers for matrices and faces,
- [`gens`] includes helpers to connect deterministic substructures such as paths, cycles and cliques.

In most use-cases, `use uplanar::{prelude::*, planarity::*};` suffices for your needs.

```
use uplanar::{prelude::*, planarity::*};

let k4 = AdjMatrix::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
assert!(k4.is_planar().unwrap());

// a planar drawing of K4 has 3 bounded faces
assert_eq!(k4.find_faces().unwrap().unwrap().len(), 3);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod planarity;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::{Error, Result};
pub use node::*;

/// `uplanar::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
