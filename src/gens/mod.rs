/*!
# Graph Generators

Deterministic generators that add common **substructures** (paths, cycles, cliques,
complete bipartite graphs, stars) to an existing graph. They are the building blocks
for the classic planarity witnesses (`K5`, `K3,3`, wheels, ...) used throughout the
tests and are handy to construct inputs programmatically.
*/

use crate::prelude::*;

mod substructures;

pub use substructures::*;
