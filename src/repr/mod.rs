/*!
# Graph Representations

The planarity engine works on a single representation: [`AdjMatrix`], an undirected
graph stored as one [`NodeBitSet`] per node. Dense rows make the matrix arithmetic the
embedding driver relies on (difference and union of snapshots) cheap and keep every
snapshot an owned value.
*/

use crate::{ops::*, *};

mod matrix;

pub use matrix::*;
