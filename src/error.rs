/*!
# Errors

Every fallible operation of the crate returns [`Result<T>`]. The variants fall into
four families:

- **IO**: the input could not be opened or read ([`Error::Io`]),
- **Format**: the input is not a valid graph description or refers to a node that does
  not exist ([`Error::Format`], [`Error::InvalidNode`], [`Error::UnknownFormat`]),
- **Structure**: the graph does not have the shape an operation needs
  ([`Error::NoCycle`], [`Error::Stalled`]),
- **Deadline**: a configured deadline passed before the test finished.

A graph that is not planar is *not* an error; it is reported as
[`PlanarityOutcome::NonPlanar`](crate::planarity::PlanarityOutcome::NonPlanar).
*/

use thiserror::Error;

use crate::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("node {node} does not exist in a graph with {n} nodes")]
    InvalidNode { node: Node, n: NumNodes },

    #[error("unknown graph format `{0}`")]
    UnknownFormat(String),

    #[error("no cycle returns to start node {0}")]
    NoCycle(Node),

    #[error("no path connects two contacts of the segment with contacts {contacts:?}")]
    Stalled { contacts: Vec<Node> },

    #[error("deadline exceeded after {iterations} embedding steps")]
    DeadlineExceeded { iterations: usize },
}

impl Error {
    /// Returns *true* for errors caused by malformed input
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Error::Format { .. } | Error::InvalidNode { .. } | Error::UnknownFormat(_)
        )
    }

    /// Returns *true* for errors caused by a graph lacking the structure an operation needs
    pub fn is_structure_error(&self) -> bool {
        matches!(self, Error::NoCycle(_) | Error::Stalled { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
