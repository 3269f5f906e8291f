//! # Trivial Graph Format
//!
//! ```text
//! 1 first node
//! 2
//! 3
//! #
//! 1 2
//! 2 3 edge label
//! ```
//!
//! Every non-empty line before the separator declares one node; only the number of
//! such lines matters, node labels are ignored. Edge lines use 1-based ids which
//! have to refer to declared nodes.

use super::*;

/// A GraphReader for the Trivial Graph Format
#[derive(Debug, Clone)]
pub struct TgfReader {
    /// Line separating the node section from the edge section
    separator: String,
}

impl Default for TgfReader {
    fn default() -> Self {
        Self {
            separator: "#".to_string(),
        }
    }
}

impl TgfReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator line
    pub fn separator<S: Into<String>>(mut self, s: S) -> TgfReader {
        self.separator = s.into();
        self
    }
}

impl<G> GraphReader<G> for TgfReader
where
    G: GraphEdgeEditing,
{
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead,
    {
        let mut lines = reader.lines().enumerate();

        let mut n: NumNodes = 0;
        let mut line_no = 0;
        let mut found_separator = false;
        for (idx, line) in lines.by_ref() {
            let line = line?;
            line_no = idx + 1;

            let content = line.trim();
            if content == self.separator {
                found_separator = true;
                break;
            }
            if !content.is_empty() {
                n += 1;
            }
        }

        raise_error_unless!(
            found_separator,
            line_no,
            format!("Missing `{}` line between nodes and edges", self.separator)
        );

        let mut graph = G::new(n);
        for (idx, line) in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let Edge(u, v) = parse_edge_line(idx + 1, &line, Some(n))?;
            graph.try_add_edge(u, v);
        }

        Ok(graph)
    }
}
