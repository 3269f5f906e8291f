//! # EdgeList
//!
//! The EdgeList-Format consists of non-comment-lines `u v` representing an
//! (undirected) edge `Edge(u - 1, v - 1)`. There is no header: the number of nodes
//! is the largest id found in any edge.

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphEdgeEditing,
{
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead,
    {
        let mut edges = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let content = line.trim();
            if content.is_empty() || content.starts_with(&self.comment_identifier) {
                continue;
            }

            edges.push(parse_edge_line(idx + 1, content, None)?);
        }

        let n = edges.iter().map(|&Edge(u, v)| u.max(v) + 1).max().unwrap_or(0);
        let mut graph = G::new(n);
        for Edge(u, v) in edges {
            graph.try_add_edge(u, v);
        }

        Ok(graph)
    }
}

/// A GraphWriter for the EdgeList-Format
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListWriter;

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for Edge(u, v) in graph.edges(true) {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }
        Ok(())
    }
}
