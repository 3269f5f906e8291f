//! Writers for the results of a planarity test: adjacency matrices and face lists.

use super::*;

/// Writes the 0/1 adjacency matrix of a graph, one row per line, entries separated by a space.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixWriter;

impl<G> GraphWriter<G> for MatrixWriter
where
    G: AdjacencyTest,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for u in graph.vertices_range() {
            let row = graph
                .vertices_range()
                .map(|v| if graph.has_edge(u, v) { "1" } else { "0" });
            writeln!(writer, "{}", itertools::join(row, " "))?;
        }
        Ok(())
    }
}

/// Writes faces (or any node sequences), one per line.
#[derive(Debug, Clone, Copy)]
pub struct FaceWriter {
    one_based: bool,
}

impl Default for FaceWriter {
    fn default() -> Self {
        Self { one_based: true }
    }
}

impl FaceWriter {
    /// Creates a new (default) writer emitting 1-based ids
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit 0-based ids instead of 1-based ones
    pub fn zero_based(mut self) -> Self {
        self.one_based = false;
        self
    }

    /// Writes every face on its own line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn try_write_faces<W, F>(&self, faces: &[F], mut writer: W) -> Result<()>
    where
        W: Write,
        F: AsRef<[Node]>,
    {
        let offset = Node::from(self.one_based);
        for face in faces {
            let nodes = face.as_ref().iter().map(|&u| u + offset);
            writeln!(writer, "{}", itertools::join(nodes, " "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matrix_of_path() {
        let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]);
        let mut buffer = Vec::new();
        MatrixWriter.try_write_graph(&graph, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 1 0\n1 0 1\n0 1 0\n");
    }

    #[test]
    fn faces() {
        let faces = vec![vec![0, 1, 2], vec![0, 2, 3]];

        let mut buffer = Vec::new();
        FaceWriter::new().try_write_faces(&faces, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 2 3\n1 3 4\n");

        let mut buffer = Vec::new();
        FaceWriter::new()
            .zero_based()
            .try_write_faces(&faces, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0 1 2\n0 2 3\n");
    }
}
