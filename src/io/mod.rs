/*!
# IO

Utilities for reading graphs from and writing graphs and faces to text streams.

## Input Formats

- **Tgf**: every line before a line consisting of `#` declares one node, every line
  after it is an edge `u v` (further tokens, e.g. edge labels, are ignored).
- **EdgeList**: every non-comment line is an edge `u v`; the number of nodes is the
  largest node id found.

Node ids are **1-based** in both formats and converted to 0-based [`Node`]s.
Lines with fewer than two integers, ids outside of `1..=n` and self-loops are rejected
with an [`Error::Format`] naming the offending line. Duplicate edges are ignored and
every edge is stored in both directions.

## Output Formats

- [`MatrixWriter`]: the 0/1 adjacency matrix, one row per line,
- [`EdgeListWriter`]: one 1-based edge per line,
- [`FaceWriter`]: one face per line, nodes 1-based.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] abstracts over reading using a given [`FileFormat`].
*/

pub mod edge_list;
pub mod report;
pub mod tgf;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::{error::*, prelude::*};

pub use edge_list::*;
pub use report::*;
pub use tgf::*;

/// Identifier for a graph file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    /// Trivial Graph Format: node lines, a `#` line, edge lines
    #[default]
    Tgf,
    /// Edge list terminated by the end of the stream
    EdgeList,
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tgf" => Ok(FileFormat::Tgf),
            "edgelist" | "edge-list" => Ok(FileFormat::EdgeList),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be opened and a format error if its
    /// contents are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
///
/// Automatically implemented for all graphs that can be built edge by edge.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: GraphEdgeEditing,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::Tgf => TgfReader::default().try_read_graph(reader),
            FileFormat::EdgeList => EdgeListReader::default().try_read_graph(reader),
        }
    }
}

/// Shorthand for creating a new format error
macro_rules! format_error {
    ($line: expr, $info: expr) => {
        Error::Format {
            line: $line,
            reason: $info.to_string(),
        }
    };
}

/// Shorthand for returning `Err(Error::Format)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $line : expr, $info : expr) => {
        if !($cond) {
            return Err(format_error!($line, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $line : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(format_error!(
                $line,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(format_error!(
                    $line,
                    format!("Invalid value `{next}` found. Cannot parse {}.", $name)
                ));
            }
        }
    }};
}

use format_error;
use parse_next_value;
use raise_error_unless;

/// Parses an edge line `u v ...` with 1-based ids into a 0-based [`Edge`].
/// If `n` is known, both ids have to be in `1..=n`.
fn parse_edge_line(line_no: usize, line: &str, n: Option<NumNodes>) -> Result<Edge> {
    let mut parts = line.split_whitespace();

    let from: Node = parse_next_value!(parts, line_no, "Source node");
    let dest: Node = parse_next_value!(parts, line_no, "Target node");

    let upper = n.unwrap_or(INVALID_NODE - 1);
    raise_error_unless!(
        (1..=upper).contains(&from) && (1..=upper).contains(&dest),
        line_no,
        format!("Edge ({from}, {dest}) refers to a node outside of 1..={upper}")
    );
    raise_error_unless!(
        from != dest,
        line_no,
        format!("Self-loop at node {from} is not supported")
    );

    Ok(Edge(from - 1, dest - 1))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn file_format_from_str() {
        assert_eq!("TGF".parse::<FileFormat>().unwrap(), FileFormat::Tgf);
        assert_eq!(
            "edgelist".parse::<FileFormat>().unwrap(),
            FileFormat::EdgeList
        );
        assert!(matches!(
            "metis".parse::<FileFormat>(),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn edge_line_parsing() {
        assert_eq!(parse_edge_line(1, "1 2", Some(2)).unwrap(), Edge(0, 1));
        assert_eq!(parse_edge_line(1, "  3\t1 label", None).unwrap(), Edge(2, 0));

        for (line, n) in [("1", Some(3)), ("1 x", Some(3)), ("0 1", None), ("1 4", Some(3)), ("2 2", None), ("", None)] {
            let err = parse_edge_line(7, line, n).unwrap_err();
            assert!(matches!(err, Error::Format { line: 7, .. }), "{line:?}: {err}");
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AdjMatrix::try_from_file("/this/file/does/not/exist.tgf", FileFormat::Tgf)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_format_error());
    }
}
