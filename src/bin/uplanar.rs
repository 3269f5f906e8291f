use std::{
    io::{BufWriter, Write},
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use uplanar::{io::*, planarity::*, prelude::*};

#[derive(Parser)]
#[command(name = "uplanar")]
#[command(about = "Tests a graph for planarity and prints the bounded faces of a planar drawing")]
struct Args {
    /// Graph file with 1-based node ids
    file: PathBuf,

    /// Input format: `tgf` or `edgelist`
    #[arg(long, default_value = "tgf")]
    format: FileFormat,

    /// How edges outside of the embedded subgraph are grouped into segments
    #[arg(long, value_enum, default_value_t = Grouping::Split)]
    grouping: Grouping,

    /// Which faces segments are tested against
    #[arg(long, value_enum, default_value_t = Faces::Tracked)]
    faces: Faces,

    /// Abort if the test takes longer than this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print the adjacency matrix before the result
    #[arg(long)]
    print_matrix: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum Grouping {
    Merged,
    Split,
}

impl From<Grouping> for SegmentGrouping {
    fn from(grouping: Grouping) -> Self {
        match grouping {
            Grouping::Merged => SegmentGrouping::Merged,
            Grouping::Split => SegmentGrouping::Split,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Faces {
    BackEdge,
    Tracked,
}

impl From<Faces> for FaceModel {
    fn from(faces: Faces) -> Self {
        match faces {
            Faces::BackEdge => FaceModel::BackEdgeCycles,
            Faces::Tracked => FaceModel::Tracked,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let graph = AdjMatrix::try_from_file(&args.file, args.format)
        .with_context(|| format!("cannot load graph from {}", args.file.display()))?;
    tracing::info!(
        file = %args.file.display(),
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "loaded graph"
    );

    let mut out = BufWriter::new(std::io::stdout().lock());
    if args.print_matrix {
        MatrixWriter.try_write_graph(&graph, &mut out)?;
    }

    let mut test = PlanarityTest::new()
        .segment_grouping(args.grouping.into())
        .face_model(args.faces.into());
    if let Some(ms) = args.timeout_ms {
        test = test.deadline(Instant::now() + Duration::from_millis(ms));
    }

    match test.run(&graph).context("planarity test failed")? {
        PlanarityOutcome::Planar(embedding) => {
            tracing::info!(faces = embedding.faces().len(), "planar");
            FaceWriter::new().try_write_faces(embedding.faces(), &mut out)?;
        }
        PlanarityOutcome::NonPlanar(obstruction) => {
            tracing::info!(contacts = ?obstruction.segment.contacts, "non-planar");
            writeln!(out, "non-planar")?;
        }
    }

    out.flush()?;
    Ok(())
}
