use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use hopgraph_core::{
    shortest_paths, AdjacencyDoc, Graph, GraphBuilder, Limits, NameIndex, VertexId,
    DEFAULT_BUCKETS,
};
use tracing_subscriber::EnvFilter;

/// Build a directed graph from named vertices and report BFS shortest-path
/// distances from a chosen start vertex.
#[derive(Debug, Parser)]
#[command(name = "hopgraph", version)]
struct Cli {
    /// Load a JSON adjacency document instead of prompting on stdin.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Start vertex name (required with --input; prompted otherwise).
    #[arg(long, value_name = "NAME")]
    start: Option<String>,

    /// Maximum number of vertices.
    #[arg(long, default_value_t = 256)]
    max_vertices: usize,

    /// Bucket count for the name index.
    #[arg(long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Suppress the adjacency report.
    #[arg(long)]
    no_adjacency: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let limits = Limits {
        max_vertices: cli.max_vertices,
        ..Limits::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.input {
        Some(path) => run_from_file(&cli, limits, path.clone(), &mut out),
        None => run_interactive(&cli, limits, &mut out),
    }
}

fn run_from_file(cli: &Cli, limits: Limits, path: PathBuf, out: &mut impl Write) -> Result<()> {
    let text =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let doc: AdjacencyDoc =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let (graph, index) = doc.build_with(limits, cli.buckets)?;

    if !cli.no_adjacency {
        report_adjacency(out, &graph)?;
    }
    let start = cli
        .start
        .clone()
        .context("--start is required with --input")?;
    report_distances(out, &graph, &index, &start)
}

fn run_interactive(cli: &Cli, limits: Limits, out: &mut impl Write) -> Result<()> {
    let stdin = io::stdin();
    let mut scanner = Scanner::new(stdin.lock());
    let mut builder = GraphBuilder::with_limits(limits, cli.buckets);

    prompt(out, "Number of vertices: ")?;
    let count = scanner.integer()?;
    for i in 0..count {
        prompt(out, &format!("Vertex #{i} name: "))?;
        let name = scanner.token()?;
        let from = builder.intern(&name)?;

        prompt(out, &format!("Number of neighbors for {name}: "))?;
        let neighbor_count = scanner.integer()?;
        for j in 0..neighbor_count {
            prompt(out, &format!("Neighbor #{j} of {name}: "))?;
            let neighbor = scanner.token()?;
            let to = builder.intern(&neighbor)?;
            builder.connect(from, to)?;
        }
    }

    let (graph, index) = builder.into_parts();
    if !cli.no_adjacency {
        report_adjacency(out, &graph)?;
    }

    let start = match &cli.start {
        Some(name) => name.clone(),
        None => {
            prompt(out, "Start vertex: ")?;
            scanner.token()?
        }
    };
    report_distances(out, &graph, &index, &start)
}

fn report_adjacency(out: &mut impl Write, graph: &Graph) -> Result<()> {
    writeln!(
        out,
        "Adjacency ({} vertices, {} edges):",
        graph.vertex_count(),
        graph.edge_count()
    )?;
    for (_, vertex) in graph.vertices() {
        let neighbors: Vec<&str> = vertex
            .neighbors()
            .iter()
            .filter_map(|&id| graph.vertex(id).map(|v| v.name()))
            .collect();
        if neighbors.is_empty() {
            writeln!(out, "  {}", vertex.name())?;
        } else {
            writeln!(out, "  {} -> {}", vertex.name(), neighbors.join(" "))?;
        }
    }
    Ok(())
}

fn report_distances(
    out: &mut impl Write,
    graph: &Graph,
    index: &NameIndex,
    start: &str,
) -> Result<()> {
    let Some(source) = index.get(start) else {
        bail!("unknown start vertex {start:?}");
    };
    let distances = shortest_paths(graph, source)?;

    writeln!(out, "Distances from {start}:")?;
    for &(id, distance) in distances.in_discovery_order() {
        writeln!(out, "  {}: {}", vertex_name(graph, id), distance)?;
    }
    for id in distances.unreachable() {
        writeln!(out, "  {}: unreachable", vertex_name(graph, id))?;
    }
    writeln!(
        out,
        "Reached {} of {} vertices.",
        distances.reached(),
        graph.vertex_count()
    )?;
    Ok(())
}

fn vertex_name(graph: &Graph, id: VertexId) -> &str {
    graph.vertex(id).map(|v| v.name()).unwrap_or("?")
}

fn prompt(out: &mut impl Write, message: &str) -> Result<()> {
    write!(out, "{message}")?;
    out.flush()?;
    Ok(())
}

/// Whitespace-separated token scanner, so input works the same typed line
/// by line or piped in as one stream.
struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line).context("reading input")? == 0 {
                bail!("unexpected end of input");
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn integer(&mut self) -> Result<usize> {
        let token = self.token()?;
        token
            .parse()
            .with_context(|| format!("expected an integer, got {token:?}"))
    }
}
