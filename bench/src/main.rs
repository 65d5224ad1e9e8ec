use std::time::Instant;

use hopgraph_core::{
    shortest_path, shortest_paths, Graph, GraphBuilder, Limits, NameIndex, VertexId,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let vertex_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: hopgraph-bench [mode] [vertex_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Fractal branching tree (deep paths)");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  smallworld  Ring lattice + random shortcuts");
        println!("  random      Uniform random edges");
        println!();
        println!("Default vertex_count: 100000");
        return;
    }

    println!("hopgraph-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, fn(usize) -> (Graph, NameIndex))> = match mode {
        "tree" => vec![("Branching tree", gen_tree)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (ring + shortcuts)", gen_small_world)],
        "random" => vec![("Uniform random", gen_random)],
        "all" => vec![
            ("Branching tree", gen_tree as fn(usize) -> (Graph, NameIndex)),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (ring + shortcuts)", gen_small_world),
            ("Uniform random", gen_random),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, vertex_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> (Graph, NameIndex), vertex_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", vertex_count);

    let t = Instant::now();
    let (graph, index) = generator(vertex_count);
    let build_time = t.elapsed();
    println!(
        "Built in {:.2}s — {} vertices, {} edges",
        build_time.as_secs_f64(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let Some(source) = index.get("v0") else {
        println!("(empty graph, nothing to traverse)");
        println!();
        return;
    };

    let t = Instant::now();
    match shortest_paths(&graph, source) {
        Ok(distances) => {
            let elapsed = t.elapsed();
            let deepest = distances
                .in_discovery_order()
                .last()
                .map(|&(_, d)| d)
                .unwrap_or(0);
            println!(
                "BFS from v0: reached {} of {} (max depth {}) in {:.1}ms",
                distances.reached(),
                graph.vertex_count(),
                deepest,
                elapsed.as_secs_f64() * 1000.0
            );
        }
        Err(err) => {
            eprintln!("BFS from v0 failed: {err}");
            println!();
            return;
        }
    }

    // Point-to-point: v0 to the last vertex created.
    let far_name = format!("v{}", graph.vertex_count() - 1);
    if let Some(target) = index.get(&far_name) {
        let t = Instant::now();
        match shortest_path(&graph, source, target) {
            Ok(Some(path)) => println!(
                "Shortest path v0 -> {}: {} hops in {:.1}ms",
                far_name,
                path.len() - 1,
                t.elapsed().as_secs_f64() * 1000.0
            ),
            Ok(None) => println!(
                "Shortest path v0 -> {}: no path ({:.1}ms)",
                far_name,
                t.elapsed().as_secs_f64() * 1000.0
            ),
            Err(err) => eprintln!("Shortest path v0 -> {} failed: {err}", far_name),
        }
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators — all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Builder sized so the generators never trip the capacity bound.
fn sized_builder(vertex_count: usize) -> GraphBuilder {
    let limits = Limits {
        max_vertices: vertex_count.max(1),
        ..Limits::default()
    };
    let buckets = (vertex_count * 2).next_power_of_two().max(16);
    GraphBuilder::with_limits(limits, buckets)
}

fn intern(builder: &mut GraphBuilder, i: usize) -> VertexId {
    builder
        .intern(&format!("v{i}"))
        .expect("generator stays within the sized limits")
}

fn connect(builder: &mut GraphBuilder, from: VertexId, to: VertexId) {
    builder
        .connect(from, to)
        .expect("generator only connects existing vertices");
}

/// Branching tree: each vertex spawns three children, breadth-first.
/// Produces deep paths with exponential width.
fn gen_tree(vertex_count: usize) -> (Graph, NameIndex) {
    let mut builder = sized_builder(vertex_count);
    if vertex_count == 0 {
        return builder.into_parts();
    }

    let branching = 3;
    let mut next = 1;
    let mut frontier = vec![intern(&mut builder, 0)];

    while next < vertex_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next >= vertex_count {
                    break;
                }
                let child = intern(&mut builder, next);
                next += 1;
                connect(&mut builder, parent, child);
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    builder.into_parts()
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random endpoint from the edge list
/// and connecting to it. Vertices with more edges get picked more often.
fn gen_scale_free(vertex_count: usize) -> (Graph, NameIndex) {
    let edges_per_vertex = 10;
    let mut builder = sized_builder(vertex_count);
    let mut rng = FastRng::new(12345);

    // Seed: small clique
    let seed = vertex_count.min(5);
    for i in 0..seed {
        intern(&mut builder, i);
    }
    let mut endpoints: Vec<VertexId> = Vec::new();
    for i in 0..seed {
        for j in (i + 1)..seed {
            connect(&mut builder, i, j);
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    // Grow: each new vertex attaches to existing vertices by edge sampling
    for new_vertex in seed..vertex_count {
        intern(&mut builder, new_vertex);

        let attach = edges_per_vertex.min(new_vertex);
        for _ in 0..attach {
            if endpoints.is_empty() {
                break;
            }
            let target = endpoints[rng.next(endpoints.len())];
            if target != new_vertex {
                connect(&mut builder, new_vertex, target);
                endpoints.push(new_vertex);
                endpoints.push(target);
            }
        }
    }

    builder.into_parts()
}

/// Small-world: ring lattice with each vertex linked to its K nearest
/// forward neighbors, rewired with probability p.
fn gen_small_world(vertex_count: usize) -> (Graph, NameIndex) {
    let k = 10.min(vertex_count.saturating_sub(1));
    let p = 0.05f64;
    let mut builder = sized_builder(vertex_count);
    let mut rng = FastRng::new(67890);

    for i in 0..vertex_count {
        intern(&mut builder, i);
    }

    for i in 0..vertex_count {
        for j in 1..=k {
            let neighbor = (i + j) % vertex_count;
            if rng.next_f64() < p {
                let rewired = rng.next(vertex_count);
                if rewired != i {
                    connect(&mut builder, i, rewired);
                } else {
                    connect(&mut builder, i, neighbor);
                }
            } else {
                connect(&mut builder, i, neighbor);
            }
        }
    }

    builder.into_parts()
}

/// Uniform random edges, ~10 per vertex on average. Baseline topology
/// with no structure.
fn gen_random(vertex_count: usize) -> (Graph, NameIndex) {
    let mut builder = sized_builder(vertex_count);
    let mut rng = FastRng::new(54321);

    for i in 0..vertex_count {
        intern(&mut builder, i);
    }

    if vertex_count > 1 {
        let target_edges = vertex_count * 10;
        for _ in 0..target_edges {
            let from = rng.next(vertex_count);
            let to = rng.next(vertex_count);
            if from != to {
                connect(&mut builder, from, to);
            }
        }
    }

    builder.into_parts()
}
