//! hopgraph-core: name-keyed directed graph with BFS distance queries.
//!
//! A pure Rust library that builds a directed graph from named vertices,
//! deduplicating names through a chained hash index, and computes
//! single-source shortest-path distances in edge count by breadth-first
//! search. No CLI dependencies — this crate compiles standalone.
//!
//! Three structures cooperate: [`NameIndex`] binds each vertex name to the
//! slot id it was created under, [`Graph`] owns the slots and their
//! append-ordered adjacency lists, and [`shortest_paths`] consumes both ids
//! to label every reachable vertex with its distance. [`GraphBuilder`] ties
//! the first two together so they can never disagree.

mod builder;
mod error;
mod format;
mod graph;
mod name_index;
mod traversal;

pub use builder::GraphBuilder;
pub use error::{Error, Result};
pub use format::{AdjacencyDoc, VertexDoc};
pub use graph::{Graph, Limits, Vertex, VertexId};
pub use name_index::{NameIndex, DEFAULT_BUCKETS};
pub use traversal::{shortest_path, shortest_paths, Distances};
