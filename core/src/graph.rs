use crate::error::{Error, Result};

/// Stable vertex handle: the vertex's 0-based insertion position.
/// Never reused or freed individually for the lifetime of the graph.
pub type VertexId = usize;

/// Capacity bounds checked at insertion time. The collections never grow
/// past them; exceeding a bound is an error, not a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of vertex slots.
    pub max_vertices: usize,
    /// Maximum vertex name length in bytes.
    pub max_name_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_vertices: 256,
            max_name_bytes: 32,
        }
    }
}

/// A named vertex and its outgoing adjacency list.
///
/// Adjacency entries are kept in insertion order. Self-loops and parallel
/// edges are stored as inserted, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    name: String,
    neighbors: Vec<VertexId>,
}

impl Vertex {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edge targets in insertion order.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

/// Directed graph over an append-only vector of vertex slots.
///
/// The graph performs no name deduplication — callers resolve names
/// through [`NameIndex`](crate::NameIndex) (or [`GraphBuilder`](crate::GraphBuilder))
/// before inserting. Every adjacency entry references a valid slot: both
/// endpoints are checked when an edge is added.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    limits: Limits,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            vertices: Vec::new(),
            limits,
            edge_count: 0,
        }
    }

    /// Appends a vertex with an empty adjacency list and returns its id.
    pub fn add_vertex(&mut self, name: &str) -> Result<VertexId> {
        if name.len() > self.limits.max_name_bytes {
            return Err(Error::NameTooLong {
                name: name.to_string(),
                limit: self.limits.max_name_bytes,
            });
        }
        if self.vertices.len() >= self.limits.max_vertices {
            return Err(Error::VertexCapacity {
                limit: self.limits.max_vertices,
            });
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex {
            name: name.to_string(),
            neighbors: Vec::new(),
        });
        Ok(id)
    }

    /// Appends `to` to `from`'s adjacency list, preserving insertion order.
    ///
    /// Duplicate edges and self-loops are permitted and preserved. Both
    /// endpoints must name existing vertices; an invalid endpoint is a
    /// typed error and the graph is left unchanged.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if from >= self.vertices.len() {
            return Err(Error::UnknownVertex(from));
        }
        if to >= self.vertices.len() {
            return Err(Error::UnknownVertex(to));
        }
        self.vertices[from].neighbors.push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Slot accessor.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Outgoing edge targets for a vertex; empty for unknown ids.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertices
            .get(id)
            .map(|v| v.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// All vertices in insertion order. Finite and restartable.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter().enumerate()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Diagnostic edge counter (counts every `add_edge`, duplicates included).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
