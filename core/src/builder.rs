use tracing::trace;

use crate::error::Result;
use crate::graph::{Graph, Limits, VertexId};
use crate::name_index::{NameIndex, DEFAULT_BUCKETS};

/// A graph and its name index built together, so the two never disagree.
///
/// Every name — declared vertex or edge endpoint — goes through
/// [`intern`](Self::intern): a hit resolves to the existing slot, a miss
/// creates the vertex and binds the name to its id. This upholds the
/// one-vertex-per-distinct-name invariant the raw [`Graph`] leaves to its
/// caller.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    graph: Graph,
    index: NameIndex,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::with_limits(Limits::default(), DEFAULT_BUCKETS)
    }

    pub fn with_limits(limits: Limits, buckets: usize) -> Self {
        Self {
            graph: Graph::with_limits(limits),
            index: NameIndex::with_buckets(buckets),
        }
    }

    /// Resolves a name to its vertex id, creating the vertex on first sight.
    pub fn intern(&mut self, name: &str) -> Result<VertexId> {
        if let Some(id) = self.index.get(name) {
            return Ok(id);
        }
        let id = self.graph.add_vertex(name)?;
        self.index.set(name, id);
        trace!(name, id, "created vertex");
        Ok(id)
    }

    /// Appends a directed edge between two already-resolved vertices.
    pub fn connect(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.graph.add_edge(from, to)
    }

    /// Resolves a name without creating anything.
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.index.get(name)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_parts(self) -> (Graph, NameIndex) {
        (self.graph, self.index)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_deduplicates_by_name() {
        let mut b = GraphBuilder::new();
        let a1 = b.intern("a").unwrap();
        let bee = b.intern("b").unwrap();
        let a2 = b.intern("a").unwrap();
        assert_eq!(a1, a2);
        assert_ne!(a1, bee);
        assert_eq!(b.graph().vertex_count(), 2);
    }

    #[test]
    fn distinct_names_equal_vertex_count() {
        let mut b = GraphBuilder::new();
        for name in ["x", "y", "z", "y", "x", "w"] {
            b.intern(name).unwrap();
        }
        let (graph, index) = b.into_parts();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(index.len(), 4);
        // Index and graph agree on every binding.
        for (id, vertex) in graph.vertices() {
            assert_eq!(index.get(vertex.name()), Some(id));
        }
    }

    #[test]
    fn lookup_does_not_create() {
        let mut b = GraphBuilder::new();
        assert_eq!(b.lookup("ghost"), None);
        b.intern("real").unwrap();
        assert_eq!(b.lookup("real"), Some(0));
        assert_eq!(b.graph().vertex_count(), 1);
    }

    #[test]
    fn capacity_errors_propagate_through_intern() {
        let mut b = GraphBuilder::with_limits(
            Limits {
                max_vertices: 1,
                ..Limits::default()
            },
            DEFAULT_BUCKETS,
        );
        b.intern("only").unwrap();
        assert!(b.intern("extra").is_err());
        // The existing binding still resolves.
        assert_eq!(b.intern("only"), Ok(0));
    }
}
