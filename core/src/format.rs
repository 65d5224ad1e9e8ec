use serde::{Deserialize, Serialize};

use crate::builder::GraphBuilder;
use crate::error::Result;
use crate::graph::{Graph, Limits};
use crate::name_index::{NameIndex, DEFAULT_BUCKETS};

/// Serializable adjacency document: one entry per vertex, in insertion
/// order, neighbors by name in adjacency order.
///
/// Rebuilding a document through [`build`](Self::build) reproduces the
/// original insertion-order ids, because vertex ids are assigned at first
/// mention and the document lists vertices in exactly that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyDoc {
    pub vertices: Vec<VertexDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexDoc {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub neighbors: Vec<String>,
}

impl AdjacencyDoc {
    /// Captures a graph's structure by name.
    pub fn from_graph(graph: &Graph) -> Self {
        let vertices = graph
            .vertices()
            .map(|(_, vertex)| VertexDoc {
                name: vertex.name().to_string(),
                neighbors: vertex
                    .neighbors()
                    .iter()
                    .filter_map(|&id| graph.vertex(id).map(|v| v.name().to_string()))
                    .collect(),
            })
            .collect();
        Self { vertices }
    }

    /// Rebuilds the graph with default limits and bucket count.
    pub fn build(&self) -> Result<(Graph, NameIndex)> {
        self.build_with(Limits::default(), DEFAULT_BUCKETS)
    }

    /// Rebuilds the graph, resolving every name through a fresh index —
    /// the same single pass the interactive shell performs.
    pub fn build_with(&self, limits: Limits, buckets: usize) -> Result<(Graph, NameIndex)> {
        let mut builder = GraphBuilder::with_limits(limits, buckets);
        for entry in &self.vertices {
            let from = builder.intern(&entry.name)?;
            for neighbor in &entry.neighbors {
                let to = builder.intern(neighbor)?;
                builder.connect(from, to)?;
            }
        }
        Ok(builder.into_parts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut b = GraphBuilder::new();
        let a = b.intern("a").unwrap();
        let bee = b.intern("b").unwrap();
        let c = b.intern("c").unwrap();
        b.connect(a, bee).unwrap();
        b.connect(a, c).unwrap();
        b.connect(bee, bee).unwrap();
        b.intern("isolated").unwrap();
        b.into_parts().0
    }

    /// Name-keyed edge multiset, the id-independent view of a graph.
    fn edge_names(graph: &Graph) -> Vec<(String, String)> {
        graph
            .vertices()
            .flat_map(|(_, v)| {
                v.neighbors().iter().filter_map(|&id| {
                    graph
                        .vertex(id)
                        .map(|n| (v.name().to_string(), n.name().to_string()))
                })
            })
            .collect()
    }

    #[test]
    fn round_trip_through_json() {
        let graph = sample_graph();
        let doc = AdjacencyDoc::from_graph(&graph);

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: AdjacencyDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);

        let (rebuilt, index) = parsed.build().unwrap();
        assert_eq!(rebuilt.vertex_count(), graph.vertex_count());
        assert_eq!(rebuilt.edge_count(), graph.edge_count());
        assert_eq!(edge_names(&rebuilt), edge_names(&graph));
        // Insertion order — and therefore every id — survives the trip.
        for (id, vertex) in graph.vertices() {
            assert_eq!(index.get(vertex.name()), Some(id));
        }
    }

    #[test]
    fn neighbors_field_is_optional() {
        let parsed: AdjacencyDoc =
            serde_json::from_str(r#"{"vertices":[{"name":"solo"}]}"#).unwrap();
        assert_eq!(parsed.vertices[0].neighbors, Vec::<String>::new());
        let (graph, _) = parsed.build().unwrap();
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn neighbor_first_mention_creates_the_vertex() {
        // "b" appears as a neighbor before its own entry, like an
        // interactive session declaring it later.
        let doc = AdjacencyDoc {
            vertices: vec![
                VertexDoc {
                    name: "a".into(),
                    neighbors: vec!["b".into()],
                },
                VertexDoc {
                    name: "b".into(),
                    neighbors: vec!["a".into()],
                },
            ],
        };
        let (graph, index) = doc.build().unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(index.get("a"), Some(0));
        assert_eq!(index.get("b"), Some(1));
        assert_eq!(graph.neighbors(1), &[0]);
    }

    #[test]
    fn build_respects_limits() {
        let doc = AdjacencyDoc {
            vertices: vec![
                VertexDoc {
                    name: "a".into(),
                    neighbors: vec!["b".into(), "c".into()],
                },
            ],
        };
        let limits = Limits {
            max_vertices: 2,
            ..Limits::default()
        };
        assert!(doc.build_with(limits, DEFAULT_BUCKETS).is_err());
    }
}
