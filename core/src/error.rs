use thiserror::Error;

use crate::graph::VertexId;

/// Errors surfaced by graph construction and traversal.
///
/// All of these are returned to the caller; the library never terminates
/// the process on bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph already holds its configured maximum number of vertices.
    #[error("vertex capacity exhausted: graph is limited to {limit} vertices")]
    VertexCapacity { limit: usize },

    /// A vertex name longer than the configured bound. Overlong names are
    /// rejected outright rather than truncated.
    #[error("vertex name {name:?} exceeds the {limit}-byte limit")]
    NameTooLong { name: String, limit: usize },

    /// An edge endpoint or traversal source that names no existing vertex.
    #[error("unknown vertex id {0}")]
    UnknownVertex(VertexId),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let err = Error::NameTooLong {
            name: "x".repeat(40),
            limit: 32,
        };
        assert!(err.to_string().contains("32-byte"));

        let err = Error::UnknownVertex(7);
        assert_eq!(err.to_string(), "unknown vertex id 7");
    }
}
