//! Errors reported by the graph operations.
//!
//! The core never prints or logs: every rejected request is returned to the caller as a
//! [`GraphError`] and the input graph is left untouched.

use crate::{Node, NumNodes};

/// Failure kinds of matrix construction and the structural transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Requested a negative (or unrepresentable) number of vertices.
    #[error("invalid graph size {size}: the number of vertices must be between 0 and {}", NumNodes::MAX)]
    InvalidSize { size: i64 },

    /// A vertex index lies outside of `0..num_nodes`.
    #[error("vertex {index} is out of range: the graph has {num_nodes} vertices")]
    InvalidIndex { index: Node, num_nodes: NumNodes },

    /// The operation is not defined for the given arguments.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// An edge was required between two vertices that are not adjacent.
    #[error("vertices {u} and {v} are not connected by an edge")]
    NotAdjacent { u: Node, v: Node },
}

/// Shorthand for results of fallible graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Returns early with [`GraphError::InvalidIndex`] unless `u < n`
macro_rules! ensure_node {
    ($graph : expr, $u : expr) => {{
        let num_nodes = $graph.number_of_nodes();
        if $u >= num_nodes {
            return Err($crate::error::GraphError::InvalidIndex {
                index: $u,
                num_nodes,
            });
        }
    }};
}

pub(crate) use ensure_node;
