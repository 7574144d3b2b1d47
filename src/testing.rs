//! Assertions shared by the unit tests of this crate.

use crate::prelude::*;

/// Asserts that cell `(u, v)` equals cell `(v, u)` for all nodes
pub(crate) fn assert_symmetric<G: AdjacencyTest>(graph: &G) {
    let n = graph.number_of_nodes();
    for u in 0..n {
        for v in (u + 1)..n {
            assert_eq!(
                graph.has_edge(u, v),
                graph.has_edge(v, u),
                "asymmetric cells ({u},{v}) and ({v},{u})"
            );
        }
    }
}
