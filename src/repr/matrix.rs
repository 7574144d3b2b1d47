use std::fmt::Debug;

use fixedbitset::FixedBitSet;
use itertools::Itertools;

use super::*;
use crate::error::*;

/// An undirected graph stored as a dense `n x n` boolean adjacency matrix.
///
/// Cell `(u, v)` is set iff the edge `{u, v}` exists; the diagonal stores self-loops. All cells
/// live in one contiguous row-major bitset and every edit writes both `(u, v)` and `(v, u)`, so
/// the matrix is symmetric at all times.
///
/// Two matrices are equal iff they have the same number of nodes and the same edges.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct AdjMatrix {
    n: NumNodes,
    cells: FixedBitSet,
}

impl AdjMatrix {
    /// Creates an empty graph with `n` nodes where `n` stems from an unchecked (signed) source
    /// such as user input.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSize`] if `n` is negative or exceeds [`NumNodes::MAX`].
    pub fn try_new(n: i64) -> GraphResult<Self> {
        let num_nodes = NumNodes::try_from(n).map_err(|_| GraphError::InvalidSize { size: n })?;
        Ok(Self::new(num_nodes))
    }

    /// Creates a graph with `n` nodes where edge `{u, v}` exists iff `predicate(u, v)` holds.
    /// The predicate is only evaluated for `u <= v`; the result is mirrored.
    pub fn from_fn<F>(n: NumNodes, mut predicate: F) -> Self
    where
        F: FnMut(Node, Node) -> bool,
    {
        let mut graph = Self::new(n);
        for u in 0..n {
            for v in u..n {
                if predicate(u, v) {
                    graph.set_cell(u, v, true);
                }
            }
        }
        graph
    }

    /// Reads cell `(u, v)`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidIndex`] if `u` or `v` is out of range.
    pub fn try_get_edge(&self, u: Node, v: Node) -> GraphResult<bool> {
        ensure_node!(self, u);
        ensure_node!(self, v);
        Ok(self.has_edge(u, v))
    }

    /// Writes cells `(u, v)` and `(v, u)` and returns the previous value.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidIndex`] if `u` or `v` is out of range; the graph is not
    /// modified in this case.
    pub fn try_set_edge(&mut self, u: Node, v: Node, value: bool) -> GraphResult<bool> {
        ensure_node!(self, u);
        ensure_node!(self, v);
        Ok(self.set_edge(u, v, value))
    }

    /// Returns row `u` of the matrix as booleans
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> impl Iterator<Item = bool> + '_ {
        assert!(u < self.n, "node {u} out of range (n = {})", self.n);
        (0..self.n).map(move |v| self.cell(u, v))
    }

    /// Returns *true* if the matrix equals its transpose.
    /// Holds for every matrix built through the public interface.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|u| ((u + 1)..self.n).all(|v| self.cell(u, v) == self.cell(v, u)))
    }

    #[inline]
    fn cell(&self, u: Node, v: Node) -> bool {
        self.cells.contains(cell_index(self.n, u, v))
    }

    /// Writes both mirrored cells without bounds checks beyond those of the bitset
    #[inline]
    fn set_cell(&mut self, u: Node, v: Node, value: bool) {
        self.cells.set(cell_index(self.n, u, v), value);
        self.cells.set(cell_index(self.n, v, u), value);
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        let loops = (0..self.n).filter(|&u| self.cell(u, u)).count();
        let total = self.cells.count_ones(..);
        ((total - loops) / 2 + loops) as NumEdges
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .enumerate()
            .filter_map(|(v, set)| set.then_some(v as Node))
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(
            u < self.n && v < self.n,
            "edge ({u},{v}) out of range (n = {})",
            self.n
        );
        self.cell(u, v)
    }
}

impl GraphNew for AdjMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            n,
            cells: FixedBitSet::with_capacity(n as usize * n as usize),
        }
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn set_edge(&mut self, u: Node, v: Node, value: bool) -> bool {
        let prev = self.has_edge(u, v);
        self.set_cell(u, v, value);
        prev
    }
}

impl Debug for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjMatrix")
            .field("n", &self.n)
            .field("edges", &self.edges(true).collect_vec())
            .finish()
    }
}
