use itertools::Itertools;

use crate::*;

/// Number of vertices and iteration over them
pub trait GraphNodeOrder {
    fn number_of_nodes(&self) -> NumNodes;

    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// All vertices `0..n` in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Like [`GraphNodeOrder::vertices`] but without borrowing the graph
    fn vertices_range(&self) -> std::ops::Range<Node> {
        0..self.number_of_nodes()
    }

    /// *true* for the graph without vertices
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Number of edges
pub trait GraphEdgeOrder {
    /// Every unordered pair `{u, v}` (self-loops included) counts once.
    fn number_of_edges(&self) -> NumEdges;

    /// *true* if no vertex has a neighbor
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Neighborhoods and edge enumeration
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Neighbors of `u` in ascending order; `u` is its own neighbor iff it carries a loop.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u` (a self-loop counts once)
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Degrees of all vertices in vertex order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Edges `(u, v)` leaving `u`; `only_normalized` keeps those with `u <= v`.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Edges of all vertices, row by row; see [`AdjacencyList::edges_of`].
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Sorted [`AdjacencyList::edges`]
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect_vec()
    }
}

/// Constant-time edge queries
pub trait AdjacencyTest: GraphNodeOrder {
    /// *true* if `u` and `v` are adjacent.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// *true* if `u` carries a self-loop.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Construction of an edgeless graph
pub trait GraphNew {
    fn new(n: NumNodes) -> Self;
}

/// Editing of single cells. Writing `{u, v}` always writes both `(u, v)` and `(v, u)`.
pub trait GraphEdgeEditing: GraphNew {
    /// Sets `{u, v}` to `value` and returns its previous value.
    /// ** Panics if `u >= n || v >= n` **
    fn set_edge(&mut self, u: Node, v: Node, value: bool) -> bool;

    /// ** Panics if `u >= n || v >= n` or `{u, v}` already exists **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v), "edge ({u},{v}) already exists");
    }

    /// Inserts `{u, v}` and returns *true* if it existed before.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        self.set_edge(u, v, true)
    }

    /// ** Panics if `u >= n || v >= n` or `{u, v}` does not exist **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v), "edge ({u},{v}) does not exist");
    }

    /// Deletes `{u, v}` and returns *true* if it existed before.
    /// ** Panics if `u >= n || v >= n` **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.set_edge(u, v, false)
    }
}

/// Building a graph from a number of nodes and a list of edges
pub trait GraphFromScratch {
    /// Duplicates and reversed duplicates are ignored.
    /// ** Panics if an endpoint is `>= n` **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(Into::into) {
            graph.try_add_edge(u, v);
        }
        graph
    }
}
