use super::*;

/// Transforms that rewrite a single graph into a graph with one node less or one node more.
///
/// Whenever two vertices `u` and `v` are merged, the smaller index `keep = min(u, v)` survives
/// at its position and `remove = max(u, v)` is deleted; all nodes above `remove` move down by
/// one.
///
/// Every method validates its arguments and returns an error instead of a graph if they are
/// invalid. The input is never modified.
pub trait StructuralTransforms: Sized {
    /// Identifies (merges) the vertices `u` and `v`.
    ///
    /// The row of the merged vertex is the OR of the rows of `u` and `v`, the diagonal included:
    /// the merged vertex carries a self-loop iff `keep` had one or `u` and `v` were adjacent.
    /// A self-loop on `remove` alone is dropped.
    ///
    /// # Errors
    /// - [`GraphError::InvalidIndex`] if `u` or `v` is out of range,
    /// - [`GraphError::InvalidOperation`] if `u == v`.
    fn identify_vertices(&self, u: Node, v: Node) -> GraphResult<Self>;

    /// Contracts the edge `{u, v}`.
    ///
    /// Same as [`StructuralTransforms::identify_vertices`] except that the contracted edge
    /// itself does not turn into a self-loop: the merged vertex has a loop iff `u` or `v` had
    /// one.
    ///
    /// # Errors
    /// - [`GraphError::InvalidIndex`] if `u` or `v` is out of range,
    /// - [`GraphError::InvalidOperation`] if `u == v` (self-loops cannot be contracted),
    /// - [`GraphError::NotAdjacent`] if there is no edge `{u, v}`.
    fn contract_edge(&self, u: Node, v: Node) -> GraphResult<Self>;

    /// Splits `v` into two adjacent vertices: `v` itself and a new vertex `n` appended at the
    /// end. The new vertex is adjacent to all neighbors of `v` and has a self-loop iff `v` has
    /// one.
    ///
    /// # Errors
    /// - [`GraphError::InvalidIndex`] if `v` is out of range.
    fn split_vertex(&self, v: Node) -> GraphResult<Self>;
}

impl<G> StructuralTransforms for G
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeEditing,
{
    fn identify_vertices(&self, u: Node, v: Node) -> GraphResult<Self> {
        ensure_node!(self, u);
        ensure_node!(self, v);
        if u == v {
            return Err(GraphError::InvalidOperation(
                "cannot identify a vertex with itself",
            ));
        }

        Ok(VertexMerge::new(self, u, v, MergedLoop::Identify).compute())
    }

    fn contract_edge(&self, u: Node, v: Node) -> GraphResult<Self> {
        ensure_node!(self, u);
        ensure_node!(self, v);
        if u == v {
            return Err(GraphError::InvalidOperation("cannot contract a self-loop"));
        }
        if !self.has_edge(u, v) {
            return Err(GraphError::NotAdjacent { u, v });
        }

        Ok(VertexMerge::new(self, u, v, MergedLoop::Contract).compute())
    }

    fn split_vertex(&self, v: Node) -> GraphResult<Self> {
        ensure_node!(self, v);

        let n = self.number_of_nodes();
        let new_node = n;
        let mut result = G::new(n + 1);

        for Edge(a, b) in self.edges(true) {
            result.try_add_edge(a, b);
        }

        for w in self.neighbors_of(v) {
            if w != v {
                result.try_add_edge(new_node, w);
            }
        }

        if self.has_self_loop(v) {
            result.try_add_edge(new_node, new_node);
        }

        result.try_add_edge(v, new_node);

        Ok(result)
    }
}

/// How the diagonal cell of the merged vertex is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergedLoop {
    /// Same as every other cell of row `keep`: `M[keep][keep] || M[remove][keep]`
    Identify,
    /// `M[keep][keep] || M[remove][remove]`
    Contract,
}

/// Builds the graph in which `keep` absorbs `remove`
struct VertexMerge<'a, G> {
    graph: &'a G,
    keep: Node,
    remove: Node,
    merged_loop: MergedLoop,
}

impl<'a, G> VertexMerge<'a, G>
where
    G: AdjacencyTest + GraphEdgeEditing,
{
    fn new(graph: &'a G, u: Node, v: Node, merged_loop: MergedLoop) -> Self {
        debug_assert_ne!(u, v);
        Self {
            graph,
            keep: u.min(v),
            remove: u.max(v),
            merged_loop,
        }
    }

    fn compute(self) -> G {
        let n = self.graph.number_of_nodes() - 1;
        let mut result = G::new(n);

        for new_u in 0..n {
            for new_v in new_u..n {
                if self.has_merged_edge(self.old_id(new_u), self.old_id(new_v)) {
                    result.try_add_edge(new_u, new_v);
                }
            }
        }

        result
    }

    /// Maps a node of the result back to the node of the input graph
    fn old_id(&self, new_id: Node) -> Node {
        if new_id >= self.remove {
            new_id + 1
        } else {
            new_id
        }
    }

    /// Cell `(u, v)` of the result in terms of input nodes; neither is `remove`
    fn has_merged_edge(&self, u: Node, v: Node) -> bool {
        let (graph, keep, remove) = (self.graph, self.keep, self.remove);

        if u == keep && v == keep && self.merged_loop == MergedLoop::Contract {
            graph.has_self_loop(keep) || graph.has_self_loop(remove)
        } else if u == keep {
            graph.has_edge(keep, v) || graph.has_edge(remove, v)
        } else if v == keep {
            graph.has_edge(u, keep) || graph.has_edge(u, remove)
        } else {
            graph.has_edge(u, v)
        }
    }
}
