/*!
# Node Representation

Vertices of an adjacency matrix are plain unsigned integers `0..n`.
We choose `Node = u32`: the graphs handled here are tiny and a dense matrix with `2^32` rows
could never be allocated anyway.
*/

/// Nodes can be any unsigned integer from `0` to `n - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Converts a node pair into the row-major offset of a `n x n` matrix
#[inline]
pub(crate) fn cell_index(n: NumNodes, u: Node, v: Node) -> usize {
    u as usize * n as usize + v as usize
}
