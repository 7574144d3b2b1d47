/*!
`mgraphs` implements the elementary operations of graph theory on small **m**atrix graphs:
undirected graphs stored as dense adjacency matrices, self-loops included.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; as all graphs are undirected,
`Edge(u, v)` and `Edge(v, u)` denote the same edge.

The only representation is [`AdjMatrix`](crate::repr::AdjMatrix), an `n x n` bit matrix that is
symmetric at all times. Its diagonal stores self-loops.

# Design

Operations are provided as traits implemented on the graph itself:
- [`algo::StructuralTransforms`]: `identify_vertices`, `contract_edge`, `split_vertex`,
- [`algo::GraphCombinators`]: `union`, `intersection`, `ring_sum`, `cartesian_product`.

None of them modifies its input; every call returns a new graph. Invalid requests (e.g. an
out-of-range vertex or contracting a missing edge) are reported as [`error::GraphError`].

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, errors and the matrix,
- [`algo`] includes the transformations and combinators,
- [`gens`] includes random graph generators and helpers to plant paths, cycles and cliques,
- [`io`] prints graphs as adjacency tables.

The [`driver`] module contains the interactive lab behind the `mgraphs-lab` binary.

```rust
use mgraphs::{algo::*, prelude::*};

let triangle = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
let split = triangle.split_vertex(0).unwrap();
assert_eq!(split.number_of_nodes(), 4);
assert_eq!(split.contract_edge(0, 3).unwrap(), triangle);
```
*/

pub mod algo;
pub mod driver;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `mgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// the error type as well as the matrix representation.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, GraphResult},
        node::*,
        ops::*,
        repr::*,
    };
}
