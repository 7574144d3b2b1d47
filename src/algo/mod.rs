/*!
# Graph Algorithms

This module provides the **graph transformations** of this crate. All of them are pure: the
input graphs are only borrowed and every call returns a freshly allocated graph.

- [`StructuralTransforms`] change the number of nodes of a single graph by identifying two
  vertices, contracting an edge or splitting a vertex.
- [`GraphCombinators`] combine two graphs into a third one (union, intersection, ring sum and
  Cartesian product).

All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use mgraphs::{algo::*, prelude::*};

let path = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]);
let contracted = path.contract_edge(0, 1).unwrap();
assert_eq!(contracted.ordered_edges(true), vec![Edge(0, 1)]);
```
*/

mod binary;
mod structural;

use crate::{error::*, prelude::*};

pub use binary::*;
pub use structural::*;
