/*!
# Substructure Generators

Utility methods to plant **paths**, **cycles** and **cliques** into an already existing graph.
They are handy to build the small, hand-crafted instances used in examples and tests.

# Example

```rust
use mgraphs::{prelude::*, gens::*};

let mut g = AdjMatrix::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Plants paths, cycles and cliques into an existing graph; present edges stay as they are.
pub trait GeneratorSubstructures {
    /// Connects consecutive nodes.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects consecutive nodes and closes the cycle from the last node back to the first.
    /// A single node receives a self-loop.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects every pair of distinct `nodes`; with `with_loops` every node gets a self-loop.
    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.try_add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        if let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) {
            self.connect_path(nodes.iter().copied());
            self.try_add_edge(last, first);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node], with_loops: bool) {
        for (&u, &v) in nodes.iter().tuple_combinations().filter(|(u, v)| u != v) {
            self.try_add_edge(u, v);
        }

        if with_loops {
            for &u in nodes {
                self.try_add_edge(u, u);
            }
        }
    }
}
