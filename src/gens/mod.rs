/*!
# Graph Generators

This module provides random graph generators and helpers to plant small substructures.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `generate()` or `stream()`.

All generators emit *normalized* edges `(u, v)` with `u <= v` and include self-loops, as the
adjacency matrices of this crate store loops on the diagonal.

The `RandomGraph` trait turns these edge streams into whole graphs and also allows
re-randomizing an existing graph in place while keeping its number of nodes.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Generators whose output size is a number of nodes
pub trait NumNodesGen {
    fn nodes(self, n: NumNodes) -> Self;
}

/// A configured random source of normalized edges.
pub trait GraphGenerator {
    /// Collects [`GraphGenerator::stream`] into a vector.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Lazily samples edges; the stream borrows `rng` until it is dropped.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building and re-rolling random graphs.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n)` graph: every unordered pair of nodes, self-pairs included, is an
    /// edge with probability `1/2` independently.
    fn gn<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng;

    /// Creates a random `G(n,p)` graph (self-loops included) using edge probability `p`.
    /// ** Panics if `p` is not a valid probability **
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Replaces all edges by a fresh `G(n)` sample, keeping the number of nodes.
    fn randomize<R>(&mut self, rng: &mut R)
    where
        R: Rng;

    /// Replaces all edges by a fresh `G(n,p)` sample, keeping the number of nodes.
    /// ** Panics if `p` is not a valid probability **
    fn randomize_with_prob<R>(&mut self, rng: &mut R, p: f64)
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphNodeOrder,
{
    fn gn<R>(rng: &mut R, n: NumNodes) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gn::new().nodes(n).stream(rng))
    }

    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng))
    }

    fn randomize<R>(&mut self, rng: &mut R)
    where
        R: Rng,
    {
        *self = Self::gn(rng, self.number_of_nodes());
    }

    fn randomize_with_prob<R>(&mut self, rng: &mut R, p: f64)
    where
        R: Rng,
    {
        *self = Self::gnp(rng, self.number_of_nodes(), p);
    }
}
