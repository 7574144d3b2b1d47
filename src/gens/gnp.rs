use crate::{gens::*, utils::*};

/// `G(n,p)` graphs contain every possible edge of a graph with `n` nodes, including the `n`
/// self-loops, with probability `p` independent from each other.
///
/// Edges are streamed in row-major order of the upper triangle of the adjacency matrix.
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: u64,
    p: f64,
}

impl Default for Gnp {
    fn default() -> Self {
        Self { n: 0, p: 0.5 }
    }
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator with `p = 1/2`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `prob` is not within `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility(), "invalid probability {prob}");
        self.p = prob;
        self
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        stream_upper_triangle(self.n, self.p, rng)
    }
}

/// Visits the `n * (n + 1) / 2` cells of the upper triangle (diagonal included) in row-major
/// order and keeps each with probability `p`
fn stream_upper_triangle<R: Rng>(n: u64, p: f64, rng: &mut R) -> impl Iterator<Item = Edge> {
    (0..n * (n + 1) / 2)
        .filter(move |_| match p {
            0.0 => false,
            1.0 => true,
            _ => rng.random_bool(p),
        })
        .map(move |x| Edge::from_u64_with_loops(x, n))
}

/// `G(n) = G(n,1/2)` generators are uniform distributions over all graphs with `n` nodes
/// (self-loops allowed).
#[derive(Debug, Copy, Clone, Default)]
pub struct Gn {
    n: NumNodes,
}

impl Gn {
    /// Creates a new `G(n)` generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumNodesGen for Gn {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for Gn {
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        stream_upper_triangle(self.n as u64, 0.5, rng)
    }
}
