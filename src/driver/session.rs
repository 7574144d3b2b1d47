use std::fmt::Display;

use tracing::debug;

use super::*;
use crate::algo::*;

/// A structural transformation requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identify(Node, Node),
    Contract(Node, Node),
    Split(Node),
}

impl Transform {
    /// Applies the transformation to `graph` without modifying it
    pub fn apply(&self, graph: &AdjMatrix) -> GraphResult<AdjMatrix> {
        match *self {
            Transform::Identify(u, v) => graph.identify_vertices(u, v),
            Transform::Contract(u, v) => graph.contract_edge(u, v),
            Transform::Split(v) => graph.split_vertex(v),
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Transform::Identify(u, v) => write!(f, "identification of vertices {u} and {v}"),
            Transform::Contract(u, v) => write!(f, "contraction of the edge ({u},{v})"),
            Transform::Split(v) => write!(f, "splitting of vertex {v}"),
        }
    }
}

/// Holds the current graph of a sequence of transformations.
///
/// The graph is only replaced by successful transformations; a failed one leaves the session
/// unchanged.
#[derive(Debug, Clone)]
pub struct Session {
    current: AdjMatrix,
    steps: usize,
}

impl Session {
    pub fn new(graph: AdjMatrix) -> Self {
        Self {
            current: graph,
            steps: 0,
        }
    }

    /// The current graph
    pub fn current(&self) -> &AdjMatrix {
        &self.current
    }

    /// Number of successfully applied transformations
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Applies `transform` to the current graph and makes the result the new current graph.
    ///
    /// # Errors
    /// Forwards the error of the transformation; the current graph stays as it is.
    pub fn apply(&mut self, transform: Transform) -> GraphResult<&AdjMatrix> {
        let next = transform
            .apply(&self.current)
            .inspect_err(|err| debug!(%transform, %err, "rejected transformation"))?;
        debug!(
            %transform,
            before = self.current.number_of_nodes(),
            after = next.number_of_nodes(),
            edges = next.number_of_edges(),
            "applied transformation"
        );

        self.current = next;
        self.steps += 1;
        Ok(&self.current)
    }

    /// Returns *true* if some edge other than a self-loop can be contracted
    pub fn has_contractible_edge(&self) -> bool {
        self.current.edges(true).any(|e| !e.is_loop())
    }

    pub fn into_graph(self) -> AdjMatrix {
        self.current
    }
}

/// A binary operation on two graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Union,
    Intersection,
    RingSum,
    CartesianProduct,
}

impl Combinator {
    /// All combinators in menu order
    pub const ALL: [Combinator; 4] = [
        Combinator::Union,
        Combinator::Intersection,
        Combinator::RingSum,
        Combinator::CartesianProduct,
    ];

    /// Maps the menu entries `1..=4` to combinators
    pub fn from_choice(choice: i64) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn apply(&self, g1: &AdjMatrix, g2: &AdjMatrix) -> AdjMatrix {
        match self {
            Combinator::Union => g1.union(g2),
            Combinator::Intersection => g1.intersection(g2),
            Combinator::RingSum => g1.ring_sum(g2),
            Combinator::CartesianProduct => g1.cartesian_product(g2),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Combinator::Union => "union",
            Combinator::Intersection => "intersection",
            Combinator::RingSum => "ring sum",
            Combinator::CartesianProduct => "Cartesian product",
        }
    }

    /// Infix notation with the usual operator symbol
    pub fn notation(&self) -> &'static str {
        match self {
            Combinator::Union => "G1 ∪ G2",
            Combinator::Intersection => "G1 ∩ G2",
            Combinator::RingSum => "G1 ⊕ G2",
            Combinator::CartesianProduct => "G1 × G2",
        }
    }
}
