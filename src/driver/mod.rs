/*!
# Interactive lab

The driver behind the `mgraphs-lab` binary. It owns everything the graph core deliberately
leaves out: reading and validating console input, keeping the *current graph* of a sequence of
transformations and printing results.

- [`Console`] wraps an input and an output stream and implements prompting with re-prompting on
  invalid input. End of input ends the running task gracefully.
- [`Session`] holds the current graph of the sequential task and replaces it after every
  successful [`Transform`].
- [`Lab`] runs the three tasks selected by [`LabConfig`].

The driver only talks to the core through the public traits of [`algo`](crate::algo), so every
core error arrives here as a [`GraphError`](crate::error::GraphError) and is shown to the user.
*/

mod console;
mod lab;
mod session;

pub use console::*;
pub use lab::*;
pub use session::*;

use crate::prelude::*;

/// Which part of the lab to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Task {
    /// Generation, sequential transforms and binary operations in this order
    #[default]
    All,
    /// Generate and print two random adjacency matrices
    Generate,
    /// Apply identification/contraction/splitting to a current graph
    Sequential,
    /// Combine two random graphs with union/intersection/ring sum/product
    Binary,
}

/// Settings of a lab run
#[derive(Debug, Clone, PartialEq)]
pub struct LabConfig {
    /// Task(s) to run
    pub task: Task,
    /// Number of vertices of `G1` in the generation task
    pub first_size: NumNodes,
    /// Number of vertices of `G2` in the generation task
    pub second_size: NumNodes,
    /// Number of vertices of the initial graph of the sequential task
    pub start_size: NumNodes,
    /// Largest number of vertices accepted for user-defined graphs
    pub max_vertices: NumNodes,
    /// Edge probability of all randomly generated graphs
    pub edge_probability: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            task: Task::All,
            first_size: 4,
            second_size: 5,
            start_size: 5,
            max_vertices: 32,
            edge_probability: 0.5,
        }
    }
}
