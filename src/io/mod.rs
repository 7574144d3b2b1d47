/*!
# IO

Human-readable output of graphs. Graphs are never persisted; the only supported format is the
adjacency table printed by the interactive lab, see [`MatrixWriter`].

[`GraphWriter`] abstracts over writers with different settings, while [`MatrixWrite`] is the
shorthand using default settings.
*/

pub mod matrix;

use std::{fmt, io};

use crate::prelude::*;

pub use matrix::*;

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Renders `graph` into a text sink according to the settings in `self`.
    fn format_graph<F>(&self, graph: &G, out: &mut F) -> fmt::Result
    where
        F: fmt::Write;

    /// Writes the given graph to the provided writer.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(self.graph_to_string(graph).as_bytes())
    }

    /// Renders the graph into a `String`
    fn graph_to_string(&self, graph: &G) -> String {
        let mut buffer = String::new();
        // `fmt::Write` for `String` is infallible
        let _ = self.format_graph(graph, &mut buffer);
        buffer
    }
}
