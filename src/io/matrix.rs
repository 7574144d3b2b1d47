//! # Adjacency table
//!
//! Prints the full matrix as a table with row and column indices, eg.
//! ```text
//! Adjacency matrix (3 vertices):
//!      0  1  2
//!  0:  0  1  0
//!  1:  1  1  0
//!  2:  0  0  0
//!
//! ```
use std::fmt::Display;

use super::*;

/// A writer for adjacency tables
#[derive(Debug, Clone)]
pub struct MatrixWriter {
    /// Print the `Adjacency matrix (n vertices):` line
    title: bool,
    /// Minimum width of every index and cell
    cell_width: usize,
}

impl Default for MatrixWriter {
    fn default() -> Self {
        Self {
            title: true,
            cell_width: 2,
        }
    }
}

impl MatrixWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, only the table itself is written
    pub fn title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    /// Sets the minimum width of every cell (`2` by default). Indices wider than that still
    /// print in full.
    pub fn cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width.max(1);
        self
    }

    fn write_cell<F, T>(&self, out: &mut F, value: T) -> fmt::Result
    where
        F: fmt::Write,
        T: Display,
    {
        write!(out, "{value:>width$} ", width = self.cell_width)
    }
}

impl<G> GraphWriter<G> for MatrixWriter
where
    G: AdjacencyTest,
{
    fn format_graph<F>(&self, graph: &G, out: &mut F) -> fmt::Result
    where
        F: fmt::Write,
    {
        let n = graph.number_of_nodes();
        if self.title {
            writeln!(out, "Adjacency matrix ({n} vertices):")?;
        }

        // row labels take `cell_width + 2` characters (`index: `)
        write!(out, "{:width$}", "", width = self.cell_width + 2)?;
        for v in 0..n {
            self.write_cell(out, v)?;
        }
        writeln!(out)?;

        for u in 0..n {
            write!(out, "{u:>width$}: ", width = self.cell_width)?;
            for v in 0..n {
                self.write_cell(out, graph.has_edge(u, v) as u8)?;
            }
            writeln!(out)?;
        }

        writeln!(out)
    }
}

/// Trait for writing a graph as an adjacency table.
/// Shorthand for default settings.
pub trait MatrixWrite {
    /// Tries to write the table to a writer
    fn try_write_matrix<W>(&self, writer: W) -> io::Result<()>
    where
        W: io::Write;

    /// Returns the table as a `String`
    fn to_matrix_string(&self) -> String;
}

impl<G> MatrixWrite for G
where
    G: AdjacencyTest,
{
    fn try_write_matrix<W>(&self, writer: W) -> io::Result<()>
    where
        W: io::Write,
    {
        MatrixWriter::default().try_write_graph(self, writer)
    }

    fn to_matrix_string(&self) -> String {
        MatrixWriter::default().graph_to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_small_matrix() {
        let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 1)]);

        assert_eq!(
            graph.to_matrix_string(),
            concat!(
                "Adjacency matrix (3 vertices):\n",
                "     0  1  2 \n",
                " 0:  0  1  0 \n",
                " 1:  1  1  0 \n",
                " 2:  0  0  0 \n",
                "\n"
            )
        );
    }

    #[test]
    fn write_without_title() {
        let graph = AdjMatrix::from_edges(1, [(0, 0)]);
        let table = MatrixWriter::new().title(false).graph_to_string(&graph);

        assert_eq!(table, "     0 \n 0:  1 \n\n");
    }

    #[test]
    fn write_empty_graph() {
        let mut buffer = Vec::new();
        AdjMatrix::new(0).try_write_matrix(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Adjacency matrix (0 vertices):\n    \n\n"
        );
    }

    #[test]
    fn wide_indices() {
        let graph = AdjMatrix::new(11);
        let table = MatrixWriter::new().title(false).graph_to_string(&graph);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 13);
        assert!(lines[0].ends_with(" 9 10 "));
        assert!(lines[11].starts_with("10:  0"));
    }

    #[test]
    fn format_appends_to_text() {
        let graph = AdjMatrix::from_edges(2, [(0, 1)]);
        let mut text = String::from("G1:\n");
        MatrixWriter::new()
            .title(false)
            .format_graph(&graph, &mut text)
            .unwrap();

        assert_eq!(text, "G1:\n     0  1 \n 0:  0  1 \n 1:  1  0 \n\n");
    }

    #[test]
    fn write_errors_are_returned() {
        struct Broken;

        impl std::io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = AdjMatrix::new(2).try_write_matrix(Broken);
        assert_eq!(result.unwrap_err().kind(), std::io::ErrorKind::BrokenPipe);
    }
}
