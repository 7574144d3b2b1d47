use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use anyhow::{Context, Result};
use tracing::warn;

use super::*;
use crate::io::MatrixWrite;

/// Line-based console on top of arbitrary input and output streams.
///
/// All `read_*` methods re-prompt until the input is valid and return `Ok(None)` once the
/// input is exhausted.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream, e.g. to inspect what was written
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a single line
    pub fn say<T: Display>(&mut self, line: T) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write to the console")
    }

    /// Writes a caption followed by the adjacency table of `graph`
    pub fn show_graph<T: Display>(&mut self, caption: T, graph: &AdjMatrix) -> Result<()> {
        self.say(caption)?;
        graph
            .try_write_matrix(&mut self.output)
            .context("failed to write to the console")
    }

    /// Reads a menu choice
    pub fn read_choice(&mut self) -> Result<Option<i64>> {
        Ok(self.read_numbers::<1>("Your choice: ")?.map(|[c]| c))
    }

    /// Reads a number of vertices between `0` and `max`
    pub fn read_size(&mut self, text: &str, max: NumNodes) -> Result<Option<NumNodes>> {
        loop {
            let Some([n]) = self.read_numbers::<1>(text)? else {
                return Ok(None);
            };

            match NumNodes::try_from(n) {
                Ok(size) if size <= max => return Ok(Some(size)),
                Ok(_) => {
                    warn!(size = n, max, "rejected graph size");
                    self.say(format!("Error: at most {max} vertices are supported"))?;
                }
                Err(_) => {
                    warn!(size = n, "rejected graph size");
                    self.say(format!("Error: {}", GraphError::InvalidSize { size: n }))?;
                }
            }
        }
    }

    /// Reads a single vertex of `graph`
    pub fn read_vertex(&mut self, graph: &AdjMatrix, purpose: &str) -> Result<Option<Node>> {
        let text = format!("Enter a vertex for {purpose}: ");
        loop {
            let Some([w]) = self.read_numbers::<1>(&text)? else {
                return Ok(None);
            };

            match to_vertex(graph, w) {
                Some(w) => return Ok(Some(w)),
                None => self.reject_range(graph, "the vertex must")?,
            }
        }
    }

    /// Reads two distinct vertices of `graph`
    pub fn read_vertex_pair(
        &mut self,
        graph: &AdjMatrix,
        purpose: &str,
    ) -> Result<Option<(Node, Node)>> {
        let text = format!("Enter two vertices for {purpose} (separated by a space): ");
        loop {
            let Some([u, v]) = self.read_numbers::<2>(&text)? else {
                return Ok(None);
            };

            match (to_vertex(graph, u), to_vertex(graph, v)) {
                (Some(u), Some(v)) if u == v => {
                    warn!(u, "rejected identical vertices");
                    self.say("Error: the vertices must be different")?;
                }
                (Some(u), Some(v)) => return Ok(Some((u, v))),
                _ => self.reject_range(graph, "both vertices must")?,
            }
        }
    }

    fn reject_range(&mut self, graph: &AdjMatrix, subject: &str) -> Result<()> {
        warn!(n = graph.number_of_nodes(), "rejected vertex out of range");
        self.say(format!(
            "Error: {subject} be in the range from 0 to {}",
            graph.number_of_nodes() as i64 - 1
        ))
    }

    /// Prompts until a line with exactly `N` integers is entered
    fn read_numbers<const N: usize>(&mut self, text: &str) -> Result<Option<[i64; N]>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };

            let parsed = line
                .split_whitespace()
                .map(str::parse::<i64>)
                .collect::<Result<Vec<_>, _>>()
                .ok()
                .and_then(|values| <[i64; N]>::try_from(values).ok());

            if let Some(values) = parsed {
                return Ok(Some(values));
            }

            warn!(input = %line, "rejected malformed input");
            if N == 1 {
                self.say("Input error, enter a number.")?;
            } else {
                self.say(format!("Input error, enter {N} numbers."))?;
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}").context("failed to write to the console")?;
        self.output.flush().context("failed to flush the console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from the console")?;

        Ok((read > 0).then(|| line.trim().to_string()))
    }
}

fn to_vertex(graph: &AdjMatrix, value: i64) -> Option<Node> {
    (0..graph.number_of_nodes() as i64)
        .contains(&value)
        .then_some(value as Node)
}
