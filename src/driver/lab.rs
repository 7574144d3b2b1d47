use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info, warn};

use super::*;
use crate::gens::RandomGraph;

/// Outcome of a single menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    InputClosed,
}

/// The interactive lab: runs the tasks selected in [`LabConfig`] on a [`Console`].
pub struct Lab<R, W, Rn> {
    console: Console<R, W>,
    rng: Rn,
    config: LabConfig,
}

impl<R, W, Rn> Lab<R, W, Rn>
where
    R: BufRead,
    W: Write,
    Rn: Rng,
{
    pub fn new(console: Console<R, W>, rng: Rn, config: LabConfig) -> Self {
        Self {
            console,
            rng,
            config,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the configured task(s)
    pub fn run(&mut self) -> Result<()> {
        match self.config.task {
            Task::All => {
                self.run_generation()?;
                self.run_sequential()?;
                self.run_binary()
            }
            Task::Generate => self.run_generation(),
            Task::Sequential => self.run_sequential(),
            Task::Binary => self.run_binary(),
        }
    }

    /// Task 1: prints two random adjacency matrices
    pub fn run_generation(&mut self) -> Result<()> {
        let (first, second) = (self.config.first_size, self.config.second_size);
        info!(first, second, "generating adjacency matrices");

        self.console
            .say("=== TASK 1: random adjacency matrices ===\n")?;

        let g1 = self.random_graph(first);
        let g2 = self.random_graph(second);

        self.console.show_graph("Matrix M1 of graph G1:", &g1)?;
        self.console.show_graph("Matrix M2 of graph G2:", &g2)
    }

    /// Task 2: applies transformations chosen by the user to a current graph
    pub fn run_sequential(&mut self) -> Result<()> {
        info!(n = self.config.start_size, "starting sequential transformations");
        self.console
            .say("\n=== TASK 2: sequential transformations ===\n")?;

        let mut session = Session::new(self.random_graph(self.config.start_size));
        self.console.show_graph("Initial graph:", session.current())?;

        loop {
            self.console.say("Choose an operation:")?;
            self.console.say("1 - Identify vertices")?;
            self.console.say("2 - Contract an edge")?;
            self.console.say("3 - Split a vertex")?;
            self.console.say("0 - Finish task 2")?;

            let Some(choice) = self.console.read_choice()? else {
                break;
            };

            let step = match choice {
                0 => {
                    self.console.say("Task 2 finished.")?;
                    break;
                }
                1 => self.identify_step(&mut session)?,
                2 => self.contract_step(&mut session)?,
                3 => self.split_step(&mut session)?,
                _ => {
                    self.console.say("Invalid choice. Try again.\n")?;
                    Step::Continue
                }
            };

            if step == Step::InputClosed {
                break;
            }
        }

        info!(steps = session.steps(), "sequential transformations finished");
        Ok(())
    }

    /// Task 3: combines two random graphs of user-defined size
    pub fn run_binary(&mut self) -> Result<()> {
        self.console.say("\n=== TASK 3: binary operations ===\n")?;

        let max = self.config.max_vertices;
        let Some(n1) = self
            .console
            .read_size("Enter the number of vertices of G1: ", max)?
        else {
            return Ok(());
        };
        let Some(n2) = self
            .console
            .read_size("Enter the number of vertices of G2: ", max)?
        else {
            return Ok(());
        };

        info!(n1, n2, "starting binary operations");
        let g1 = self.random_graph(n1);
        let g2 = self.random_graph(n2);

        self.console.say("\n=== GENERATED GRAPHS ===")?;
        self.console.show_graph("Graph G1:", &g1)?;
        self.console.show_graph("Graph G2:", &g2)?;

        loop {
            self.console.say("Choose an operation on the graphs:")?;
            for (i, combinator) in Combinator::ALL.iter().enumerate() {
                self.console.say(format!(
                    "{} - {} {}",
                    i + 1,
                    combinator.name(),
                    combinator.notation()
                ))?;
            }
            self.console.say("0 - Finish task 3")?;

            let Some(choice) = self.console.read_choice()? else {
                break;
            };

            if choice == 0 {
                self.console.say("Task 3 finished.")?;
                break;
            }

            let Some(combinator) = Combinator::from_choice(choice) else {
                self.console.say("Invalid choice. Try again.\n")?;
                continue;
            };

            if combinator == Combinator::CartesianProduct && !product_fits(n1, n2) {
                warn!(n1, n2, "rejected Cartesian product");
                self.console.say(format!(
                    "Error: the Cartesian product would have more than {} vertices\n",
                    NumNodes::MAX
                ))?;
                continue;
            }

            let result = combinator.apply(&g1, &g2);
            debug!(
                operation = combinator.name(),
                n = result.number_of_nodes(),
                edges = result.number_of_edges(),
                "combined graphs"
            );

            self.console
                .say(format!("\n=== {} ===", combinator.notation()))?;
            if combinator == Combinator::CartesianProduct {
                self.console.say(format!(
                    "The resulting graph has {} vertices",
                    result.number_of_nodes()
                ))?;
            }
            self.console
                .show_graph(format!("Result of the {}:", combinator.name()), &result)?;
        }

        Ok(())
    }

    fn identify_step(&mut self, session: &mut Session) -> Result<Step> {
        if session.current().number_of_nodes() < 2 {
            self.console
                .say("Identification needs at least two vertices.\n")?;
            return Ok(Step::Continue);
        }

        let Some((u, v)) = self
            .console
            .read_vertex_pair(session.current(), "identification")?
        else {
            return Ok(Step::InputClosed);
        };

        self.console.say(format!(
            "Identifying vertices {u} and {v}: keeping vertex {}, removing vertex {}",
            u.min(v),
            u.max(v)
        ))?;

        match session.apply(Transform::Identify(u, v)) {
            Ok(graph) => self
                .console
                .show_graph("Result of the identification:", graph)?,
            Err(err) => self.console.say(format!("Error: {err}\n"))?,
        }

        Ok(Step::Continue)
    }

    fn contract_step(&mut self, session: &mut Session) -> Result<Step> {
        if !session.has_contractible_edge() {
            self.console
                .say("The graph has no edge that could be contracted.\n")?;
            return Ok(Step::Continue);
        }

        loop {
            let Some((u, v)) = self
                .console
                .read_vertex_pair(session.current(), "contraction")?
            else {
                return Ok(Step::InputClosed);
            };

            match session.apply(Transform::Contract(u, v)) {
                Ok(graph) => {
                    self.console
                        .show_graph("Result of the contraction:", graph)?;
                    return Ok(Step::Continue);
                }
                Err(err) => {
                    self.console.say(format!("Error: {err}"))?;
                    self.console.say("Try other vertices.\n")?;
                }
            }
        }
    }

    fn split_step(&mut self, session: &mut Session) -> Result<Step> {
        if session.current().is_empty() {
            self.console.say("The graph has no vertex to split.\n")?;
            return Ok(Step::Continue);
        }

        let Some(w) = self
            .console
            .read_vertex(session.current(), "splitting")?
        else {
            return Ok(Step::InputClosed);
        };

        let new_node = session.current().number_of_nodes();
        match session.apply(Transform::Split(w)) {
            Ok(graph) => {
                self.console
                    .say(format!("Splitting vertex {w}: created vertex {new_node}"))?;
                self.console
                    .show_graph(format!("Result of splitting vertex {w}:"), graph)?;
            }
            Err(err) => self.console.say(format!("Error: {err}\n"))?,
        }

        Ok(Step::Continue)
    }

    fn random_graph(&mut self, n: NumNodes) -> AdjMatrix {
        AdjMatrix::gnp(&mut self.rng, n, self.config.edge_probability)
    }
}

/// *true* if a Cartesian product of graphs with `n1` and `n2` vertices is representable
fn product_fits(n1: NumNodes, n2: NumNodes) -> bool {
    n1.checked_mul(n2).is_some()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn run_lab(config: LabConfig, input: &str) -> String {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut lab = Lab::new(console, Pcg64Mcg::seed_from_u64(42), config);
        lab.run().unwrap();
        String::from_utf8(lab.into_console().into_output()).unwrap()
    }

    fn config(task: Task, edge_probability: f64) -> LabConfig {
        LabConfig {
            task,
            edge_probability,
            ..LabConfig::default()
        }
    }

    #[test]
    fn generation_prints_both_matrices() {
        let text = run_lab(config(Task::Generate, 0.5), "");

        assert!(text.contains("Matrix M1 of graph G1:\nAdjacency matrix (4 vertices):"));
        assert!(text.contains("Matrix M2 of graph G2:\nAdjacency matrix (5 vertices):"));
    }

    #[test]
    fn sequential_on_complete_graph() {
        // identify 0/4, contract 1/2, split 0 and finish
        let text = run_lab(config(Task::Sequential, 1.0), "1\n0 4\n2\n1 2\n3\n0\n0\n");

        assert!(text.contains("Initial graph:\nAdjacency matrix (5 vertices):"));
        assert!(text.contains("keeping vertex 0, removing vertex 4"));
        assert!(text.contains("Result of the identification:\nAdjacency matrix (4 vertices):"));
        assert!(text.contains("Result of the contraction:\nAdjacency matrix (3 vertices):"));
        assert!(text.contains("Splitting vertex 0: created vertex 3"));
        assert!(text.contains("Result of splitting vertex 0:\nAdjacency matrix (4 vertices):"));
        assert!(text.ends_with("Task 2 finished.\n"));
    }

    #[test]
    fn sequential_without_edges() {
        let text = run_lab(config(Task::Sequential, 0.0), "2\n7\n0\n");

        assert!(text.contains("The graph has no edge that could be contracted."));
        assert!(text.contains("Invalid choice. Try again."));
        assert!(text.ends_with("Task 2 finished.\n"));
    }

    #[test]
    fn sequential_split_identify_contract() {
        let config = LabConfig {
            start_size: 2,
            ..config(Task::Sequential, 1.0)
        };

        // split 1 (creates vertex 2), identify 0/2 then contract the remaining edge
        let text = run_lab(config, "3\n1\n1\n0 2\n2\n0 1\n0\n");

        assert!(text.contains("Result of splitting vertex 1:\nAdjacency matrix (3 vertices):"));
        assert!(text.contains("Result of the contraction:\nAdjacency matrix (1 vertices):"));
    }

    #[test]
    fn sequential_reports_missing_edge() {
        let config = LabConfig {
            start_size: 3,
            ..config(Task::Sequential, 0.0)
        };

        // the graph has no edges, so splitting 0 adds the only edge (0,3)
        let text = run_lab(config, "3\n0\n2\n1 2\n0 3\n0\n");

        assert!(text.contains("Error: vertices 1 and 2 are not connected by an edge"));
        assert!(text.contains("Try other vertices."));
        assert!(text.contains("Result of the contraction:\nAdjacency matrix (3 vertices):"));
    }

    #[test]
    fn sequential_ends_with_input() {
        let text = run_lab(config(Task::Sequential, 0.5), "1\n");
        assert!(!text.contains("Task 2 finished."));
    }

    #[test]
    fn binary_operations() {
        let text = run_lab(config(Task::Binary, 1.0), "-1\n2\n3\n1\n2\n3\n4\n9\n0\n");

        assert!(text.contains("Error: invalid graph size -1"));
        assert!(text.contains("Graph G1:\nAdjacency matrix (2 vertices):"));
        assert!(text.contains("Graph G2:\nAdjacency matrix (3 vertices):"));
        assert!(text.contains("Result of the union:\nAdjacency matrix (3 vertices):"));
        assert!(text.contains("Result of the intersection:\nAdjacency matrix (2 vertices):"));
        assert!(text.contains(
            "Result of the ring sum:\nAdjacency matrix (2 vertices):\n     0  1 \n 0:  0  0 \n 1:  0  0 \n"
        ));
        assert!(text.contains("The resulting graph has 6 vertices"));
        assert!(text.contains("Result of the Cartesian product:\nAdjacency matrix (6 vertices):"));
        assert!(text.contains("Invalid choice. Try again."));
        assert!(text.ends_with("Task 3 finished.\n"));
    }

    #[test]
    fn product_size_limit() {
        assert!(product_fits(0, NumNodes::MAX));
        assert!(product_fits(65535, 65535));
        assert!(product_fits(1, NumNodes::MAX));
        assert!(!product_fits(65536, 65536));
        assert!(!product_fits(70000, 70000));
    }

    #[test]
    fn all_tasks_in_order() {
        let text = run_lab(LabConfig::default(), "0\n1\n1\n0\n");

        let generation = text.find("=== TASK 1").unwrap();
        let sequential = text.find("=== TASK 2").unwrap();
        let binary = text.find("=== TASK 3").unwrap();
        assert!(generation < sequential && sequential < binary);
        assert!(text.ends_with("Task 3 finished.\n"));
    }
}
