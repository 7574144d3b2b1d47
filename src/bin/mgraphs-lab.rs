use std::io;

use clap::Parser;
use mgraphs::{
    NumNodes,
    driver::{Console, Lab, LabConfig, Task},
    utils::Probability,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the Cartesian product of two admissible graphs within `NumNodes`
const MAX_VERTICES_LIMIT: i64 = 65535;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "mgraphs-lab: operations on random graphs stored as adjacency matrices",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Seed of the random generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Task(s) to run
    #[arg(long, value_enum, default_value_t = Task::All)]
    task: Task,

    /// Number of vertices of G1 in the generation task
    #[arg(long, default_value_t = 4)]
    first_size: NumNodes,

    /// Number of vertices of G2 in the generation task
    #[arg(long, default_value_t = 5)]
    second_size: NumNodes,

    /// Number of vertices of the initial graph of the sequential task
    #[arg(long, default_value_t = 5)]
    start_size: NumNodes,

    /// Largest number of vertices accepted for graphs entered in the binary task
    #[arg(
        long,
        default_value_t = 32,
        value_parser = clap::value_parser!(NumNodes).range(..=MAX_VERTICES_LIMIT)
    )]
    max_vertices: NumNodes,

    /// Probability of every edge (and self-loop) in generated graphs
    #[arg(long, default_value_t = 0.5, value_parser = parse_probability)]
    prob: f64,
}

impl Cli {
    fn lab_config(&self) -> LabConfig {
        LabConfig {
            task: self.task,
            first_size: self.first_size,
            second_size: self.second_size,
            start_size: self.start_size,
            max_vertices: self.max_vertices,
            edge_probability: self.prob,
        }
    }
}

fn parse_probability(value: &str) -> Result<f64, String> {
    let p: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if p.is_valid_probility() {
        Ok(p)
    } else {
        Err(format!("{p} is not between 0 and 1"))
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "mgraphs=debug,info" } else { "warn" })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.verbose {
        info!(seed = ?cli.seed, task = ?cli.task, "Verbose mode enabled");
    }

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    Lab::new(console, rng, cli.lab_config()).run()
}
