//! Command-line N-queens solver.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_anneal::sa::{AnnealingEngine, CsvSink, NullSink, SearchConfig};

#[derive(Debug, Parser)]
#[command(name = "nqueens", about = "Place N queens by simulated annealing")]
struct Cli {
    /// Board size (number of queens).
    #[arg(short = 'n', long, default_value_t = 8)]
    board_size: usize,

    /// Starting temperature.
    #[arg(long, default_value_t = 100.0)]
    initial_temperature: f64,

    /// The run stops once the temperature is no longer above this.
    #[arg(long, default_value_t = 0.1)]
    final_temperature: f64,

    /// Geometric cooling factor in (0, 1).
    #[arg(long, default_value_t = 0.98)]
    alpha: f64,

    /// Perturbations per temperature level.
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Random seed; drawn at random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write per-level metrics (`step;temperature;energy;% worse accepted`).
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        let config = SearchConfig::default()
            .with_board_size(self.board_size)
            .with_initial_temperature(self.initial_temperature)
            .with_final_temperature(self.final_temperature)
            .with_cooling_factor(self.alpha)
            .with_steps_per_temperature(self.steps);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();
    let cli = Cli::parse();

    let mut engine = AnnealingEngine::new(cli.config())?;
    let result = match &cli.log {
        Some(path) => {
            let mut sink = CsvSink::new(BufWriter::new(File::create(path)?))?;
            let result = engine.run(&mut sink)?;
            sink.into_inner()?;
            info!(path = %path.display(), "metrics written");
            result
        }
        None => engine.run(NullSink)?,
    };

    match &result.best {
        Some(best) => {
            println!(
                "Found solution with energy (number of conflicts) = {}:",
                result.best_energy
            );
            print!("{best}");
        }
        None => println!("Solution not found"),
    }
    Ok(())
}
