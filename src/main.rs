use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use relu_nn::math::random::from_seed_or_entropy;
use relu_nn::report::{write_predictions, DEFAULT_THRESHOLD};
use relu_nn::{ExperimentSpec, Network};

/// Train a one-hidden-layer ReLU network and print its predictions.
///
/// Without `--config` the built-in XOR experiment is used.
#[derive(Parser, Debug)]
#[command(name = "relu-nn", version, about, long_about = None)]
struct Cli {
    /// Experiment description (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Override the learning rate
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Override the number of hidden nodes
    #[arg(long)]
    hidden: Option<usize>,

    /// Seed for initialization and shuffling
    #[arg(short, long)]
    seed: Option<u64>,

    /// Predictions closer to zero than this print as 0
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("relu_nn=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut spec = match &cli.config {
        Some(path) => ExperimentSpec::load_json(path)
            .with_context(|| format!("failed to load experiment from {}", path.display()))?,
        None => ExperimentSpec::xor(),
    };
    if let Some(epochs) = cli.epochs {
        spec.training.epochs = epochs;
    }
    if let Some(rate) = cli.learning_rate {
        spec.training.learning_rate = rate;
    }
    if let Some(hidden) = cli.hidden {
        spec.topology.hidden_width = hidden;
    }
    if cli.seed.is_some() {
        spec.training.seed = cli.seed;
    }
    spec.validate().context("invalid experiment")?;

    let dataset = spec
        .dataset
        .clone()
        .with_context(|| format!("experiment '{}' has no dataset", spec.name))?;

    let mut rng = from_seed_or_entropy(spec.training.seed);
    let mut network = Network::from_topology(&spec.topology, &mut rng);
    network.set_training_data(&dataset.inputs, &dataset.targets);

    info!(
        name = %spec.name,
        inputs = network.num_inputs(),
        hidden = network.num_hidden(),
        outputs = network.num_outputs(),
        samples = network.num_training_sets(),
        "training"
    );

    let report_every = (spec.training.epochs / 10).max(1);
    let loss = network.train_with_progress(
        spec.training.epochs,
        spec.training.learning_rate,
        &mut rng,
        |stats| {
            if stats.epoch % report_every == 0 {
                info!(epoch = stats.epoch, total = stats.total_epochs, loss = stats.train_loss, "progress");
            }
        },
    );
    info!(loss, "training finished");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_predictions(&mut out, &mut network, &dataset.inputs, cli.threshold)
        .context("failed to write predictions")?;
    out.flush()?;
    Ok(())
}
