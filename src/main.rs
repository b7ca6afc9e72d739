use std::path::PathBuf;

use anyhow::{Context, Result};
use burn::backend::NdArray;
use clap::Parser;

use seq_fdd_eval::config::RestoreConfig;
use seq_fdd_eval::restore::RestoreRunner;

type InferBackend = NdArray<f32>;

/// Restore model weights from the latest training checkpoint.
#[derive(Parser)]
#[command(name = "restore", about = "Restore model weights from the latest checkpoint")]
struct Cli {
    /// Model name to construct (overrides the config file)
    #[arg(long)]
    model: Option<String>,

    /// Checkpoint directory to restore from (overrides the config file)
    #[arg(long)]
    checkpoint_dir: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "restore.toml")]
    config: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        println!("Unrecoverable error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = RestoreConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(dir) = cli.checkpoint_dir {
        config.checkpoint_dir = dir;
    }
    config.validate()?;

    let device = Default::default();
    let runner = RestoreRunner::new(config);
    let _model = runner.run::<InferBackend>(&device)?;

    // Evaluation continues from the restored model here.
    Ok(())
}
