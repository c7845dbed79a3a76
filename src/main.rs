// Command-line driver for the neuroflow library.
//
//   cargo run -- [spec.json]
//
// Generates the network described by the spec (or the stock 4-6-6-4 one),
// runs every built-in sample whose width matches the input layer, and prints
// one JSON snapshot per run on stdout. Logs go to stderr; tune with RUST_LOG.
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neuroflow::{builtin_examples, NetworkSnapshot, RunLog, RunRecord, VisualizationSpec};

#[derive(Serialize)]
struct RunOutput<'a> {
    example: &'a str,
    run: &'a RunRecord,
    snapshot: NetworkSnapshot,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,neuroflow=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let spec = match std::env::args().nth(1) {
        Some(path) => VisualizationSpec::load_json(&path)
            .with_context(|| format!("failed to load spec from {path}"))?,
        None => VisualizationSpec::default(),
    };
    info!(layers = ?spec.layer_sizes, seed = ?spec.seed, rule = ?spec.rule, "building network");

    let mut network = spec.build().context("invalid network specification")?;
    let mut log = RunLog::new();

    for example in builtin_examples() {
        if example.input_size() != network.input_size() {
            warn!(
                example = %example.id,
                inputs = example.input_size(),
                expected = network.input_size(),
                "skipping example with mismatched input width"
            );
            continue;
        }
        for sample in &example.sample_data {
            let signals = network.propagate_with_rule(sample, spec.rule)?;
            let run = log.record(sample, network.outputs());
            let output = RunOutput {
                example: &example.id,
                run,
                snapshot: network.snapshot(&signals),
            };
            println!("{}", serde_json::to_string(&output)?);
        }
    }

    info!(runs = log.len(), "done");
    Ok(())
}
