//! CLI commands for the charm tokenizer.

pub mod decode;
pub mod encode;
pub mod train;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use train::TrainCommand;

use anyhow::{Context, Result};
use charm_tokenizer::Tokenizer;
use std::fs;
use std::time::Instant;
use tracing::info;

/// Train a tokenizer from a corpus file, one line per training line.
pub fn train_from_file(corpus: &str, steps: Option<usize>) -> Result<Tokenizer> {
    let data = fs::read_to_string(corpus)
        .with_context(|| format!("failed to read corpus file {corpus}"))?;

    let start = Instant::now();
    let mut tokenizer = Tokenizer::builder().steps(steps).build()?;
    tokenizer.train(data.lines())?;
    info!(
        corpus,
        lines = data.lines().count(),
        symbols = tokenizer.vocabulary().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "trained tokenizer"
    );
    Ok(tokenizer)
}
