//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub corpus: String,

    /// Token ids, separated by spaces or commas
    #[arg(short, long)]
    pub ids: String,

    /// Number of merge steps (runs to convergence if omitted)
    #[arg(short, long)]
    pub steps: Option<usize>,
}

use anyhow::{Context, Result as AnyhowResult};

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let tokenizer = super::train_from_file(&cmd.corpus, cmd.steps)?;

    let ids = cmd
        .ids
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .with_context(|| format!("invalid token id {part:?}"))
        })
        .collect::<AnyhowResult<Vec<u32>>>()?;

    println!("{}", tokenizer.decode(&ids));

    Ok(())
}
