//! Charm CLI - Command-line interface for the character-level BPE tokenizer.
//!
//! This is the main entry point for the `charm` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{DecodeCommand, EncodeCommand, TrainCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "charm")]
#[command(about = "A character-level BPE tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a vocabulary from a corpus and print it
    Train(TrainCommand),
    /// Train on a corpus, then encode text to symbols and ids
    Encode(EncodeCommand),
    /// Train on a corpus, then decode token ids back to text
    Decode(DecodeCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
    }

    Ok(())
}
