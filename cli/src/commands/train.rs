//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus (one line per training line)
    #[arg(short, long)]
    pub corpus: String,

    /// Number of merge steps (runs to convergence if omitted)
    #[arg(short, long)]
    pub steps: Option<usize>,
}

use anyhow::Result as AnyhowResult;
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let start = Instant::now();
    let tokenizer = super::train_from_file(&cmd.corpus, cmd.steps)?;
    println!(
        "Trained {} symbols in {:.2}s",
        tokenizer.vocabulary().len(),
        start.elapsed().as_secs_f64()
    );
    println!();

    // One row per symbol, in id order.
    let mut rows: Vec<(u32, &str)> = tokenizer
        .table()
        .iter()
        .map(|(symbol, id)| (id, symbol.as_str()))
        .collect();
    rows.sort_unstable();

    println!("{:>6}  {:>10}  symbol", "id", "frequency");
    for (id, symbol) in rows {
        let frequency = tokenizer.vocabulary().frequency(symbol);
        match frequency {
            Some(freq) => println!("{id:>6}  {freq:>10}  {symbol}"),
            None => println!("{id:>6}  {:>10}  {symbol}", "-"),
        }
    }

    Ok(())
}
