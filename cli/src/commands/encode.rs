//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub corpus: String,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Number of merge steps (runs to convergence if omitted)
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Disable colored symbol output
    #[arg(short, long, default_value_t = false)]
    pub plain: bool,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let tokenizer = super::train_from_file(&cmd.corpus, cmd.steps)?;

    // Read input text (from stdin if "-")
    let input_text = if cmd.input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cmd.input
    };

    let encoding = tokenizer.encode(&input_text);

    if cmd.plain {
        let symbols: Vec<&str> = encoding.symbols.iter().map(|s| s.as_str()).collect();
        println!("{}", symbols.join(" "));
    } else {
        print_rainbow(&encoding.symbols);
    }

    let ids: Vec<String> = encoding.ids.iter().map(|id| id.to_string()).collect();
    println!("{}", ids.join(" "));

    Ok(())
}

/// Print symbols in cycling ANSI colors so segment boundaries stand out.
fn print_rainbow(symbols: &[charm_tokenizer::Symbol]) {
    for (i, symbol) in symbols.iter().enumerate() {
        let color = 31 + (i % 6);
        print!("\x1b[1;{color}m{symbol}\x1b[0m ");
    }
    println!();
}
