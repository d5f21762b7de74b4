//! Error types for the tokenizer library.

use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Malformed training input, rejected before any state mutation.
    #[error("invalid training input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A vocabulary frequency would go negative.
    ///
    /// This is an internal bookkeeping invariant, never a valid state:
    /// after any completed merge step every frequency must remain >= 0.
    #[error("frequency underflow for symbol {symbol:?}: need {needed}, have {available}")]
    FrequencyUnderflow {
        symbol: String,
        needed: u64,
        available: u64,
    },
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
