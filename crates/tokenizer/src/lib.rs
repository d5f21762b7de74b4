//! charm-tokenizer - High-level tokenizer API
//!
//! This crate integrates corpus building, merge induction, id assignment,
//! and the greedy segmenter into a single `Tokenizer` facade.
//!
//! # Example
//!
//! ```rust
//! use charm_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().build()?;
//! tokenizer.train(["hug hug pug hug pun"])?;
//!
//! let encoding = tokenizer.encode("hug pun");
//! let text = tokenizer.decode(&encoding.ids);
//! assert_eq!(text, "hug pun");
//! # Ok::<(), charm_tokenizer::TokenizerError>(())
//! ```

pub use charm_core::{Result, Symbol, TokenTable, TokenizerError, Vocabulary, UNKNOWN_ID};

pub mod tokenizer;
pub use tokenizer::{Encoding, Tokenizer, TokenizerBuilder, TokenizerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
