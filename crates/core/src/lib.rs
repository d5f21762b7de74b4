//! charm-core - Core character-level BPE data model and algorithms
//!
//! This crate provides the fundamental data structures for character-level
//! byte-pair encoding: the corpus of boundary-marked words, the
//! symbol-frequency vocabulary, the symbol/id token table, and the greedy
//! segmenter used at encode time.
//!
//! # Features
//!
//! - Efficient vocabulary storage using `AHashMap` and compact strings
//! - Frequency bookkeeping with explicit underflow detection
//! - Deterministic id assignment and segmentation
//!
//! # Example
//!
//! ```rust
//! use charm_core::{CorpusBuilder, TokenTable};
//!
//! let mut builder = CorpusBuilder::new('_');
//! builder.push_line("hello world")?;
//! let (corpus, vocab) = builder.finish();
//! let table = TokenTable::assign(&vocab, "<unk>", 32);
//! # Ok::<(), charm_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod normalize;
pub use normalize::{normalize_whitespace, validate_line};

pub mod corpus;
pub use corpus::{Corpus, CorpusBuilder, WordEntry};

pub mod vocab;
pub use vocab::{join, joins, Symbol, Vocabulary};

pub mod table;
pub use table::{TokenTable, UNKNOWN_ID};

pub mod encoding;
pub use encoding::Segmenter;
