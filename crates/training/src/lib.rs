//! charm-training - BPE merge-induction infrastructure
//!
//! This crate provides the training loop that turns an initial
//! per-character vocabulary into a merged subword vocabulary by repeatedly
//! merging the most frequent adjacent symbol pair across the corpus.
//!
//! # Example
//!
//! ```rust
//! use charm_core::CorpusBuilder;
//! use charm_training::VocabularyInducer;
//!
//! let mut builder = CorpusBuilder::new('_');
//! builder.push_line("hug hug pug")?;
//! let (mut corpus, mut vocab) = builder.finish();
//!
//! let inducer = VocabularyInducer::to_convergence();
//! inducer.run(&mut corpus, &mut vocab)?;
//! # Ok::<(), charm_core::TokenizerError>(())
//! ```

pub use charm_core::{Result, TokenizerError};

pub mod training;
pub use training::{BigramCounter, InducerConfig, StepOutcome, VocabularyInducer};
