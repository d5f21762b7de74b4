//! Training loop internals.

pub mod counter;
pub mod inducer;

pub use counter::BigramCounter;
pub use inducer::{InducerConfig, StepOutcome, VocabularyInducer};
