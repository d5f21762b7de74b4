//! Iterative merge induction over a corpus.
//!
//! Each step recounts adjacent-pair frequencies from scratch, selects the
//! top bigram, and applies the merge across every word while keeping the
//! vocabulary's aggregate frequencies consistent. Naive per-step recounting
//! is intentional; merge selection via an incrementally maintained priority
//! queue is out of scope.

use super::counter::BigramCounter;
use charm_core::{joins, Corpus, Result, Symbol, Vocabulary};
use tracing::debug;

/// Configuration for merge induction.
#[derive(Debug, Clone, Default)]
pub struct InducerConfig {
    /// Number of merge steps to run. `None` runs to convergence: induction
    /// stops, without merging, once the top bigram frequency reaches 1.
    /// An explicit step count merges regardless of frequency until the
    /// counter empties.
    pub steps: Option<usize>,
}

/// Outcome of a single induction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The top bigram was merged across the corpus.
    Merged { bigram: Symbol, frequency: u64 },
    /// Convergence: the top bigram frequency is 1 and was not merged.
    Converged { bigram: Symbol, frequency: u64 },
    /// No adjacent pair remains anywhere in the corpus.
    Exhausted,
}

/// Iteratively merges the most frequent adjacent symbol pair.
pub struct VocabularyInducer {
    config: InducerConfig,
}

impl VocabularyInducer {
    /// Create a new inducer with the given configuration.
    pub fn new(config: InducerConfig) -> Self {
        Self { config }
    }

    /// Create an inducer that runs to convergence.
    pub fn to_convergence() -> Self {
        Self::new(InducerConfig { steps: None })
    }

    /// Create an inducer with an explicit step budget.
    pub fn with_steps(steps: Option<usize>) -> Self {
        Self::new(InducerConfig { steps })
    }

    /// Run induction to completion, returning the number of applied merges.
    pub fn run(&self, corpus: &mut Corpus, vocab: &mut Vocabulary) -> Result<usize> {
        let mut merges = 0;

        match self.config.steps {
            Some(steps) => {
                for step in 0..steps {
                    match self.step(corpus, vocab, true)? {
                        StepOutcome::Merged { bigram, frequency } => {
                            debug!(step, %bigram, frequency, "applied merge");
                            merges += 1;
                        }
                        _ => break,
                    }
                }
            }
            None => loop {
                match self.step(corpus, vocab, false)? {
                    StepOutcome::Merged { bigram, frequency } => {
                        debug!(step = merges, %bigram, frequency, "applied merge");
                        merges += 1;
                    }
                    StepOutcome::Converged { bigram, frequency } => {
                        debug!(%bigram, frequency, "converged");
                        break;
                    }
                    StepOutcome::Exhausted => break,
                }
            },
        }

        Ok(merges)
    }

    /// Perform one induction step.
    ///
    /// With `merge_singletons` false (convergence mode) a top frequency of 1
    /// stops induction without merging; with it true (bounded mode) the
    /// merge is applied regardless of frequency.
    pub fn step(
        &self,
        corpus: &mut Corpus,
        vocab: &mut Vocabulary,
        merge_singletons: bool,
    ) -> Result<StepOutcome> {
        let counter = BigramCounter::count(corpus);
        let Some((bigram, frequency)) = counter.top() else {
            return Ok(StepOutcome::Exhausted);
        };
        let bigram = bigram.clone();

        if !merge_singletons && frequency == 1 {
            return Ok(StepOutcome::Converged { bigram, frequency });
        }

        apply_merge(corpus, vocab, &bigram, frequency)?;
        Ok(StepOutcome::Merged { bigram, frequency })
    }
}

/// Apply a selected merge across every word in the corpus.
///
/// Scans each sequence left-to-right without overlap (a freshly merged
/// symbol is never re-merged within the same pass), subtracts the word's
/// count from each consumed constituent's frequency, and emits a compacted
/// sequence. The bigram's total counted frequency is then credited to the
/// merged symbol's vocabulary entry.
fn apply_merge(
    corpus: &mut Corpus,
    vocab: &mut Vocabulary,
    bigram: &Symbol,
    frequency: u64,
) -> Result<()> {
    for entry in corpus.entries_mut() {
        if entry.symbols.len() < 2 {
            continue;
        }

        let count = entry.count;
        let mut out = Vec::with_capacity(entry.symbols.len());
        let mut merged = false;
        let mut i = 0;
        while i < entry.symbols.len() {
            if i + 1 < entry.symbols.len()
                && joins(&entry.symbols[i], &entry.symbols[i + 1], bigram)
            {
                vocab.subtract(&entry.symbols[i], count)?;
                vocab.subtract(&entry.symbols[i + 1], count)?;
                out.push(bigram.clone());
                merged = true;
                i += 2;
            } else {
                out.push(entry.symbols[i].clone());
                i += 1;
            }
        }

        if merged {
            entry.symbols = out;
        }
    }

    vocab.add(bigram, frequency);
    Ok(())
}
