//! Adjacent-pair frequency counting for merge selection.
//!
//! The counter is keyed by the concatenated pair string, so two different
//! splits that concatenate to the same string share one key. Each occurrence
//! of a pair contributes its word's occurrence count. Already-merged
//! multi-character symbols participate as single units.

use ahash::AHashMap;
use charm_core::{join, Corpus, Symbol};

/// Bigram -> aggregate frequency over the whole corpus.
pub struct BigramCounter {
    counts: AHashMap<Symbol, u64>,
}

impl BigramCounter {
    /// Count every adjacent symbol pair in every word's current sequence.
    pub fn count(corpus: &Corpus) -> Self {
        let mut counts: AHashMap<Symbol, u64> = AHashMap::new();

        for entry in corpus.entries() {
            for window in entry.symbols.windows(2) {
                let bigram = join(&window[0], &window[1]);
                *counts.entry(bigram).or_insert(0) += entry.count;
            }
        }

        Self { counts }
    }

    /// The maximum-frequency bigram.
    ///
    /// Ties break to the lexicographically smallest bigram string. The rule
    /// is fixed here rather than inherited from map iteration order, which
    /// would not be portable across runs.
    pub fn top(&self) -> Option<(&Symbol, u64)> {
        self.counts.iter().fold(None, |best, (bigram, &count)| {
            match best {
                Some((best_bigram, best_count))
                    if best_count > count || (best_count == count && best_bigram < bigram) =>
                {
                    Some((best_bigram, best_count))
                }
                _ => Some((bigram, count)),
            }
        })
    }

    /// Get the counted frequency of a bigram.
    pub fn get(&self, bigram: &str) -> u64 {
        self.counts.get(bigram).copied().unwrap_or(0)
    }

    /// Number of distinct bigrams.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no mergeable pair exists.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
