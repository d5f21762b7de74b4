//! Vocabulary storage and frequency bookkeeping.
//!
//! The vocabulary maps each symbol to its aggregate frequency across the
//! corpus: frequency(symbol) = sum over words of word.count times the number
//! of occurrences of the symbol in the word's current sequence. Frequencies
//! are unsigned; a subtraction that would go below zero is surfaced as
//! `FrequencyUnderflow` instead of being silently clamped.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A vocabulary unit: initially a single character, later a merged
/// multi-character string.
pub type Symbol = CompactString;

/// Symbol -> aggregate frequency mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    freqs: AHashMap<Symbol, u64>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self {
            freqs: AHashMap::new(),
        }
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            freqs: AHashMap::with_capacity(capacity),
        }
    }

    /// Add `delta` to a symbol's frequency, creating the entry if absent.
    pub fn add(&mut self, symbol: &str, delta: u64) {
        *self.freqs.entry(Symbol::new(symbol)).or_insert(0) += delta;
    }

    /// Subtract `delta` from a symbol's frequency.
    ///
    /// An entry may legitimately reach exactly zero; it stays in the
    /// vocabulary. Going below zero is a bookkeeping defect and returns
    /// `FrequencyUnderflow`.
    pub fn subtract(&mut self, symbol: &str, delta: u64) -> Result<()> {
        match self.freqs.get_mut(symbol) {
            Some(freq) if *freq >= delta => {
                *freq -= delta;
                Ok(())
            }
            Some(freq) => Err(TokenizerError::FrequencyUnderflow {
                symbol: symbol.to_string(),
                needed: delta,
                available: *freq,
            }),
            None => Err(TokenizerError::FrequencyUnderflow {
                symbol: symbol.to_string(),
                needed: delta,
                available: 0,
            }),
        }
    }

    /// Get the frequency of a symbol, if it is a vocabulary member.
    #[inline]
    pub fn frequency(&self, symbol: &str) -> Option<u64> {
        self.freqs.get(symbol).copied()
    }

    /// Check whether a symbol is a vocabulary member.
    ///
    /// Zero-frequency entries still count as members.
    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.freqs.contains_key(symbol)
    }

    /// Get the number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.freqs.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Iterate over (symbol, frequency) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, u64)> {
        self.freqs.iter().map(|(s, &f)| (s, f))
    }

    /// Symbols in ascending lexicographic order.
    ///
    /// This is the id-assignment order, so it must not depend on hash
    /// iteration order.
    pub fn sorted_symbols(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = self.freqs.keys().collect();
        symbols.sort_unstable();
        symbols
    }
}

/// Concatenate two adjacent symbols into their merged form.
pub fn join(first: &str, second: &str) -> Symbol {
    let mut merged = Symbol::with_capacity(first.len() + second.len());
    merged.push_str(first);
    merged.push_str(second);
    merged
}

/// Check whether `merged` is exactly `first` followed by `second`.
///
/// Avoids allocating a scratch string in the merge scan's hot loop.
#[inline]
pub fn joins(first: &str, second: &str, merged: &str) -> bool {
    merged.len() == first.len() + second.len()
        && merged.starts_with(first)
        && merged.ends_with(second)
}
