//! Stable id assignment for trained vocabulary symbols.
//!
//! Id 0 is reserved for the unknown sentinel and is never a vocabulary
//! member. Vocabulary symbols receive consecutive ids in ascending
//! lexicographic order starting at a configurable offset, so the table is
//! fully determined by the vocabulary contents.

use crate::vocab::{Symbol, Vocabulary};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Reserved id for the unknown sentinel.
pub const UNKNOWN_ID: u32 = 0;

/// Immutable symbol <-> id mappings, built once after training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenTable {
    symbol_to_id: AHashMap<Symbol, u32>,
    id_to_symbol: AHashMap<u32, Symbol>,
    unknown_token: Symbol,
}

impl TokenTable {
    /// Assign ids to all vocabulary symbols.
    ///
    /// Zero-frequency symbols are still vocabulary keys and receive ids.
    pub fn assign(vocab: &Vocabulary, unknown_token: &str, id_offset: u32) -> Self {
        let mut symbol_to_id = AHashMap::with_capacity(vocab.len() + 1);
        let mut id_to_symbol = AHashMap::with_capacity(vocab.len() + 1);

        let unknown = Symbol::new(unknown_token);
        symbol_to_id.insert(unknown.clone(), UNKNOWN_ID);
        id_to_symbol.insert(UNKNOWN_ID, unknown.clone());

        let mut id = id_offset;
        for symbol in vocab.sorted_symbols() {
            symbol_to_id.insert(symbol.clone(), id);
            id_to_symbol.insert(id, symbol.clone());
            id += 1;
        }

        Self {
            symbol_to_id,
            id_to_symbol,
            unknown_token: unknown,
        }
    }

    /// Get the id for a symbol, if present.
    #[inline]
    pub fn get_id(&self, symbol: &str) -> Option<u32> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// Get the id for a symbol, falling back to the unknown id.
    #[inline]
    pub fn id_of(&self, symbol: &str) -> u32 {
        self.get_id(symbol).unwrap_or(UNKNOWN_ID)
    }

    /// Get the symbol for an id, if present.
    #[inline]
    pub fn get_symbol(&self, id: u32) -> Option<&str> {
        self.id_to_symbol.get(&id).map(|s| s.as_str())
    }

    /// Get the symbol for an id, falling back to the unknown sentinel text.
    #[inline]
    pub fn symbol_of(&self, id: u32) -> &str {
        self.get_symbol(id).unwrap_or(self.unknown_token.as_str())
    }

    /// The unknown sentinel's text form.
    pub fn unknown_token(&self) -> &str {
        self.unknown_token.as_str()
    }

    /// Number of entries, unknown sentinel included.
    pub fn len(&self) -> usize {
        self.id_to_symbol.len()
    }

    /// Check if the table holds only the unknown sentinel.
    pub fn is_empty(&self) -> bool {
        self.id_to_symbol.len() <= 1
    }

    /// Iterate over (symbol, id) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, u32)> {
        self.symbol_to_id.iter().map(|(s, &id)| (s, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vocab() -> Vocabulary {
        let mut vocab = Vocabulary::new();
        for (sym, freq) in [("b", 2), ("a", 3), ("ab", 0)] {
            vocab.add(sym, freq);
        }
        vocab
    }

    #[test]
    fn test_lexicographic_assignment_from_offset() {
        let table = TokenTable::assign(&sample_vocab(), "<unk>", 32);

        assert_eq!(table.get_id("a"), Some(32));
        assert_eq!(table.get_id("ab"), Some(33));
        assert_eq!(table.get_id("b"), Some(34));
        assert_eq!(table.get_symbol(33), Some("ab"));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_unknown_sentinel_reserved() {
        let table = TokenTable::assign(&sample_vocab(), "<unk>", 32);

        assert_eq!(table.get_id("<unk>"), Some(UNKNOWN_ID));
        assert_eq!(table.symbol_of(UNKNOWN_ID), "<unk>");
        assert_eq!(table.id_of("never-seen"), UNKNOWN_ID);
        assert_eq!(table.symbol_of(9999), "<unk>");
    }

    #[test]
    fn test_zero_frequency_symbols_get_ids() {
        let table = TokenTable::assign(&sample_vocab(), "<unk>", 32);
        assert!(table.get_id("ab").is_some());
    }

    #[test]
    fn test_empty_vocabulary() {
        let table = TokenTable::assign(&Vocabulary::new(), "<unk>", 32);
        assert!(table.is_empty());
        assert_eq!(table.len(), 1);
    }
}
