//! Corpus construction from raw text lines.
//!
//! Each distinct boundary-marked word owns a mutable symbol sequence
//! (starting as individual characters) and an occurrence count. Keeping both
//! in one entry guarantees the sequence and count maps can never drift apart.

use crate::error::Result;
use crate::normalize::{normalize_whitespace, validate_line};
use crate::vocab::{Symbol, Vocabulary};
use ahash::AHashMap;
use compact_str::{CompactString, ToCompactString};
use std::collections::hash_map::Entry;

/// A word's current symbol sequence and its occurrence count.
#[derive(Debug, Clone)]
pub struct WordEntry {
    /// Ordered symbol sequence; mutated in place by merge steps.
    pub symbols: Vec<Symbol>,
    /// Occurrence count, >= 1. Set once at first sighting, incremented on
    /// repeats, never changed by merges.
    pub count: u64,
}

/// Mapping from boundary-marked word surface form to its entry.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: AHashMap<CompactString, WordEntry>,
}

impl Corpus {
    /// Create a new empty corpus.
    pub fn new() -> Self {
        Self {
            words: AHashMap::new(),
        }
    }

    /// Get the number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the corpus is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by its boundary-marked surface form.
    pub fn get(&self, surface: &str) -> Option<&WordEntry> {
        self.words.get(surface)
    }

    /// Iterate over (surface form, entry) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompactString, &WordEntry)> {
        self.words.iter()
    }

    /// Iterate over word entries in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.words.values()
    }

    /// Iterate over word entries mutably, for merge application.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut WordEntry> {
        self.words.values_mut()
    }
}

/// Builds a [`Corpus`] and its initial per-character [`Vocabulary`] from
/// raw text lines.
pub struct CorpusBuilder {
    marker: char,
    corpus: Corpus,
}

impl CorpusBuilder {
    /// Create a new builder using the given boundary marker.
    pub fn new(marker: char) -> Self {
        Self {
            marker,
            corpus: Corpus::new(),
        }
    }

    /// Process one raw line: normalize whitespace, split into words, and
    /// record each word prefixed with the boundary marker.
    ///
    /// The line is validated before any state is touched.
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        validate_line(line)?;

        let normalized = normalize_whitespace(line);
        for word in normalized.split(' ').filter(|w| !w.is_empty()) {
            let mut surface = CompactString::with_capacity(word.len() + 1);
            surface.push(self.marker);
            surface.push_str(word);

            match self.corpus.words.entry(surface) {
                Entry::Occupied(mut entry) => entry.get_mut().count += 1,
                Entry::Vacant(entry) => {
                    let symbols = entry.key().chars().map(|c| c.to_compact_string()).collect();
                    entry.insert(WordEntry { symbols, count: 1 });
                }
            }
        }

        Ok(())
    }

    /// Process an ordered sequence of lines.
    pub fn push_lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Finish building: compute the initial vocabulary.
    ///
    /// Every symbol instance in every word's sequence contributes the word's
    /// count, duplicates within a word counted once per occurrence. Empty
    /// input yields an empty corpus and vocabulary.
    pub fn finish(self) -> (Corpus, Vocabulary) {
        let mut vocab = Vocabulary::new();
        for entry in self.corpus.entries() {
            for symbol in &entry.symbols {
                vocab.add(symbol, entry.count);
            }
        }
        (self.corpus, vocab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counts_and_sequences() {
        let mut builder = CorpusBuilder::new('_');
        builder.push_line("hug hug pug").unwrap();

        let (corpus, _) = builder.finish();
        assert_eq!(corpus.len(), 2);

        let hug = corpus.get("_hug").unwrap();
        assert_eq!(hug.count, 2);
        assert_eq!(hug.symbols, vec!["_", "h", "u", "g"]);

        let pug = corpus.get("_pug").unwrap();
        assert_eq!(pug.count, 1);
    }

    #[test]
    fn test_repeats_across_lines() {
        let mut builder = CorpusBuilder::new('_');
        builder.push_lines(["ab", "ab", "ab"]).unwrap();

        let (corpus, _) = builder.finish();
        assert_eq!(corpus.get("_ab").unwrap().count, 3);
    }

    #[test]
    fn test_initial_vocabulary_frequencies() {
        let mut builder = CorpusBuilder::new('_');
        builder.push_line("aaab aaab aaab ab").unwrap();

        let (_, vocab) = builder.finish();
        assert_eq!(vocab.frequency("_"), Some(4));
        assert_eq!(vocab.frequency("a"), Some(10));
        assert_eq!(vocab.frequency("b"), Some(4));
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let builder = CorpusBuilder::new('_');
        let (corpus, vocab) = builder.finish();
        assert!(corpus.is_empty());
        assert!(vocab.is_empty());

        let mut builder = CorpusBuilder::new('_');
        builder.push_line("   ").unwrap();
        let (corpus, _) = builder.finish();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_embedded_newline_rejected() {
        let mut builder = CorpusBuilder::new('_');
        assert!(builder.push_line("one\ntwo").is_err());
        let (corpus, _) = builder.finish();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_multibyte_characters_are_atomic() {
        let mut builder = CorpusBuilder::new('_');
        builder.push_line("语言模型").unwrap();

        let (corpus, _) = builder.finish();
        let word = corpus.get("_语言模型").unwrap();
        assert_eq!(word.symbols, vec!["_", "语", "言", "模", "型"]);
    }
}
