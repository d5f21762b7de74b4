//! Main tokenizer implementation.
//!
//! The `Tokenizer` owns the trained vocabulary and token table and exposes
//! the full pipeline: train from lines, encode novel text, decode ids.

use charm_core::{
    validate_line, CorpusBuilder, Result, Segmenter, Symbol, TokenTable, TokenizerError,
    Vocabulary,
};
use charm_training::VocabularyInducer;
use tracing::info;

/// Configuration for building a tokenizer.
///
/// The boundary marker and id offset are configuration, not literals baked
/// into the pipeline.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Sentinel prefixed to each word; decoded back to a space.
    pub boundary_marker: char,
    /// Text form of the unknown sentinel (id 0).
    pub unknown_token: String,
    /// First id handed to vocabulary symbols.
    pub id_offset: u32,
    /// Merge step budget; `None` trains to convergence.
    pub steps: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            boundary_marker: '_',
            unknown_token: "<unk>".to_string(),
            id_offset: 32,
            steps: None,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boundary marker character.
    pub fn boundary_marker(mut self, marker: char) -> Self {
        self.config.boundary_marker = marker;
        self
    }

    /// Set the unknown sentinel's text form.
    pub fn unknown_token(mut self, token: impl Into<String>) -> Self {
        self.config.unknown_token = token.into();
        self
    }

    /// Set the first id handed to vocabulary symbols.
    pub fn id_offset(mut self, offset: u32) -> Self {
        self.config.id_offset = offset;
        self
    }

    /// Set the merge step budget; `None` trains to convergence.
    pub fn steps(mut self, steps: Option<usize>) -> Self {
        self.config.steps = steps;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Character-level BPE tokenizer.
pub struct Tokenizer {
    config: TokenizerConfig,
    vocab: Vocabulary,
    table: TokenTable,
}

impl Tokenizer {
    /// Create a new untrained tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        if config.boundary_marker.is_whitespace() {
            return Err(TokenizerError::InvalidConfig(
                "boundary marker must not be whitespace".to_string(),
            ));
        }
        if config.unknown_token.is_empty() {
            return Err(TokenizerError::InvalidConfig(
                "unknown token must not be empty".to_string(),
            ));
        }
        if config.id_offset == charm_core::UNKNOWN_ID {
            return Err(TokenizerError::InvalidConfig(
                "id offset collides with the reserved unknown id".to_string(),
            ));
        }

        let vocab = Vocabulary::new();
        let table = TokenTable::assign(&vocab, &config.unknown_token, config.id_offset);
        Ok(Self {
            config,
            vocab,
            table,
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Train on an ordered sequence of text lines.
    ///
    /// All lines are validated before any state mutation; a malformed line
    /// leaves the tokenizer untouched. Retraining replaces the previous
    /// vocabulary and table.
    pub fn train<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        for line in &lines {
            validate_line(line.as_ref())?;
        }

        let mut builder = CorpusBuilder::new(self.config.boundary_marker);
        builder.push_lines(lines.iter().map(|l| l.as_ref()))?;
        let (mut corpus, mut vocab) = builder.finish();

        let inducer = VocabularyInducer::with_steps(self.config.steps);
        let merges = inducer.run(&mut corpus, &mut vocab)?;
        info!(
            words = corpus.len(),
            symbols = vocab.len(),
            merges,
            "training complete"
        );

        self.table = TokenTable::assign(&vocab, &self.config.unknown_token, self.config.id_offset);
        self.vocab = vocab;
        Ok(())
    }

    /// Encode text into trained-vocabulary symbols and ids.
    ///
    /// Symbols absent from the table map to the unknown id; empty or
    /// whitespace-only input yields an empty encoding. Neither is an error.
    pub fn encode(&self, text: &str) -> Encoding {
        let segmenter = self.segmenter();
        let (symbols, ids) = segmenter.encode(text);
        Encoding { symbols, ids }
    }

    /// Decode ids back into best-effort text.
    pub fn decode(&self, ids: &[u32]) -> String {
        self.segmenter().decode(ids)
    }

    /// The trained symbol -> frequency mapping.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The trained symbol <-> id table.
    pub fn table(&self) -> &TokenTable {
        &self.table
    }

    /// The active configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(&self.vocab, &self.table, self.config.boundary_marker)
    }
}

/// Result of encoding text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    /// Segmented symbols, in input order.
    pub symbols: Vec<Symbol>,
    /// Corresponding token ids.
    pub ids: Vec<u32>,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
