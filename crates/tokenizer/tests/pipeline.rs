//! End-to-end pipeline tests over the full train/encode/decode surface.

use charm_tokenizer::{Tokenizer, UNKNOWN_ID};

const FIXTURE_LINE: &str = "aaab aaab aaab ab";

fn trained() -> Tokenizer {
    let mut tokenizer = Tokenizer::builder().build().unwrap();
    tokenizer.train([FIXTURE_LINE]).unwrap();
    tokenizer
}

/// Hand-verified convergence fixture.
///
/// Corpus: `_aaab` x3, `_ab` x1. Merge order: `aa` (6), `ab` (4), `_aa`
/// (3, lexicographic tie over `aaab`), `_aaab` (3); the remaining top
/// bigram `_ab` has frequency 1, so induction converges.
#[test]
fn fixture_vocabulary_frequencies() {
    let tokenizer = trained();
    let vocab = tokenizer.vocabulary();

    let expected = [
        ("_", 1),
        ("a", 0),
        ("b", 0),
        ("aa", 3),
        ("ab", 1),
        ("_aa", 0),
        ("_aaab", 3),
    ];
    assert_eq!(vocab.len(), expected.len());
    for (symbol, freq) in expected {
        assert_eq!(vocab.frequency(symbol), Some(freq), "{symbol}");
    }
}

#[test]
fn fixture_id_assignment() {
    let tokenizer = trained();
    let table = tokenizer.table();

    let expected = [
        ("_", 32),
        ("_aa", 33),
        ("_aaab", 34),
        ("a", 35),
        ("aa", 36),
        ("ab", 37),
        ("b", 38),
    ];
    for (symbol, id) in expected {
        assert_eq!(table.get_id(symbol), Some(id), "{symbol}");
        assert_eq!(table.get_symbol(id), Some(symbol));
    }
    assert_eq!(table.get_id("<unk>"), Some(UNKNOWN_ID));
}

#[test]
fn fixture_encode_known_text() {
    let tokenizer = trained();

    let encoding = tokenizer.encode("aaab ab");
    let symbols: Vec<&str> = encoding.symbols.iter().map(|s| s.as_str()).collect();
    assert_eq!(symbols, vec!["_aaab", "_", "ab"]);
    assert_eq!(encoding.ids, vec![34, 32, 37]);
}

#[test]
fn fixture_round_trip() {
    let tokenizer = trained();

    for text in ["aaab ab", "aaab aaab", "  aaab \t ab "] {
        let encoding = tokenizer.encode(text);
        let decoded = tokenizer.decode(&encoding.ids);
        // Round-trips modulo whitespace normalization.
        assert_eq!(decoded, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}

#[test]
fn unknown_character_position_and_decode() {
    let tokenizer = trained();

    // 'z' was never seen during training.
    let encoding = tokenizer.encode("aaab z");
    let symbols: Vec<&str> = encoding.symbols.iter().map(|s| s.as_str()).collect();
    assert_eq!(symbols, vec!["_aaab", "_", "z"]);
    assert_eq!(encoding.ids, vec![34, 32, UNKNOWN_ID]);

    assert_eq!(tokenizer.decode(&encoding.ids), "aaab <unk>");
}

#[test]
fn empty_input_encodes_to_nothing() {
    let tokenizer = trained();

    for text in ["", "   ", "\t\u{3000} "] {
        let encoding = tokenizer.encode(text);
        assert!(encoding.is_empty(), "{text:?}");
        assert!(encoding.symbols.is_empty());
    }
    assert_eq!(tokenizer.decode(&[]), "");
}

#[test]
fn zero_steps_yields_initial_character_table() {
    let mut tokenizer = Tokenizer::builder().steps(Some(0)).build().unwrap();
    tokenizer.train([FIXTURE_LINE]).unwrap();

    let vocab = tokenizer.vocabulary();
    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.frequency("_"), Some(4));
    assert_eq!(vocab.frequency("a"), Some(10));
    assert_eq!(vocab.frequency("b"), Some(4));
}

#[test]
fn training_is_deterministic() {
    let reference = trained();
    for _ in 0..5 {
        let run = trained();

        let mut expected: Vec<_> = reference.vocabulary().iter().collect();
        let mut got: Vec<_> = run.vocabulary().iter().collect();
        expected.sort();
        got.sort();
        assert_eq!(expected, got);

        let encoding = run.encode("aaab ab aaab");
        assert_eq!(encoding, reference.encode("aaab ab aaab"));
    }
}

#[test]
fn bounded_training_respects_step_budget() {
    let mut tokenizer = Tokenizer::builder().steps(Some(1)).build().unwrap();
    tokenizer.train([FIXTURE_LINE]).unwrap();

    let vocab = tokenizer.vocabulary();
    // Only the first merge ("aa", frequency 6) applied.
    assert_eq!(vocab.frequency("aa"), Some(6));
    assert_eq!(vocab.frequency("ab"), None);
    assert_eq!(vocab.len(), 4);
}

#[test]
fn multibyte_text_round_trips() {
    let mut tokenizer = Tokenizer::builder().build().unwrap();
    tokenizer
        .train(["语言 模型 语言 模型", "语言 论文"])
        .unwrap();

    let encoding = tokenizer.encode("语言 模型");
    assert_eq!(tokenizer.decode(&encoding.ids), "语言 模型");
}

#[test]
fn retraining_replaces_previous_model() {
    let mut tokenizer = trained();
    tokenizer.train(["xy xy xy"]).unwrap();

    assert_eq!(tokenizer.vocabulary().frequency("aaab"), None);
    let encoding = tokenizer.encode("xy");
    assert_eq!(tokenizer.decode(&encoding.ids), "xy");
}
