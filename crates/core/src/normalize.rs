//! Whitespace normalization shared by training and encoding.
//!
//! Both the corpus builder and the encoder see text through the same lens:
//! runs of whitespace collapse to a single space and edges are trimmed.

use crate::error::{Result, TokenizerError};
use regex::Regex;
use std::sync::OnceLock;

/// Collapse whitespace runs to a single space and trim the edges.
pub fn normalize_whitespace(text: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
    re.replace_all(text.trim(), " ").into_owned()
}

/// Validate a training line before any state is touched.
///
/// A line must be a single line: embedded line breaks indicate the caller
/// handed over something that is not an ordered sequence of lines.
pub fn validate_line(line: &str) -> Result<()> {
    if line.contains('\n') || line.contains('\r') {
        return Err(TokenizerError::InvalidInput(
            "training line contains an embedded line break".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_runs() {
        assert_eq!(normalize_whitespace("a  b\t\tc"), "a b c");
    }

    #[test]
    fn test_trim_edges() {
        assert_eq!(normalize_whitespace("  hello world  "), "hello world");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \t "), "");
    }

    #[test]
    fn test_validate_line() {
        assert!(validate_line("a single line").is_ok());
        assert!(validate_line("two\nlines").is_err());
        assert!(validate_line("carriage\rreturn").is_err());
    }
}
