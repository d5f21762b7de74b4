//! Encoding and decoding against a trained vocabulary.

pub mod segmenter;

pub use segmenter::Segmenter;
