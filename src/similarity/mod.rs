//! String similarity primitives
//!
//! Every measure maps a pair of strings (or token lists) to a score in
//! [0, 1]. They are consumed as black-box comparators by duplicate detection
//! and schema matching.

pub mod jaccard;
pub mod levenshtein;
pub mod lsh;
pub mod tokenizer;

pub use jaccard::Jaccard;
pub use levenshtein::Levenshtein;
pub use lsh::{LocalitySensitiveHashing, MinHash};
pub use tokenizer::Tokenizer;

/// A symmetric similarity function over strings and over token lists.
pub trait SimilarityMeasure {
    /// Similarity of two strings, in [0, 1].
    fn compare(&self, string1: &str, string2: &str) -> f64;

    /// Similarity of two token lists, in [0, 1].
    fn compare_tokens(&self, tokens1: &[String], tokens2: &[String]) -> f64;
}
