//! LSH - MinHash signatures approximating Jaccard similarity

use crate::similarity::{Jaccard, SimilarityMeasure, Tokenizer};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// One MinHash function: a seeded hash over tokens. Applied to a token list
/// it selects the token with the smallest hash value, so equal token sets
/// agree on the selected token regardless of order.
#[derive(Debug, Clone)]
pub struct MinHash {
    seed: u64,
}

impl MinHash {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The signature element for a token list: the token minimizing this
    /// function's seeded hash. Empty input yields an empty signature element.
    pub fn hash(&self, tokens: &[String]) -> String {
        tokens
            .iter()
            .min_by_key(|token| self.seeded_hash(token))
            .cloned()
            .unwrap_or_default()
    }

    fn seeded_hash(&self, token: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        token.hash(&mut hasher);
        hasher.finish()
    }
}

/// Approximate Jaccard similarity: both inputs are reduced to fixed-length
/// MinHash signatures, and the signatures are compared with plain Jaccard.
pub struct LocalitySensitiveHashing {
    tokenizer: Tokenizer,
    bag_semantics: bool,
    min_hash_functions: Vec<MinHash>,
}

impl LocalitySensitiveHashing {
    pub fn new(tokenizer: Tokenizer, bag_semantics: bool, num_hash_functions: usize) -> Self {
        let min_hash_functions = (0..num_hash_functions as u64).map(MinHash::new).collect();
        Self {
            tokenizer,
            bag_semantics,
            min_hash_functions,
        }
    }

    fn signature(&self, tokens: &[String]) -> Vec<String> {
        self.min_hash_functions
            .iter()
            .map(|min_hash| min_hash.hash(tokens))
            .collect()
    }
}

impl SimilarityMeasure for LocalitySensitiveHashing {
    fn compare(&self, string1: &str, string2: &str) -> f64 {
        let tokens1 = self.tokenizer.tokenize(string1);
        let tokens2 = self.tokenizer.tokenize(string2);
        self.compare_tokens(&tokens1, &tokens2)
    }

    fn compare_tokens(&self, tokens1: &[String], tokens2: &[String]) -> f64 {
        let signature1 = self.signature(tokens1);
        let signature2 = self.signature(tokens2);
        let jaccard = Jaccard::new(self.tokenizer.clone(), self.bag_semantics);
        jaccard.compare_tokens(&signature1, &signature2)
    }
}
