//! Levenshtein - Edit-distance-based similarity
//!
//! Similarity is defined as `1 - distance / max(len)`. Over token lists the
//! distance counts token insertions, deletions, replacements (and, with
//! Damerau enabled, adjacent swaps).

use crate::similarity::SimilarityMeasure;

/// (Damerau-)Levenshtein similarity over characters or token lists. The
/// distance kernels come from `strsim`; this type owns the normalization to
/// [0, 1].
#[derive(Debug, Clone)]
pub struct Levenshtein {
    with_damerau: bool,
}

impl Levenshtein {
    pub fn new(with_damerau: bool) -> Self {
        Self { with_damerau }
    }
}

impl SimilarityMeasure for Levenshtein {
    fn compare(&self, string1: &str, string2: &str) -> f64 {
        let tokens1: Vec<String> = string1.chars().map(String::from).collect();
        let tokens2: Vec<String> = string2.chars().map(String::from).collect();
        self.compare_tokens(&tokens1, &tokens2)
    }

    fn compare_tokens(&self, tokens1: &[String], tokens2: &[String]) -> f64 {
        let max_len = tokens1.len().max(tokens2.len());
        if max_len == 0 {
            // Two empty inputs are identical; avoid 0 / 0.
            return 1.0;
        }
        let distance = if self.with_damerau {
            strsim::generic_damerau_levenshtein(tokens1, tokens2)
        } else {
            strsim::generic_levenshtein(&tokens1.to_vec(), &tokens2.to_vec())
        };
        1.0 - distance as f64 / max_len as f64
    }
}
