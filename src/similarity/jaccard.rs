//! Jaccard - Token-overlap similarity with set or bag semantics

use crate::similarity::{SimilarityMeasure, Tokenizer};
use std::collections::{HashMap, HashSet};

/// Jaccard similarity over token lists. Set semantics is |A ∩ B| / |A ∪ B|;
/// bag semantics counts token multiplicities and divides the multiset
/// intersection by the total token count, capping the score at 1/2.
#[derive(Debug, Clone)]
pub struct Jaccard {
    tokenizer: Tokenizer,
    bag_semantics: bool,
}

impl Jaccard {
    pub fn new(tokenizer: Tokenizer, bag_semantics: bool) -> Self {
        Self {
            tokenizer,
            bag_semantics,
        }
    }
}

impl SimilarityMeasure for Jaccard {
    fn compare(&self, string1: &str, string2: &str) -> f64 {
        let tokens1 = self.tokenizer.tokenize(string1);
        let tokens2 = self.tokenizer.tokenize(string2);
        self.compare_tokens(&tokens1, &tokens2)
    }

    fn compare_tokens(&self, tokens1: &[String], tokens2: &[String]) -> f64 {
        if tokens1.is_empty() && tokens2.is_empty() {
            // Identical inputs score as high as the semantics allow; bag
            // semantics caps identical lists at 1/2.
            return if self.bag_semantics { 0.5 } else { 1.0 };
        }

        if self.bag_semantics {
            let counts1 = token_counts(tokens1);
            let counts2 = token_counts(tokens2);
            let intersection: usize = counts1
                .iter()
                .filter_map(|(token, count1)| counts2.get(token).map(|count2| count1.min(count2)))
                .sum();
            intersection as f64 / (tokens1.len() + tokens2.len()) as f64
        } else {
            let set1: HashSet<&String> = tokens1.iter().collect();
            let set2: HashSet<&String> = tokens2.iter().collect();
            let intersection = set1.intersection(&set2).count();
            let union = set1.union(&set2).count();
            intersection as f64 / union as f64
        }
    }
}

fn token_counts(tokens: &[String]) -> HashMap<&String, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
