//! RecordComparator - Weighted per-attribute record similarity

use crate::relation::Relation;
use crate::similarity::{Jaccard, Levenshtein, SimilarityMeasure, Tokenizer};

/// One attribute's contribution to a record comparison: which attribute to
/// read, the measure to score it with, and its weight in the mix.
pub struct AttrSimWeight {
    pub attribute: usize,
    pub measure: Box<dyn SimilarityMeasure>,
    pub weight: f64,
}

impl AttrSimWeight {
    pub fn new(attribute: usize, measure: Box<dyn SimilarityMeasure>, weight: f64) -> Self {
        Self {
            attribute,
            measure,
            weight,
        }
    }
}

/// Compares whole records as the weight-normalized mean of per-attribute
/// similarities and classifies pairs against a fixed threshold.
pub struct RecordComparator {
    attr_sim_weights: Vec<AttrSimWeight>,
    threshold: f64,
}

impl RecordComparator {
    pub fn new(attr_sim_weights: Vec<AttrSimWeight>, threshold: f64) -> Self {
        Self {
            attr_sim_weights,
            threshold,
        }
    }

    /// A default comparator for the relation's schema: plain strings get
    /// Levenshtein, "tokenized_string" attributes get trigram set Jaccard.
    pub fn suggest_for(relation: &Relation) -> Self {
        let attr_sim_weights = relation
            .attributes()
            .iter()
            .enumerate()
            .map(|(attribute, meta)| match meta.data_type.as_str() {
                "tokenized_string" => AttrSimWeight::new(
                    attribute,
                    Box::new(Jaccard::new(Tokenizer::new(3, false), false)),
                    0.2,
                ),
                _ => AttrSimWeight::new(attribute, Box::new(Levenshtein::new(false)), 0.1),
            })
            .collect();
        Self::new(attr_sim_weights, 0.8)
    }

    /// The same comparator with a different classification threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Weighted similarity of two records given as one cell per attribute.
    pub fn compare(&self, record1: &[&str], record2: &[&str]) -> f64 {
        let total_weight: f64 = self
            .attr_sim_weights
            .iter()
            .map(|attr_sim_weight| attr_sim_weight.weight)
            .sum();
        if total_weight == 0.0 {
            return 0.0;
        }
        let weighted_sum: f64 = self
            .attr_sim_weights
            .iter()
            .map(|attr_sim_weight| {
                let attribute = attr_sim_weight.attribute;
                attr_sim_weight.weight
                    * attr_sim_weight
                        .measure
                        .compare(record1[attribute], record2[attribute])
            })
            .sum();
        weighted_sum / total_weight
    }

    pub fn is_duplicate(&self, similarity: f64) -> bool {
        similarity >= self.threshold
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
