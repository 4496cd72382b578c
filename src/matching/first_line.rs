//! First-line schema matching - Column-content similarity matrix

use crate::matching::SimilarityMatrix;
use crate::relation::Relation;
use crate::similarity::{Jaccard, SimilarityMeasure, Tokenizer};

/// Scores every source/target attribute pair by the set-semantics Jaccard
/// similarity of the full column contents, treating each cell value as one
/// token.
pub struct FirstLineSchemaMatcher;

impl FirstLineSchemaMatcher {
    /// Produces the #source-attributes x #target-attributes similarity
    /// matrix of the two relations.
    pub fn match_relations<'a>(
        &self,
        source: &'a Relation,
        target: &'a Relation,
    ) -> SimilarityMatrix<'a> {
        let jaccard = Jaccard::new(Tokenizer::new(3, false), false);

        let matrix: Vec<Vec<f64>> = source
            .columns()
            .iter()
            .map(|source_column| {
                target
                    .columns()
                    .iter()
                    .map(|target_column| jaccard.compare_tokens(source_column, target_column))
                    .collect()
            })
            .collect();

        SimilarityMatrix::new(matrix, source, target)
    }
}
