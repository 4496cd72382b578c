//! Schema matching: similarity matrix + assignment-based correspondences

pub mod first_line;
pub mod second_line;

pub use first_line::FirstLineSchemaMatcher;
pub use second_line::SecondLineSchemaMatcher;

use crate::relation::Relation;

/// Attribute-to-attribute similarity scores of two relations. The first
/// dimension is the source attribute, the second the target attribute.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix<'a> {
    matrix: Vec<Vec<f64>>,
    source: &'a Relation,
    target: &'a Relation,
}

impl<'a> SimilarityMatrix<'a> {
    pub fn new(matrix: Vec<Vec<f64>>, source: &'a Relation, target: &'a Relation) -> Self {
        Self {
            matrix,
            source,
            target,
        }
    }

    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    pub fn source(&self) -> &'a Relation {
        self.source
    }

    pub fn target(&self) -> &'a Relation {
        self.target
    }
}

/// A 0/1 matrix marking the selected attribute correspondences; same shape
/// and orientation as the similarity matrix it was derived from.
#[derive(Debug, Clone)]
pub struct CorrespondenceMatrix<'a> {
    matrix: Vec<Vec<u8>>,
    source: &'a Relation,
    target: &'a Relation,
}

impl<'a> CorrespondenceMatrix<'a> {
    pub fn new(matrix: Vec<Vec<u8>>, source: &'a Relation, target: &'a Relation) -> Self {
        Self {
            matrix,
            source,
            target,
        }
    }

    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    pub fn source(&self) -> &'a Relation {
        self.source
    }

    pub fn target(&self) -> &'a Relation {
        self.target
    }

    /// The correspondences as (source attribute, target attribute) pairs.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (source_index, row) in self.matrix.iter().enumerate() {
            for (target_index, &cell) in row.iter().enumerate() {
                if cell == 1 {
                    pairs.push((source_index, target_index));
                }
            }
        }
        pairs
    }
}
