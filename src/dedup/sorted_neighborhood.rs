//! Sorted Neighborhood - Sort-and-window duplicate detection

use crate::dedup::record_comparator::RecordComparator;
use crate::error::{DatakitError, Result};
use crate::relation::Relation;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// A detected duplicate record pair. Identity is the (ordered) record index
/// pair, so the same pair found by different sorting-key runs collapses to
/// one entry.
#[derive(Debug, Clone)]
pub struct Duplicate<'a> {
    index1: usize,
    index2: usize,
    similarity: f64,
    relation: &'a Relation,
}

impl<'a> Duplicate<'a> {
    pub fn new(index1: usize, index2: usize, similarity: f64, relation: &'a Relation) -> Self {
        let (index1, index2) = if index1 <= index2 {
            (index1, index2)
        } else {
            (index2, index1)
        };
        Self {
            index1,
            index2,
            similarity,
            relation,
        }
    }

    pub fn index1(&self) -> usize {
        self.index1
    }

    pub fn index2(&self) -> usize {
        self.index2
    }

    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    pub fn relation(&self) -> &'a Relation {
        self.relation
    }
}

impl PartialEq for Duplicate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index1 == other.index1 && self.index2 == other.index2
    }
}

impl Eq for Duplicate<'_> {}

impl Hash for Duplicate<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index1.hash(state);
        self.index2.hash(state);
    }
}

/// The Sorted Neighborhood Method: one run per sorting key, each sorting the
/// records lexicographically on that attribute and comparing every record to
/// its windowed successors. The result is the union over all runs.
pub struct SortedNeighborhood;

impl SortedNeighborhood {
    /// Detects duplicates in `relation`. `window_size` is the number of
    /// records per window; each record is compared to its `window_size - 1`
    /// successors in sort order. A window size of 0 and out-of-range sorting
    /// keys are rejected.
    pub fn detect_duplicates<'a>(
        &self,
        relation: &'a Relation,
        sorting_keys: &[usize],
        window_size: usize,
        comparator: &RecordComparator,
    ) -> Result<HashSet<Duplicate<'a>>> {
        if window_size == 0 {
            return Err(DatakitError::InvalidParameter(
                "window size must be at least 1".to_string(),
            ));
        }
        for &key in sorting_keys {
            if key >= relation.num_attributes() {
                return Err(DatakitError::InvalidParameter(format!(
                    "sorting key {} out of range for {} attributes",
                    key,
                    relation.num_attributes()
                )));
            }
        }

        let mut records: Vec<(usize, Vec<&str>)> = (0..relation.num_rows())
            .map(|row| (row, relation.record(row)))
            .collect();

        let mut duplicates = HashSet::new();
        for &sorting_key in sorting_keys {
            records.sort_by(|(_, left), (_, right)| left[sorting_key].cmp(right[sorting_key]));

            for i in 0..records.len() {
                let window_end = (i + window_size).min(records.len());
                for j in (i + 1)..window_end {
                    let similarity = comparator.compare(&records[i].1, &records[j].1);
                    if comparator.is_duplicate(similarity) {
                        duplicates.insert(Duplicate::new(
                            records[i].0,
                            records[j].0,
                            similarity,
                            relation,
                        ));
                    }
                }
            }
        }

        debug!(
            relation = relation.name(),
            runs = sorting_keys.len(),
            window_size,
            duplicates = duplicates.len(),
            "sorted neighborhood done"
        );
        Ok(duplicates)
    }
}
