//! PositionListIndex - Stripped-partition index over an attribute combination
//!
//! Rows with an identical combined value form a cluster; singleton clusters
//! are stripped, so a row missing from every cluster is known to be unique
//! under the indexed attribute combination. Adding attributes only ever splits
//! clusters, never merges them, which is what makes dropped rows safe to
//! forget for every superset combination.

use crate::profiling::attribute_list::AttributeList;
use std::collections::HashMap;

/// A stripped partition of row indexes bound to one attribute combination.
#[derive(Debug, Clone)]
pub struct PositionListIndex {
    attributes: AttributeList,
    /// Clusters of size >= 2, rows ascending within each cluster, clusters in
    /// lexicographic order (ties broken by length, which for disjoint sorted
    /// clusters coincides with prefix order).
    clusters: Vec<Vec<usize>>,
    /// Row index -> cluster position, `None` for stripped (unique) rows.
    inverted: Vec<Option<usize>>,
}

impl PositionListIndex {
    /// Builds the index for one column (or any per-row value projection) by
    /// grouping rows on exact string equality.
    pub fn from_column(attributes: AttributeList, values: &[String]) -> Self {
        let mut groups: HashMap<&str, Vec<usize>> = HashMap::with_capacity(values.len());
        for (row, value) in values.iter().enumerate() {
            groups.entry(value.as_str()).or_default().push(row);
        }
        let clusters = Self::canonicalize(groups.into_values());
        Self::from_clusters(attributes, clusters, values.len())
    }

    fn from_clusters(
        attributes: AttributeList,
        clusters: Vec<Vec<usize>>,
        num_rows: usize,
    ) -> Self {
        let mut inverted = vec![None; num_rows];
        for (cluster_index, cluster) in clusters.iter().enumerate() {
            for &row in cluster {
                inverted[row] = Some(cluster_index);
            }
        }
        Self {
            attributes,
            clusters,
            inverted,
        }
    }

    /// Strips singleton groups and puts the survivors into canonical order.
    fn canonicalize(groups: impl IntoIterator<Item = Vec<usize>>) -> Vec<Vec<usize>> {
        let mut clusters: Vec<Vec<usize>> = groups
            .into_iter()
            .filter(|cluster| cluster.len() > 1)
            .collect();
        for cluster in &mut clusters {
            cluster.sort_unstable();
        }
        clusters.sort_unstable();
        clusters
    }

    /// Stripped-partition product: refines every cluster of `self` by the
    /// cluster membership of its rows in `other`. Rows that are already unique
    /// under `other` (inverse lookup `None`) stay unique under the union and
    /// are dropped; refined sub-groups keep only sizes >= 2.
    ///
    /// Runs linear in the number of rows contained in `self`'s clusters,
    /// independent of the number of distinct values in the relation.
    pub fn intersect(&self, other: &PositionListIndex) -> PositionListIndex {
        let mut refined: Vec<Vec<usize>> = Vec::new();
        for cluster in &self.clusters {
            let mut sub_clusters: HashMap<usize, Vec<usize>> = HashMap::new();
            for &row in cluster {
                if let Some(other_cluster) = other.inverted[row] {
                    sub_clusters.entry(other_cluster).or_default().push(row);
                }
            }
            refined.extend(sub_clusters.into_values());
        }
        let clusters = Self::canonicalize(refined);
        Self::from_clusters(
            self.attributes.union(&other.attributes),
            clusters,
            self.inverted.len(),
        )
    }

    /// True iff no two rows share a combined value on the indexed attributes.
    pub fn is_unique(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    pub fn num_rows(&self) -> usize {
        self.inverted.len()
    }

    /// The cluster position of `row`, or `None` if the row is unique under
    /// the indexed attribute combination.
    pub fn cluster_of(&self, row: usize) -> Option<usize> {
        self.inverted[row]
    }
}
