//! UCC discovery - Level-wise lattice search over attribute combinations
//!
//! Uniqueness is monotone under attribute-set growth: adding attributes can
//! only split equivalence clusters further. The engine therefore only ever
//! expands non-unique survivors, and a combination whose subset is already a
//! known unique is pruned as redundant.

use crate::profiling::attribute_list::AttributeList;
use crate::profiling::pli::PositionListIndex;
use crate::relation::Relation;
use itertools::Itertools;
use std::collections::HashSet;
use tracing::debug;

/// A discovered minimal unique column combination of one relation.
#[derive(Debug, Clone)]
pub struct Ucc<'a> {
    relation: &'a Relation,
    attributes: AttributeList,
}

impl<'a> Ucc<'a> {
    pub fn new(relation: &'a Relation, attributes: AttributeList) -> Self {
        Self {
            relation,
            attributes,
        }
    }

    pub fn relation(&self) -> &'a Relation {
        self.relation
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// The combination as attribute names, in attribute order.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .map(|index| self.relation.attributes()[index].name.as_str())
            .collect()
    }
}

/// Discovers all minimal, non-trivial unique column combinations of a
/// relation. Convenience wrapper around [`UccProfiler::profile`].
pub fn discover_unique_column_combinations(relation: &Relation) -> Vec<Ucc<'_>> {
    UccProfiler.profile(relation)
}

/// Level-wise UCC lattice engine. All search state lives inside one
/// `profile` call, so a single profiler value can be reused across relations
/// and runs never observe each other.
pub struct UccProfiler;

impl UccProfiler {
    /// Discovers all minimal, non-trivial unique column combinations in the
    /// provided relation.
    pub fn profile<'a>(&self, relation: &'a Relation) -> Vec<Ucc<'a>> {
        let mut uniques: Vec<Ucc<'a>> = Vec::new();
        let mut current_non_uniques: Vec<PositionListIndex> = Vec::new();

        // Level 1: one PLI per attribute, straight from the column. On a
        // zero-row relation every column is trivially unique.
        for attribute in 0..relation.num_attributes() {
            let attributes = AttributeList::single(attribute);
            let pli = PositionListIndex::from_column(attributes.clone(), relation.column(attribute));
            if pli.is_unique() {
                uniques.push(Ucc::new(relation, attributes));
            } else {
                current_non_uniques.push(pli);
            }
        }
        debug!(
            relation = relation.name(),
            unary_uniques = uniques.len(),
            survivors = current_non_uniques.len(),
            "unary profiling done"
        );

        // Levels 2..: combine pairs of non-unique survivors. Different parent
        // pairs can produce the same union, hence the checked set.
        let mut checked_combinations: HashSet<AttributeList> = HashSet::new();
        let mut size = 2;
        while !current_non_uniques.is_empty() {
            let mut next_non_uniques: Vec<PositionListIndex> = Vec::new();

            for (left, right) in current_non_uniques.iter().tuple_combinations::<(_, _)>() {
                let combined_attributes = left.attributes().union(right.attributes());
                // Parents sharing attributes produce undersized unions that
                // belong to an earlier level; skip them and anything already
                // evaluated this run.
                if combined_attributes.len() != size
                    || !checked_combinations.insert(combined_attributes.clone())
                {
                    continue;
                }

                let combined_pli = left.intersect(right);
                if combined_pli.is_unique() {
                    if Self::is_minimal(&combined_attributes, &uniques) {
                        uniques.push(Ucc::new(relation, combined_attributes));
                    }
                } else {
                    next_non_uniques.push(combined_pli);
                }
            }

            debug!(
                relation = relation.name(),
                level = size,
                survivors = next_non_uniques.len(),
                uniques = uniques.len(),
                "lattice level done"
            );
            current_non_uniques = next_non_uniques;
            size += 1;
        }

        uniques
    }

    /// A unique candidate is minimal iff no already-recorded UCC is a subset
    /// of it. Pairwise level-wise generation alone does not rule this out.
    fn is_minimal(candidate: &AttributeList, uniques: &[Ucc<'_>]) -> bool {
        uniques
            .iter()
            .all(|ucc| !candidate.is_superset_of(ucc.attributes()))
    }
}
