//! IND discovery - Unary inclusion dependencies across relations

use crate::relation::Relation;
use std::collections::HashSet;
use tracing::debug;

/// A unary inclusion dependency: every value of the dependent column also
/// appears in the referenced column.
#[derive(Debug, Clone)]
pub struct Ind<'a> {
    dependent_relation: &'a Relation,
    dependent_attribute: usize,
    referenced_relation: &'a Relation,
    referenced_attribute: usize,
}

impl<'a> Ind<'a> {
    pub fn new(
        dependent_relation: &'a Relation,
        dependent_attribute: usize,
        referenced_relation: &'a Relation,
        referenced_attribute: usize,
    ) -> Self {
        Self {
            dependent_relation,
            dependent_attribute,
            referenced_relation,
            referenced_attribute,
        }
    }

    pub fn dependent_relation(&self) -> &'a Relation {
        self.dependent_relation
    }

    pub fn dependent_attribute(&self) -> usize {
        self.dependent_attribute
    }

    pub fn referenced_relation(&self) -> &'a Relation {
        self.referenced_relation
    }

    pub fn referenced_attribute(&self) -> usize {
        self.referenced_attribute
    }
}

/// Pairwise column-containment scanner. Unlike the UCC engine, the scanner
/// trims cell values and ignores values that are empty after trimming; a
/// column with no remaining values produces no dependencies.
pub struct IndProfiler;

impl IndProfiler {
    /// Discovers all non-trivial unary inclusion dependencies among the
    /// columns of the provided relations.
    pub fn profile<'a>(&self, relations: &'a [Relation]) -> Vec<Ind<'a>> {
        let value_sets: Vec<Vec<HashSet<&str>>> = relations
            .iter()
            .map(|relation| {
                relation
                    .columns()
                    .iter()
                    .map(|column| {
                        column
                            .iter()
                            .map(|value| value.trim())
                            .filter(|value| !value.is_empty())
                            .collect()
                    })
                    .collect()
            })
            .collect();

        let mut inclusion_dependencies = Vec::new();
        for (dep_index, dep_relation) in relations.iter().enumerate() {
            for dep_attribute in 0..dep_relation.num_attributes() {
                let dep_values = &value_sets[dep_index][dep_attribute];
                if dep_values.is_empty() {
                    continue;
                }
                for (ref_index, ref_relation) in relations.iter().enumerate() {
                    for ref_attribute in 0..ref_relation.num_attributes() {
                        // A column trivially includes itself.
                        if dep_index == ref_index && dep_attribute == ref_attribute {
                            continue;
                        }
                        let ref_values = &value_sets[ref_index][ref_attribute];
                        if dep_values.is_subset(ref_values) {
                            inclusion_dependencies.push(Ind::new(
                                dep_relation,
                                dep_attribute,
                                ref_relation,
                                ref_attribute,
                            ));
                        }
                    }
                }
            }
        }

        debug!(
            relations = relations.len(),
            inds = inclusion_dependencies.len(),
            "IND profiling done"
        );
        inclusion_dependencies
    }
}
