//! End-to-end tests for UCC discovery, including a brute-force cross-check
//! of soundness and completeness on small relations.

use datakit::profiling::{discover_unique_column_combinations, AttributeList, Ucc};
use datakit::relation::{Attribute, Relation};
use std::collections::HashSet;

fn relation(name: &str, columns: &[(&str, &[&str])]) -> Relation {
    Relation::new(
        name,
        columns
            .iter()
            .map(|(attribute, _)| Attribute::new(*attribute))
            .collect(),
        columns
            .iter()
            .map(|(_, values)| values.iter().map(|value| value.to_string()).collect())
            .collect(),
    )
    .unwrap()
}

fn attribute_sets(uccs: &[Ucc<'_>]) -> HashSet<AttributeList> {
    uccs.iter().map(|ucc| ucc.attributes().clone()).collect()
}

/// Whether the attribute subset encoded in `mask` separates all rows.
fn is_unique_subset(relation: &Relation, mask: u32) -> bool {
    let mut seen = HashSet::new();
    for row in 0..relation.num_rows() {
        let projection: Vec<&str> = (0..relation.num_attributes())
            .filter(|attribute| mask & (1 << attribute) != 0)
            .map(|attribute| relation.column(attribute)[row].as_str())
            .collect();
        if !seen.insert(projection) {
            return false;
        }
    }
    true
}

/// All minimal unique attribute subsets by exhaustive enumeration.
fn brute_force_minimal_uniques(relation: &Relation) -> HashSet<AttributeList> {
    let num_attributes = relation.num_attributes();
    let mut unique_masks: Vec<u32> = (1..1u32 << num_attributes)
        .filter(|mask| is_unique_subset(relation, *mask))
        .collect();
    unique_masks.sort_by_key(|mask| mask.count_ones());

    let mut minimal: Vec<u32> = Vec::new();
    for mask in unique_masks {
        if !minimal.iter().any(|smaller| mask & smaller == *smaller) {
            minimal.push(mask);
        }
    }

    minimal
        .into_iter()
        .map(|mask| {
            AttributeList::from_indexes(
                (0..num_attributes).filter(|attribute| mask & (1 << attribute) != 0),
            )
        })
        .collect()
}

fn assert_matches_brute_force(relation: &Relation) {
    let discovered = attribute_sets(&discover_unique_column_combinations(relation));
    let expected = brute_force_minimal_uniques(relation);
    assert_eq!(
        discovered, expected,
        "engine and brute force disagree on {}",
        relation.name()
    );
}

#[test]
fn test_brute_force_agreement_simple_key() {
    assert_matches_brute_force(&relation(
        "orders",
        &[
            ("id", &["1", "2", "3", "4"]),
            ("customer", &["a", "a", "b", "b"]),
            ("status", &["open", "open", "open", "done"]),
        ],
    ));
}

#[test]
fn test_brute_force_agreement_composite_keys() {
    assert_matches_brute_force(&relation(
        "grades",
        &[
            ("student", &["s1", "s1", "s2", "s2", "s3"]),
            ("course", &["math", "cs", "math", "cs", "math"]),
            ("grade", &["A", "B", "B", "A", "A"]),
            ("term", &["t1", "t1", "t1", "t2", "t2"]),
        ],
    ));
}

#[test]
fn test_brute_force_agreement_no_key_at_all() {
    assert_matches_brute_force(&relation(
        "dup",
        &[
            ("a", &["x", "x", "y"]),
            ("b", &["1", "1", "2"]),
        ],
    ));
}

#[test]
fn test_brute_force_agreement_wide_relation() {
    assert_matches_brute_force(&relation(
        "wide",
        &[
            ("c0", &["0", "0", "1", "1", "0", "1"]),
            ("c1", &["0", "1", "0", "1", "1", "0"]),
            ("c2", &["a", "a", "a", "b", "b", "b"]),
            ("c3", &["p", "q", "p", "q", "p", "q"]),
            ("c4", &["m", "m", "n", "n", "n", "m"]),
        ],
    ));
}

#[test]
fn test_monotonicity_of_uniqueness() {
    let relation = relation(
        "mono",
        &[
            ("a", &["1", "1", "2", "3"]),
            ("b", &["x", "y", "x", "y"]),
            ("c", &["p", "p", "q", "q"]),
        ],
    );

    for mask in 1..1u32 << relation.num_attributes() {
        if is_unique_subset(&relation, mask) {
            // Every superset of a unique subset stays unique.
            for superset in mask..1u32 << relation.num_attributes() {
                if superset & mask == mask {
                    assert!(is_unique_subset(&relation, superset));
                }
            }
        } else {
            // Every subset of a non-unique subset stays non-unique.
            for subset in 1..mask {
                if subset & mask == subset {
                    assert!(!is_unique_subset(&relation, subset));
                }
            }
        }
    }
}

#[test]
fn test_idempotence_over_repeated_runs() {
    let relation = relation(
        "stable",
        &[
            ("a", &["1", "2", "2", "3"]),
            ("b", &["x", "x", "y", "y"]),
            ("c", &["9", "8", "9", "8"]),
        ],
    );
    let first = attribute_sets(&discover_unique_column_combinations(&relation));
    for _ in 0..3 {
        let again = attribute_sets(&discover_unique_column_combinations(&relation));
        assert_eq!(first, again);
    }
}

#[test]
fn test_csv_roundtrip_discovery() {
    let csv_text = "\
id,region,amount
1,north,10
2,north,20
3,south,10
4,south,20
";
    let relation = Relation::from_csv_reader("sales", csv_text.as_bytes()).unwrap();
    let discovered = attribute_sets(&discover_unique_column_combinations(&relation));

    let expected = HashSet::from([
        AttributeList::single(0),
        AttributeList::from_indexes([1, 2]),
    ]);
    assert_eq!(discovered, expected);
}

#[test]
fn test_whitespace_and_empty_values_cluster_literally() {
    // The UCC engine must not trim or normalize: "" and " " are distinct,
    // equal literal values collide.
    let relation = relation(
        "raw",
        &[
            ("a", &["", " ", ""]),
            ("b", &["x", "y", "z"]),
        ],
    );
    let discovered = attribute_sets(&discover_unique_column_combinations(&relation));
    // Column a has a duplicate "" pair, so only b is a key.
    assert_eq!(discovered, HashSet::from([AttributeList::single(1)]));
}
