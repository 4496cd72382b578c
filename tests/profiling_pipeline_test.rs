//! Integration tests for the collaborator modules: IND scanning, schema
//! matching, and duplicate detection over CSV-loaded relations.

use datakit::dedup::{RecordComparator, SortedNeighborhood};
use datakit::matching::{FirstLineSchemaMatcher, SecondLineSchemaMatcher};
use datakit::profiling::IndProfiler;
use datakit::relation::Relation;

#[test]
fn test_ind_discovery_across_csv_relations() {
    let customers = Relation::from_csv_reader(
        "customers",
        "id,city\nc1,berlin\nc2,potsdam\nc3,berlin\n".as_bytes(),
    )
    .unwrap();
    let orders = Relation::from_csv_reader(
        "orders",
        "order_id,customer_id\no1,c1\no2,c3\n".as_bytes(),
    )
    .unwrap();

    let relations = vec![customers, orders];
    let inds = IndProfiler.profile(&relations);

    let found: Vec<(String, String)> = inds
        .iter()
        .map(|ind| {
            (
                format!(
                    "{}.{}",
                    ind.dependent_relation().name(),
                    ind.dependent_relation().attributes()[ind.dependent_attribute()].name
                ),
                format!(
                    "{}.{}",
                    ind.referenced_relation().name(),
                    ind.referenced_relation().attributes()[ind.referenced_attribute()].name
                ),
            )
        })
        .collect();

    assert!(found.contains(&("orders.customer_id".to_string(), "customers.id".to_string())));
    assert!(!found.contains(&("customers.id".to_string(), "orders.customer_id".to_string())));
}

#[test]
fn test_schema_matching_end_to_end() {
    let source = Relation::from_csv_reader(
        "people",
        "name,city\nada,berlin\nbob,potsdam\n".as_bytes(),
    )
    .unwrap();
    let target = Relation::from_csv_reader(
        "persons",
        "town,full_name\nberlin,ada\npotsdam,bob\n".as_bytes(),
    )
    .unwrap();

    let similarity = FirstLineSchemaMatcher.match_relations(&source, &target);
    assert_eq!(similarity.matrix().len(), 2);
    assert_eq!(similarity.matrix()[0].len(), 2);
    // name column matches full_name contents exactly, city matches town.
    assert_eq!(similarity.matrix()[0][1], 1.0);
    assert_eq!(similarity.matrix()[1][0], 1.0);

    let correspondences = SecondLineSchemaMatcher.match_matrix(&similarity);
    assert_eq!(correspondences.pairs(), vec![(0, 1), (1, 0)]);
}

#[test]
fn test_duplicate_detection_end_to_end() {
    let relation = Relation::from_csv_reader(
        "contacts",
        "name,city\n\
         jonathan smith,berlin\n\
         marta mayer,potsdam\n\
         jonathan smyth,berlin\n\
         colin brown,hamburg\n"
            .as_bytes(),
    )
    .unwrap();

    let comparator = RecordComparator::suggest_for(&relation);
    let duplicates = SortedNeighborhood
        .detect_duplicates(&relation, &[0, 1], 4, &comparator)
        .unwrap();

    let pairs: Vec<(usize, usize)> = duplicates
        .iter()
        .map(|duplicate| (duplicate.index1(), duplicate.index2()))
        .collect();
    assert_eq!(pairs, vec![(0, 2)]);

    for duplicate in &duplicates {
        assert!(duplicate.similarity() >= comparator.threshold());
    }
}
