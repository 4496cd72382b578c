use anyhow::Result;
use clap::{Parser, Subcommand};
use datakit::dedup::{RecordComparator, SortedNeighborhood};
use datakit::matching::{FirstLineSchemaMatcher, SecondLineSchemaMatcher};
use datakit::profiling::{IndProfiler, UccProfiler};
use datakit::Relation;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "datakit")]
#[command(about = "Data profiling and data integration for CSV relations")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover all minimal unique column combinations of a relation
    Ucc {
        /// Headered CSV file holding the relation
        file: PathBuf,
    },
    /// Discover unary inclusion dependencies across one or more relations
    Ind {
        /// Headered CSV files, one relation each
        files: Vec<PathBuf>,
    },
    /// Detect duplicate records with the Sorted Neighborhood Method
    Duplicates {
        /// Headered CSV file holding the relation
        file: PathBuf,

        /// Sorting key attribute indexes, one run per key
        #[arg(long, value_delimiter = ',', default_value = "0")]
        keys: Vec<usize>,

        /// Window size per run
        #[arg(long, default_value_t = 10)]
        window: usize,

        /// Similarity threshold override for the record comparator
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Match the attributes of two relations
    Match {
        /// Source relation CSV (matrix rows)
        source: PathBuf,
        /// Target relation CSV (matrix columns)
        target: PathBuf,
    },
}

#[derive(Serialize)]
struct UccReport {
    relation: String,
    unique_column_combinations: Vec<Vec<String>>,
}

#[derive(Serialize)]
struct IndReport {
    inclusion_dependencies: Vec<IndEntry>,
}

#[derive(Serialize)]
struct IndEntry {
    dependent_relation: String,
    dependent_column: String,
    referenced_relation: String,
    referenced_column: String,
}

#[derive(Serialize)]
struct DuplicateReport {
    relation: String,
    duplicates: Vec<DuplicateEntry>,
}

#[derive(Serialize)]
struct DuplicateEntry {
    row1: usize,
    row2: usize,
    similarity: f64,
}

#[derive(Serialize)]
struct MatchReport {
    source_relation: String,
    target_relation: String,
    similarity_matrix: Vec<Vec<f64>>,
    correspondences: Vec<CorrespondenceEntry>,
}

#[derive(Serialize)]
struct CorrespondenceEntry {
    source_column: String,
    target_column: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match args.command {
        Command::Ucc { file } => run_ucc(&file),
        Command::Ind { files } => run_ind(&files),
        Command::Duplicates {
            file,
            keys,
            window,
            threshold,
        } => run_duplicates(&file, &keys, window, threshold),
        Command::Match { source, target } => run_match(&source, &target),
    }
}

fn run_ucc(file: &PathBuf) -> Result<()> {
    let relation = Relation::from_csv_path(file)?;
    info!(
        relation = relation.name(),
        rows = relation.num_rows(),
        attributes = relation.num_attributes(),
        "profiling unique column combinations"
    );

    let uccs = UccProfiler.profile(&relation);
    let report = UccReport {
        relation: relation.name().to_string(),
        unique_column_combinations: uccs
            .iter()
            .map(|ucc| {
                ucc.attribute_names()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_ind(files: &[PathBuf]) -> Result<()> {
    let relations = files
        .iter()
        .map(Relation::from_csv_path)
        .collect::<datakit::Result<Vec<_>>>()?;
    info!(relations = relations.len(), "profiling inclusion dependencies");

    let inds = IndProfiler.profile(&relations);
    let report = IndReport {
        inclusion_dependencies: inds
            .iter()
            .map(|ind| IndEntry {
                dependent_relation: ind.dependent_relation().name().to_string(),
                dependent_column: ind.dependent_relation().attributes()
                    [ind.dependent_attribute()]
                .name
                .clone(),
                referenced_relation: ind.referenced_relation().name().to_string(),
                referenced_column: ind.referenced_relation().attributes()
                    [ind.referenced_attribute()]
                .name
                .clone(),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_duplicates(
    file: &PathBuf,
    keys: &[usize],
    window: usize,
    threshold: Option<f64>,
) -> Result<()> {
    let relation = Relation::from_csv_path(file)?;
    info!(
        relation = relation.name(),
        rows = relation.num_rows(),
        window,
        "detecting duplicates"
    );

    let mut comparator = RecordComparator::suggest_for(&relation);
    if let Some(threshold) = threshold {
        comparator = comparator.with_threshold(threshold);
    }
    let duplicates = SortedNeighborhood.detect_duplicates(&relation, keys, window, &comparator)?;

    let mut entries: Vec<DuplicateEntry> = duplicates
        .iter()
        .map(|duplicate| DuplicateEntry {
            row1: duplicate.index1(),
            row2: duplicate.index2(),
            similarity: duplicate.similarity(),
        })
        .collect();
    entries.sort_by_key(|entry| (entry.row1, entry.row2));

    let report = DuplicateReport {
        relation: relation.name().to_string(),
        duplicates: entries,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_match(source: &PathBuf, target: &PathBuf) -> Result<()> {
    let source = Relation::from_csv_path(source)?;
    let target = Relation::from_csv_path(target)?;
    info!(
        source = source.name(),
        target = target.name(),
        "matching schemas"
    );

    let similarity = FirstLineSchemaMatcher.match_relations(&source, &target);
    let correspondences = SecondLineSchemaMatcher.match_matrix(&similarity);

    let report = MatchReport {
        source_relation: source.name().to_string(),
        target_relation: target.name().to_string(),
        similarity_matrix: similarity.matrix().to_vec(),
        correspondences: correspondences
            .pairs()
            .into_iter()
            .map(|(source_index, target_index)| CorrespondenceEntry {
                source_column: source.attributes()[source_index].name.clone(),
                target_column: target.attributes()[target_index].name.clone(),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_accepts_threshold_override() {
        let args = Args::try_parse_from([
            "datakit",
            "duplicates",
            "contacts.csv",
            "--keys",
            "0,1",
            "--window",
            "5",
            "--threshold",
            "0.5",
        ])
        .unwrap();
        match args.command {
            Command::Duplicates {
                keys,
                window,
                threshold,
                ..
            } => {
                assert_eq!(keys, vec![0, 1]);
                assert_eq!(window, 5);
                assert_eq!(threshold, Some(0.5));
            }
            _ => panic!("expected the duplicates subcommand"),
        }
    }

    #[test]
    fn test_duplicates_threshold_is_optional() {
        let args = Args::try_parse_from(["datakit", "duplicates", "contacts.csv"]).unwrap();
        match args.command {
            Command::Duplicates { threshold, .. } => assert_eq!(threshold, None),
            _ => panic!("expected the duplicates subcommand"),
        }
    }
}
