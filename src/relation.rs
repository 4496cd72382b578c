//! Relation - Immutable column-major table over raw string values

use crate::error::{DatakitError, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// An attribute (column header) of a relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Logical type label, e.g. "string" or "tokenized_string". CSV ingestion
    /// defaults to "string"; callers with richer schemas can set it themselves.
    pub data_type: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: "string".to_string(),
        }
    }

    pub fn with_type(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// An immutable, rectangular table: an ordered list of attributes and an
/// equal-length list of columns, each an ordered list of raw cell values.
///
/// Profiling code only ever reads a relation; all invariants are checked once
/// at construction and violations are rejected there.
#[derive(Debug, Clone, Serialize)]
pub struct Relation {
    name: String,
    attributes: Vec<Attribute>,
    columns: Vec<Vec<String>>,
}

impl Relation {
    /// Builds a relation, validating that the column count matches the
    /// attribute count and that every column has the same length.
    pub fn new(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        columns: Vec<Vec<String>>,
    ) -> Result<Self> {
        let name = name.into();
        if attributes.len() != columns.len() {
            return Err(DatakitError::MalformedRelation {
                relation: name,
                reason: format!(
                    "{} attributes but {} columns",
                    attributes.len(),
                    columns.len()
                ),
            });
        }
        if let Some(first) = columns.first() {
            let num_rows = first.len();
            for (index, column) in columns.iter().enumerate() {
                if column.len() != num_rows {
                    return Err(DatakitError::MalformedRelation {
                        relation: name,
                        reason: format!(
                            "ragged columns: column {} has {} rows, expected {}",
                            index,
                            column.len(),
                            num_rows
                        ),
                    });
                }
            }
        }
        Ok(Self {
            name,
            attributes,
            columns,
        })
    }

    /// Loads a relation from a headered CSV file. The file stem becomes the
    /// relation name and every attribute gets the default "string" type.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "relation".to_string());
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(name, file)
    }

    /// Loads a relation from headered CSV text provided by any reader.
    pub fn from_csv_reader(name: impl Into<String>, reader: impl Read) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let attributes: Vec<Attribute> = csv_reader
            .headers()?
            .iter()
            .map(Attribute::new)
            .collect();

        let mut columns: Vec<Vec<String>> = vec![Vec::new(); attributes.len()];
        for record in csv_reader.records() {
            let record = record?;
            for (index, column) in columns.iter_mut().enumerate() {
                column.push(record.get(index).unwrap_or_default().to_string());
            }
        }

        Self::new(name, attributes, columns)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |column| column.len())
    }

    pub fn columns(&self) -> &[Vec<String>] {
        &self.columns
    }

    pub fn column(&self, attribute: usize) -> &[String] {
        &self.columns[attribute]
    }

    /// The row at `row` as one cell per attribute, in attribute order.
    pub fn record(&self, row: usize) -> Vec<&str> {
        self.columns.iter().map(|column| column[row].as_str()).collect()
    }
}
