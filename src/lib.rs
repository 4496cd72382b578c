//! datakit - data profiling and data integration for tabular relations
//!
//! The core is UCC discovery: finding all minimal attribute combinations
//! whose combined values are row-unique, via stripped-partition indexes and a
//! level-wise lattice search. Around it sit the usual profiling companions:
//! inclusion-dependency scanning, sorted-neighborhood duplicate detection,
//! two-phase schema matching, and string-similarity primitives.

pub mod dedup;
pub mod error;
pub mod matching;
pub mod profiling;
pub mod relation;
pub mod similarity;

pub use error::{DatakitError, Result};
pub use profiling::discover_unique_column_combinations;
pub use relation::{Attribute, Relation};
