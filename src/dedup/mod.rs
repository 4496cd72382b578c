//! Duplicate detection via the Sorted Neighborhood Method

pub mod record_comparator;
pub mod sorted_neighborhood;

pub use record_comparator::{AttrSimWeight, RecordComparator};
pub use sorted_neighborhood::{Duplicate, SortedNeighborhood};
