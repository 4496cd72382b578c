//! Data profiling: unique column combinations and inclusion dependencies

pub mod attribute_list;
pub mod ind;
pub mod pli;
pub mod ucc;

pub use attribute_list::AttributeList;
pub use ind::{Ind, IndProfiler};
pub use pli::PositionListIndex;
pub use ucc::{discover_unique_column_combinations, Ucc, UccProfiler};
