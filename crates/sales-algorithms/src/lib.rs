//! Classic sort and search routines, and timing comparisons against the
//! standard library equivalents.

pub mod bench;
pub mod search;
pub mod sort;

pub use bench::{Timing, compare_searching, compare_sorting, descending_sequence};
pub use search::{binary_search, linear_search};
pub use sort::quicksort;
