//! jsonq-util - normalization and ordering primitives for jsonq
//!
//! The query builder compares leaf values through [`scalar`] and orders
//! result sets through [`sort`].

pub mod scalar;
pub mod sort;

// Re-exports for convenience
pub use scalar::{to_float64, to_string, value_kind, Scalar, ScalarError};
pub use sort::{sort_list, SortError, SortOrder, Sorter};
