//! Sorting utilities.
//!
//! Stable ordering of JSON collections, either element by element
//! ([`sort_list`]) or by a record field ([`Sorter`]).

mod key;
mod list;
mod order;
mod sorter;

pub use list::sort_list;
pub use order::{SortError, SortOrder};
pub use sorter::Sorter;
