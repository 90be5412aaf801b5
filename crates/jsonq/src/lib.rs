//! jsonq - path navigation and ordering core for a fluent JSON query API.
//!
//! Re-exports [`jsonq_path`] (path node classification and lookup) and
//! [`jsonq_util`] (scalar normalization and sorting) under one roof.
//!
//! # Example
//!
//! ```
//! use jsonq::{find, SortOrder, Sorter, DEFAULT_SEPARATOR};
//! use serde_json::json;
//!
//! let mut doc = json!({"store": {"books": [
//!     {"title": "B", "price": 12},
//!     {"title": "A", "price": 8.5}
//! ]}});
//!
//! let sorter = Sorter::new("price", "asc".parse::<SortOrder>().unwrap());
//! if let Some(books) = jsonq::path::get_mut(&mut doc, &["store", "books"]) {
//!     sorter.sort_value(books);
//! }
//! assert_eq!(find(&doc, "store.books.[0].title", DEFAULT_SEPARATOR), Ok(&json!("A")));
//! ```

pub use jsonq_path as path;
pub use jsonq_util as util;

pub use jsonq_path::{
    find, get, get_index, get_mut, is_index, split_path, PathError, PathNode, DEFAULT_SEPARATOR,
};
pub use jsonq_util::{
    sort_list, to_float64, to_string, Scalar, ScalarError, SortError, SortOrder, Sorter,
};
