//! Query path utilities.
//!
//! Paths handed to the query builder look like `items.[0].name`: nodes
//! joined by a separator, where only the bracketed `[<digits>]` form
//! addresses an array element.
//!
//! # Example
//!
//! ```
//! use jsonq_path::{find, get, get_index, is_index, split_path, DEFAULT_SEPARATOR};
//! use serde_json::json;
//!
//! assert!(is_index("[0]"));
//! assert!(!is_index("0"));
//! assert_eq!(get_index("[7]"), Some(7));
//!
//! let doc = json!({"items": [{"name": "pen"}]});
//! let nodes = split_path("items.[0].name", DEFAULT_SEPARATOR);
//! assert_eq!(get(&doc, &nodes), Some(&json!("pen")));
//! assert_eq!(find(&doc, "items.[0].name", DEFAULT_SEPARATOR), Ok(&json!("pen")));
//! ```

use thiserror::Error;

pub mod node;
pub use node::{get_index, is_index, PathNode};

pub mod util;
pub use util::{split_path, DEFAULT_SEPARATOR};

pub mod validate;
pub use validate::{validate_node, validate_path, MAX_PATH_DEPTH};

mod get;
pub use get::{find, get, get_mut};

/// Errors from path validation and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path node")]
    EmptyNode,
    #[error("invalid path node: {0}")]
    InvalidNode(String),
    #[error("path too deep: {depth} nodes (max {max})")]
    PathTooDeep { depth: usize, max: usize },
    #[error("key not found: {0}")]
    NotFound(String),
    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0} addresses an array element but the value is not an array")]
    NotAnArray(String),
    #[error("{0} addresses an object key but the value is not an object")]
    NotAnObject(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PathError::IndexOutOfRange { index: 3, len: 1 }.to_string(),
            "index out of range: 3 (length 1)"
        );
        assert_eq!(
            PathError::NotFound("color".into()).to_string(),
            "key not found: color"
        );
        assert_eq!(
            PathError::InvalidNode("[x]".into()).to_string(),
            "invalid path node: [x]"
        );
    }
}
