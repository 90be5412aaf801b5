use serde_json::Value;
use tracing::trace;

use crate::node::PathNode;
use crate::util::split_path;
use crate::validate::validate_path;
use crate::PathError;

/// Get a value from a JSON document by split path.
///
/// Bracketed nodes index into arrays, every other node is an object key.
/// Returns `None` on any miss, including a bare digit node against an array.
pub fn get<'a, S: AsRef<str>>(val: &'a Value, path: &[S]) -> Option<&'a Value> {
    let mut current = val;
    for node in path {
        current = match (PathNode::classify(node.as_ref()), current) {
            (PathNode::Index(index), Value::Array(arr)) => arr.get(index)?,
            (PathNode::Key(key), Value::Object(map)) => map.get(key)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by split path.
pub fn get_mut<'a, S: AsRef<str>>(val: &'a mut Value, path: &[S]) -> Option<&'a mut Value> {
    let mut current = val;
    for node in path {
        current = match (PathNode::classify(node.as_ref()), current) {
            (PathNode::Index(index), Value::Array(arr)) => arr.get_mut(index)?,
            (PathNode::Key(key), Value::Object(map)) => map.get_mut(key)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Find a value by query path string, reporting why a lookup failed.
///
/// # Errors
///
/// - Validation errors from [`validate_path`]
/// - [`PathError::IndexOutOfRange`] past the end of an array
/// - [`PathError::NotFound`] for a missing object key
/// - [`PathError::NotAnArray`] / [`PathError::NotAnObject`] when the node
///   kind does not match the value being descended into
///
/// # Example
///
/// ```
/// use jsonq_path::{find, PathError};
/// use serde_json::json;
///
/// let doc = json!({"items": [{"name": "a"}, {"name": "b"}]});
/// assert_eq!(find(&doc, "items.[1].name", ".").unwrap(), &json!("b"));
/// assert_eq!(
///     find(&doc, "items.[5]", "."),
///     Err(PathError::IndexOutOfRange { index: 5, len: 2 })
/// );
/// ```
pub fn find<'a>(val: &'a Value, path: &str, separator: &str) -> Result<&'a Value, PathError> {
    let nodes = split_path(path, separator);
    validate_path(&nodes)?;

    let mut current = val;
    for node in nodes {
        trace!(node, "descending into path node");
        current = match PathNode::classify(node) {
            PathNode::Index(index) => match current {
                Value::Array(arr) => arr.get(index).ok_or(PathError::IndexOutOfRange {
                    index,
                    len: arr.len(),
                })?,
                _ => return Err(PathError::NotAnArray(node.to_string())),
            },
            PathNode::Key(key) => match current {
                Value::Object(map) => map
                    .get(key)
                    .ok_or_else(|| PathError::NotFound(key.to_string()))?,
                _ => return Err(PathError::NotAnObject(node.to_string())),
            },
        };
    }
    Ok(current)
}
