//! Validation functions for query paths.

use crate::node::get_index;
use crate::PathError;

/// Maximum allowed path depth.
pub const MAX_PATH_DEPTH: usize = 256;

/// Validate a single path node.
///
/// # Errors
///
/// - [`PathError::EmptyNode`] for an empty node
/// - [`PathError::InvalidNode`] for a node that opens a bracket without
///   forming a valid index, e.g. `[a]`, `[1` or `[]`
///
/// Any node not starting with `[` is an object key, including `a]`.
///
/// # Example
///
/// ```
/// use jsonq_path::validate_node;
///
/// validate_node("items").unwrap();
/// validate_node("[0]").unwrap();
/// validate_node("101").unwrap(); // plain key
/// validate_node("[x]").unwrap_err();
/// ```
pub fn validate_node(node: &str) -> Result<(), PathError> {
    if node.is_empty() {
        return Err(PathError::EmptyNode);
    }
    if node.starts_with('[') && get_index(node).is_none() {
        return Err(PathError::InvalidNode(node.to_string()));
    }
    Ok(())
}

/// Validate a split path.
///
/// # Errors
///
/// Returns [`PathError::PathTooDeep`] past [`MAX_PATH_DEPTH`] nodes, or the
/// first error from [`validate_node`].
pub fn validate_path<S: AsRef<str>>(nodes: &[S]) -> Result<(), PathError> {
    if nodes.len() > MAX_PATH_DEPTH {
        return Err(PathError::PathTooDeep {
            depth: nodes.len(),
            max: MAX_PATH_DEPTH,
        });
    }
    nodes.iter().try_for_each(|node| validate_node(node.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_node() {
        assert_eq!(validate_node("name"), Ok(()));
        assert_eq!(validate_node("[12]"), Ok(()));
        assert_eq!(validate_node("12"), Ok(()));
        assert_eq!(validate_node(""), Err(PathError::EmptyNode));
        assert_eq!(validate_node("[]"), Err(PathError::InvalidNode("[]".into())));
        assert_eq!(validate_node("[a]"), Err(PathError::InvalidNode("[a]".into())));
        assert_eq!(validate_node("[1"), Err(PathError::InvalidNode("[1".into())));
        assert_eq!(validate_node("x]"), Ok(()));
    }

    #[test]
    fn test_validate_overflowing_index() {
        assert!(validate_node("[99999999999999999999999999]").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert_eq!(validate_path(&["items", "[0]", "name"]), Ok(()));
        assert_eq!(validate_path::<&str>(&[]), Ok(()));
        assert_eq!(validate_path(&["items", ""]), Err(PathError::EmptyNode));
    }

    #[test]
    fn test_validate_path_depth() {
        let nodes = vec!["a"; MAX_PATH_DEPTH + 1];
        assert_eq!(
            validate_path(&nodes),
            Err(PathError::PathTooDeep {
                depth: MAX_PATH_DEPTH + 1,
                max: MAX_PATH_DEPTH
            })
        );
        assert_eq!(validate_path(&nodes[1..]), Ok(()));
    }
}
