/// Separator between nodes of a query path.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Split a query path into nodes.
///
/// An empty path addresses the root and yields no nodes. An empty separator
/// leaves the whole path as a single node.
///
/// # Example
///
/// ```
/// use jsonq_path::{split_path, DEFAULT_SEPARATOR};
///
/// assert_eq!(split_path("items.[0].name", DEFAULT_SEPARATOR), vec!["items", "[0]", "name"]);
/// assert_eq!(split_path("a->b", "->"), vec!["a", "b"]);
/// assert!(split_path("", DEFAULT_SEPARATOR).is_empty());
/// ```
pub fn split_path<'a>(path: &'a str, separator: &str) -> Vec<&'a str> {
    if path.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![path];
    }
    path.split(separator).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("items", "."), vec!["items"]);
        assert_eq!(split_path("items.[0]", "."), vec!["items", "[0]"]);
        assert_eq!(split_path("a..b", "."), vec!["a", "", "b"]);
        assert_eq!(split_path("a.b", ""), vec!["a.b"]);
    }
}
