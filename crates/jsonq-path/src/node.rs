//! Path node classification.
//!
//! A query path like `items.[0].name` is a sequence of nodes. Only the
//! bracketed form `[<digits>]` addresses an array element; a bare digit
//! string such as `101` stays an object key, so numeric-looking keys keep
//! working.

/// A classified path node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathNode<'a> {
    /// Array position from a `[<digits>]` node.
    Index(usize),
    /// Object key, taken verbatim.
    Key(&'a str),
}

impl<'a> PathNode<'a> {
    /// Classifies a raw node.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonq_path::PathNode;
    ///
    /// assert_eq!(PathNode::classify("[3]"), PathNode::Index(3));
    /// assert_eq!(PathNode::classify("3"), PathNode::Key("3"));
    /// ```
    pub fn classify(node: &'a str) -> Self {
        match get_index(node) {
            Some(index) => PathNode::Index(index),
            None => PathNode::Key(node),
        }
    }
}

/// Check if a node is exactly `[<digits>]`.
///
/// # Example
///
/// ```
/// use jsonq_path::is_index;
///
/// assert!(is_index("[0]"));
/// assert!(is_index("[101]"));
/// assert!(!is_index("101"));
/// assert!(!is_index("items"));
/// assert!(!is_index("[]"));
/// assert!(!is_index("[-1]"));
/// ```
pub fn is_index(node: &str) -> bool {
    bracketed_digits(node).is_some()
}

/// Parse the index out of a `[<digits>]` node.
///
/// Returns `None` when [`is_index`] does not hold, and also when the digits
/// overflow `usize`; the value is never truncated.
///
/// # Example
///
/// ```
/// use jsonq_path::get_index;
///
/// assert_eq!(get_index("[101]"), Some(101));
/// assert_eq!(get_index("101"), None);
/// assert_eq!(get_index("Invalid integer"), None);
/// ```
pub fn get_index(node: &str) -> Option<usize> {
    bracketed_digits(node)?.parse().ok()
}

fn bracketed_digits(node: &str) -> Option<&str> {
    let digits = node.strip_prefix('[')?.strip_suffix(']')?;
    if is_integer(digits) {
        Some(digits)
    } else {
        None
    }
}

/// Check if a string consists only of ASCII digits.
fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
