use serde_json::Value;

use super::key::{reorder, sort_keys};
use super::SortOrder;

/// Returns a stably sorted copy of `values`.
///
/// Numbers are compared by magnitude. As soon as one element is not a
/// number (a string, boolean, `null` or composite) every element is
/// compared by its canonical text instead. Elements that compare equal keep
/// their input order, so sorting an already sorted list is a no-op.
///
/// # Examples
///
/// ```
/// use jsonq_util::sort::sort_list;
/// use serde_json::json;
///
/// let words = [json!("x"), json!("b"), json!("a"), json!("c"), json!("z")];
/// assert_eq!(
///     sort_list(&words, true),
///     vec![json!("a"), json!("b"), json!("c"), json!("x"), json!("z")]
/// );
///
/// let nums = [json!(8.0), json!(7.0), json!(1.0), json!(3.0), json!(5.0), json!(8.0)];
/// assert_eq!(
///     sort_list(&nums, false),
///     vec![json!(8.0), json!(8.0), json!(7.0), json!(5.0), json!(3.0), json!(1.0)]
/// );
/// ```
pub fn sort_list(values: &[Value], ascending: bool) -> Vec<Value> {
    let mut sorted = values.to_vec();
    sort_elements(&mut sorted, SortOrder::from_ascending(ascending));
    sorted
}

/// In-place element-level sort shared with [`Sorter`](super::Sorter) when it
/// is configured without a key.
pub(crate) fn sort_elements(values: &mut [Value], order: SortOrder) {
    let keys = sort_keys(values.iter());
    reorder(values, keys, order);
}
