use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::key::{reorder, sort_keys};
use super::list::sort_elements;
use super::SortOrder;

/// A keyed sort policy.
///
/// Orders a collection of records by the value each record holds under
/// `key`, using the same dispatch as [`sort_list`](super::sort_list): numeric
/// when every extracted value is a number, lexical otherwise. An empty key
/// compares the elements themselves.
///
/// A `Sorter` is a plain value; each caller builds its own, so concurrent
/// sorts never share configuration. It can also be loaded from a query
/// configuration:
///
/// ```
/// use jsonq_util::{SortOrder, Sorter};
///
/// let sorter: Sorter = serde_json::from_str(r#"{"key": "height", "order": "desc"}"#).unwrap();
/// assert_eq!(sorter, Sorter::new("height", SortOrder::Descending));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sorter {
    #[serde(default)]
    key: String,
    #[serde(default)]
    order: SortOrder,
}

impl Sorter {
    /// Sorter ordering records by `key` in `order`.
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        Self {
            key: key.into(),
            order,
        }
    }

    /// Ascending sorter on `key`.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    /// Descending sorter on `key`.
    pub fn descending(key: impl Into<String>) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    /// Field the records are ordered by; empty compares elements directly.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Direction of the sort.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Sorts `collection` in place by each record's `key` field.
    ///
    /// If any element is not an object, or lacks `key`, the collection is
    /// left exactly as given. That case is not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonq_util::Sorter;
    /// use serde_json::json;
    ///
    /// let mut people = vec![
    ///     json!({"name": "Z", "height": 5.8}),
    ///     json!({"name": "A", "height": 5.5}),
    /// ];
    /// Sorter::ascending("height").sort(&mut people);
    /// assert_eq!(people[0]["name"], "A");
    ///
    /// let mut words = vec![json!("x"), json!("z"), json!("a")];
    /// Sorter::descending("invalid_key").sort(&mut words);
    /// assert_eq!(words, vec![json!("x"), json!("z"), json!("a")]);
    /// ```
    pub fn sort(&self, collection: &mut [Value]) {
        if self.key.is_empty() {
            sort_elements(collection, self.order);
            return;
        }

        let mut fields = Vec::with_capacity(collection.len());
        for (position, element) in collection.iter().enumerate() {
            let Value::Object(record) = element else {
                debug!(key = %self.key, position, "element is not a record, leaving collection unsorted");
                return;
            };
            let Some(field) = record.get(&self.key) else {
                debug!(key = %self.key, position, "record lacks sort key, leaving collection unsorted");
                return;
            };
            fields.push(field);
        }

        let keys = sort_keys(fields);
        reorder(collection, keys, self.order);
    }

    /// Sorts a JSON array in place. Any other value is left untouched.
    pub fn sort_value(&self, value: &mut Value) {
        match value {
            Value::Array(items) => self.sort(items),
            _ => debug!(key = %self.key, "value is not an array, nothing to sort"),
        }
    }
}
