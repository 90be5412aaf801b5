use std::cmp::Ordering;
use std::mem;

use serde_json::Value;

use super::SortOrder;
use crate::scalar::{to_float64, to_string};

/// Comparison key extracted from one element of a collection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Total order: numbers by `f64::total_cmp`, text byte-wise, and
    /// numbers ahead of text.
    pub(crate) fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

/// Builds one key per value.
///
/// If every value widens to `f64` the keys are numeric, otherwise every key
/// is the value's canonical text. A single non-numeric value therefore
/// switches the whole collection to lexical order.
pub(crate) fn sort_keys<'a>(values: impl IntoIterator<Item = &'a Value>) -> Vec<SortKey> {
    let values: Vec<&Value> = values.into_iter().collect();
    let numbers: Result<Vec<f64>, _> = values.iter().map(|v| to_float64(v)).collect();
    match numbers {
        Ok(numbers) => numbers.into_iter().map(SortKey::Number).collect(),
        Err(_) => values.into_iter().map(|v| SortKey::Text(to_string(v))).collect(),
    }
}

/// Reorders `values` in place so that `keys[i]`, the key of `values[i]`,
/// ends up in `order`. Equal keys keep their relative order.
pub(crate) fn reorder(values: &mut [Value], keys: Vec<SortKey>, order: SortOrder) {
    debug_assert_eq!(values.len(), keys.len());
    let mut decorated: Vec<(SortKey, Value)> = keys
        .into_iter()
        .zip(values.iter_mut().map(mem::take))
        .collect();
    decorated.sort_by(|(a, _), (b, _)| order.apply(a.compare(b)));
    for (slot, (_, value)) in values.iter_mut().zip(decorated) {
        *slot = value;
    }
}
