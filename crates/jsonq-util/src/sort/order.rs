use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("invalid sort order: {0:?}")]
    InvalidOrder(String),
}

/// Direction of a sort.
///
/// Deserializes from `"ascending"`/`"descending"` or the short `"asc"`/`"desc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Ascending when `ascending` is true, descending otherwise.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    /// Maps an ascending comparison result onto this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    /// Parses the order argument of a query builder's `sort_by(key, order)`.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonq_util::SortOrder;
    ///
    /// assert_eq!("desc".parse(), Ok(SortOrder::Descending));
    /// assert_eq!("ASC".parse(), Ok(SortOrder::Ascending));
    /// assert!("sideways".parse::<SortOrder>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(SortError::InvalidOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("asc".parse(), Ok(SortOrder::Ascending));
        assert_eq!("Descending".parse(), Ok(SortOrder::Descending));
        assert_eq!(
            "".parse::<SortOrder>(),
            Err(SortError::InvalidOrder(String::new()))
        );
        assert_eq!(
            "up".parse::<SortOrder>().unwrap_err().to_string(),
            "invalid sort order: \"up\""
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            assert_eq!(order.to_string().parse(), Ok(order));
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Descending.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_default_and_from_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::from_ascending(true), SortOrder::Ascending);
        assert_eq!(SortOrder::from_ascending(false), SortOrder::Descending);
    }

    #[test]
    fn test_serde() {
        let order: SortOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, SortOrder::Descending);
        let order: SortOrder = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(order, SortOrder::Ascending);
        assert_eq!(
            serde_json::to_string(&SortOrder::Descending).unwrap(),
            "\"descending\""
        );
    }
}
