//! Yield bonus rows on constructibles.

use serde::{Deserialize, Serialize};

use crate::common::none_if_blank;

/// One row of a building's yield bonus list.
///
/// Rows are kept as entered, half-filled or not. Incomplete rows are
/// dropped only when the document is exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldChange {
    pub yield_type: String,
    pub yield_change: Option<i32>,
}

impl YieldChange {
    pub fn new(yield_type: impl Into<String>, yield_change: i32) -> Self {
        Self {
            yield_type: yield_type.into(),
            yield_change: Some(yield_change),
        }
    }

    /// Returns the row as a `(type, amount)` pair when both are set.
    pub fn complete(&self) -> Option<(&str, i32)> {
        match (none_if_blank(&self.yield_type), self.yield_change) {
            (Some(yield_type), Some(amount)) => Some((yield_type, amount)),
            _ => None,
        }
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
///
/// ```
/// use civmod_domain::value_objects::parse_comma_list;
///
/// assert_eq!(
///     parse_comma_list("DISTRICT_CITY_CENTER, ,DISTRICT_URBAN,"),
///     vec!["DISTRICT_CITY_CENTER", "DISTRICT_URBAN"],
/// );
/// ```
pub fn parse_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .filter_map(none_if_blank)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_a_complete_amount() {
        let row = YieldChange::new("YIELD_FOOD", 0);
        assert_eq!(row.complete(), Some(("YIELD_FOOD", 0)));
    }

    #[test]
    fn missing_half_is_incomplete() {
        let no_amount = YieldChange {
            yield_type: "YIELD_FOOD".into(),
            yield_change: None,
        };
        let no_type = YieldChange {
            yield_type: " ".into(),
            yield_change: Some(3),
        };
        assert!(no_amount.complete().is_none());
        assert!(no_type.complete().is_none());
    }
}
