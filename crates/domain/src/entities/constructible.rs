//! Constructible entity - buildings and other placeable structures

use serde::{Deserialize, Serialize};

use crate::common::is_populated;
use crate::value_objects::YieldChange;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructible {
    pub id: String,
    pub constructible_type: String,
    pub localization: ConstructibleLocalization,
    pub icon_path: String,
    pub valid_districts: Vec<String>,
    /// Rows as entered, complete or not.
    pub yield_changes: Vec<YieldChange>,
}

impl Constructible {
    pub fn new(id: impl Into<String>, constructible_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            constructible_type: constructible_type.into(),
            ..Self::default()
        }
    }

    /// Rows that will survive export.
    pub fn complete_yield_changes(&self) -> impl Iterator<Item = (&str, i32)> {
        self.yield_changes.iter().filter_map(YieldChange::complete)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructibleLocalization {
    pub name: String,
    pub description: String,
}

impl ConstructibleLocalization {
    pub fn is_empty(&self) -> bool {
        !is_populated(&self.name) && !is_populated(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_yield_rows_are_skipped() {
        let mut building = Constructible::new("BUILDING_FORUM", "BUILDING_FORUM");
        building.yield_changes = vec![
            YieldChange::new("YIELD_CULTURE", 2),
            YieldChange {
                yield_type: "YIELD_GOLD".into(),
                yield_change: None,
            },
        ];
        let rows: Vec<_> = building.complete_yield_changes().collect();
        assert_eq!(rows, vec![("YIELD_CULTURE", 2)]);
        assert_eq!(building.yield_changes.len(), 2);
    }
}
