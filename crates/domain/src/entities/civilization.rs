//! Civilization record - the single civilization a mod defines

use serde::{Deserialize, Serialize};

use crate::common::is_populated;

/// Age traits every civilization carries; they never identify a civilization.
pub const RESERVED_TRAITS: &[&str] = &[
    "TRAIT_ANTIQUITY_CIV",
    "TRAIT_EXPLORATION_CIV",
    "TRAIT_MODERN_CIV",
];

/// Prefix of attribute traits, which are also never primary.
pub const ATTRIBUTE_TRAIT_PREFIX: &str = "TRAIT_ATTRIBUTE_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Civilization {
    pub civilization_type: String,
    /// Ordered trait tags.
    pub civilization_traits: Vec<String>,
    /// Index 0 is the primary localization.
    pub localizations: Vec<CivilizationLocalization>,
}

impl Civilization {
    /// The first trait that is not an age or attribute trait.
    ///
    /// New units are stamped with it.
    pub fn primary_trait(&self) -> Option<&str> {
        self.civilization_traits
            .iter()
            .map(String::as_str)
            .find(|tag| is_populated(tag) && !is_reserved_trait(tag))
    }

    pub fn primary_localization(&self) -> Option<&CivilizationLocalization> {
        self.localizations.first()
    }
}

pub fn is_reserved_trait(tag: &str) -> bool {
    RESERVED_TRAITS.contains(&tag) || tag.starts_with(ATTRIBUTE_TRAIT_PREFIX)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilizationLocalization {
    pub name: String,
    pub description: String,
    pub full_name: String,
    pub adjective: String,
}

impl CivilizationLocalization {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !is_populated(&self.name)
            && !is_populated(&self.description)
            && !is_populated(&self.full_name)
            && !is_populated(&self.adjective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_trait_skips_reserved_tags() {
        let civ = Civilization {
            civilization_type: "CIVILIZATION_ROME".into(),
            civilization_traits: vec![
                "TRAIT_ANTIQUITY_CIV".into(),
                "TRAIT_ATTRIBUTE_MILITARISTIC".into(),
                "TRAIT_ROME".into(),
                "TRAIT_OTHER".into(),
            ],
            localizations: Vec::new(),
        };
        assert_eq!(civ.primary_trait(), Some("TRAIT_ROME"));
    }

    #[test]
    fn only_reserved_traits_means_no_primary() {
        let civ = Civilization {
            civilization_traits: vec!["TRAIT_MODERN_CIV".into()],
            ..Civilization::default()
        };
        assert_eq!(civ.primary_trait(), None);
    }
}
