//! Wizard entities
//!
//! Every entity here is a simple data struct: fields are public and any
//! combination of values can be represented. Required-field rules live in the
//! engine's editors and validator, not in constructors.

mod ability;
mod civilization;
mod constructible;
mod import;
mod modifier;
mod tradition;
mod unit;

use serde::{Deserialize, Serialize};

use crate::DomainError;

pub use ability::{Ability, ChargedConfig};
pub use civilization::{
    is_reserved_trait, Civilization, CivilizationLocalization, ATTRIBUTE_TRAIT_PREFIX,
    RESERVED_TRAITS,
};
pub use constructible::{Constructible, ConstructibleLocalization};
pub use import::ImportRecord;
pub use modifier::{Modifier, Requirement};
pub use tradition::{Tradition, TraditionOrigin};
pub use unit::{
    Unit, UnitAttributes, UnitCost, UnitLocalization, UnitStats, UnitUnlock,
    DEFAULT_BASE_MOVES, DEFAULT_BASE_SIGHT_RANGE,
};

/// Kinds of records a wizard document holds in ordered lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Unit,
    Constructible,
    Modifier,
    Tradition,
    /// An ability nested inside a unit.
    Ability,
    /// A yield bonus row nested inside a building.
    YieldChange,
    Import,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Constructible => "constructible",
            Self::Modifier => "modifier",
            Self::Tradition => "tradition",
            Self::Ability => "ability",
            Self::YieldChange => "yield_change",
            Self::Import => "import",
        }
    }

    /// Human-facing label used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unit => "Unit",
            Self::Constructible => "Building",
            Self::Modifier => "Modifier",
            Self::Tradition => "Tradition",
            Self::Ability => "Ability",
            Self::YieldChange => "Yield bonus",
            Self::Import => "Import",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unit" => Ok(Self::Unit),
            "constructible" | "building" => Ok(Self::Constructible),
            "modifier" => Ok(Self::Modifier),
            "tradition" => Ok(Self::Tradition),
            "ability" => Ok(Self::Ability),
            "yield_change" => Ok(Self::YieldChange),
            "import" => Ok(Self::Import),
            _ => Err(DomainError::parse(format!("Unknown entity kind: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_round_trips_through_str() {
        for kind in [
            EntityKind::Unit,
            EntityKind::Constructible,
            EntityKind::Modifier,
            EntityKind::Tradition,
            EntityKind::Ability,
            EntityKind::YieldChange,
            EntityKind::Import,
        ] {
            assert_eq!(kind.as_str().parse::<EntityKind>(), Ok(kind));
        }
    }

    #[test]
    fn building_is_an_alias() {
        assert_eq!("building".parse::<EntityKind>(), Ok(EntityKind::Constructible));
        assert!("city".parse::<EntityKind>().is_err());
    }
}
