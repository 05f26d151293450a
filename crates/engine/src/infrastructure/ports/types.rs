//! Value types passed across port boundaries.

use serde::{Deserialize, Serialize};

use civmod_domain::DomainError;

/// One entry of a reference catalog. Opaque to the core beyond its id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogOption {
    pub id: String,
    pub label: String,
}

impl CatalogOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Reference catalogs the wizard draws dropdown values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogCategory {
    Units,
    UnitAbilities,
    ModifierEffects,
    ModifierCollections,
    RequirementTypes,
    Traditions,
    YieldTypes,
    Districts,
}

impl CatalogCategory {
    pub const ALL: [CatalogCategory; 8] = [
        Self::Units,
        Self::UnitAbilities,
        Self::ModifierEffects,
        Self::ModifierCollections,
        Self::RequirementTypes,
        Self::Traditions,
        Self::YieldTypes,
        Self::Districts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Units => "units",
            Self::UnitAbilities => "unit-abilities",
            Self::ModifierEffects => "modifier-effects",
            Self::ModifierCollections => "modifier-collections",
            Self::RequirementTypes => "requirement-types",
            Self::Traditions => "traditions",
            Self::YieldTypes => "yield-types",
            Self::Districts => "districts",
        }
    }
}

impl std::fmt::Display for CatalogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            _ => Err(DomainError::parse(format!(
                "Unknown notification kind: {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_match_serde() {
        let json = serde_json::to_value(CatalogCategory::UnitAbilities).unwrap();
        assert_eq!(json, CatalogCategory::UnitAbilities.as_str());
    }

    #[test]
    fn notification_kind_parses() {
        assert_eq!("error".parse::<NotificationKind>(), Ok(NotificationKind::Error));
        assert!("warning".parse::<NotificationKind>().is_err());
    }
}
