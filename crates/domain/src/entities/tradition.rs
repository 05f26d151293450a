//! Tradition entity

use serde::{Deserialize, Serialize};

/// Where a tradition's fields came from.
///
/// Both modes produce the same exported shape; the mode only decides which
/// fields the user had to supply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraditionOrigin {
    /// Authored from scratch.
    #[default]
    Custom,
    /// Copied from a catalog tradition.
    Existing { catalog_id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tradition {
    pub id: String,
    pub tradition_type: String,
    pub name: String,
    pub description: String,
    pub origin: TraditionOrigin,
}

impl Tradition {
    pub fn custom(id: impl Into<String>, tradition_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tradition_type: tradition_type.into(),
            ..Self::default()
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.origin, TraditionOrigin::Custom)
    }
}
