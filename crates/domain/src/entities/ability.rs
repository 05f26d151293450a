//! Unit ability entity

use serde::{Deserialize, Serialize};

use crate::value_objects::SourcedValue;
use crate::DomainError;

/// An ability granted to a unit.
///
/// `ability_type` either names a catalog ability or is a custom type. Custom
/// types carry their behavior in `modifiers`, so editors insist on at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub ability_id: String,
    pub ability_type: SourcedValue,
    pub name: String,
    pub description: String,
    /// Defaults to false; only `true` is exported.
    pub inactive: bool,
    /// Modifier ids the ability attaches.
    pub modifiers: Vec<String>,
    /// Present only for charged abilities.
    pub charged: Option<ChargedConfig>,
}

/// Charge settings of a charged ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargedConfig {
    recharge_turns: u32,
}

impl ChargedConfig {
    pub fn new(recharge_turns: u32) -> Result<Self, DomainError> {
        if recharge_turns == 0 {
            return Err(DomainError::validation(
                "recharge turns must be at least 1",
            ));
        }
        Ok(Self { recharge_turns })
    }

    pub fn recharge_turns(&self) -> u32 {
        self.recharge_turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_recharge_turns_rejected() {
        assert!(matches!(
            ChargedConfig::new(0),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(ChargedConfig::new(3).map(|c| c.recharge_turns()), Ok(3));
    }
}
