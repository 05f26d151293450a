//! Modifier entity and its requirement records

use serde::{Deserialize, Serialize};

use crate::common::is_populated;
use crate::value_objects::Argument;

/// A game-effect modifier.
///
/// `effect` and `collection` are catalog values; the editor refuses to save
/// without them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    /// Optional free-text type tag.
    pub modifier_type: String,
    pub effect: String,
    pub collection: String,
    /// Defaults to false; only `true` is exported.
    pub permanent: bool,
    /// Defaults to false; only `true` is exported.
    pub run_once: bool,
    pub requirements: Vec<Requirement>,
    pub arguments: Vec<Argument>,
    pub description: String,
}

impl Modifier {
    pub fn new(
        id: impl Into<String>,
        effect: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            effect: effect.into(),
            collection: collection.into(),
            ..Self::default()
        }
    }
}

/// A condition gating a modifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub requirement_type: String,
    pub arguments: Vec<Argument>,
}

impl Requirement {
    pub fn new(requirement_type: impl Into<String>) -> Self {
        Self {
            requirement_type: requirement_type.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// A requirement without a type is dropped rather than reported.
    pub fn has_type(&self) -> bool {
        is_populated(&self.requirement_type)
    }
}
