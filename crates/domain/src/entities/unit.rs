//! Unit entity - a trainable unit contributed by the mod
//!
//! Text fields use the empty string for "not set"; numeric fields use `None`.
//! `Some(0)` is a real value and is exported as such.

use serde::{Deserialize, Serialize};

use crate::common::is_populated;
use crate::entities::Ability;
use crate::value_objects::SourcedValue;

/// Moves a new unit draft starts with.
pub const DEFAULT_BASE_MOVES: i32 = 2;
/// Sight range a new unit draft starts with.
pub const DEFAULT_BASE_SIGHT_RANGE: i32 = 2;

/// A unit definition.
///
/// Plain data: editors decide what a valid unit is, the exporter decides
/// which blocks are worth emitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub unit_type: String,
    /// Fields of the `unit` block.
    pub attributes: UnitAttributes,
    pub cost: UnitCost,
    pub stats: UnitStats,
    /// Unit this one replaces, from the catalog or typed in.
    pub replaces: Option<SourcedValue>,
    /// Unit this one upgrades to, from the catalog or typed in.
    pub upgrades_to: Option<SourcedValue>,
    pub advisory_class: String,
    pub unlock: UnitUnlock,
    pub show_in_civ_picker: bool,
    pub abilities: Vec<Ability>,
    /// Catalog unit whose model this unit reuses.
    pub visual_remap: String,
    pub localization: UnitLocalization,
    pub icon_path: String,
}

impl Unit {
    pub fn new(id: impl Into<String>, unit_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            unit_type: unit_type.into(),
            attributes: UnitAttributes::default(),
            cost: UnitCost::default(),
            stats: UnitStats::default(),
            replaces: None,
            upgrades_to: None,
            advisory_class: String::new(),
            unlock: UnitUnlock::default(),
            show_in_civ_picker: true,
            abilities: Vec::new(),
            visual_remap: String::new(),
            localization: UnitLocalization::default(),
            icon_path: String::new(),
        }
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        if is_populated(&self.localization.name) {
            &self.localization.name
        } else {
            &self.id
        }
    }
}

/// The `unit` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAttributes {
    pub core_class: String,
    pub domain: String,
    pub formation_class: String,
    pub unit_movement_class: String,
    pub base_moves: Option<i32>,
    pub base_sight_range: Option<i32>,
    pub tier: Option<i32>,
    pub maintenance: Option<i32>,
    pub zone_of_control: bool,
    pub promotion_class: String,
    pub cost_progression_model: String,
    pub cost_progression_param1: Option<i32>,
    pub prereq_population: Option<i32>,
    /// Defaults to true; only `false` is exported.
    pub can_train: bool,
    /// Defaults to true; only `false` is exported.
    pub can_purchase: bool,
    /// Defaults to true; only `false` is exported.
    pub can_earn_experience: bool,
    /// Defaults to false; only `true` is exported.
    pub found_city: bool,
    /// Defaults to false; only `true` is exported.
    pub make_trade_route: bool,
    /// Stamped from the civilization's primary trait when the unit is saved.
    pub trait_type: String,
}

impl Default for UnitAttributes {
    fn default() -> Self {
        Self {
            core_class: String::new(),
            domain: String::new(),
            formation_class: String::new(),
            unit_movement_class: String::new(),
            base_moves: None,
            base_sight_range: None,
            tier: None,
            maintenance: None,
            zone_of_control: false,
            promotion_class: String::new(),
            cost_progression_model: String::new(),
            cost_progression_param1: None,
            prereq_population: None,
            can_train: true,
            can_purchase: true,
            can_earn_experience: true,
            found_city: false,
            make_trade_route: false,
            trait_type: String::new(),
        }
    }
}

/// The `unit_cost` block. Only meaningful when both halves are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCost {
    pub yield_type: String,
    pub cost: Option<i32>,
}

impl UnitCost {
    pub fn is_complete(&self) -> bool {
        is_populated(&self.yield_type) && self.cost.is_some()
    }
}

/// The `unit_stat` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub combat: Option<i32>,
    pub ranged_combat: Option<i32>,
    pub range: Option<i32>,
}

impl UnitStats {
    pub fn is_empty(&self) -> bool {
        self.combat.is_none() && self.ranged_combat.is_none() && self.range.is_none()
    }
}

/// How the unit gets unlocked.
///
/// With `auto_infer` on, the game derives the unlock from the replaced unit
/// and the explicit tech/civic are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitUnlock {
    pub auto_infer: bool,
    pub tech: String,
    pub civic: String,
}

impl Default for UnitUnlock {
    fn default() -> Self {
        Self {
            auto_infer: true,
            tech: String::new(),
            civic: String::new(),
        }
    }
}

/// Primary localization entry of a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLocalization {
    pub name: String,
    pub summary_description: String,
    pub historical_description: String,
}

impl UnitLocalization {
    pub fn is_empty(&self) -> bool {
        !is_populated(&self.name)
            && !is_populated(&self.summary_description)
            && !is_populated(&self.historical_description)
    }
}
