//! Serde shapes of the exported document.
//!
//! Field names here are the contract with the build service. Optional blocks
//! are `Option`/`Vec` with `skip_serializing_if`, so an absent block never
//! appears as `null` or `{}`.

use serde::{Deserialize, Serialize};

use civmod_domain::{Argument, ImportRecord, SourcedValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentData {
    #[serde(default)]
    pub metadata: MetadataData,
    #[serde(default)]
    pub civilization: CivilizationData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<UnitData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructibles: Vec<ConstructibleData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<ModifierData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traditions: Vec<TraditionData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<ImportRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CivilizationData {
    #[serde(default)]
    pub civilization_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub civilization_traits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localizations: Vec<CivilizationLocalizationData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CivilizationLocalizationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjective: Option<String>,
}

// =============================================================================
// Units
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub unit_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitBlockData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<UnitCostData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_stat: Option<UnitStatData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_replace: Option<UnitReplaceData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_upgrade: Option<UnitUpgradeData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit_advisories: Vec<UnitAdvisoryData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock: Option<UnlockData>,
    /// Emitted only as `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_civ_picker: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unit_abilities: Vec<AbilityData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_remap: Option<VisualRemapData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localizations: Vec<UnitLocalizationData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconData>,
}

/// The `unit` block. Every field is optional; the block is dropped when none
/// is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitBlockData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_movement_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_moves: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_sight_range: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_of_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_progression_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_progression_param1: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prereq_population: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_train: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_purchase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_earn_experience: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_city: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_trade_route: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trait_type: Option<String>,
}

impl UnitBlockData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCostData {
    pub yield_type: String,
    pub cost: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStatData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranged_combat: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitReplaceData {
    pub replaces_unit_type: SourcedValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitUpgradeData {
    pub upgrade_unit: SourcedValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAdvisoryData {
    pub advisory_class_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockData {
    pub auto_infer_unlock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_tech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlock_civic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualRemapData {
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLocalizationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconData {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityData {
    #[serde(default)]
    pub ability_id: String,
    pub ability_type: SourcedValue,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Emitted only as `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charged_config: Option<ChargedConfigData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargedConfigData {
    pub recharge_turns: u32,
}

// =============================================================================
// Constructibles
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructibleData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub constructible_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localizations: Vec<NameDescriptionData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructible_valid_districts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub yield_changes: Vec<YieldChangeData>,
}

/// Localization entry with a name and a description, both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDescriptionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldChangeData {
    pub yield_type: String,
    pub yield_change: i32,
}

// =============================================================================
// Modifiers
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierData {
    #[serde(default)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_type: Option<String>,
    #[serde(default)]
    pub modifier: ModifierBodyData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localizations: Vec<ModifierLocalizationData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierBodyData {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_once: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<RequirementData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementData {
    #[serde(rename = "type")]
    pub requirement_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierLocalizationData {
    pub description: String,
}

// =============================================================================
// Traditions
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraditionData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tradition_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localizations: Vec<NameDescriptionData>,
}
