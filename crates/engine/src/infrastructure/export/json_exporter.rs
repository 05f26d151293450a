//! JSON exporter for wizard documents
//!
//! Converts the domain model to the wire shapes in [`super::wire`] and back.
//! Export is pure: no I/O, and the same document always yields the same bytes.

use serde_json::Value;

use civmod_domain::common::some_if_not_blank;
use civmod_domain::{
    Ability, ChargedConfig, Civilization, CivilizationLocalization, Constructible,
    ConstructibleLocalization, ModMetadata, Modifier, Requirement, Tradition, TraditionOrigin,
    Unit, UnitAttributes, UnitCost, UnitLocalization, UnitStats, UnitUnlock, WizardDocument,
    YieldChange,
};

use super::wire::*;
use super::ExportError;

/// Build the export payload for `document`.
///
/// Keys come out sorted, so equal documents serialize to identical bytes.
pub fn serialize(document: &WizardDocument) -> Result<Value, ExportError> {
    Ok(serde_json::to_value(DocumentData::from(document))?)
}

/// Render `document` as JSON text.
pub fn to_json(document: &WizardDocument, pretty: bool) -> Result<String, ExportError> {
    let value = serialize(document)?;
    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    tracing::info!(
        units = document.units().len(),
        constructibles = document.constructibles().len(),
        modifiers = document.modifiers().len(),
        traditions = document.traditions().len(),
        bytes = json.len(),
        "Wizard document exported"
    );
    Ok(json)
}

/// Read a previously exported document, e.g. a template.
///
/// The root must be a JSON object. Dual-source values come back untagged and
/// traditions come back in custom mode, since the wire format does not carry
/// either.
pub fn document_from_value(value: Value) -> Result<WizardDocument, ExportError> {
    if !value.is_object() {
        return Err(ExportError::NotAnObject);
    }
    let data: DocumentData = serde_json::from_value(value)?;
    data.into_document()
}

pub fn document_from_json(json: &str) -> Result<WizardDocument, ExportError> {
    let value: Value = serde_json::from_str(json)?;
    document_from_value(value)
}

fn true_only(flag: bool) -> Option<bool> {
    flag.then_some(true)
}

fn false_only(flag: bool) -> Option<bool> {
    (!flag).then_some(false)
}

// =============================================================================
// Domain -> wire
// =============================================================================

impl From<&WizardDocument> for DocumentData {
    fn from(document: &WizardDocument) -> Self {
        let metadata = document.metadata();
        Self {
            metadata: MetadataData {
                id: metadata.id.clone(),
                name: metadata.name.clone(),
                version: metadata.version.clone(),
            },
            civilization: CivilizationData::from(document.civilization()),
            units: document.units().iter().map(UnitData::from).collect(),
            constructibles: document
                .constructibles()
                .iter()
                .map(ConstructibleData::from)
                .collect(),
            modifiers: document.modifiers().iter().map(ModifierData::from).collect(),
            traditions: document.traditions().iter().map(TraditionData::from).collect(),
            imports: document.imports().to_vec(),
        }
    }
}

impl From<&Civilization> for CivilizationData {
    fn from(civilization: &Civilization) -> Self {
        Self {
            civilization_type: civilization.civilization_type.clone(),
            civilization_traits: civilization
                .civilization_traits
                .iter()
                .filter_map(some_if_not_blank)
                .collect(),
            localizations: civilization
                .localizations
                .iter()
                .filter(|l| !l.is_empty())
                .map(|l| CivilizationLocalizationData {
                    name: some_if_not_blank(&l.name),
                    description: some_if_not_blank(&l.description),
                    full_name: some_if_not_blank(&l.full_name),
                    adjective: some_if_not_blank(&l.adjective),
                })
                .collect(),
        }
    }
}

impl From<&UnitAttributes> for UnitBlockData {
    fn from(a: &UnitAttributes) -> Self {
        Self {
            core_class: some_if_not_blank(&a.core_class),
            domain: some_if_not_blank(&a.domain),
            formation_class: some_if_not_blank(&a.formation_class),
            unit_movement_class: some_if_not_blank(&a.unit_movement_class),
            base_moves: a.base_moves,
            base_sight_range: a.base_sight_range,
            tier: a.tier,
            maintenance: a.maintenance,
            zone_of_control: true_only(a.zone_of_control),
            promotion_class: some_if_not_blank(&a.promotion_class),
            cost_progression_model: some_if_not_blank(&a.cost_progression_model),
            cost_progression_param1: a.cost_progression_param1,
            prereq_population: a.prereq_population,
            can_train: false_only(a.can_train),
            can_purchase: false_only(a.can_purchase),
            can_earn_experience: false_only(a.can_earn_experience),
            found_city: true_only(a.found_city),
            make_trade_route: true_only(a.make_trade_route),
            trait_type: some_if_not_blank(&a.trait_type),
        }
    }
}

impl From<&Unit> for UnitData {
    fn from(unit: &Unit) -> Self {
        let block = UnitBlockData::from(&unit.attributes);

        let unit_cost = match (some_if_not_blank(&unit.cost.yield_type), unit.cost.cost) {
            (Some(yield_type), Some(cost)) => Some(UnitCostData { yield_type, cost }),
            _ => None,
        };

        let unit_stat = (!unit.stats.is_empty()).then(|| UnitStatData {
            combat: unit.stats.combat,
            ranged_combat: unit.stats.ranged_combat,
            range: unit.stats.range,
        });

        let unlock = (!unit.unlock.auto_infer).then(|| UnlockData {
            auto_infer_unlock: false,
            unlock_tech: some_if_not_blank(&unit.unlock.tech),
            unlock_civic: some_if_not_blank(&unit.unlock.civic),
        });

        let localization = &unit.localization;
        let localizations = if localization.is_empty() {
            Vec::new()
        } else {
            vec![UnitLocalizationData {
                name: some_if_not_blank(&localization.name),
                summary_description: some_if_not_blank(&localization.summary_description),
                historical_description: some_if_not_blank(&localization.historical_description),
            }]
        };

        Self {
            id: unit.id.clone(),
            unit_type: unit.unit_type.clone(),
            unit: (!block.is_empty()).then_some(block),
            unit_cost,
            unit_stat,
            unit_replace: unit.replaces.clone().map(|v| UnitReplaceData {
                replaces_unit_type: v,
            }),
            unit_upgrade: unit
                .upgrades_to
                .clone()
                .map(|v| UnitUpgradeData { upgrade_unit: v }),
            unit_advisories: some_if_not_blank(&unit.advisory_class)
                .map(|advisory_class_type| UnitAdvisoryData {
                    advisory_class_type,
                })
                .into_iter()
                .collect(),
            unlock,
            show_in_civ_picker: false_only(unit.show_in_civ_picker),
            unit_abilities: unit.abilities.iter().map(AbilityData::from).collect(),
            visual_remap: some_if_not_blank(&unit.visual_remap).map(|to| VisualRemapData { to }),
            localizations,
            icon: some_if_not_blank(&unit.icon_path).map(|path| IconData { path }),
        }
    }
}

impl From<&Ability> for AbilityData {
    fn from(ability: &Ability) -> Self {
        Self {
            ability_id: ability.ability_id.clone(),
            ability_type: ability.ability_type.clone(),
            name: ability.name.clone(),
            description: ability.description.clone(),
            inactive: true_only(ability.inactive),
            modifiers: ability.modifiers.clone(),
            charged_config: ability.charged.map(|c| ChargedConfigData {
                recharge_turns: c.recharge_turns(),
            }),
        }
    }
}

impl From<&Constructible> for ConstructibleData {
    fn from(building: &Constructible) -> Self {
        let localization = &building.localization;
        Self {
            id: building.id.clone(),
            constructible_type: building.constructible_type.clone(),
            localizations: if localization.is_empty() {
                Vec::new()
            } else {
                vec![NameDescriptionData {
                    name: some_if_not_blank(&localization.name),
                    description: some_if_not_blank(&localization.description),
                }]
            },
            icon: some_if_not_blank(&building.icon_path).map(|path| IconData { path }),
            constructible_valid_districts: building.valid_districts.clone(),
            yield_changes: building
                .complete_yield_changes()
                .map(|(yield_type, yield_change)| YieldChangeData {
                    yield_type: yield_type.to_string(),
                    yield_change,
                })
                .collect(),
        }
    }
}

impl From<&Modifier> for ModifierData {
    fn from(modifier: &Modifier) -> Self {
        Self {
            id: modifier.id.clone(),
            modifier_type: some_if_not_blank(&modifier.modifier_type),
            modifier: ModifierBodyData {
                effect: modifier.effect.clone(),
                collection: modifier.collection.clone(),
                permanent: true_only(modifier.permanent),
                run_once: true_only(modifier.run_once),
                requirements: modifier
                    .requirements
                    .iter()
                    .filter(|r| r.has_type())
                    .map(|r| RequirementData {
                        requirement_type: r.requirement_type.clone(),
                        arguments: r
                            .arguments
                            .iter()
                            .filter(|a| a.is_complete())
                            .cloned()
                            .collect(),
                    })
                    .collect(),
                arguments: modifier.arguments.clone(),
            },
            localizations: some_if_not_blank(&modifier.description)
                .map(|description| ModifierLocalizationData { description })
                .into_iter()
                .collect(),
        }
    }
}

impl From<&Tradition> for TraditionData {
    fn from(tradition: &Tradition) -> Self {
        let entry = NameDescriptionData {
            name: some_if_not_blank(&tradition.name),
            description: some_if_not_blank(&tradition.description),
        };
        Self {
            id: tradition.id.clone(),
            tradition_type: tradition.tradition_type.clone(),
            localizations: if entry == NameDescriptionData::default() {
                Vec::new()
            } else {
                vec![entry]
            },
        }
    }
}

// =============================================================================
// Wire -> domain
// =============================================================================

impl DocumentData {
    pub fn into_document(self) -> Result<WizardDocument, ExportError> {
        let units = self
            .units
            .into_iter()
            .map(UnitData::into_unit)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WizardDocument::from_parts(
            ModMetadata::new(self.metadata.id, self.metadata.name, self.metadata.version),
            Civilization {
                civilization_type: self.civilization.civilization_type,
                civilization_traits: self.civilization.civilization_traits,
                localizations: self
                    .civilization
                    .localizations
                    .into_iter()
                    .map(|l| CivilizationLocalization {
                        name: l.name.unwrap_or_default(),
                        description: l.description.unwrap_or_default(),
                        full_name: l.full_name.unwrap_or_default(),
                        adjective: l.adjective.unwrap_or_default(),
                    })
                    .collect(),
            },
            units,
            self.constructibles
                .into_iter()
                .map(ConstructibleData::into_constructible)
                .collect(),
            self.modifiers.into_iter().map(ModifierData::into_modifier).collect(),
            self.traditions
                .into_iter()
                .map(TraditionData::into_tradition)
                .collect(),
            self.imports,
        ))
    }
}

impl UnitData {
    fn into_unit(self) -> Result<Unit, ExportError> {
        let block = self.unit.unwrap_or_default();
        let attributes = UnitAttributes {
            core_class: block.core_class.unwrap_or_default(),
            domain: block.domain.unwrap_or_default(),
            formation_class: block.formation_class.unwrap_or_default(),
            unit_movement_class: block.unit_movement_class.unwrap_or_default(),
            base_moves: block.base_moves,
            base_sight_range: block.base_sight_range,
            tier: block.tier,
            maintenance: block.maintenance,
            zone_of_control: block.zone_of_control.unwrap_or(false),
            promotion_class: block.promotion_class.unwrap_or_default(),
            cost_progression_model: block.cost_progression_model.unwrap_or_default(),
            cost_progression_param1: block.cost_progression_param1,
            prereq_population: block.prereq_population,
            can_train: block.can_train.unwrap_or(true),
            can_purchase: block.can_purchase.unwrap_or(true),
            can_earn_experience: block.can_earn_experience.unwrap_or(true),
            found_city: block.found_city.unwrap_or(false),
            make_trade_route: block.make_trade_route.unwrap_or(false),
            trait_type: block.trait_type.unwrap_or_default(),
        };

        let cost = self
            .unit_cost
            .map(|c| UnitCost {
                yield_type: c.yield_type,
                cost: Some(c.cost),
            })
            .unwrap_or_default();
        let stats = self
            .unit_stat
            .map(|s| UnitStats {
                combat: s.combat,
                ranged_combat: s.ranged_combat,
                range: s.range,
            })
            .unwrap_or_default();
        let unlock = self
            .unlock
            .map(|u| UnitUnlock {
                auto_infer: u.auto_infer_unlock,
                tech: u.unlock_tech.unwrap_or_default(),
                civic: u.unlock_civic.unwrap_or_default(),
            })
            .unwrap_or_default();
        let localization = self
            .localizations
            .into_iter()
            .next()
            .map(|l| UnitLocalization {
                name: l.name.unwrap_or_default(),
                summary_description: l.summary_description.unwrap_or_default(),
                historical_description: l.historical_description.unwrap_or_default(),
            })
            .unwrap_or_default();
        let abilities = self
            .unit_abilities
            .into_iter()
            .map(AbilityData::into_ability)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Unit {
            id: self.id,
            unit_type: self.unit_type,
            attributes,
            cost,
            stats,
            replaces: self.unit_replace.map(|r| r.replaces_unit_type),
            upgrades_to: self.unit_upgrade.map(|u| u.upgrade_unit),
            advisory_class: self
                .unit_advisories
                .into_iter()
                .next()
                .map(|a| a.advisory_class_type)
                .unwrap_or_default(),
            unlock,
            show_in_civ_picker: self.show_in_civ_picker.unwrap_or(true),
            abilities,
            visual_remap: self.visual_remap.map(|v| v.to).unwrap_or_default(),
            localization,
            icon_path: self.icon.map(|i| i.path).unwrap_or_default(),
        })
    }
}

impl AbilityData {
    fn into_ability(self) -> Result<Ability, ExportError> {
        let charged = self
            .charged_config
            .map(|c| ChargedConfig::new(c.recharge_turns))
            .transpose()?;
        Ok(Ability {
            ability_id: self.ability_id,
            ability_type: self.ability_type,
            name: self.name,
            description: self.description,
            inactive: self.inactive.unwrap_or(false),
            modifiers: self.modifiers,
            charged,
        })
    }
}

impl ConstructibleData {
    fn into_constructible(self) -> Constructible {
        let localization = self
            .localizations
            .into_iter()
            .next()
            .map(|l| ConstructibleLocalization {
                name: l.name.unwrap_or_default(),
                description: l.description.unwrap_or_default(),
            })
            .unwrap_or_default();
        Constructible {
            id: self.id,
            constructible_type: self.constructible_type,
            localization,
            icon_path: self.icon.map(|i| i.path).unwrap_or_default(),
            valid_districts: self.constructible_valid_districts,
            yield_changes: self
                .yield_changes
                .into_iter()
                .map(|y| YieldChange::new(y.yield_type, y.yield_change))
                .collect(),
        }
    }
}

impl ModifierData {
    fn into_modifier(self) -> Modifier {
        Modifier {
            id: self.id,
            modifier_type: self.modifier_type.unwrap_or_default(),
            effect: self.modifier.effect,
            collection: self.modifier.collection,
            permanent: self.modifier.permanent.unwrap_or(false),
            run_once: self.modifier.run_once.unwrap_or(false),
            requirements: self
                .modifier
                .requirements
                .into_iter()
                .map(|r| Requirement {
                    requirement_type: r.requirement_type,
                    arguments: r.arguments,
                })
                .collect(),
            arguments: self.modifier.arguments,
            description: self
                .localizations
                .into_iter()
                .next()
                .map(|l| l.description)
                .unwrap_or_default(),
        }
    }
}

impl TraditionData {
    fn into_tradition(self) -> Tradition {
        let entry = self.localizations.into_iter().next().unwrap_or_default();
        Tradition {
            id: self.id,
            tradition_type: self.tradition_type,
            name: entry.name.unwrap_or_default(),
            description: entry.description.unwrap_or_default(),
            origin: TraditionOrigin::Custom,
        }
    }
}
