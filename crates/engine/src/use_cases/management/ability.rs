//! Ability editor, nested inside a unit draft.
//!
//! Abilities belong to the unit being edited, so saving or removing one only
//! changes the [`UnitDraft`]. The document (and its dirty flag) is untouched
//! until the unit itself is saved.

use std::sync::Arc;

use civmod_domain::{Ability, ChargedConfig, EntityKind};

use crate::infrastructure::catalog::CatalogSnapshot;
use crate::infrastructure::ports::{CatalogCategory, NotificationKind, NotificationPort};

use super::{
    check_index, report_failure, require, DualSourceInput, EditSlot, ManagementError, UnitDraft,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilityDraft {
    pub slot: EditSlot,
    pub ability_id: String,
    pub ability_type: DualSourceInput,
    pub name: String,
    pub description: String,
    pub inactive: bool,
    /// Modifier ids attached to the ability.
    pub modifiers: Vec<String>,
    pub charged: bool,
    pub recharge_turns: Option<u32>,
}

pub struct AbilityEditor {
    notifier: Arc<dyn NotificationPort>,
}

impl AbilityEditor {
    pub fn new(notifier: Arc<dyn NotificationPort>) -> Self {
        Self { notifier }
    }

    pub fn begin_create(&self) -> AbilityDraft {
        AbilityDraft::default()
    }

    pub fn begin_edit(
        &self,
        unit: &UnitDraft,
        index: usize,
        catalog: &CatalogSnapshot,
    ) -> Result<AbilityDraft, ManagementError> {
        let abilities = &unit.unit.abilities;
        check_index(EntityKind::Ability, index, abilities.len())?;
        let ability = &abilities[index];

        Ok(AbilityDraft {
            slot: EditSlot::Existing(index),
            ability_id: ability.ability_id.clone(),
            ability_type: DualSourceInput::from_stored(Some(&ability.ability_type), |value| {
                catalog.contains(CatalogCategory::UnitAbilities, value)
            }),
            name: ability.name.clone(),
            description: ability.description.clone(),
            inactive: ability.inactive,
            modifiers: ability.modifiers.clone(),
            charged: ability.charged.is_some(),
            recharge_turns: ability.charged.map(|c| c.recharge_turns()),
        })
    }

    /// Write the ability into the unit draft.
    ///
    /// Requires `ability_id`, a type, `name` and `description`. The id must be
    /// unique within the unit. Custom types need at least one modifier, and
    /// charged abilities need a recharge time.
    pub fn save(&self, unit: &mut UnitDraft, draft: &AbilityDraft) -> Result<Ability, ManagementError> {
        let ability = match Self::build(unit, draft) {
            Ok(ability) => ability,
            Err(e) => {
                report_failure(self.notifier.as_ref(), &e);
                return Err(e);
            }
        };

        let abilities = &mut unit.unit.abilities;
        match draft.slot {
            EditSlot::New => abilities.push(ability.clone()),
            EditSlot::Existing(index) => {
                check_index(EntityKind::Ability, index, abilities.len())?;
                abilities[index] = ability.clone();
            }
        }

        tracing::debug!(ability_id = %ability.ability_id, "Ability staged on unit draft");
        self.notifier.notify(
            &format!("{} {} saved", EntityKind::Ability.label(), ability.ability_id),
            NotificationKind::Success,
        );
        Ok(ability)
    }

    fn build(unit: &UnitDraft, draft: &AbilityDraft) -> Result<Ability, ManagementError> {
        require(&draft.ability_id, "ability_id")?;
        let ability_type = draft
            .ability_type
            .to_value()
            .ok_or(ManagementError::missing("ability_type"))?;
        require(&draft.name, "name")?;
        require(&draft.description, "description")?;

        let ability_id = draft.ability_id.trim();
        let editing = match draft.slot {
            EditSlot::Existing(index) => Some(index),
            EditSlot::New => None,
        };
        let taken = unit
            .unit
            .abilities
            .iter()
            .enumerate()
            .any(|(i, existing)| Some(i) != editing && existing.ability_id == ability_id);
        if taken {
            return Err(ManagementError::DuplicateAbilityId(ability_id.to_string()));
        }

        let modifiers: Vec<String> = draft
            .modifiers
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
        if ability_type.is_custom() && modifiers.is_empty() {
            return Err(ManagementError::missing("modifiers"));
        }

        let charged = if draft.charged {
            let turns = draft
                .recharge_turns
                .ok_or(ManagementError::missing("recharge_turns"))?;
            Some(ChargedConfig::new(turns)?)
        } else {
            None
        };

        Ok(Ability {
            ability_id: ability_id.to_string(),
            ability_type,
            name: draft.name.clone(),
            description: draft.description.clone(),
            inactive: draft.inactive,
            modifiers,
            charged,
        })
    }

    pub fn remove(&self, unit: &mut UnitDraft, index: usize) -> Result<Ability, ManagementError> {
        let abilities = &mut unit.unit.abilities;
        check_index(EntityKind::Ability, index, abilities.len())?;
        Ok(abilities.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{CatalogOption, MockNotificationPort};
    use crate::use_cases::management::UnitEditor;
    use crate::use_cases::session::WizardSession;
    use civmod_domain::{DomainError, SourcedValue};

    fn quiet() -> Arc<MockNotificationPort> {
        let mut notifier = MockNotificationPort::new();
        notifier.expect_notify().return_const(());
        Arc::new(notifier)
    }

    fn catalog_ability(id: &str) -> AbilityDraft {
        AbilityDraft {
            ability_id: id.into(),
            ability_type: DualSourceInput::catalog("ABILITY_ENABLE_WALLS"),
            name: "Builder".into(),
            description: "Builds walls".into(),
            ..AbilityDraft::default()
        }
    }

    fn unit_draft() -> UnitDraft {
        UnitEditor::new(quiet()).begin_create()
    }

    #[test]
    fn save_stages_on_unit_draft_only() {
        let editor = AbilityEditor::new(quiet());
        let session = WizardSession::new();
        let mut unit = unit_draft();

        editor.save(&mut unit, &catalog_ability("ABILITY_A")).unwrap();

        assert_eq!(unit.unit.abilities.len(), 1);
        assert!(!session.is_dirty());
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let editor = AbilityEditor::new(quiet());
        let mut unit = unit_draft();

        let cases: [(&str, fn(&mut AbilityDraft)); 4] = [
            ("ability_id", |d| d.ability_id.clear()),
            ("ability_type", |d| d.ability_type = DualSourceInput::default()),
            ("name", |d| d.name.clear()),
            ("description", |d| d.description.clear()),
        ];
        for (field, blank) in cases {
            let mut draft = catalog_ability("ABILITY_A");
            blank(&mut draft);
            assert_eq!(
                editor.save(&mut unit, &draft),
                Err(ManagementError::MissingRequiredField { field })
            );
        }
        assert!(unit.unit.abilities.is_empty());
    }

    #[test]
    fn duplicate_ability_id_rejected_except_for_itself() {
        let editor = AbilityEditor::new(quiet());
        let mut unit = unit_draft();
        editor.save(&mut unit, &catalog_ability("ABILITY_A")).unwrap();

        assert_eq!(
            editor.save(&mut unit, &catalog_ability("ABILITY_A")),
            Err(ManagementError::DuplicateAbilityId("ABILITY_A".into()))
        );

        let mut edit = editor
            .begin_edit(&unit, 0, &CatalogSnapshot::default())
            .unwrap();
        edit.name = "Renamed".into();
        editor.save(&mut unit, &edit).unwrap();
        assert_eq!(unit.unit.abilities.len(), 1);
        assert_eq!(unit.unit.abilities[0].name, "Renamed");
    }

    #[test]
    fn custom_type_needs_modifiers() {
        let editor = AbilityEditor::new(quiet());
        let mut unit = unit_draft();
        let mut draft = catalog_ability("ABILITY_CUSTOM");
        draft.ability_type = DualSourceInput::custom("ABILITY_ROME_CUSTOM");

        assert_eq!(
            editor.save(&mut unit, &draft),
            Err(ManagementError::missing("modifiers"))
        );

        draft.modifiers = vec!["MOD_ROME_SCIENCE".into()];
        let saved = editor.save(&mut unit, &draft).unwrap();
        assert_eq!(saved.ability_type, SourcedValue::custom("ABILITY_ROME_CUSTOM"));
    }

    #[test]
    fn charged_needs_positive_recharge_turns() {
        let editor = AbilityEditor::new(quiet());
        let mut unit = unit_draft();
        let mut draft = catalog_ability("ABILITY_CHARGED");
        draft.charged = true;

        assert_eq!(
            editor.save(&mut unit, &draft),
            Err(ManagementError::missing("recharge_turns"))
        );

        draft.recharge_turns = Some(0);
        assert!(matches!(
            editor.save(&mut unit, &draft),
            Err(ManagementError::Domain(DomainError::Validation(_)))
        ));

        draft.recharge_turns = Some(3);
        let saved = editor.save(&mut unit, &draft).unwrap();
        assert_eq!(saved.charged.map(|c| c.recharge_turns()), Some(3));
    }

    #[test]
    fn begin_edit_resolves_type_against_catalog() {
        let editor = AbilityEditor::new(quiet());
        let mut unit = unit_draft();
        unit.unit.abilities.push(Ability {
            ability_id: "ABILITY_A".into(),
            ability_type: SourcedValue::unresolved("ABILITY_ENABLE_WALLS"),
            name: "Walls".into(),
            description: "Builds walls".into(),
            inactive: true,
            modifiers: Vec::new(),
            charged: None,
        });
        let catalog = CatalogSnapshot::default().with_options(
            CatalogCategory::UnitAbilities,
            vec![CatalogOption::new("ABILITY_ENABLE_WALLS", "Walls")],
        );

        let draft = editor.begin_edit(&unit, 0, &catalog).unwrap();
        assert_eq!(draft.ability_type, DualSourceInput::catalog("ABILITY_ENABLE_WALLS"));
        assert!(draft.inactive);
        assert!(editor.begin_edit(&unit, 1, &catalog).is_err());
    }

    #[test]
    fn remove_keeps_other_abilities_in_order() {
        let editor = AbilityEditor::new(quiet());
        let mut unit = unit_draft();
        for id in ["A", "B", "C"] {
            editor.save(&mut unit, &catalog_ability(id)).unwrap();
        }

        let removed = editor.remove(&mut unit, 1).unwrap();
        assert_eq!(removed.ability_id, "B");
        let ids: Vec<_> = unit.unit.abilities.iter().map(|a| a.ability_id.as_str()).collect();
        assert_eq!(ids, ["A", "C"]);
        assert!(editor.remove(&mut unit, 2).is_err());
    }

    #[test]
    fn bad_ability_index_is_an_integration_error() {
        let mut notifier = MockNotificationPort::new();
        notifier.expect_notify().never();
        let editor = AbilityEditor::new(Arc::new(notifier));
        let mut unit = unit_draft();
        let out_of_range = ManagementError::index_out_of_range(EntityKind::Ability, 0, 0);

        let err = editor
            .begin_edit(&unit, 0, &CatalogSnapshot::default())
            .unwrap_err();
        assert_eq!(err, out_of_range);
        assert!(!err.is_user_facing());

        assert_eq!(editor.remove(&mut unit, 0), Err(out_of_range.clone()));

        let mut draft = catalog_ability("ABILITY_A");
        draft.slot = EditSlot::Existing(0);
        assert_eq!(editor.save(&mut unit, &draft), Err(out_of_range));
        assert!(unit.unit.abilities.is_empty());
    }
}
