//! Unit editor.

use std::sync::Arc;

use civmod_domain::{
    DocumentChange, EntityKind, Unit, WizardDocument, DEFAULT_BASE_MOVES,
    DEFAULT_BASE_SIGHT_RANGE,
};

use crate::infrastructure::catalog::CatalogSnapshot;
use crate::infrastructure::ports::{CatalogCategory, NotificationKind, NotificationPort};
use crate::use_cases::session::WizardSession;

use super::{
    check_index, commit, remove_at, report_failure, require, DualSourceInput, EditSlot,
    ManagementError,
};

/// In-progress unit edit.
///
/// `unit` holds every plain field. The two dual-source fields live in
/// `replaces` and `upgrades_to`; whatever `unit.replaces` and
/// `unit.upgrades_to` contain is overwritten on save.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDraft {
    pub slot: EditSlot,
    pub unit: Unit,
    pub replaces: DualSourceInput,
    pub upgrades_to: DualSourceInput,
}

pub struct UnitEditor {
    notifier: Arc<dyn NotificationPort>,
}

impl UnitEditor {
    pub fn new(notifier: Arc<dyn NotificationPort>) -> Self {
        Self { notifier }
    }

    /// A blank draft with form defaults (two moves, two sight).
    pub fn begin_create(&self) -> UnitDraft {
        let mut unit = Unit::new("", "");
        unit.attributes.base_moves = Some(DEFAULT_BASE_MOVES);
        unit.attributes.base_sight_range = Some(DEFAULT_BASE_SIGHT_RANGE);
        UnitDraft {
            slot: EditSlot::New,
            unit,
            replaces: DualSourceInput::default(),
            upgrades_to: DualSourceInput::default(),
        }
    }

    /// Copy the unit at `index` into a draft.
    ///
    /// Dual-source fields that came from a template are matched against the
    /// unit catalog in `catalog`; values not found there reopen as custom.
    pub fn begin_edit(
        &self,
        session: &WizardSession,
        index: usize,
        catalog: &CatalogSnapshot,
    ) -> Result<UnitDraft, ManagementError> {
        let units = session.document().units();
        check_index(EntityKind::Unit, index, units.len())?;
        let unit = units[index].clone();

        let known = |value: &str| catalog.contains(CatalogCategory::Units, value);
        let replaces = DualSourceInput::from_stored(unit.replaces.as_ref(), known);
        let upgrades_to = DualSourceInput::from_stored(unit.upgrades_to.as_ref(), known);

        Ok(UnitDraft {
            slot: EditSlot::Existing(index),
            unit,
            replaces,
            upgrades_to,
        })
    }

    /// Commit the draft. Requires `id` and `unit_type`.
    ///
    /// The unit is stamped with the civilization's primary trait, when the
    /// civilization has one.
    pub fn save(
        &self,
        session: &mut WizardSession,
        draft: &UnitDraft,
    ) -> Result<Unit, ManagementError> {
        let unit = match self.build(session.document(), draft) {
            Ok(unit) => unit,
            Err(e) => {
                report_failure(self.notifier.as_ref(), &e);
                return Err(e);
            }
        };

        commit(
            session,
            EntityKind::Unit,
            draft.slot,
            unit.clone(),
            WizardDocument::units_mut,
        )?;
        self.notifier.notify(
            &format!("{} {} saved", EntityKind::Unit.label(), unit.display_name()),
            NotificationKind::Success,
        );
        Ok(unit)
    }

    fn build(&self, document: &WizardDocument, draft: &UnitDraft) -> Result<Unit, ManagementError> {
        require(&draft.unit.id, "id")?;
        require(&draft.unit.unit_type, "unit_type")?;

        let mut unit = draft.unit.clone();
        unit.id = unit.id.trim().to_string();
        unit.unit_type = unit.unit_type.trim().to_string();
        unit.replaces = draft.replaces.to_value();
        unit.upgrades_to = draft.upgrades_to.to_value();
        if let Some(primary) = document.civilization().primary_trait() {
            unit.attributes.trait_type = primary.to_string();
        }
        Ok(unit)
    }

    pub fn remove(&self, session: &mut WizardSession, index: usize) -> Result<Unit, ManagementError> {
        remove_at(session, EntityKind::Unit, index, WizardDocument::units_mut)
    }

    /// Copy the unit at `index` and insert the copy right after it.
    ///
    /// The copy's `id` and `unit_type` each get their trailing `_<N>` bumped
    /// (a missing suffix counts as `_1`). Returns the copy's index.
    pub fn duplicate(&self, session: &mut WizardSession, index: usize) -> Result<usize, ManagementError> {
        let units = session.document_mut().units_mut();
        check_index(EntityKind::Unit, index, units.len())?;

        let mut copy = units[index].clone();
        copy.id = increment_suffix(&copy.id);
        copy.unit_type = increment_suffix(&copy.unit_type);
        let new_index = index + 1;
        units.insert(new_index, copy);

        tracing::debug!(source = index, index = new_index, "Unit duplicated");
        session.record(DocumentChange::EntityDuplicated {
            kind: EntityKind::Unit,
            source: index,
            index: new_index,
        });
        Ok(new_index)
    }
}

/// Bump a trailing `_<N>` suffix, treating a missing one as `_1`.
///
/// The digits are incremented as text, so runs of any length carry over
/// instead of overflowing, and the result never equals the input.
///
/// ```
/// use civmod_engine::use_cases::management::increment_suffix;
///
/// assert_eq!(increment_suffix("UNIT_ROME"), "UNIT_ROME_2");
/// assert_eq!(increment_suffix("UNIT_ROME_2"), "UNIT_ROME_3");
/// assert_eq!(increment_suffix("UNIT_ROME_99"), "UNIT_ROME_100");
/// ```
pub fn increment_suffix(value: &str) -> String {
    if let Some((base, digits)) = value.rsplit_once('_') {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return format!("{}_{}", base, increment_digits(digits));
        }
    }
    format!("{}_2", value)
}

/// Add one to a run of ASCII digits.
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<char> = digits.chars().collect();
    for c in out.iter_mut().rev() {
        match *c {
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                return out.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(out).collect()
}
