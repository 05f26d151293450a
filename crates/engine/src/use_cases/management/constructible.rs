//! Building (constructible) editor.

use std::sync::Arc;

use civmod_domain::{
    parse_comma_list, Constructible, ConstructibleLocalization, EntityKind, WizardDocument,
    YieldChange,
};

use crate::infrastructure::ports::{NotificationKind, NotificationPort};
use crate::use_cases::session::WizardSession;

use super::{
    check_index, commit, remove_at, report_failure, require, EditSlot, ManagementError,
};

/// Editable yield bonus rows.
///
/// Rows are kept as entered, including half-filled ones; only the exporter
/// filters them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YieldBonusList {
    rows: Vec<YieldChange>,
}

impl YieldBonusList {
    pub fn from_rows(rows: Vec<YieldChange>) -> Self {
        Self { rows }
    }

    /// Append an empty row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(YieldChange::default());
        self.rows.len() - 1
    }

    pub fn update_row(
        &mut self,
        index: usize,
        yield_type: &str,
        yield_change: Option<i32>,
    ) -> Result<(), ManagementError> {
        check_index(EntityKind::YieldChange, index, self.rows.len())?;
        let row = &mut self.rows[index];
        row.yield_type = yield_type.to_string();
        row.yield_change = yield_change;
        Ok(())
    }

    pub fn remove_row(&mut self, index: usize) -> Result<YieldChange, ManagementError> {
        check_index(EntityKind::YieldChange, index, self.rows.len())?;
        Ok(self.rows.remove(index))
    }

    pub fn rows(&self) -> &[YieldChange] {
        &self.rows
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructibleDraft {
    pub slot: EditSlot,
    pub id: String,
    pub constructible_type: String,
    pub name: String,
    pub description: String,
    pub icon_path: String,
    /// Comma-separated district types.
    pub districts_text: String,
    pub yield_changes: YieldBonusList,
}

pub struct ConstructibleEditor {
    notifier: Arc<dyn NotificationPort>,
}

impl ConstructibleEditor {
    pub fn new(notifier: Arc<dyn NotificationPort>) -> Self {
        Self { notifier }
    }

    pub fn begin_create(&self) -> ConstructibleDraft {
        ConstructibleDraft::default()
    }

    pub fn begin_edit(
        &self,
        session: &WizardSession,
        index: usize,
    ) -> Result<ConstructibleDraft, ManagementError> {
        let constructibles = session.document().constructibles();
        check_index(EntityKind::Constructible, index, constructibles.len())?;
        let building = &constructibles[index];

        Ok(ConstructibleDraft {
            slot: EditSlot::Existing(index),
            id: building.id.clone(),
            constructible_type: building.constructible_type.clone(),
            name: building.localization.name.clone(),
            description: building.localization.description.clone(),
            icon_path: building.icon_path.clone(),
            districts_text: building.valid_districts.join(", "),
            yield_changes: YieldBonusList::from_rows(building.yield_changes.clone()),
        })
    }

    /// Commit the draft. Requires `id` and `constructible_type`.
    pub fn save(
        &self,
        session: &mut WizardSession,
        draft: &ConstructibleDraft,
    ) -> Result<Constructible, ManagementError> {
        let building = match Self::build(draft) {
            Ok(building) => building,
            Err(e) => {
                report_failure(self.notifier.as_ref(), &e);
                return Err(e);
            }
        };

        commit(
            session,
            EntityKind::Constructible,
            draft.slot,
            building.clone(),
            WizardDocument::constructibles_mut,
        )?;
        self.notifier.notify(
            &format!("{} {} saved", EntityKind::Constructible.label(), building.id),
            NotificationKind::Success,
        );
        Ok(building)
    }

    fn build(draft: &ConstructibleDraft) -> Result<Constructible, ManagementError> {
        require(&draft.id, "id")?;
        require(&draft.constructible_type, "constructible_type")?;

        Ok(Constructible {
            id: draft.id.trim().to_string(),
            constructible_type: draft.constructible_type.trim().to_string(),
            localization: ConstructibleLocalization {
                name: draft.name.clone(),
                description: draft.description.clone(),
            },
            icon_path: draft.icon_path.trim().to_string(),
            valid_districts: parse_comma_list(&draft.districts_text),
            yield_changes: draft.yield_changes.rows().to_vec(),
        })
    }

    pub fn remove(
        &self,
        session: &mut WizardSession,
        index: usize,
    ) -> Result<Constructible, ManagementError> {
        remove_at(
            session,
            EntityKind::Constructible,
            index,
            WizardDocument::constructibles_mut,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockNotificationPort;
    use civmod_domain::DocumentChange;

    fn quiet_editor() -> ConstructibleEditor {
        let mut notifier = MockNotificationPort::new();
        notifier.expect_notify().return_const(());
        ConstructibleEditor::new(Arc::new(notifier))
    }

    #[test]
    fn save_splits_districts_and_keeps_incomplete_rows() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();

        let mut draft = editor.begin_create();
        draft.id = "BUILDING_FORUM".into();
        draft.constructible_type = "BUILDING_FORUM".into();
        draft.districts_text = "DISTRICT_CITY_CENTER, DISTRICT_URBAN,".into();
        let full = draft.yield_changes.add_row();
        draft
            .yield_changes
            .update_row(full, "YIELD_CULTURE", Some(2))
            .unwrap();
        draft.yield_changes.add_row();

        let saved = editor.save(&mut session, &draft).unwrap();

        assert_eq!(saved.valid_districts, ["DISTRICT_CITY_CENTER", "DISTRICT_URBAN"]);
        assert_eq!(saved.yield_changes.len(), 2);
        assert_eq!(saved.complete_yield_changes().count(), 1);
        assert!(session.is_dirty());
    }

    #[test]
    fn each_missing_required_field_blocks_save() {
        for (id, constructible_type, field) in
            [("", "BUILDING_X", "id"), ("BUILDING_X", "", "constructible_type")]
        {
            let editor = quiet_editor();
            let mut session = WizardSession::new();
            let draft = ConstructibleDraft {
                id: id.into(),
                constructible_type: constructible_type.into(),
                ..ConstructibleDraft::default()
            };

            assert_eq!(
                editor.save(&mut session, &draft),
                Err(ManagementError::MissingRequiredField { field })
            );
            assert!(session.document().constructibles().is_empty());
            assert!(!session.is_dirty());
        }
    }

    #[test]
    fn edit_round_trips_districts() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();
        let draft = ConstructibleDraft {
            id: "BUILDING_FORUM".into(),
            constructible_type: "BUILDING_FORUM".into(),
            districts_text: "DISTRICT_URBAN".into(),
            ..ConstructibleDraft::default()
        };
        editor.save(&mut session, &draft).unwrap();

        let reopened = editor.begin_edit(&session, 0).unwrap();
        assert_eq!(reopened.districts_text, "DISTRICT_URBAN");
        assert_eq!(reopened.slot, EditSlot::Existing(0));
    }

    #[test]
    fn yield_rows_can_be_removed() {
        let mut rows = YieldBonusList::default();
        rows.add_row();
        let second = rows.add_row();
        rows.update_row(second, "YIELD_GOLD", Some(0)).unwrap();

        rows.remove_row(0).unwrap();
        assert_eq!(rows.rows(), [YieldChange::new("YIELD_GOLD", 0)]);

        let out_of_range = ManagementError::index_out_of_range(EntityKind::YieldChange, 5, 1);
        assert_eq!(rows.remove_row(5), Err(out_of_range.clone()));
        assert_eq!(rows.update_row(5, "YIELD_GOLD", None), Err(out_of_range));
        assert_eq!(rows.rows().len(), 1);
    }

    fn save_building(editor: &ConstructibleEditor, session: &mut WizardSession, id: &str) {
        let draft = ConstructibleDraft {
            id: id.into(),
            constructible_type: id.into(),
            ..ConstructibleDraft::default()
        };
        editor.save(session, &draft).unwrap();
    }

    #[test]
    fn remove_preserves_relative_order() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();
        for id in ["BUILDING_A", "BUILDING_B", "BUILDING_C", "BUILDING_D"] {
            save_building(&editor, &mut session, id);
        }
        session.mark_clean();
        let mut rx = session.subscribe();

        let removed = editor.remove(&mut session, 2).unwrap();

        assert_eq!(removed.id, "BUILDING_C");
        let ids: Vec<_> = session
            .document()
            .constructibles()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, ["BUILDING_A", "BUILDING_B", "BUILDING_D"]);
        assert!(session.is_dirty());
        assert_eq!(
            rx.try_recv().unwrap().change,
            DocumentChange::EntityRemoved {
                kind: EntityKind::Constructible,
                index: 2
            }
        );
    }

    #[test]
    fn out_of_range_index_is_rejected_without_changes() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();
        save_building(&editor, &mut session, "BUILDING_A");
        session.mark_clean();

        assert_eq!(
            editor.begin_edit(&session, 1).unwrap_err(),
            ManagementError::index_out_of_range(EntityKind::Constructible, 1, 1)
        );
        assert_eq!(
            editor.remove(&mut session, 1),
            Err(ManagementError::index_out_of_range(EntityKind::Constructible, 1, 1))
        );
        assert_eq!(session.document().constructibles().len(), 1);
        assert!(!session.is_dirty());
    }
}
