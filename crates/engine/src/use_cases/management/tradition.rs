//! Tradition editor.
//!
//! A tradition is either authored from scratch or copied from the tradition
//! catalog. The mode only changes which fields the user must fill in; both
//! produce the same stored shape.

use std::sync::Arc;

use civmod_domain::{EntityKind, Tradition, TraditionOrigin, WizardDocument};

use crate::infrastructure::ports::{CatalogOption, NotificationKind, NotificationPort};
use crate::use_cases::session::WizardSession;

use super::{
    check_index, commit, remove_at, report_failure, require, EditSlot, ManagementError,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TraditionMode {
    #[default]
    Custom,
    /// Pick from the catalog. The entry's id is used as both id and type,
    /// and its label fills in a blank name.
    Existing { catalog_id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraditionDraft {
    pub slot: EditSlot,
    pub mode: TraditionMode,
    pub id: String,
    pub tradition_type: String,
    pub name: String,
    pub description: String,
}

impl TraditionDraft {
    /// A draft pre-filled from a catalog entry.
    pub fn from_catalog(option: &CatalogOption) -> Self {
        Self {
            mode: TraditionMode::Existing {
                catalog_id: option.id.clone(),
            },
            id: option.id.clone(),
            tradition_type: option.id.clone(),
            name: option.label.clone(),
            ..Self::default()
        }
    }
}

pub struct TraditionEditor {
    notifier: Arc<dyn NotificationPort>,
}

impl TraditionEditor {
    pub fn new(notifier: Arc<dyn NotificationPort>) -> Self {
        Self { notifier }
    }

    pub fn begin_create(&self) -> TraditionDraft {
        TraditionDraft::default()
    }

    pub fn begin_edit(
        &self,
        session: &WizardSession,
        index: usize,
    ) -> Result<TraditionDraft, ManagementError> {
        let traditions = session.document().traditions();
        check_index(EntityKind::Tradition, index, traditions.len())?;
        let tradition = &traditions[index];

        let mode = match &tradition.origin {
            TraditionOrigin::Custom => TraditionMode::Custom,
            TraditionOrigin::Existing { catalog_id } => TraditionMode::Existing {
                catalog_id: catalog_id.clone(),
            },
        };
        Ok(TraditionDraft {
            slot: EditSlot::Existing(index),
            mode,
            id: tradition.id.clone(),
            tradition_type: tradition.tradition_type.clone(),
            name: tradition.name.clone(),
            description: tradition.description.clone(),
        })
    }

    /// Commit the draft.
    ///
    /// Custom traditions require `id` and `tradition_type`. Catalog traditions
    /// require a catalog pick and take their id and type from it.
    pub fn save(
        &self,
        session: &mut WizardSession,
        draft: &TraditionDraft,
    ) -> Result<Tradition, ManagementError> {
        let tradition = match Self::build(draft) {
            Ok(tradition) => tradition,
            Err(e) => {
                report_failure(self.notifier.as_ref(), &e);
                return Err(e);
            }
        };

        commit(
            session,
            EntityKind::Tradition,
            draft.slot,
            tradition.clone(),
            WizardDocument::traditions_mut,
        )?;
        self.notifier.notify(
            &format!("{} {} saved", EntityKind::Tradition.label(), tradition.id),
            NotificationKind::Success,
        );
        Ok(tradition)
    }

    fn build(draft: &TraditionDraft) -> Result<Tradition, ManagementError> {
        match &draft.mode {
            TraditionMode::Custom => {
                require(&draft.id, "id")?;
                require(&draft.tradition_type, "tradition_type")?;
                Ok(Tradition {
                    id: draft.id.trim().to_string(),
                    tradition_type: draft.tradition_type.trim().to_string(),
                    name: draft.name.clone(),
                    description: draft.description.clone(),
                    origin: TraditionOrigin::Custom,
                })
            }
            TraditionMode::Existing { catalog_id } => {
                require(catalog_id, "catalog_id")?;
                let catalog_id = catalog_id.trim();
                let name = if draft.name.trim().is_empty() {
                    catalog_id.to_string()
                } else {
                    draft.name.clone()
                };
                Ok(Tradition {
                    id: catalog_id.to_string(),
                    tradition_type: catalog_id.to_string(),
                    name,
                    description: draft.description.clone(),
                    origin: TraditionOrigin::Existing {
                        catalog_id: catalog_id.to_string(),
                    },
                })
            }
        }
    }

    pub fn remove(
        &self,
        session: &mut WizardSession,
        index: usize,
    ) -> Result<Tradition, ManagementError> {
        remove_at(session, EntityKind::Tradition, index, WizardDocument::traditions_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockNotificationPort;
    use civmod_domain::DocumentChange;

    fn quiet_editor() -> TraditionEditor {
        let mut notifier = MockNotificationPort::new();
        notifier.expect_notify().return_const(());
        TraditionEditor::new(Arc::new(notifier))
    }

    #[test]
    fn custom_mode_requires_id_then_type() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();

        let mut draft = editor.begin_create();
        assert_eq!(
            editor.save(&mut session, &draft),
            Err(ManagementError::missing("id"))
        );
        draft.id = "TRADITION_ROME".into();
        assert_eq!(
            editor.save(&mut session, &draft),
            Err(ManagementError::missing("tradition_type"))
        );
        assert!(session.document().traditions().is_empty());
        assert!(!session.is_dirty());

        draft.tradition_type = "TRADITION_ROME".into();
        let saved = editor.save(&mut session, &draft).unwrap();
        assert!(saved.is_custom());
        assert!(session.is_dirty());
    }

    #[test]
    fn catalog_mode_fills_identity_from_entry() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();
        let draft = TraditionDraft::from_catalog(&CatalogOption::new(
            "TRADITION_MOS_MAIORUM",
            "Mos Maiorum",
        ));

        let saved = editor.save(&mut session, &draft).unwrap();

        assert_eq!(saved.id, "TRADITION_MOS_MAIORUM");
        assert_eq!(saved.tradition_type, "TRADITION_MOS_MAIORUM");
        assert_eq!(saved.name, "Mos Maiorum");
        assert!(!saved.is_custom());
    }

    #[test]
    fn catalog_mode_without_pick_fails() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();
        let draft = TraditionDraft {
            mode: TraditionMode::Existing {
                catalog_id: String::new(),
            },
            ..TraditionDraft::default()
        };
        assert_eq!(
            editor.save(&mut session, &draft),
            Err(ManagementError::missing("catalog_id"))
        );
    }

    #[test]
    fn edit_keeps_mode() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();
        let draft =
            TraditionDraft::from_catalog(&CatalogOption::new("TRADITION_A", "Tradition A"));
        editor.save(&mut session, &draft).unwrap();

        let reopened = editor.begin_edit(&session, 0).unwrap();
        assert_eq!(
            reopened.mode,
            TraditionMode::Existing {
                catalog_id: "TRADITION_A".into()
            }
        );

        editor.remove(&mut session, 0).unwrap();
        assert!(session.document().traditions().is_empty());
    }

    fn save_custom(editor: &TraditionEditor, session: &mut WizardSession, id: &str) {
        let draft = TraditionDraft {
            id: id.into(),
            tradition_type: id.into(),
            ..TraditionDraft::default()
        };
        editor.save(session, &draft).unwrap();
    }

    #[test]
    fn remove_preserves_relative_order() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();
        for id in ["TRADITION_A", "TRADITION_B", "TRADITION_C"] {
            save_custom(&editor, &mut session, id);
        }
        session.mark_clean();
        let mut rx = session.subscribe();

        let removed = editor.remove(&mut session, 0).unwrap();

        assert_eq!(removed.id, "TRADITION_A");
        let ids: Vec<_> = session
            .document()
            .traditions()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, ["TRADITION_B", "TRADITION_C"]);
        assert!(session.is_dirty());
        assert_eq!(
            rx.try_recv().unwrap().change,
            DocumentChange::EntityRemoved {
                kind: EntityKind::Tradition,
                index: 0
            }
        );
    }

    #[test]
    fn out_of_range_index_is_rejected_without_changes() {
        let editor = quiet_editor();
        let mut session = WizardSession::new();
        save_custom(&editor, &mut session, "TRADITION_A");
        session.mark_clean();

        assert_eq!(
            editor.begin_edit(&session, 3).unwrap_err(),
            ManagementError::index_out_of_range(EntityKind::Tradition, 3, 1)
        );
        assert_eq!(
            editor.remove(&mut session, 1),
            Err(ManagementError::index_out_of_range(EntityKind::Tradition, 1, 1))
        );
        assert_eq!(session.document().traditions().len(), 1);
        assert!(!session.is_dirty());
    }
}
