//! Modifier editor.

use std::sync::Arc;

use civmod_domain::{
    format_argument_lines, parse_argument_lines, EntityKind, Modifier, WizardDocument,
};

use crate::infrastructure::ports::{NotificationKind, NotificationPort};
use crate::use_cases::session::WizardSession;

use super::{
    check_index, commit, remove_at, report_failure, require, EditSlot, ManagementError,
    RequirementBuilder,
};

/// In-progress modifier edit.
///
/// Effect arguments are edited as one `Name:Value` pair per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierDraft {
    pub slot: EditSlot,
    pub id: String,
    pub modifier_type: String,
    pub effect: String,
    pub collection: String,
    pub permanent: bool,
    pub run_once: bool,
    pub requirements: RequirementBuilder,
    pub arguments_text: String,
    pub description: String,
}

pub struct ModifierEditor {
    notifier: Arc<dyn NotificationPort>,
}

impl ModifierEditor {
    pub fn new(notifier: Arc<dyn NotificationPort>) -> Self {
        Self { notifier }
    }

    pub fn begin_create(&self) -> ModifierDraft {
        ModifierDraft::default()
    }

    pub fn begin_edit(
        &self,
        session: &WizardSession,
        index: usize,
    ) -> Result<ModifierDraft, ManagementError> {
        let modifiers = session.document().modifiers();
        check_index(EntityKind::Modifier, index, modifiers.len())?;
        let modifier = &modifiers[index];

        Ok(ModifierDraft {
            slot: EditSlot::Existing(index),
            id: modifier.id.clone(),
            modifier_type: modifier.modifier_type.clone(),
            effect: modifier.effect.clone(),
            collection: modifier.collection.clone(),
            permanent: modifier.permanent,
            run_once: modifier.run_once,
            requirements: RequirementBuilder::from_requirements(&modifier.requirements),
            arguments_text: format_argument_lines(&modifier.arguments),
            description: modifier.description.clone(),
        })
    }

    /// Commit the draft. Requires `id`, `effect` and `collection`.
    pub fn save(
        &self,
        session: &mut WizardSession,
        draft: &ModifierDraft,
    ) -> Result<Modifier, ManagementError> {
        let modifier = match Self::build(draft) {
            Ok(modifier) => modifier,
            Err(e) => {
                report_failure(self.notifier.as_ref(), &e);
                return Err(e);
            }
        };

        commit(
            session,
            EntityKind::Modifier,
            draft.slot,
            modifier.clone(),
            WizardDocument::modifiers_mut,
        )?;
        self.notifier.notify(
            &format!("{} {} saved", EntityKind::Modifier.label(), modifier.id),
            NotificationKind::Success,
        );
        Ok(modifier)
    }

    fn build(draft: &ModifierDraft) -> Result<Modifier, ManagementError> {
        require(&draft.id, "id")?;
        require(&draft.effect, "effect")?;
        require(&draft.collection, "collection")?;

        Ok(Modifier {
            id: draft.id.trim().to_string(),
            modifier_type: draft.modifier_type.trim().to_string(),
            effect: draft.effect.trim().to_string(),
            collection: draft.collection.trim().to_string(),
            permanent: draft.permanent,
            run_once: draft.run_once,
            requirements: draft.requirements.collect(),
            arguments: parse_argument_lines(&draft.arguments_text),
            description: draft.description.clone(),
        })
    }

    pub fn remove(
        &self,
        session: &mut WizardSession,
        index: usize,
    ) -> Result<Modifier, ManagementError> {
        remove_at(session, EntityKind::Modifier, index, WizardDocument::modifiers_mut)
    }
}
