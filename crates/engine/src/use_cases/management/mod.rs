//! Entity editors for the wizard document.
//!
//! Every editor follows the same contract:
//!
//! - `begin_create` hands out a draft filled with defaults and aimed at
//!   [`EditSlot::New`]; the document is not touched.
//! - `begin_edit` copies an existing entity into a draft aimed at its index.
//! - `save` checks the required fields, then appends or replaces in place.
//!   A failed save mutates nothing and leaves the draft with the caller.
//! - `remove` splices an entity out by index.
//!
//! Successful mutations go through [`WizardSession::record`], which marks the
//! document dirty and broadcasts the change.

use std::sync::Arc;

use civmod_domain::{DocumentChange, DomainError, EntityKind, WizardDocument};

use crate::infrastructure::ports::{NotificationKind, NotificationPort};
use crate::use_cases::session::WizardSession;

mod ability;
mod constructible;
mod dual_source;
mod modifier;
mod requirement;
mod tradition;
mod unit;

pub use ability::{AbilityDraft, AbilityEditor};
pub use constructible::{ConstructibleDraft, ConstructibleEditor, YieldBonusList};
pub use dual_source::DualSourceInput;
pub use modifier::{ModifierDraft, ModifierEditor};
pub use requirement::{ArgumentHandle, RequirementBuilder, RequirementHandle};
pub use tradition::{TraditionDraft, TraditionEditor, TraditionMode};
pub use unit::{increment_suffix, UnitDraft, UnitEditor};

/// Shared error type for editor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManagementError {
    /// A required field of the draft is blank. User-facing.
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// An index from the caller does not address an entity. This is an
    /// integration bug, not something to show the user.
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: EntityKind,
        index: usize,
        len: usize,
    },

    /// A requirement or argument handle that is not live in the draft.
    #[error("No {0} with that handle in the current draft")]
    UnknownHandle(&'static str),

    #[error("Ability id already used by this unit: {0}")]
    DuplicateAbilityId(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl ManagementError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }

    pub fn index_out_of_range(kind: EntityKind, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }

    /// Whether the message is meant for the person filling in the form.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::UnknownHandle(_)
        )
    }
}

/// Where a draft will land when saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditSlot {
    /// Not in the document yet; save appends.
    #[default]
    New,
    /// Editing the entity at this index; save replaces it.
    Existing(usize),
}

/// Container for all editors, sharing one notification sink.
pub struct ManagementUseCases {
    pub unit: UnitEditor,
    pub ability: AbilityEditor,
    pub constructible: ConstructibleEditor,
    pub modifier: ModifierEditor,
    pub tradition: TraditionEditor,
}

impl ManagementUseCases {
    pub fn new(notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            unit: UnitEditor::new(notifier.clone()),
            ability: AbilityEditor::new(notifier.clone()),
            constructible: ConstructibleEditor::new(notifier.clone()),
            modifier: ModifierEditor::new(notifier.clone()),
            tradition: TraditionEditor::new(notifier),
        }
    }
}

// =============================================================================
// Shared plumbing
// =============================================================================

/// Fail with `MissingRequiredField` when `value` is blank.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ManagementError> {
    if value.trim().is_empty() {
        return Err(ManagementError::missing(field));
    }
    Ok(())
}

pub(crate) fn check_index(kind: EntityKind, index: usize, len: usize) -> Result<(), ManagementError> {
    if index >= len {
        tracing::warn!(%kind, index, len, "Entity index out of range");
        return Err(ManagementError::index_out_of_range(kind, index, len));
    }
    Ok(())
}

/// Report a failed save to the user when the error is theirs to fix.
pub(crate) fn report_failure(notifier: &dyn NotificationPort, error: &ManagementError) {
    if error.is_user_facing() {
        notifier.notify(&error.to_string(), NotificationKind::Error);
    }
}

/// Append or replace `entity` in the list picked by `list`, then record the
/// change. Returns the index the entity now lives at.
pub(crate) fn commit<T>(
    session: &mut WizardSession,
    kind: EntityKind,
    slot: EditSlot,
    entity: T,
    list: fn(&mut WizardDocument) -> &mut Vec<T>,
) -> Result<usize, ManagementError> {
    let entities = list(session.document_mut());
    let (index, created) = match slot {
        EditSlot::New => {
            entities.push(entity);
            (entities.len() - 1, true)
        }
        EditSlot::Existing(index) => {
            check_index(kind, index, entities.len())?;
            entities[index] = entity;
            (index, false)
        }
    };

    tracing::debug!(%kind, index, created, "Entity saved");
    session.record(DocumentChange::EntitySaved {
        kind,
        index,
        created,
    });
    Ok(index)
}

/// Splice the entity at `index` out of the list picked by `list`.
pub(crate) fn remove_at<T>(
    session: &mut WizardSession,
    kind: EntityKind,
    index: usize,
    list: fn(&mut WizardDocument) -> &mut Vec<T>,
) -> Result<T, ManagementError> {
    let entities = list(session.document_mut());
    check_index(kind, index, entities.len())?;
    let removed = entities.remove(index);

    tracing::debug!(%kind, index, "Entity removed");
    session.record(DocumentChange::EntityRemoved { kind, index });
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use civmod_domain::Unit;

    #[test]
    fn missing_field_message_names_the_field() {
        let err = ManagementError::missing("unit_type");
        assert_eq!(err.to_string(), "Missing required field: unit_type");
        assert!(err.is_user_facing());
    }

    #[test]
    fn index_errors_are_not_user_facing() {
        let err = ManagementError::index_out_of_range(EntityKind::Unit, 3, 1);
        assert!(!err.is_user_facing());
        assert_eq!(err.to_string(), "unit index 3 out of range (len 1)");
    }

    #[test]
    fn commit_out_of_range_leaves_document_clean() {
        let mut session = WizardSession::new();
        let err = commit(
            &mut session,
            EntityKind::Unit,
            EditSlot::Existing(0),
            Unit::new("A", "A"),
            WizardDocument::units_mut,
        )
        .unwrap_err();

        assert!(matches!(err, ManagementError::IndexOutOfRange { index: 0, len: 0, .. }));
        assert!(!session.is_dirty());
        assert!(session.document().units().is_empty());
    }

    #[test]
    fn blank_is_missing() {
        assert!(require("  ", "id").is_err());
        assert!(require("UNIT_X", "id").is_ok());
    }
}
