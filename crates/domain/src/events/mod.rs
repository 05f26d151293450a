//! Document Events
//!
//! Change notifications emitted after every successful mutation of a wizard
//! document. They carry just enough for a presentation layer to decide what to
//! re-render. Each event names the document instance it refers to, so events
//! about a replaced document can be dropped by comparing ids.

use serde::{Deserialize, Serialize};

use crate::entities::EntityKind;
use crate::DocumentId;

/// Top-level sections edited directly rather than through an entity editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSection {
    Metadata,
    Civilization,
}

/// What changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentChange {
    EntitySaved {
        kind: EntityKind,
        index: usize,
        created: bool,
    },
    EntityRemoved {
        kind: EntityKind,
        index: usize,
    },
    EntityDuplicated {
        kind: EntityKind,
        source: usize,
        index: usize,
    },
    FieldsUpdated {
        section: DocumentSection,
    },
    ImportRegistered {
        index: usize,
    },
    /// The whole aggregate was swapped for a different one.
    Replaced,
    /// A save or export went through; the document is clean again.
    MarkedClean,
}

/// A change scoped to one document instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEvent {
    pub document: DocumentId,
    pub change: DocumentChange,
}

impl DocumentEvent {
    pub fn new(document: DocumentId, change: DocumentChange) -> Self {
        Self { document, change }
    }

    /// Whether this event is about the given document instance.
    pub fn concerns(&self, document: DocumentId) -> bool {
        self.document == document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_for_other_documents_are_recognizable() {
        let current = DocumentId::new();
        let stale = DocumentEvent::new(DocumentId::new(), DocumentChange::Replaced);
        assert!(!stale.concerns(current));
        assert!(DocumentEvent::new(current, DocumentChange::MarkedClean).concerns(current));
    }

    #[test]
    fn serializes_with_tagged_variant() {
        let change = DocumentChange::EntityRemoved {
            kind: EntityKind::Unit,
            index: 2,
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["entityRemoved"]["kind"], "unit");
        assert_eq!(json["entityRemoved"]["index"], 2);
    }
}
