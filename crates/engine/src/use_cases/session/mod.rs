//! Wizard session - owns the document being edited.
//!
//! The session is the only owner of the [`WizardDocument`]. Editors receive it
//! by `&mut` for the duration of one operation and report what they changed
//! through [`WizardSession::record`], which marks the document dirty and
//! broadcasts a [`DocumentEvent`].

use tokio::sync::broadcast;

use civmod_domain::{
    Civilization, DocumentChange, DocumentEvent, DocumentId, DocumentSection, ImportRecord,
    ModMetadata, WizardDocument,
};

/// Capacity of the change broadcast. Slow subscribers see `Lagged` and should
/// re-render from scratch.
const EVENT_CAPACITY: usize = 64;

/// Unsaved-changes flag for one document.
///
/// Set by every mutation, cleared only by an explicit [`DirtyTracker::mark_clean`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyTracker {
    dirty: bool,
}

impl DirtyTracker {
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

pub struct WizardSession {
    document: WizardDocument,
    document_id: DocumentId,
    dirty: DirtyTracker,
    events: broadcast::Sender<DocumentEvent>,
}

impl WizardSession {
    /// A session over a blank document.
    pub fn new() -> Self {
        Self::with_document(WizardDocument::default())
    }

    /// A session over an existing document, e.g. a loaded template.
    pub fn with_document(document: WizardDocument) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            document,
            document_id: DocumentId::new(),
            dirty: DirtyTracker::default(),
            events,
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn document(&self) -> &WizardDocument {
        &self.document
    }

    /// Identity of the current document instance.
    pub fn document_id(&self) -> DocumentId {
        self.document_id
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    /// Receive change events from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DocumentEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Mutation plumbing (editors)
    // =========================================================================

    pub(crate) fn document_mut(&mut self) -> &mut WizardDocument {
        &mut self.document
    }

    /// Mark dirty and announce a change to the current document.
    pub(crate) fn record(&mut self, change: DocumentChange) {
        self.dirty.mark_dirty();
        self.emit(change);
    }

    fn emit(&self, change: DocumentChange) {
        // No subscribers is fine; nobody is rendering.
        let _ = self
            .events
            .send(DocumentEvent::new(self.document_id, change));
    }

    // =========================================================================
    // Whole-document operations
    // =========================================================================

    /// Swap in a different document.
    ///
    /// The replacement gets a fresh identity and starts clean. Events already
    /// sent refer to the old identity, so subscribers can discard them.
    pub fn load_template(&mut self, document: WizardDocument) -> DocumentId {
        self.document = document;
        self.document_id = DocumentId::new();
        self.dirty.mark_clean();
        tracing::info!(document = %self.document_id, "Wizard document replaced");
        self.emit(DocumentChange::Replaced);
        self.document_id
    }

    /// Called by the save/export collaborator after a confirmed persist.
    pub fn mark_clean(&mut self) {
        self.dirty.mark_clean();
        self.emit(DocumentChange::MarkedClean);
    }

    // =========================================================================
    // Top-level fields
    // =========================================================================

    pub fn update_metadata(&mut self, metadata: ModMetadata) {
        *self.document.metadata_mut() = metadata;
        self.record(DocumentChange::FieldsUpdated {
            section: DocumentSection::Metadata,
        });
    }

    /// Replace the civilization record.
    ///
    /// Units keep whatever trait they were stamped with; only units saved
    /// afterwards pick up a changed primary trait.
    pub fn update_civilization(&mut self, civilization: Civilization) {
        *self.document.civilization_mut() = civilization;
        self.record(DocumentChange::FieldsUpdated {
            section: DocumentSection::Civilization,
        });
    }

    /// Add an import record, first dropping every record whose id starts
    /// with `replace_prefix`. Returns the new record's index.
    pub fn register_import(&mut self, record: ImportRecord, replace_prefix: &str) -> usize {
        let imports = self.document.imports_mut();
        if !replace_prefix.is_empty() {
            imports.retain(|existing| !existing.id.starts_with(replace_prefix));
        }
        imports.push(record);
        let index = imports.len() - 1;
        self.record(DocumentChange::ImportRegistered { index });
        index
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civmod_domain::CivilizationLocalization;

    #[test]
    fn fresh_session_is_clean() {
        let session = WizardSession::new();
        assert!(!session.is_dirty());
    }

    #[test]
    fn top_level_edits_mark_dirty_until_marked_clean() {
        let mut session = WizardSession::new();
        session.update_metadata(ModMetadata::new("rome", "Rome", "1.0"));
        assert!(session.is_dirty());

        session.update_civilization(Civilization {
            civilization_type: "CIVILIZATION_ROME".into(),
            civilization_traits: vec!["TRAIT_ROME".into()],
            localizations: vec![CivilizationLocalization::named("Rome")],
        });
        assert!(session.is_dirty());

        session.mark_clean();
        assert!(!session.is_dirty());
        assert_eq!(session.document().metadata().id, "rome");
    }

    #[test]
    fn load_template_swaps_identity_and_clears_dirty() {
        let mut session = WizardSession::new();
        let before = session.document_id();
        session.update_metadata(ModMetadata::new("a", "A", "1"));

        let after = session.load_template(WizardDocument::new(ModMetadata::new("b", "B", "2")));

        assert_ne!(before, after);
        assert_eq!(session.document_id(), after);
        assert!(!session.is_dirty());
        assert_eq!(session.document().metadata().id, "b");
    }

    #[test]
    fn subscribers_can_ignore_events_from_replaced_documents() {
        let mut session = WizardSession::new();
        let mut rx = session.subscribe();

        session.update_metadata(ModMetadata::new("a", "A", "1"));
        let current = session.load_template(WizardDocument::default());

        let first = rx.try_recv().unwrap();
        assert!(!first.concerns(current));
        let second = rx.try_recv().unwrap();
        assert!(second.concerns(current));
        assert_eq!(second.change, DocumentChange::Replaced);
    }

    #[test]
    fn register_import_replaces_by_prefix() {
        let mut session = WizardSession::new();
        session.register_import(ImportRecord::new("icon_unit_legion_v1", "icons/a.png"), "");
        session.register_import(ImportRecord::new("icon_building_forum", "icons/b.png"), "");

        let index = session.register_import(
            ImportRecord::new("icon_unit_legion_v2", "icons/c.png"),
            "icon_unit_legion",
        );

        let ids: Vec<_> = session
            .document()
            .imports()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["icon_building_forum", "icon_unit_legion_v2"]);
        assert_eq!(index, 1);
        assert!(session.is_dirty());
    }

    #[test]
    fn mark_clean_is_announced() {
        let mut session = WizardSession::new();
        let mut rx = session.subscribe();
        session.mark_clean();
        assert_eq!(rx.try_recv().unwrap().change, DocumentChange::MarkedClean);
    }
}
