//! Wizard document aggregate - the whole mod definition being assembled
//!
//! # Design
//!
//! - **Private fields**: the lists are only reachable through accessors so
//!   that every mutation goes through an editor or a session method.
//! - **Ordered lists**: insertion order is display order; edits replace in
//!   place and duplicates land right after their source.
//! - **No identity checks**: ids are not required to be unique across the
//!   document. Only an ability list inside a single unit is checked, by its
//!   editor.

use serde::{Deserialize, Serialize};

use crate::entities::{Civilization, Constructible, ImportRecord, Modifier, Tradition, Unit};

/// Free-form identifying fields of the mod.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModMetadata {
    pub id: String,
    pub name: String,
    pub version: String,
}

impl ModMetadata {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

/// The aggregate root of a wizard session.
///
/// # Example
///
/// ```
/// use civmod_domain::aggregates::{ModMetadata, WizardDocument};
/// use civmod_domain::entities::Unit;
///
/// let mut doc = WizardDocument::new(ModMetadata::new("rome", "Rome", "1.0.0"));
/// doc.units_mut().push(Unit::new("UNIT_LEGION", "UNIT_LEGION"));
///
/// assert_eq!(doc.units().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardDocument {
    metadata: ModMetadata,
    civilization: Civilization,
    units: Vec<Unit>,
    constructibles: Vec<Constructible>,
    modifiers: Vec<Modifier>,
    traditions: Vec<Tradition>,
    imports: Vec<ImportRecord>,
}

impl WizardDocument {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// A blank document with the given metadata.
    pub fn new(metadata: ModMetadata) -> Self {
        Self {
            metadata,
            ..Self::default()
        }
    }

    /// Reassemble a document from its parts, e.g. after reading a template.
    pub fn from_parts(
        metadata: ModMetadata,
        civilization: Civilization,
        units: Vec<Unit>,
        constructibles: Vec<Constructible>,
        modifiers: Vec<Modifier>,
        traditions: Vec<Tradition>,
        imports: Vec<ImportRecord>,
    ) -> Self {
        Self {
            metadata,
            civilization,
            units,
            constructibles,
            modifiers,
            traditions,
            imports,
        }
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    #[inline]
    pub fn metadata(&self) -> &ModMetadata {
        &self.metadata
    }

    #[inline]
    pub fn civilization(&self) -> &Civilization {
        &self.civilization
    }

    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[inline]
    pub fn constructibles(&self) -> &[Constructible] {
        &self.constructibles
    }

    #[inline]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    #[inline]
    pub fn traditions(&self) -> &[Tradition] {
        &self.traditions
    }

    #[inline]
    pub fn imports(&self) -> &[ImportRecord] {
        &self.imports
    }

    // =========================================================================
    // Mutable accessors (editors and session only)
    // =========================================================================

    pub fn metadata_mut(&mut self) -> &mut ModMetadata {
        &mut self.metadata
    }

    pub fn civilization_mut(&mut self) -> &mut Civilization {
        &mut self.civilization
    }

    pub fn units_mut(&mut self) -> &mut Vec<Unit> {
        &mut self.units
    }

    pub fn constructibles_mut(&mut self) -> &mut Vec<Constructible> {
        &mut self.constructibles
    }

    pub fn modifiers_mut(&mut self) -> &mut Vec<Modifier> {
        &mut self.modifiers
    }

    pub fn traditions_mut(&mut self) -> &mut Vec<Tradition> {
        &mut self.traditions
    }

    pub fn imports_mut(&mut self) -> &mut Vec<ImportRecord> {
        &mut self.imports
    }

    /// True when no entity of any kind has been added yet.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
            && self.constructibles.is_empty()
            && self.modifiers.is_empty()
            && self.traditions.is_empty()
    }
}
