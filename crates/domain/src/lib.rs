//! Civmod Domain - the data model of the mod wizard.
//!
//! A [`WizardDocument`] collects a civilization and its units, buildings,
//! modifiers, and traditions. This crate holds the types only; editing,
//! validation, and export live in the engine.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{ModMetadata, WizardDocument};

pub use entities::{
    Ability, ChargedConfig, Civilization, CivilizationLocalization, Constructible,
    ConstructibleLocalization, EntityKind, ImportRecord, Modifier, Requirement, Tradition,
    TraditionOrigin, Unit, UnitAttributes, UnitCost, UnitLocalization, UnitStats, UnitUnlock,
    DEFAULT_BASE_MOVES, DEFAULT_BASE_SIGHT_RANGE,
};

pub use error::DomainError;
pub use events::{DocumentChange, DocumentEvent, DocumentSection};
pub use ids::DocumentId;

pub use value_objects::{
    format_argument_lines, parse_argument_lines, parse_comma_list, Argument, SourcedValue,
    ValueSource, YieldChange,
};
