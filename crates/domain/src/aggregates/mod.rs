//! Aggregate roots

pub mod document;

pub use document::{ModMetadata, WizardDocument};
