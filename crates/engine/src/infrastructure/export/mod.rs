//! Wire format of the wizard document.
//!
//! [`serialize`] turns a document into the plain JSON value the build service
//! consumes; [`document_from_value`] reads one back as a template.

mod json_exporter;
mod wire;

pub use json_exporter::{document_from_json, document_from_value, serialize, to_json};
pub use wire::DocumentData;

use civmod_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template root must be a JSON object")]
    NotAnObject,

    /// The template parsed but holds a value the model can not store.
    #[error("Invalid template: {0}")]
    Invalid(#[from] DomainError),
}
