//! Use cases - what a wizard user can do to a document.
//!
//! - `session` owns the document, its dirty flag and change broadcast.
//! - `management` holds one editor per entity kind.
//! - `validation` checks a document for export readiness.

pub mod management;
pub mod session;
pub mod validation;

pub use management::{EditSlot, ManagementError, ManagementUseCases};
pub use session::{DirtyTracker, WizardSession};
pub use validation::{validate, FieldError};
