//! Civmod Engine library.
//!
//! Everything that acts on a [`civmod_domain::WizardDocument`].
//!
//! ## Structure
//!
//! - `use_cases/` - Editors, the wizard session and validation
//! - `infrastructure/` - Ports, adapters, the catalog cache and the wire format
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
