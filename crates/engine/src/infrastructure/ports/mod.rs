//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete
//! types. Ports exist for:
//! - Reference catalog lookups (could swap a file for an HTTP service)
//! - User notifications (could swap log lines for UI toasts)

mod error;
mod external;
pub mod types;

// =============================================================================
// Types
// =============================================================================
pub use types::{CatalogCategory, CatalogOption, NotificationKind};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{CatalogPort, NotificationPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockCatalogPort, MockNotificationPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::CatalogError;
