//! External service port traits (reference catalog, notifications).

use async_trait::async_trait;

use super::error::CatalogError;
use super::types::{CatalogOption, NotificationKind};

/// Resolves a named category to its option list.
///
/// Callers should go through `CatalogClient`, which caches results and turns
/// failures into empty lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogPort: Send + Sync {
    async fn fetch_options(&self, category: &str) -> Result<Vec<CatalogOption>, CatalogError>;
}

/// Fire-and-forget user notifications (toasts, status lines).
#[cfg_attr(test, mockall::automock)]
pub trait NotificationPort: Send + Sync {
    fn notify(&self, message: &str, kind: NotificationKind);
}
