//! Cached reference catalog client.
//!
//! Wraps a [`CatalogPort`] with a per-category cache. A failed lookup never
//! reaches the data model: it is logged, surfaced through the notification
//! sink, and answered with an empty list so forms degrade to free-text entry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::infrastructure::ports::{
    CatalogCategory, CatalogOption, CatalogPort, NotificationKind, NotificationPort,
};

struct CachedOptions {
    options: Vec<CatalogOption>,
    fetched_at: Instant,
}

/// Catalog lookups with caching and failure fallback.
pub struct CatalogClient {
    port: Arc<dyn CatalogPort>,
    notifier: Arc<dyn NotificationPort>,
    cache: RwLock<HashMap<String, CachedOptions>>,
    ttl: Duration,
}

impl CatalogClient {
    pub fn new(
        port: Arc<dyn CatalogPort>,
        notifier: Arc<dyn NotificationPort>,
        ttl: Duration,
    ) -> Self {
        Self {
            port,
            notifier,
            cache: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Options for a category, from cache when fresh.
    ///
    /// Failures are not cached, so the next call tries again.
    pub async fn fetch_options(&self, category: &str) -> Vec<CatalogOption> {
        if let Some(options) = self.cached(category).await {
            return options;
        }

        match self.port.fetch_options(category).await {
            Ok(options) => {
                tracing::debug!(category, count = options.len(), "Catalog options loaded");
                self.cache.write().await.insert(
                    category.to_string(),
                    CachedOptions {
                        options: options.clone(),
                        fetched_at: Instant::now(),
                    },
                );
                options
            }
            Err(e) => {
                tracing::warn!(category, error = %e, "Catalog fetch failed, falling back to empty list");
                self.notifier.notify(
                    &format!("Could not load {} options: {}", category, e),
                    NotificationKind::Error,
                );
                Vec::new()
            }
        }
    }

    /// Typed convenience over [`Self::fetch_options`].
    pub async fn options_for(&self, category: CatalogCategory) -> Vec<CatalogOption> {
        self.fetch_options(category.as_str()).await
    }

    /// Fresh cached options, without touching the port.
    pub async fn cached(&self, category: &str) -> Option<Vec<CatalogOption>> {
        let guard = self.cache.read().await;
        guard.get(category).and_then(|entry| {
            if entry.fetched_at.elapsed() < self.ttl {
                Some(entry.options.clone())
            } else {
                None
            }
        })
    }

    /// Everything currently cached, for synchronous lookups by editors.
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let guard = self.cache.read().await;
        let categories = guard
            .iter()
            .filter(|(_, entry)| entry.fetched_at.elapsed() < self.ttl)
            .map(|(category, entry)| (category.clone(), entry.options.clone()))
            .collect();
        CatalogSnapshot { categories }
    }

    /// Drop every cached category.
    pub async fn invalidate(&self) {
        self.cache.write().await.clear();
    }
}

/// Point-in-time copy of the catalog cache.
///
/// Editors consult it when reopening a dual-source field. A category that is
/// missing (still loading, or failed) simply knows no values.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    categories: HashMap<String, Vec<CatalogOption>>,
}

impl CatalogSnapshot {
    pub fn with_options(mut self, category: CatalogCategory, options: Vec<CatalogOption>) -> Self {
        self.categories.insert(category.as_str().to_string(), options);
        self
    }

    pub fn options(&self, category: CatalogCategory) -> &[CatalogOption] {
        self.categories
            .get(category.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: CatalogCategory, id: &str) -> bool {
        self.options(category).iter().any(|option| option.id == id)
    }

    pub fn find(&self, category: CatalogCategory, id: &str) -> Option<&CatalogOption> {
        self.options(category).iter().find(|option| option.id == id)
    }
}
