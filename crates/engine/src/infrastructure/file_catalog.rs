//! Catalog adapter backed by a JSON file.
//!
//! The file maps category names to option lists:
//!
//! ```json
//! { "units": [{ "id": "UNIT_WARRIOR", "label": "Warrior" }] }
//! ```
//!
//! The file is read on every lookup; caching is `CatalogClient`'s concern.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::infrastructure::ports::{CatalogError, CatalogOption, CatalogPort};

pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogPort for FileCatalog {
    async fn fetch_options(&self, category: &str) -> Result<Vec<CatalogOption>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::request_failed(category, e))?;
        let mut categories: HashMap<String, Vec<CatalogOption>> =
            serde_json::from_str(&raw).map_err(CatalogError::malformed)?;
        // Unknown categories are empty rather than an error.
        Ok(categories.remove(category).unwrap_or_default())
    }
}

/// Stand-in when no catalog is configured: every category is empty.
pub struct EmptyCatalog;

#[async_trait]
impl CatalogPort for EmptyCatalog {
    async fn fetch_options(&self, _category: &str) -> Result<Vec<CatalogOption>, CatalogError> {
        Ok(Vec::new())
    }
}
