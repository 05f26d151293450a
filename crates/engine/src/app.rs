//! Application state and composition.

use std::sync::Arc;

use civmod_domain::{DocumentId, WizardDocument};

use crate::infrastructure::catalog::{CatalogClient, CatalogSnapshot};
use crate::infrastructure::export::{self, ExportError};
use crate::infrastructure::ports::{CatalogCategory, CatalogPort, NotificationPort};
use crate::infrastructure::settings::WizardConfig;
use crate::use_cases::{validate, FieldError, ManagementUseCases, WizardSession};

/// Main application state.
///
/// One wizard session plus the editors and catalog it is edited with.
pub struct App {
    pub session: WizardSession,
    pub management: ManagementUseCases,
    pub catalog: Arc<CatalogClient>,
    pub notifier: Arc<dyn NotificationPort>,
}

impl App {
    pub fn new(
        catalog: Arc<dyn CatalogPort>,
        notifier: Arc<dyn NotificationPort>,
        config: &WizardConfig,
    ) -> Self {
        Self {
            session: WizardSession::new(),
            management: ManagementUseCases::new(notifier.clone()),
            catalog: Arc::new(CatalogClient::new(
                catalog,
                notifier.clone(),
                config.catalog_ttl,
            )),
            notifier,
        }
    }

    /// Fetch every catalog category so dual-source fields can resolve.
    ///
    /// Failed categories stay empty; their values reopen as custom text.
    pub async fn preload_catalog(&self) -> CatalogSnapshot {
        for category in CatalogCategory::ALL {
            self.catalog.options_for(category).await;
        }
        self.catalog.snapshot().await
    }

    /// Replace the session document with a template read from JSON.
    pub fn load_template_json(&mut self, json: &str) -> Result<DocumentId, ExportError> {
        let document = export::document_from_json(json)?;
        Ok(self.load_template(document))
    }

    pub fn load_template(&mut self, document: WizardDocument) -> DocumentId {
        self.session.load_template(document)
    }

    pub fn validate(&self) -> Vec<FieldError> {
        validate(self.session.document())
    }

    pub fn export_json(&self, pretty: bool) -> Result<String, ExportError> {
        export::to_json(self.session.document(), pretty)
    }
}
