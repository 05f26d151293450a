//! Civmod Wizard - command-line runner.
//!
//! Loads a template (or starts blank), warms the catalog, validates the
//! document and writes the export payload.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use civmod_engine::infrastructure::file_catalog::{EmptyCatalog, FileCatalog};
use civmod_engine::infrastructure::notifier::TracingNotifier;
use civmod_engine::infrastructure::ports::{CatalogCategory, CatalogPort};
use civmod_engine::infrastructure::settings::{load_dotenv_from_repo_root, WizardConfig};
use civmod_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "civmod_engine=debug,civmod_wizard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Civmod Wizard");

    let config = WizardConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let catalog: Arc<dyn CatalogPort> = match &config.catalog_path {
        Some(path) => Arc::new(FileCatalog::new(path)),
        None => Arc::new(EmptyCatalog),
    };
    let mut app = App::new(catalog, Arc::new(TracingNotifier), &config);

    if let Some(path) = &config.template_path {
        let json = tokio::fs::read_to_string(path).await?;
        let id = app.load_template_json(&json)?;
        tracing::info!(path = %path.display(), document = %id, "Template loaded");
    }

    let snapshot = app.preload_catalog().await;
    tracing::debug!(
        units = snapshot.options(CatalogCategory::Units).len(),
        "Catalog warmed"
    );

    let errors = app.validate();
    for error in &errors {
        tracing::warn!(path = %error.path, "{}", error.message);
    }
    if config.strict_export && !errors.is_empty() {
        anyhow::bail!(
            "Refusing to export: {} validation problem(s) (CIVMOD_STRICT_EXPORT is on)",
            errors.len()
        );
    }

    let json = app.export_json(config.export_pretty)?;
    tokio::fs::write(&config.export_path, json).await?;
    app.session.mark_clean();

    tracing::info!(path = %config.export_path.display(), "Export written");
    Ok(())
}
