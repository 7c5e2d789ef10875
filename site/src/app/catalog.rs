//! Project table loading
//!
//! The showcase grid reads its entries from a JSON file when one is
//! configured, otherwise from the built-in table.

use std::path::Path;

use crate::domain::entities::ProjectCatalog;
use crate::error::CatalogError;

/// Read a project table from a JSON array file
pub async fn read_catalog(path: &Path) -> Result<ProjectCatalog, CatalogError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load the configured project table, falling back to the built-in one
pub async fn load_catalog(path: Option<&Path>) -> ProjectCatalog {
    let Some(path) = path else {
        return ProjectCatalog::default();
    };

    match read_catalog(path).await {
        Ok(catalog) => {
            if catalog.is_empty() {
                tracing::warn!("Project table {} is empty", path.display());
            }
            tracing::info!(
                "Loaded {} projects from {}",
                catalog.len(),
                path.display()
            );
            catalog
        }
        Err(e) => {
            tracing::error!(
                "Error loading projects from {}: {}; using built-in table",
                path.display(),
                e
            );
            ProjectCatalog::default()
        }
    }
}
