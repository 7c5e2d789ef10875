//! Portfolio site server
//!
//! Server-rendered personal portfolio: a blog list fed by a remote publishing
//! API, a page layout with navbar and footer, and a project showcase grid.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod view;

#[cfg(test)]
mod test_utils;


use adapters::HashnodeClient;
use app::{load_catalog, BlogList};
use config::{Config, SiteInfo};
use domain::entities::ProjectCatalog;
use domain::ports::PublishingClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub publishing: Arc<dyn PublishingClient>,
    pub article_base_url: String,
    /// Posts shown by the home page blog list (negative shows all)
    pub home_blog_count: i64,
    pub catalog: Arc<ProjectCatalog>,
    pub site: SiteInfo,
}

impl AppState {
    /// A fresh blog list for one request, showing `count` posts
    pub fn blog_list(&self, count: i64) -> BlogList {
        BlogList::new(
            self.publishing.clone(),
            self.article_base_url.clone(),
            count,
        )
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router for the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Pages
        .route("/", get(handlers::home))
        .route("/blogs", get(handlers::blogs))
        .route("/projects", get(handlers::projects))
        // JSON API
        .route("/api/blogs", get(handlers::list_blogs))
        .route("/api/projects", get(handlers::list_projects))
        .fallback(handlers::not_found)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio site...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let publishing: Arc<dyn PublishingClient> = Arc::new(
        HashnodeClient::new(
            config.publishing_api_url.clone(),
            config.publication_username.clone(),
            config.fetch_timeout,
        )
        .context("Failed to build publishing API client")?,
    );

    // Project table is fixed for the lifetime of the process
    let catalog = Arc::new(load_catalog(config.projects_file.as_deref()).await);
    tracing::info!("Showing {} projects", catalog.len());

    let state = AppState {
        publishing,
        article_base_url: config.article_base_url.clone(),
        home_blog_count: config.home_blog_count,
        catalog,
        site: config.site.clone(),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Error serving app")?;

    Ok(())
}
