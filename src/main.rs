// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::catalog::Catalog;
use crate::application::navigation_service::NavigationService;
use crate::infrastructure::config::load_shell_config;
use crate::infrastructure::html::HtmlRenderer;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_shell_config().context("loading config/site.toml")?;

    // Validate the menu against the content tables before serving anything
    let catalog = Arc::new(Catalog::from_config(&config).context("invalid site catalog")?);
    tracing::info!(
        "Catalog ready: {} pages, {} dashboards, {} documents",
        catalog.navigation.len(),
        catalog.dashboards.len(),
        catalog.documents.len()
    );

    // Create services (application layer) and the renderer (infrastructure layer)
    let state = Arc::new(AppState {
        navigation_service: NavigationService::new(catalog.clone()),
        renderer: Arc::new(HtmlRenderer::from_catalog(&catalog)),
    });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", config.server.bind))?;
    tracing::info!("Starting nyc311-dashboard-shell on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
