// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::chart_renderer::ChartRenderer;
use crate::application::charting_library::SurfaceProvider;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::{load_app_config, SurfaceBackend};
use crate::infrastructure::plotters_library::PlottersChartLibrary;
use crate::infrastructure::surfaces::{DirectorySurfaceProvider, MemorySurfaceProvider};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chart_config, dashboard, get_surface, health_check, render_charts,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;
    let dimensions = config.render.dimensions();

    // Surfaces of the page (infrastructure layer)
    let surfaces: Arc<dyn SurfaceProvider> = match config.surfaces.backend {
        SurfaceBackend::Memory => Arc::new(MemorySurfaceProvider::new(
            config.surfaces.ids.clone(),
            dimensions,
        )),
        SurfaceBackend::Directory => {
            let provider = DirectorySurfaceProvider::new(
                &config.surfaces.directory,
                config.surfaces.ids.clone(),
                dimensions,
            )?;
            tracing::info!("Writing chart surfaces to {}", provider.dir().display());
            Arc::new(provider)
        }
    };

    // Create services (application layer)
    let renderer = ChartRenderer::new(Arc::new(PlottersChartLibrary::new()));
    let dashboard_service = DashboardService::new(renderer, surfaces);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard))
        .route("/healthz", get(health_check))
        .route("/charts", post(render_charts))
        .route("/charts/config", post(chart_config))
        .route("/surfaces/:id", get(get_surface))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_address().parse()?;
    tracing::info!("Starting usage-charts service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
