// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use dashboard_agent::application::chat_service::ChatService;
use dashboard_agent::application::completion::CompletionClient;
use dashboard_agent::application::trend_service::TrendService;
use dashboard_agent::infrastructure::config::load_settings;
use dashboard_agent::infrastructure::vertex_client::VertexClient;
use dashboard_agent::presentation::app_state::AppState;
use dashboard_agent::presentation::handlers::router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_settings()?;

    // Create the shared model client (infrastructure layer)
    let client: Arc<dyn CompletionClient> = Arc::new(VertexClient::new(
        &settings.gcp_project_id,
        &settings.gcp_location,
        &settings.model,
        settings.gcp_access_token.clone(),
    ));

    // Create services (application layer)
    let chat_service = ChatService::new(client.clone());
    let trend_service = TrendService::new(client);

    // Create application state
    let state = Arc::new(AppState {
        chat_service,
        trend_service,
        settings: settings.clone(),
    });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("starting dashboard-agent service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
