// HTTP request handlers
use crate::application::mock_charts::chart_data_for;
use crate::domain::chart::{ChartConfig, ChartData};
use crate::domain::chat::{ConversationTurn, DashboardSpec};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(chat))
        .route("/api/search-trends", post(search_trends))
        .route("/api/generate-chart-data", post(generate_chart_data))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub project_id: String,
    pub location: String,
    pub model: String,
}

/// Liveness only; reports the configured identifiers without touching the
/// remote service.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        project_id: state.settings.gcp_project_id.clone(),
        location: state.settings.gcp_location.clone(),
        model: state.settings.model.clone(),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ConversationTurn>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub dashboard: Option<DashboardSpec>,
    pub analysis_type: Option<String>,
    pub timestamp: String,
}

/// One conversational round trip through the model.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let reply = state
        .chat_service
        .chat(&request.message, &request.history)
        .await?;

    Ok(Json(ChatResponse {
        response: reply.message,
        dashboard: reply.dashboard,
        analysis_type: reply.analysis_type,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

fn default_industry() -> String {
    "general".to_string()
}

#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default = "default_industry")]
    pub industry: String,
}

#[derive(Serialize)]
pub struct TrendResponse {
    pub trends: String,
    pub topic: String,
    pub industry: String,
    pub timestamp: String,
}

/// Industry benchmark lookup with web-search grounding.
pub async fn search_trends(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TrendRequest>,
) -> Result<Json<TrendResponse>, ApiError> {
    let trends = state
        .trend_service
        .search_trends(&request.topic, &request.industry)
        .await?;

    Ok(Json(TrendResponse {
        trends,
        topic: request.topic,
        industry: request.industry,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChartDataRequest {
    pub chart_config: ChartConfig,
}

/// Canned chart data for the dashboard frontend. Bypasses the model
/// entirely.
pub async fn generate_chart_data(Json(request): Json<ChartDataRequest>) -> Json<ChartData> {
    Json(chart_data_for(&request.chart_config))
}
