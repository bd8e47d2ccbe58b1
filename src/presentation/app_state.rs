// Application state for HTTP handlers
use crate::application::chat_service::ChatService;
use crate::application::trend_service::TrendService;
use crate::infrastructure::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: ChatService,
    pub trend_service: TrendService,
    pub settings: Settings,
}
