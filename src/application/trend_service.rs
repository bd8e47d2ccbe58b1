// Trend service - Use case for search-grounded benchmark lookups
use crate::application::completion::{CompletionClient, GenerationOptions};
use crate::application::prompt::trend_prompt;
use std::sync::Arc;

#[derive(Clone)]
pub struct TrendService {
    client: Arc<dyn CompletionClient>,
}

impl TrendService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Ask the model for industry benchmarks with web-search grounding
    /// enabled. The answer is free text, relayed as-is.
    pub async fn search_trends(&self, topic: &str, industry: &str) -> anyhow::Result<String> {
        let prompt = trend_prompt(topic, industry);
        self.client
            .generate(&prompt, &GenerationOptions::grounded_search())
            .await
    }
}
