// Completion client trait - seam between services and the remote model
use async_trait::async_trait;

/// Fixed decoding configuration for a single completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub top_p: Option<f64>,
    /// Attach the web-search retrieval tool so the model can cite live
    /// sources.
    pub web_search: bool,
}

impl GenerationOptions {
    /// Preset for dashboard chat completions.
    pub fn dashboard() -> Self {
        Self {
            max_output_tokens: 2048,
            temperature: 0.7,
            top_p: Some(0.95),
            web_search: false,
        }
    }

    /// Preset for search-grounded trend lookups.
    pub fn grounded_search() -> Self {
        Self {
            max_output_tokens: 1500,
            temperature: 0.5,
            top_p: None,
            web_search: true,
        }
    }
}

/// Remote text-generation service. Implementations send the prompt as-is
/// and return the model's raw text output; transport and remote-service
/// failures propagate as errors.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> anyhow::Result<String>;
}
