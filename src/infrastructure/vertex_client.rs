// Vertex AI completion client
use crate::application::completion::{CompletionClient, GenerationOptions};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
pub enum VertexError {
    #[error("request to Vertex AI failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Vertex AI returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Vertex AI response contained no text candidates")]
    EmptyReply,
}

/// Thin wrapper around the Vertex AI `generateContent` endpoint. One
/// instance (and one `reqwest::Client`) is constructed per process and
/// shared across request handlers.
#[derive(Debug, Clone)]
pub struct VertexClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl VertexClient {
    pub fn new(project_id: &str, location: &str, model: &str, access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: Self::endpoint_url(project_id, location, model),
            access_token,
        }
    }

    fn endpoint_url(project_id: &str, location: &str, model: &str) -> String {
        format!(
            "https://{location}-aiplatform.googleapis.com/v1/projects/{project_id}/locations/{location}/publishers/google/models/{model}:generateContent"
        )
    }

    fn request_body(prompt: &str, options: &GenerationOptions) -> Value {
        let mut generation_config = json!({
            "maxOutputTokens": options.max_output_tokens,
            "temperature": options.temperature,
        });
        if let Some(top_p) = options.top_p {
            generation_config["topP"] = json!(top_p);
        }

        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }],
            "generationConfig": generation_config,
        });
        if options.web_search {
            body["tools"] = json!([{"googleSearchRetrieval": {}}]);
        }
        body
    }

    fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
        let content = response.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[async_trait]
impl CompletionClient for VertexClient {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> anyhow::Result<String> {
        let body = Self::request_body(prompt, options);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(VertexError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VertexError::Status { status, body }.into());
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(VertexError::Transport)?;

        Self::first_candidate_text(parsed)
            .ok_or_else(|| VertexError::EmptyReply.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        let url = VertexClient::endpoint_url("acme-hr", "us-central1", "gemini-1.5-pro");
        assert_eq!(
            url,
            "https://us-central1-aiplatform.googleapis.com/v1/projects/acme-hr/locations/us-central1/publishers/google/models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn test_request_body_plain_mode() {
        let body =
            VertexClient::request_body("hello", &GenerationOptions::dashboard());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(body["generationConfig"]["topP"], 0.95);
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_request_body_grounded_mode_attaches_search_tool() {
        let body =
            VertexClient::request_body("hello", &GenerationOptions::grounded_search());
        assert!(body["tools"][0].get("googleSearchRetrieval").is_some());
        assert!(body["generationConfig"].get("topP").is_none());
    }

    #[test]
    fn test_candidate_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [{"text": "foo"}, {"text": "bar"}]}
            }]
        }))
        .unwrap();
        assert_eq!(
            VertexClient::first_candidate_text(response).as_deref(),
            Some("foobar")
        );
    }

    #[test]
    fn test_empty_candidates_yield_none() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(VertexClient::first_candidate_text(response).is_none());
    }
}
