// Best-effort JSON extraction from free-text model output
use crate::domain::chat::DashboardSpec;
use serde::Deserialize;

/// What the chat pipeline hands back to the HTTP layer. `message` is always
/// populated; the structured fields are present only when the model reply
/// contained parseable JSON that carried them.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedReply {
    pub message: String,
    pub dashboard: Option<DashboardSpec>,
    pub analysis_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    analysis_type: Option<String>,
    #[serde(default)]
    dashboard: Option<DashboardSpec>,
}

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Locate the JSON candidate inside the raw model text. Models often wrap
/// structured output in a fenced code block; prefer a json-tagged fence,
/// then any fence, then the whole text. An opening fence with no closing
/// fence yields everything up to end-of-string rather than an error.
fn candidate(text: &str) -> &str {
    let (start, fence_len) = if let Some(pos) = text.find(JSON_FENCE) {
        (pos, JSON_FENCE.len())
    } else if let Some(pos) = text.find(FENCE) {
        (pos, FENCE.len())
    } else {
        return text;
    };

    let body = &text[start + fence_len..];
    match body.find(FENCE) {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

/// Parse the model's raw text into an `ExtractedReply`. Malformed JSON is
/// not an error; the whole text degrades to a plain `message` so the caller
/// always receives something usable.
pub fn extract_reply(raw: &str) -> ExtractedReply {
    match serde_json::from_str::<ModelReply>(candidate(raw)) {
        Ok(reply) => ExtractedReply {
            message: reply.message.unwrap_or_else(|| raw.to_string()),
            dashboard: reply.dashboard,
            analysis_type: reply.analysis_type,
        },
        Err(e) => {
            tracing::debug!("model reply was not valid JSON, degrading to plain text: {e}");
            ExtractedReply {
                message: raw.to_string(),
                dashboard: None,
                analysis_type: None,
            }
        }
    }
}
