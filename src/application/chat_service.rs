// Chat service - Use case for conversational dashboard generation
use crate::application::completion::{CompletionClient, GenerationOptions};
use crate::application::extractor::{ExtractedReply, extract_reply};
use crate::application::prompt::compose_chat_prompt;
use crate::domain::chat::ConversationTurn;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChatService {
    client: Arc<dyn CompletionClient>,
}

impl ChatService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Run one chat round trip: compose the prompt from the conversation so
    /// far, call the model once, and extract whatever structure the reply
    /// carries. Transport failures propagate; unparseable replies do not.
    pub async fn chat(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> anyhow::Result<ExtractedReply> {
        let prompt = compose_chat_prompt(history, message);
        tracing::debug!(
            history_turns = history.len(),
            prompt_chars = prompt.len(),
            "sending chat completion"
        );

        let raw = self
            .client
            .generate(&prompt, &GenerationOptions::dashboard())
            .await?;

        Ok(extract_reply(&raw))
    }
}
