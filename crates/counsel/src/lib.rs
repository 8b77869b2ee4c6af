pub mod llm;
pub mod prompt;
pub mod schema;

pub use llm::{
    AnthropicClient, ChatMessage, CompletionProvider, CompletionRequest, CompletionResponse,
    ContentBlock,
};
pub use schema::SearchResponse;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Turns a legal question into an answered [`SearchResponse`].
///
/// Holds no per-request state, so one instance is shared by all handlers.
#[derive(Clone)]
pub struct LegalAssistant {
    provider: Arc<dyn CompletionProvider>,
    model: String,
    max_tokens: u32,
}

impl LegalAssistant {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            model: llm::MODEL_ID.to_string(),
            max_tokens: llm::MAX_TOKENS,
        }
    }

    /// Ask the provider once and return the text of its answer.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let prompt = prompt::build_legal_prompt(query);
        let request = CompletionRequest::user(self.model.as_str(), self.max_tokens, prompt);

        let response = self
            .provider
            .complete(&request)
            .await
            .context("Completion request failed")?;

        let text = response
            .first_text()
            .context("Unexpected completion response")?;

        Ok(text.to_string())
    }

    /// Answer `query` and wrap the result in the response envelope.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let content = self.answer(query).await?;
        Ok(SearchResponse::new(query, content))
    }
}
