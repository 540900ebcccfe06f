//! The wasm-side client: one fetch per operation, no retries, no caching.
//! An in-flight call cannot be aborted; the UI disables the trigger control
//! instead.

use crate::ai::error::{AiError, Result};
use crate::ai::protocol::{
    analysis_request, chat_request, generation_request, parse_analysis, parse_chat,
    parse_generated_image, CuratorReply, GenerateContentRequest, SpaceAnalysis, IMAGE_MODEL,
    REASONING_MODEL,
};
use crate::transcript::Transcript;
use crate::wasm::fetch;

const API_ROOT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Explicitly constructed client with an injected credential. Built once at
/// start and handed to the page drivers; there is no module-level singleton.
pub struct GeminiClient {
    key: String,
}

impl GeminiClient {
    pub fn new(key: impl Into<String>) -> Self {
        GeminiClient { key: key.into() }
    }

    /// Credential captured from the build environment, the wasm analogue of a
    /// bundler-substituted process variable. `None` here is not an error yet;
    /// it becomes [`AiError::MissingApiKey`] at the first call.
    pub fn from_build_env() -> Option<Self> {
        option_env!("GEMINI_API_KEY").map(Self::new)
    }

    async fn call(&self, model: &str, request: &GenerateContentRequest) -> Result<String> {
        let body =
            serde_json::to_string(request).map_err(|e| AiError::Transport(e.to_string()))?;
        let url = format!("{API_ROOT}/{model}:generateContent?key={}", self.key);
        fetch::post_json(&url, &body).await
    }

    /// Analyze a patio photo into the structured four-field verdict.
    pub async fn analyze_patio(&self, image_base64: &str, mime_type: &str) -> Result<SpaceAnalysis> {
        let body = self
            .call(REASONING_MODEL, &analysis_request(image_base64, mime_type))
            .await?;
        parse_analysis(&body)
    }

    /// Re-render the uploaded photo with a cover added, returning a `data:`
    /// URI ready for an `<img src>`.
    pub async fn generate_reality(
        &self,
        image_base64: &str,
        mime_type: &str,
        prompt: &str,
    ) -> Result<String> {
        let body = self
            .call(IMAGE_MODEL, &generation_request(image_base64, mime_type, prompt))
            .await?;
        parse_generated_image(&body)
    }

    /// Continue the concierge conversation with the full prior transcript.
    pub async fn chat(&self, history: &Transcript, new_message: &str) -> Result<CuratorReply> {
        let body = self
            .call(REASONING_MODEL, &chat_request(history, new_message))
            .await?;
        parse_chat(&body)
    }
}
