use crate::error::{AiError, Result};
use crate::prompts;
use crate::types::{
    ArchetypePayload, ChatRequest, Content, GenerateContentRequest, GenerateContentResponse,
    MapsTool, RetrievalConfig, StepPayload, Tool, ToolConfig,
};

// ─── ClientConfig ─────────────────────────────────────────────────────────

/// Connection settings for the hosted completion service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Resolved credential: the store override when set, otherwise the
    /// `GEMINI_API_KEY` environment value.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

// ─── GenAiClient ──────────────────────────────────────────────────────────

/// Async client for the `models/{model}:generateContent` endpoint.
///
/// One call per method, no streaming, no automatic retry: every call is
/// externally costed, so retries happen only on explicit user action.
pub struct GenAiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GenAiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    // ─── Raw call ─────────────────────────────────────────────────────────

    async fn generate(&self, request: &GenerateContentRequest) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
        );
        tracing::debug!(%url, "collaborator call");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| AiError::Parse { body, source })
    }

    /// Extract the completion text and parse it as schema-constrained JSON.
    fn parse_constrained<T: serde::de::DeserializeOwned>(
        response: &GenerateContentResponse,
    ) -> Result<T> {
        let text = response.first_text().ok_or(AiError::Empty)?;
        serde_json::from_str(&text).map_err(|source| AiError::Parse { body: text, source })
    }

    // ─── Archetype classification ─────────────────────────────────────────

    /// Classify quiz answers into an archetype.
    ///
    /// `answers` is the ordered `(category, chosen option)` batch. Whatever
    /// was collected is forwarded; no fixed count is assumed.
    pub async fn classify_archetype(
        &self,
        answers: &[(String, String)],
    ) -> Result<ArchetypePayload> {
        let request = GenerateContentRequest::json_constrained(
            prompts::classification(answers),
            prompts::classification_schema(),
        );
        let response = self.generate(&request).await?;
        Self::parse_constrained(&response)
    }

    // ─── Journey generation ───────────────────────────────────────────────

    /// Fetch the four raw onboarding steps for a sport. The caller owns
    /// id assignment and order validation.
    pub async fn generate_journey(&self, sport: &str) -> Result<Vec<StepPayload>> {
        let request = GenerateContentRequest::json_constrained(
            prompts::journey(sport),
            prompts::journey_schema(),
        );
        let response = self.generate(&request).await?;
        Self::parse_constrained(&response)
    }

    // ─── Chat assistance ──────────────────────────────────────────────────

    /// Free-text coaching reply, with grounded place references appended as
    /// a markup link list when the service returns any.
    pub async fn chat_assistance(&self, chat: &ChatRequest) -> Result<String> {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::from_text(prompts::chat_system_instruction(chat))),
            tools: Some(vec![Tool {
                google_maps: MapsTool::default(),
            }]),
            tool_config: chat.location.map(|lat_lng| ToolConfig {
                retrieval_config: RetrievalConfig { lat_lng },
            }),
            ..GenerateContentRequest::from_text(chat.message.clone())
        };

        let response = self.generate(&request).await?;
        let mut text = response.first_text().ok_or(AiError::Empty)?;

        let places: Vec<_> = response
            .grounding_chunks()
            .iter()
            .filter_map(|c| c.place())
            .collect();
        if !places.is_empty() {
            text.push_str("\n\n**Suggested places:**\n");
            for (title, uri) in places {
                text.push_str(&format!("- [{title}]({uri})\n"));
            }
        }
        Ok(text)
    }
}
