use async_trait::async_trait;
use reqwest::{Client, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::language::SupportedLanguage;
use crate::summarizer::{
    Summarizer,
    errors::SummarizeError,
    parse::parse_reply,
    prompt::{ChatMessage, build_messages},
    types::{FailureKind, TranslationRequest, TranslationResult},
};

const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 1024;
const TOP_P: f64 = 1.0;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completion endpoint that turns an
/// article into an English summary plus a translation of that summary.
pub struct SummarizeTranslateClient {
    /// Pre-computed `"Bearer <key>"` header value.
    auth_header: String,
    endpoint: String,
    model: String,
    client: Client,
}

impl SummarizeTranslateClient {
    pub fn new(config: &Config) -> Self {
        Self {
            auth_header: format!("Bearer {}", config.api_key()),
            endpoint: config.llm_endpoint().to_string(),
            model: config.llm_model().to_string(),
            client: Client::builder()
                .timeout(config.llm_timeout())
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build LLM HTTP client"),
        }
    }

    /// Send one completion request and return the raw reply text.
    ///
    /// Exactly one HTTP request is made; failures are not retried.
    pub async fn complete(&self, request: &TranslationRequest) -> Result<String, SummarizeError> {
        let payload = ChatRequest {
            model: &self.model,
            messages: build_messages(request),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::status(status, &body));
        }

        let body = response.bytes().await?;
        let parsed: ChatResponse = serde_json::from_slice(&body)
            .map_err(|e| SummarizeError::Shape(format!("invalid completion body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| SummarizeError::Shape("missing choices[0].message.content".into()))
    }
}

#[async_trait]
impl Summarizer for SummarizeTranslateClient {
    #[instrument(skip(self, text), fields(model = %self.model, chars = text.len()))]
    async fn process(&self, text: &str, target_language: SupportedLanguage) -> TranslationResult {
        let Some(request) = TranslationRequest::new(text, target_language) else {
            return TranslationResult::failure(FailureKind::InvalidInput, "article text is empty");
        };

        let content = match self.complete(&request).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "completion request failed");
                return TranslationResult::failure(e.kind(), e.to_string());
            }
        };

        let parsed = parse_reply(&content);
        if let Some(warning) = parsed.warning {
            warn!(
                ?warning,
                reply_chars = content.len(),
                "completion did not follow the SUMMARY/TRANSLATION format"
            );
        } else {
            info!(
                summary_words = parsed.summary.split_whitespace().count(),
                "summarized and translated article"
            );
        }

        TranslationResult::Success {
            summary: parsed.summary,
            translation: parsed.translation,
            warning: parsed.warning,
        }
    }
}
