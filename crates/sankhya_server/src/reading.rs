//! LLM reading: prompt construction and the chat-completions client.
//!
//! The provider is an opaque text service reached through an
//! OpenAI-compatible `/chat/completions` endpoint.

use std::time::Duration;

use sankhya_core::AnalysisRecord;
use serde::{Deserialize, Serialize};

use crate::config::ReadingConfig;
use crate::error::ReadingError;

/// System message sent with every reading request.
pub const SYSTEM_PROMPT: &str = "You are an expert Vedic numerologist with deep knowledge of ancient Indian numerology traditions. Provide detailed, accurate, and insightful numerological analyses.";

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// User prompt describing the numerological profile in `analysis`.
pub fn reading_prompt(analysis: &AnalysisRecord) -> String {
    let yogas: Vec<&str> = analysis
        .yogas_found
        .iter()
        .map(|y| y.name.as_str())
        .collect();

    format!(
        "As a professional Vedic numerologist, provide a detailed analysis based on the following numerological profile:

Psychic Number: {} ({})
Destiny Number: {} ({})
Present Numbers: {}
Missing Numbers: {}
Friendly Numbers: {}
Unfriendly Numbers: {}
Yogas Found: {}

Please provide:
1. A comprehensive personality analysis
2. Life path insights and recommendations
3. Career and relationship guidance
4. Spiritual and personal growth suggestions
5. Specific advice for leveraging strengths and addressing challenges

Keep the analysis professional, insightful, and actionable. Format in well-structured paragraphs.",
        analysis.psychic_number.number,
        analysis.psychic_number.planet,
        analysis.destiny_number.number,
        analysis.destiny_number.planet,
        join(&analysis.lusho_grid.present_numbers),
        join(&analysis.lusho_grid.missing_numbers),
        join(&analysis.friendly_unfriendly.friendly),
        join(&analysis.friendly_unfriendly.unfriendly),
        yogas.join(", "),
    )
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the reading provider.
#[derive(Debug, Clone)]
pub struct ReadingClient {
    http: reqwest::Client,
    config: ReadingConfig,
}

impl ReadingClient {
    pub fn new(config: ReadingConfig) -> Result<Self, ReadingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// True if an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Request a prose reading for `analysis`.
    pub async fn generate(&self, analysis: &AnalysisRecord) -> Result<String, ReadingError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ReadingError::MissingApiKey)?;

        let prompt = reading_prompt(analysis);
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        tracing::info!(model = %self.config.model, dob = %analysis.input_dob, "requesting reading");
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReadingError::Upstream {
                status: status.as_u16(),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ReadingError::EmptyResponse)?;

        tracing::debug!(chars = text.len(), "reading received");
        Ok(text)
    }
}
