use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};
use crate::router::CompletionService;
use crate::types::{CompletionRequest, MessageRole};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

// Generation can take a while for long answers; this only bounds a hung request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

// Finish reasons for which the candidate carries no usable answer
const BLOCKING_FINISH_REASONS: [&str; 7] = [
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
    "LANGUAGE",
    "OTHER",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum GeminiRole {
    User,
    Model,
}

impl From<MessageRole> for GeminiRole {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => GeminiRole::User,
            MessageRole::Assistant => GeminiRole::Model,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<GeminiRole>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            api_key,
            client,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/v1beta/models/{}:generateContent", self.model)
    }

    pub async fn generate(&self, request: CompletionRequest) -> Result<String> {
        debug!(
            "Sending request to Gemini model {} with {} history turns",
            self.model,
            request.history.len()
        );

        let body = build_request(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(BotError::GeminiApi { status, message });
        }

        let api_response: GenerateContentResponse = response.json().await?;
        let text = extract_text(api_response)?;

        debug!("Received {} characters from Gemini", text.chars().count());
        Ok(text)
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.generate(request).await
    }
}

fn build_request(request: CompletionRequest) -> GenerateContentRequest {
    let mut contents: Vec<Content> = request
        .history
        .into_iter()
        .map(|turn| Content {
            role: Some(turn.role.into()),
            parts: vec![Part {
                text: Some(turn.text),
            }],
        })
        .collect();

    contents.push(Content {
        role: Some(GeminiRole::User),
        parts: vec![Part {
            text: Some(request.prompt),
        }],
    });

    GenerateContentRequest {
        contents,
        generation_config: GenerationConfig {
            max_output_tokens: request.max_output_tokens,
        },
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(BotError::GeminiResponse(format!(
            "Response was blocked: {reason}"
        )));
    };

    if let Some(reason) = candidate.finish_reason.as_deref()
        && BLOCKING_FINISH_REASONS.contains(&reason)
    {
        return Err(BotError::GeminiResponse(format!(
            "Candidate finished with {reason}"
        )));
    }

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}
