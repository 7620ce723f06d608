//! Chat-completions client for the hosted Mistral API

use super::{ModelClient, ModelError, ModelResponse};
use crate::config::Config;
use crate::prompt::Prompt;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Model used for every translation
pub const MODEL_ID: &str = "mistral-large-latest";

/// Sampling temperature; 0 keeps translations deterministic
pub const TEMPERATURE: f32 = 0.0;

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<MessageContent>,
}

/// The API returns either a plain string or a list of typed chunks
#[derive(Deserialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Chunks(Vec<ContentChunk>),
}

#[derive(Deserialize)]
struct ContentChunk {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessageContent {
    fn into_text(self) -> String {
        match self {
            MessageContent::Text(text) => text,
            MessageContent::Chunks(chunks) => chunks
                .into_iter()
                .filter(|chunk| chunk.kind == "text")
                .filter_map(|chunk| chunk.text)
                .collect(),
        }
    }
}

pub struct MistralClient {
    http: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl MistralClient {
    pub fn new(config: &Config) -> Result<Self, ModelError> {
        let http = Client::builder()
            .user_agent(concat!("translate-ai/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(MistralClient {
            http,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), COMPLETIONS_PATH),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decode a successful completion body into the adapter's response shape.
///
/// No choices, a null content, or an all-non-text chunk list all come back
/// as empty content rather than an error.
pub(crate) fn parse_completion(body: &str) -> Result<ModelResponse, ModelError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ModelError::Decode(e.to_string()))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(MessageContent::into_text);

    Ok(ModelResponse { content })
}

#[async_trait]
impl ModelClient for MistralClient {
    async fn invoke(&self, prompt: &Prompt) -> Result<ModelResponse, ModelError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ModelError::MissingCredential)?;

        let body = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: prompt
                .messages()
                .into_iter()
                .map(|(role, content)| ChatMessage {
                    role: role.as_str(),
                    content,
                })
                .collect(),
        };

        tracing::debug!(model = %self.model, chars = prompt.user.chars().count(), "sending translation prompt");

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ModelError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_completion(&text)
    }
}
