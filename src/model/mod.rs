//! Model client adapter
//!
//! The boundary around the hosted language model. The controller only sees
//! [`ModelClient`]: one call per submission, whatever it returns is final.
//! There is no retry and no timeout at this layer; a call that never
//! resolves keeps the widget in its loading state.

mod mistral;

pub use mistral::{MistralClient, DEFAULT_BASE_URL, MODEL_ID, TEMPERATURE};

use crate::prompt::Prompt;
use async_trait::async_trait;
use thiserror::Error;

/// What the model sent back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelResponse {
    pub content: Option<String>,
}

impl ModelResponse {
    pub fn with_content(content: impl Into<String>) -> Self {
        ModelResponse {
            content: Some(content.into()),
        }
    }

    /// The content if it counts as a translation.
    ///
    /// Missing and empty content are treated the same; whitespace-only
    /// content is passed through as-is.
    pub fn usable_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// Failure of a model call. Detail goes to the log, never to the user.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("missing API credential (set MISTRAL_API_KEY)")]
    MissingCredential,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("could not decode model response: {0}")]
    Decode(String),
}

/// A hosted chat model that can answer a two-message prompt
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn invoke(&self, prompt: &Prompt) -> Result<ModelResponse, ModelError>;
}
