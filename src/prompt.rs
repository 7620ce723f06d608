//! Translation request builder
//!
//! Turns the current selector values and input text into the two-message
//! prompt sent to the model. Construction is pure; validation of the input
//! (non-empty) is the controller's job.

use std::fmt;

/// Values captured when the user presses translate.
///
/// Later edits to the input or the selectors never reach an in-flight
/// request because it owns copies of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        TranslationRequest {
            source_language: source_language.into(),
            target_language: target_language.into(),
            text: text.into(),
        }
    }

    /// Build the system instruction and the verbatim user message
    pub fn to_prompt(&self) -> Prompt {
        Prompt {
            system: system_instruction(&self.source_language, &self.target_language),
            user: self.text.clone(),
        }
    }
}

/// Message author, in the chat-completion sense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// System instruction plus user text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    /// Messages in send order: system first, then user
    pub fn messages(&self) -> [(Role, &str); 2] {
        [(Role::System, &self.system), (Role::User, &self.user)]
    }
}

fn system_instruction(source: &str, target: &str) -> String {
    format!(
        "Translate the following text from {source} to {target}. \
         Only return the {target} translation without any extra explanation or text."
    )
}
