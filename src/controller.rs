//! UI state controller
//!
//! Owns every piece of widget state and changes it only through the named
//! transitions below. Nothing here performs I/O: the [`session`] module
//! feeds outcomes of the model call, the clipboard and the theme store back
//! in, which keeps every transition testable on its own.
//!
//! # Translate state machine
//!
//! ```text
//! Idle ──begin_translate──▶ Submitting ──finish_translate──▶ Idle
//!   │                                    (Success | Empty | Failed)
//!   └─ empty input: warning, stays Idle
//! ```
//!
//! [`session`]: crate::session

use crate::clipboard::ClipboardError;
use crate::languages;
use crate::model::{ModelError, ModelResponse};
use crate::prompt::TranslationRequest;
use std::time::Duration;
use thiserror::Error;

/// Blocking warning shown when translate is pressed with no input
pub const EMPTY_INPUT_WARNING: &str = "Please enter some text to translate.";

/// Placeholder for a response that carried no usable content
pub const NOT_AVAILABLE_PLACEHOLDER: &str = "Translation not available.";

/// Placeholder for a failed model call
pub const ERROR_PLACEHOLDER: &str = "Error occurred during translation.";

pub const COPY_SUCCEEDED: &str = "Copied!";
pub const COPY_FAILED: &str = "Failed to copy";

/// How long copy feedback stays visible
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Everything the view renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub input: String,
    pub translated_text: String,
    pub from_language: String,
    pub to_language: String,
    /// True only while a model call is in flight
    pub is_loading: bool,
    pub dark_mode: bool,
    /// `""`, `"Copied!"` or `"Failed to copy"`
    pub copy_success: String,
    /// Set when the user must acknowledge a problem before continuing
    pub warning: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            input: String::new(),
            translated_text: String::new(),
            from_language: languages::DEFAULT_SOURCE.to_string(),
            to_language: languages::DEFAULT_TARGET.to_string(),
            is_loading: false,
            dark_mode: false,
            copy_success: String::new(),
            warning: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatePhase {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStatus {
    Pending,
    Success,
    Empty,
    Failed,
}

/// Latest outcome of the translate action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub text: String,
    pub status: TranslationStatus,
}

/// Why a translate press did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranslateRejected {
    #[error("input is empty")]
    EmptyInput,

    #[error("a translation is already in flight")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a selectable language")]
pub struct UnknownLanguage(pub String);

#[derive(Debug, Default)]
pub struct Controller {
    state: UiState,
    last_result: Option<TranslationResult>,
}

impl Controller {
    pub fn new(dark_mode: bool) -> Self {
        Controller {
            state: UiState {
                dark_mode,
                ..UiState::default()
            },
            last_result: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn phase(&self) -> TranslatePhase {
        if self.state.is_loading {
            TranslatePhase::Submitting
        } else {
            TranslatePhase::Idle
        }
    }

    pub fn last_result(&self) -> Option<&TranslationResult> {
        self.last_result.as_ref()
    }

    /// The translate affordance is disabled while a request is in flight
    pub fn can_translate(&self) -> bool {
        !self.state.is_loading
    }

    // ---------------------------------------------------------------
    // Input and selectors
    // ---------------------------------------------------------------

    /// Replace the input. Emptying it clears the output immediately,
    /// whatever the request state.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.input = text.into();
        if self.state.input.is_empty() {
            self.state.translated_text.clear();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.state.input);
        text.push(c);
        self.set_input(text);
    }

    pub fn delete_char(&mut self) {
        let mut text = std::mem::take(&mut self.state.input);
        text.pop();
        self.set_input(text);
    }

    pub fn set_from_language(&mut self, name: &str) -> Result<(), UnknownLanguage> {
        Self::check_language(name)?;
        self.state.from_language = name.to_string();
        Ok(())
    }

    pub fn set_to_language(&mut self, name: &str) -> Result<(), UnknownLanguage> {
        Self::check_language(name)?;
        self.state.to_language = name.to_string();
        Ok(())
    }

    fn check_language(name: &str) -> Result<(), UnknownLanguage> {
        if languages::is_supported(name) {
            Ok(())
        } else {
            Err(UnknownLanguage(name.to_string()))
        }
    }

    // ---------------------------------------------------------------
    // Translate action
    // ---------------------------------------------------------------

    /// Idle -> Submitting.
    ///
    /// On success the returned request carries copies of the current
    /// selector values and input; the caller must issue exactly one model
    /// call for it and report back through [`Controller::finish_translate`].
    pub fn begin_translate(&mut self) -> Result<TranslationRequest, TranslateRejected> {
        if self.state.is_loading {
            return Err(TranslateRejected::Busy);
        }
        if self.state.input.is_empty() {
            self.state.warning = Some(EMPTY_INPUT_WARNING.to_string());
            return Err(TranslateRejected::EmptyInput);
        }

        self.state.is_loading = true;
        self.last_result = Some(TranslationResult {
            text: String::new(),
            status: TranslationStatus::Pending,
        });

        Ok(TranslationRequest::new(
            self.state.from_language.clone(),
            self.state.to_language.clone(),
            self.state.input.clone(),
        ))
    }

    /// Submitting -> Idle, via Succeeded, EmptyResult or Failed
    pub fn finish_translate(
        &mut self,
        outcome: Result<ModelResponse, ModelError>,
    ) -> TranslationStatus {
        if !self.state.is_loading {
            tracing::warn!("translation result arrived with no request in flight");
        }

        let (text, status) = match outcome {
            Ok(response) => match response.usable_content() {
                Some(content) => (content.to_string(), TranslationStatus::Success),
                None => (NOT_AVAILABLE_PLACEHOLDER.to_string(), TranslationStatus::Empty),
            },
            Err(err) => {
                tracing::error!(error = %err, "error during translation");
                (ERROR_PLACEHOLDER.to_string(), TranslationStatus::Failed)
            }
        };

        self.state.translated_text = text.clone();
        self.state.is_loading = false;
        self.last_result = Some(TranslationResult { text, status });
        status
    }

    pub fn dismiss_warning(&mut self) {
        self.state.warning = None;
    }

    // ---------------------------------------------------------------
    // Copy feedback
    // ---------------------------------------------------------------

    /// Text the copy action would put on the clipboard, if any
    pub fn copyable_text(&self) -> Option<&str> {
        Some(self.state.translated_text.as_str()).filter(|t| !t.is_empty())
    }

    /// Show the outcome of a clipboard write. Returns whether it succeeded.
    pub fn record_copy(&mut self, outcome: Result<(), ClipboardError>) -> bool {
        match outcome {
            Ok(()) => {
                self.state.copy_success = COPY_SUCCEEDED.to_string();
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "copy to clipboard failed");
                self.state.copy_success = COPY_FAILED.to_string();
                false
            }
        }
    }

    /// Clears whatever feedback is showing, including a newer message than
    /// the one whose timer fired.
    pub fn expire_copy_feedback(&mut self) {
        self.state.copy_success.clear();
    }

    // ---------------------------------------------------------------
    // Theme
    // ---------------------------------------------------------------

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.state.dark_mode = dark;
    }

    /// Returns the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.state.dark_mode = !self.state.dark_mode;
        self.state.dark_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_input(text: &str) -> Controller {
        let mut controller = Controller::default();
        controller.set_input(text);
        controller
    }

    #[test]
    fn starts_idle_with_default_languages() {
        let controller = Controller::new(true);
        let state = controller.state();
        assert_eq!(controller.phase(), TranslatePhase::Idle);
        assert_eq!(state.from_language, "English");
        assert_eq!(state.to_language, "Italian");
        assert!(state.dark_mode);
        assert!(controller.last_result().is_none());
    }

    #[test]
    fn empty_input_warns_and_changes_nothing_else() {
        let mut controller = Controller::default();
        let before = controller.state().clone();

        assert_eq!(controller.begin_translate(), Err(TranslateRejected::EmptyInput));

        let state = controller.state();
        assert_eq!(state.warning.as_deref(), Some(EMPTY_INPUT_WARNING));
        assert_eq!(state.is_loading, before.is_loading);
        assert_eq!(state.translated_text, before.translated_text);
        assert!(controller.last_result().is_none());

        controller.dismiss_warning();
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn begin_captures_current_values() {
        let mut controller = with_input("Hello");
        controller.set_to_language("Spanish").unwrap();

        let request = controller.begin_translate().unwrap();
        assert_eq!(request, TranslationRequest::new("English", "Spanish", "Hello"));
        assert_eq!(controller.phase(), TranslatePhase::Submitting);
        assert_eq!(
            controller.last_result().map(|r| r.status),
            Some(TranslationStatus::Pending)
        );

        controller.set_input("Hello there");
        controller.set_from_language("French").unwrap();
        assert_eq!(request.text, "Hello");
        assert_eq!(request.source_language, "English");
    }

    #[test]
    fn second_begin_while_loading_is_refused() {
        let mut controller = with_input("Hello");
        controller.begin_translate().unwrap();
        assert!(!controller.can_translate());
        assert_eq!(controller.begin_translate(), Err(TranslateRejected::Busy));
        assert!(controller.state().warning.is_none());
    }

    #[test]
    fn success_sets_content() {
        let mut controller = with_input("Hello");
        controller.begin_translate().unwrap();

        let status = controller.finish_translate(Ok(ModelResponse::with_content("Ciao")));

        assert_eq!(status, TranslationStatus::Success);
        assert_eq!(controller.state().translated_text, "Ciao");
        assert!(!controller.state().is_loading);
        assert_eq!(
            controller.last_result(),
            Some(&TranslationResult {
                text: "Ciao".to_string(),
                status: TranslationStatus::Success
            })
        );
    }

    #[test]
    fn empty_or_missing_content_uses_placeholder() {
        for response in [ModelResponse::with_content(""), ModelResponse::default()] {
            let mut controller = with_input("Hello");
            controller.begin_translate().unwrap();
            assert_eq!(controller.finish_translate(Ok(response)), TranslationStatus::Empty);
            assert_eq!(controller.state().translated_text, NOT_AVAILABLE_PLACEHOLDER);
            assert_eq!(controller.phase(), TranslatePhase::Idle);
        }
    }

    #[test]
    fn failure_uses_placeholder_and_returns_to_idle() {
        let mut controller = with_input("Hello");
        controller.begin_translate().unwrap();

        let status = controller.finish_translate(Err(ModelError::Api {
            status: 429,
            body: "rate limited".to_string(),
        }));

        assert_eq!(status, TranslationStatus::Failed);
        assert_eq!(controller.state().translated_text, ERROR_PLACEHOLDER);
        assert!(!controller.state().is_loading);
        assert!(controller.can_translate());
    }

    #[test]
    fn clearing_input_clears_output_even_while_loading() {
        let mut controller = with_input("Hello");
        controller.begin_translate().unwrap();
        controller.finish_translate(Ok(ModelResponse::with_content("Ciao")));

        controller.set_input("Hello again");
        controller.begin_translate().unwrap();
        assert_eq!(controller.state().translated_text, "Ciao");

        controller.set_input("");
        assert_eq!(controller.state().translated_text, "");
        assert!(controller.state().is_loading);
    }

    #[test]
    fn backspacing_to_empty_clears_output() {
        let mut controller = with_input("Hi");
        controller.begin_translate().unwrap();
        controller.finish_translate(Ok(ModelResponse::with_content("Ciao")));

        controller.delete_char();
        assert_eq!(controller.state().translated_text, "Ciao");
        controller.delete_char();
        assert_eq!(controller.state().input, "");
        assert_eq!(controller.state().translated_text, "");

        controller.insert_char('x');
        assert_eq!(controller.state().input, "x");
    }

    #[test]
    fn unknown_languages_are_rejected() {
        let mut controller = Controller::default();
        assert_eq!(
            controller.set_from_language("Klingon"),
            Err(UnknownLanguage("Klingon".to_string()))
        );
        assert_eq!(controller.state().from_language, "English");
    }

    #[test]
    fn copy_feedback_messages() {
        let mut controller = Controller::default();
        assert_eq!(controller.copyable_text(), None);

        assert!(controller.record_copy(Ok(())));
        assert_eq!(controller.state().copy_success, COPY_SUCCEEDED);

        assert!(!controller.record_copy(Err(ClipboardError::Write("denied".to_string()))));
        assert_eq!(controller.state().copy_success, COPY_FAILED);

        controller.expire_copy_feedback();
        assert_eq!(controller.state().copy_success, "");
    }

    #[test]
    fn toggle_dark_mode_twice_restores() {
        let mut controller = Controller::new(false);
        assert!(controller.toggle_dark_mode());
        assert!(!controller.toggle_dark_mode());

        controller.set_dark_mode(true);
        assert!(controller.state().dark_mode);
    }
}
