//! Orchestration between the controller and its collaborators
//!
//! A [`Session`] is driven from the UI loop. User actions call into it
//! synchronously; the two suspension points (the model call and the copy
//! feedback timer) run as tasks on the tokio runtime and report back through
//! a channel that the loop drains with [`Session::pump`]. The loop never
//! blocks on either of them.
//!
//! Neither task can be cancelled. A model call that never resolves leaves
//! the widget loading for the rest of the session, and every copy timer
//! fires exactly once, two seconds after its copy, clearing whatever
//! feedback is showing at that moment.

use crate::clipboard::ClipboardSink;
use crate::controller::{Controller, TranslateRejected, UiState, COPY_FEEDBACK_TTL};
use crate::model::{ModelClient, ModelError, ModelResponse};
use crate::theme_store::{ThemePreference, ThemeStore};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Completions posted back to the UI loop
#[derive(Debug)]
pub enum SessionEvent {
    TranslationFinished(Result<ModelResponse, ModelError>),
    CopyFeedbackExpired,
}

pub struct Session {
    controller: Controller,
    model: Arc<dyn ModelClient>,
    clipboard: Box<dyn ClipboardSink>,
    theme_store: Box<dyn ThemeStore>,
    runtime: Handle,
    events_tx: UnboundedSender<SessionEvent>,
    events_rx: UnboundedReceiver<SessionEvent>,
}

impl Session {
    /// Create a session, seeding dark mode from the stored preference
    pub fn load(
        model: Arc<dyn ModelClient>,
        clipboard: Box<dyn ClipboardSink>,
        theme_store: Box<dyn ThemeStore>,
        runtime: Handle,
    ) -> Self {
        let dark_mode = match theme_store.load() {
            Ok(pref) => pref.is_some_and(ThemePreference::is_dark),
            Err(err) => {
                tracing::warn!(error = %err, "could not read theme preference, using light");
                false
            }
        };

        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Session {
            controller: Controller::new(dark_mode),
            model,
            clipboard,
            theme_store,
            runtime,
            events_tx,
            events_rx,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn state(&self) -> &UiState {
        self.controller.state()
    }

    /// Start a translation of the current input.
    ///
    /// The model call runs in the background; its outcome is applied on a
    /// later [`Session::pump`].
    pub fn translate(&mut self) -> Result<(), TranslateRejected> {
        let request = match self.controller.begin_translate() {
            Ok(request) => request,
            Err(reason) => {
                tracing::debug!(%reason, "translate not started");
                return Err(reason);
            }
        };

        tracing::info!(
            from = %request.source_language,
            to = %request.target_language,
            "translation submitted"
        );

        let model = Arc::clone(&self.model);
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            let prompt = request.to_prompt();
            let outcome = model.invoke(&prompt).await;
            let _ = events.send(SessionEvent::TranslationFinished(outcome));
        });

        Ok(())
    }

    /// Copy the translation, show feedback, and schedule its removal.
    ///
    /// Returns false without touching anything when there is nothing to copy.
    pub fn copy(&mut self) -> bool {
        let Some(text) = self.controller.copyable_text().map(str::to_owned) else {
            return false;
        };

        let outcome = self.clipboard.set_text(&text);
        self.controller.record_copy(outcome);

        let deadline = tokio::time::Instant::now() + COPY_FEEDBACK_TTL;
        let events = self.events_tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = events.send(SessionEvent::CopyFeedbackExpired);
        });

        true
    }

    /// Flip the theme and persist it. Returns the new dark-mode value.
    ///
    /// A failed write is logged; the on-screen theme changes regardless.
    pub fn toggle_theme(&mut self) -> bool {
        let dark = self.controller.toggle_dark_mode();
        let preference = ThemePreference::from_dark_mode(dark);
        match self.theme_store.save(preference) {
            Ok(()) => tracing::debug!(theme = preference.as_str(), "theme preference saved"),
            Err(err) => tracing::warn!(error = %err, "could not persist theme preference"),
        }
        dark
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::TranslationFinished(outcome) => {
                let status = self.controller.finish_translate(outcome);
                tracing::info!(?status, "translation finished");
            }
            SessionEvent::CopyFeedbackExpired => self.controller.expire_copy_feedback(),
        }
    }

    /// Apply every event that is already waiting. Never blocks.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next background completion and apply it
    pub async fn process_next(&mut self) {
        // The session holds a sender, so the channel never closes
        if let Some(event) = self.events_rx.recv().await {
            self.apply(event);
        }
    }
}
