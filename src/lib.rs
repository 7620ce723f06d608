//! # Introduction
//!
//! Translate-AI is a small translation widget: pick a source and a target
//! language, type some text, and the text is sent to a hosted language model
//! with a fixed instruction to return only the translation. The widget is
//! drawn in the terminal with [ratatui](https://docs.rs/ratatui).
//!
//! ## Request lifecycle
//!
//! ```text
//! Input → Controller → TranslationRequest → Prompt → ModelClient → Controller → TUI
//! ```
//!
//! 1. [`languages`]: the fixed list of selectable languages.
//! 2. [`prompt`]: builds the system instruction and user message.
//! 3. [`model`]: the [`model::ModelClient`] adapter trait and the hosted
//!    [`model::MistralClient`].
//! 4. [`controller`]: all widget state, changed only through named
//!    transitions of the translate state machine.
//! 5. [`session`]: runs the model call and the copy-feedback timer in the
//!    background and feeds their outcomes back to the controller.
//! 6. [`clipboard`] and [`theme_store`]: the clipboard and the persisted
//!    dark/light preference.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Known limitations
//!
//! There is no cancellation and no timeout. A model call that never
//! resolves leaves the widget in its loading state, and only one request can
//! be in flight because the translate key is ignored while loading.

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod languages;
pub mod model;
pub mod prompt;
pub mod session;
pub mod theme_store;
pub mod ui;
