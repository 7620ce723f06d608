//! TUI pane rendering modules
//!
//! Stateless render functions, one per region of the widget. Each takes the
//! slice of controller state it shows plus the active [`Theme`].
//!
//! - [`selectors`]: title banner and the "From:" / "To:" selectors
//! - [`input`]: text input and the translate button
//! - [`output`]: translation display and copy feedback
//! - [`status`]: status bar with keybindings and request state
//! - [`popup`]: modal warning
//!
//! [`Theme`]: crate::ui::theme::Theme

pub mod input;
pub mod output;
pub mod popup;
pub mod selectors;
pub mod status;

// Re-export render functions for convenience
pub use input::{render_input_row, InputRenderData};
pub use output::{render_output_pane, OutputRenderData};
pub use popup::render_warning_popup;
pub use selectors::{render_language_selectors, render_title, SelectorRenderData};
pub use status::render_status_bar;
