//! Main TUI application state and logic

use crate::languages;
use crate::session::Session;
use crate::ui::panes::{
    render_input_row, render_language_selectors, render_output_pane, render_status_bar,
    render_title, render_warning_popup, InputRenderData, OutputRenderData, SelectorRenderData,
};
use crate::ui::theme::theme_for;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which field receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedField {
    From,
    To,
    Input,
}

impl FocusedField {
    /// Move focus to the next field (from -> to -> input)
    pub fn next(self) -> Self {
        match self {
            FocusedField::From => FocusedField::To,
            FocusedField::To => FocusedField::Input,
            FocusedField::Input => FocusedField::From,
        }
    }

    /// Move focus to the previous field
    pub fn prev(self) -> Self {
        match self {
            FocusedField::From => FocusedField::Input,
            FocusedField::To => FocusedField::From,
            FocusedField::Input => FocusedField::To,
        }
    }
}

/// The main application state
pub struct App {
    /// Widget state and its background work
    pub session: Session,

    /// Currently focused field
    pub focused: FocusedField,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app around `session`, with the input focused
    pub fn new(session: Session) -> Self {
        App {
            session,
            focused: FocusedField::Input,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            // Apply finished translations and expired copy timers
            self.session.pump();

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so background completions show up promptly
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let state = self.session.state();
        let theme = theme_for(state.dark_mode);

        // Whole-screen background follows the theme
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
            size,
        );

        // Title, selectors, input row, output, status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(size);

        render_title(frame, rows[0], theme);

        render_language_selectors(
            frame,
            rows[1],
            SelectorRenderData {
                from_language: &state.from_language,
                to_language: &state.to_language,
                from_focused: self.focused == FocusedField::From,
                to_focused: self.focused == FocusedField::To,
            },
            theme,
        );

        render_input_row(
            frame,
            rows[2],
            InputRenderData {
                input: &state.input,
                is_focused: self.focused == FocusedField::Input && state.warning.is_none(),
                is_loading: state.is_loading,
            },
            theme,
        );

        render_output_pane(
            frame,
            rows[3],
            OutputRenderData {
                translated_text: &state.translated_text,
                copy_success: &state.copy_success,
            },
            theme,
        );

        render_status_bar(
            frame,
            rows[4],
            &state.from_language,
            &state.to_language,
            state.is_loading,
            state.dark_mode,
            theme,
        );

        if let Some(warning) = &state.warning {
            render_warning_popup(frame, size, warning, theme);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The warning blocks everything until acknowledged
        if self.session.state().warning.is_some() {
            self.session.controller_mut().dismiss_warning();
            return;
        }

        // AltGr arrives as Ctrl+Alt on Windows and must still type
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Char('t') if ctrl => {
                self.session.toggle_theme();
            }
            KeyCode::Char('y') if ctrl => {
                self.session.copy();
            }
            KeyCode::Char('u') if ctrl => {
                self.session.controller_mut().set_input("");
            }
            KeyCode::Tab => {
                self.focused = self.focused.next();
            }
            KeyCode::BackTab => {
                self.focused = self.focused.prev();
            }
            KeyCode::Enter => {
                // Disabled while loading; a refusal is already reflected in state
                if self.session.controller().can_translate() {
                    let _ = self.session.translate();
                }
            }
            KeyCode::Up | KeyCode::Down => self.cycle_language(key.code == KeyCode::Down),
            KeyCode::Backspace if self.focused == FocusedField::Input => {
                self.session.controller_mut().delete_char();
            }
            KeyCode::Char(c) if self.focused == FocusedField::Input && !ctrl => {
                self.session.controller_mut().insert_char(c);
            }
            _ => {}
        }
    }

    /// Step the focused selector through the registry
    fn cycle_language(&mut self, forward: bool) {
        let step = |current: &str| {
            if forward {
                languages::next(current)
            } else {
                languages::previous(current)
            }
        };

        let controller = self.session.controller_mut();
        let result = match self.focused {
            FocusedField::From => {
                let lang = step(&controller.state().from_language);
                controller.set_from_language(lang)
            }
            FocusedField::To => {
                let lang = step(&controller.state().to_language);
                controller.set_to_language(lang)
            }
            FocusedField::Input => Ok(()),
        };

        if let Err(err) = result {
            tracing::warn!(error = %err, "language selector out of sync with registry");
        }
    }
}
