//! Title banner and the two language selectors

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the "Translate-AI" banner
pub fn render_title(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Translate-AI",
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Data needed to render the selector row
pub struct SelectorRenderData<'a> {
    pub from_language: &'a str,
    pub to_language: &'a str,
    pub from_focused: bool,
    pub to_focused: bool,
}

/// Render "From:" and "To:" side by side
pub fn render_language_selectors(
    frame: &mut Frame,
    area: Rect,
    data: SelectorRenderData,
    theme: &Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_selector(frame, columns[0], " From: ", data.from_language, data.from_focused, theme);
    render_selector(frame, columns[1], " To: ", data.to_language, data.to_focused, theme);
}

fn render_selector(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    language: &str,
    is_focused: bool,
    theme: &Theme,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_normal)
    };

    let block = Block::default()
        .title(label.to_string())
        .borders(Borders::ALL)
        .border_style(border_style);

    // Arrows only hint at cycling when the selector can receive it
    let arrow_style = if is_focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.comment)
    };

    let line = Line::from(vec![
        Span::styled("▲ ", arrow_style),
        Span::styled(language.to_string(), Style::default().fg(theme.fg)),
        Span::styled(" ▼", arrow_style),
    ]);

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
