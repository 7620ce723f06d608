//! Text input field and the translate button

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const INPUT_PLACEHOLDER: &str = "Enter your text here";

/// Data needed to render the input row
pub struct InputRenderData<'a> {
    pub input: &'a str,
    pub is_focused: bool,
    pub is_loading: bool,
}

/// Render the input box and the button next to it.
///
/// When the input is focused the terminal cursor is placed after the last
/// visible character.
pub fn render_input_row(frame: &mut Frame, area: Rect, data: InputRenderData, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(19)])
        .split(area);

    let border_style = if data.is_focused {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_normal)
    };

    let block = Block::default()
        .title(" Text ")
        .borders(Borders::ALL)
        .border_style(border_style);

    // Keep one column free for the cursor and show the tail of long input
    let inner_width = columns[0].width.saturating_sub(2) as usize;
    let visible = visible_tail(data.input, inner_width.saturating_sub(1));

    let paragraph = if data.input.is_empty() {
        Paragraph::new(INPUT_PLACEHOLDER).style(Style::default().fg(theme.comment))
    } else {
        Paragraph::new(visible).style(Style::default().fg(theme.fg))
    };
    frame.render_widget(paragraph.block(block), columns[0]);

    if data.is_focused {
        let cursor_x = columns[0].x + 1 + Span::raw(visible).width() as u16;
        frame.set_cursor_position((cursor_x, columns[0].y + 1));
    }

    render_translate_button(frame, columns[1], data.is_loading, theme);
}

/// Longest suffix of `input` that fits in `max_width` terminal columns
fn visible_tail(input: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = input.len();
    let mut buf = [0u8; 4];

    for (idx, c) in input.char_indices().rev() {
        let char_width = Span::raw(&*c.encode_utf8(&mut buf)).width();
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        start = idx;
    }

    &input[start..]
}

fn render_translate_button(frame: &mut Frame, area: Rect, is_loading: bool, theme: &Theme) {
    let (label, style) = if is_loading {
        (
            "Translating...",
            Style::default()
                .bg(theme.button_disabled)
                .fg(theme.comment),
        )
    } else {
        (
            "Translate ↵",
            Style::default()
                .bg(theme.button_bg)
                .fg(theme.button_fg)
                .add_modifier(Modifier::BOLD),
        )
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}
