//! Translation output display and copy feedback

use crate::controller::COPY_SUCCEEDED;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const OUTPUT_PLACEHOLDER: &str = "Translation will appear here...";

/// Data needed to render the output pane
pub struct OutputRenderData<'a> {
    pub translated_text: &'a str,
    pub copy_success: &'a str,
}

/// Render the output area with a one-line feedback strip underneath
pub fn render_output_pane(frame: &mut Frame, area: Rect, data: OutputRenderData, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(" Translation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal))
        .style(Style::default().bg(theme.output_bg));

    let paragraph = if data.translated_text.is_empty() {
        Paragraph::new(OUTPUT_PLACEHOLDER).style(Style::default().fg(theme.comment))
    } else {
        Paragraph::new(data.translated_text).style(Style::default().fg(theme.fg))
    };

    frame.render_widget(
        paragraph
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        rows[0],
    );

    if !data.copy_success.is_empty() {
        let color = if data.copy_success == COPY_SUCCEEDED {
            theme.success
        } else {
            theme.error
        };
        let feedback = Paragraph::new(data.copy_success)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right);
        frame.render_widget(feedback, rows[1]);
    }
}
