//! Modal warning popup

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render `message` centered over everything else until dismissed
pub fn render_warning_popup(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let popup_area = centered_rect(area, 48, 6);

    let block = Block::default()
        .title(" Warning ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(theme.bg));

    let text = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.fg))),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(theme.comment),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

/// A `width` x `height` rect centered in `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_small_areas() {
        let area = Rect::new(0, 0, 20, 4);
        let rect = centered_rect(area, 48, 6);
        assert_eq!(rect, Rect::new(0, 0, 20, 4));

        let area = Rect::new(10, 5, 100, 30);
        let rect = centered_rect(area, 48, 6);
        assert_eq!(rect, Rect::new(36, 17, 48, 6));
    }
}
