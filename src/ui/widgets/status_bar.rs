//! Status bar widget.

use crate::parameter::Parameter;
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    parameter: Parameter,
    changed_at: Option<DateTime<Local>>,
    expanded: bool,
    status_message: Option<&str>,
) {
    let mut spans = vec![];

    spans.push(Span::styled(
        format!("{} {}", parameter.glyph().symbol(), parameter.title()),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    if let Some(changed_at) = changed_at {
        spans.push(Span::styled(
            format!(" since {}", changed_at.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }

    spans.push(Span::raw(" │ "));

    let (state_text, state_color) = if expanded {
        ("EXPANDED", Color::Yellow)
    } else {
        ("COLLAPSED", Color::Green)
    };
    spans.push(Span::styled(state_text, Style::default().fg(state_color)));

    if let Some(status) = status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(status, Style::default().fg(Color::Gray)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
