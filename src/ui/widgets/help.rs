//! Help and info panel widgets.

use crate::parameter::Parameter;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn binding(keys: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", keys), Style::default().fg(Color::Cyan)),
        Span::raw(format!("- {}", description)),
    ])
}

/// Render the help panel
pub fn render_help(frame: &mut Frame, area: Rect) {
    // Clear the area first
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(""),
        heading("Selector"),
        binding("Enter/Spc", "Show or hide the parameter list"),
        binding("1/a", "Select Air Quality"),
        binding("2/u", "Select UV index"),
        binding("i", "What is this?"),
        Line::from(""),
        heading("Mouse"),
        binding("Click", "Press any visible button"),
        Line::from(""),
        heading("Other"),
        binding("?/h/F1", "Toggle this help"),
        binding("Esc", "Close panel"),
        binding("q", "Quit application"),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("?", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" to close this help"),
        ]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Render the explanation of the selected parameter
pub fn render_info(frame: &mut Frame, area: Rect, parameter: Parameter) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} {} ", parameter.glyph().symbol(), parameter))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let text = vec![
        Line::from(""),
        Line::from(parameter.description()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
