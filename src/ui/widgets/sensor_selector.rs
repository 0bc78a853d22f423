//! Sensor selector widget.

use crate::selector::{SelectorRegions, SensorSelector};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

/// Height of the round indicator
const ROUND_HEIGHT: u16 = 3;

/// Render the selector panel and its round indicator, recording where each
/// visible button landed so clicks can be mapped back to it.
pub fn render_sensor_selector(frame: &mut Frame, area: Rect, selector: &mut SensorSelector) {
    let view = selector.view();
    let layout = selector.layout();
    let bounds = area.intersection(frame.area());

    let panel = Rect::new(area.x, area.y, layout.panel_width(), selector.height())
        .intersection(bounds);
    let round = Rect::new(
        area.x.saturating_add(layout.panel_width()),
        area.y,
        layout.round_width,
        ROUND_HEIGHT,
    )
    .intersection(bounds);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::White).fg(Color::Black));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut regions = SelectorRegions {
        round,
        ..SelectorRegions::default()
    };

    // Main button
    let main = row(inner, 0);
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(view.chevron.symbol(), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(view.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(title), main);
    regions.main = main;

    // Option rows, then the info row
    let mut offset = 1;
    for option in view.options.iter().filter(|option| option.visible) {
        let area = row(inner, offset);
        let line = Line::from(vec![
            Span::raw("    "),
            Span::styled(option.glyph.symbol(), Style::default().fg(Color::Blue)),
            Span::raw("  "),
            Span::raw(option.label),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        regions.options.push((option.parameter, area));
        offset += 1;
    }

    if view.info_visible {
        let area = row(inner, offset);
        let info = Paragraph::new(Span::styled(
            view.info_label,
            Style::default().add_modifier(Modifier::UNDERLINED),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(info, area);
        regions.info = Some(area);
    }

    // Round indicator
    let indicator = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(Color::Cyan).fg(Color::Black));
    let icon = Paragraph::new(view.round_icon.symbol())
        .alignment(Alignment::Center)
        .block(indicator);
    frame.render_widget(icon, round);

    selector.set_regions(regions);
}

/// One-row slice of `area`, clipped to it
fn row(area: Rect, offset: u16) -> Rect {
    Rect::new(area.x, area.y.saturating_add(offset), area.width, 1).intersection(area)
}
