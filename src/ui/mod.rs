//! Terminal UI module using ratatui.
//!
//! This module provides the host screen that embeds the sensor selector,
//! along with input mapping and the widgets drawn around it.

pub mod app;
pub mod input;
pub mod widgets;

pub use app::App;
pub use input::{handle_input, InputAction};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Block,
    Frame,
};

/// Height of the status bar
const STATUS_BAR_HEIGHT: u16 = 3;

/// Draw the whole host screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let [body, footer] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Gray)),
        body,
    );

    let selector_area = app.selector_area(body);
    widgets::render_sensor_selector(frame, selector_area, &mut app.selector);

    widgets::render_status_bar(
        frame,
        footer,
        app.host.active_parameter,
        app.host.last_changed,
        app.selector.is_expanded(),
        app.host.status_message.as_deref(),
    );

    if app.show_help {
        widgets::render_help(frame, centered(body, 50, 20));
    } else if app.show_info {
        widgets::render_info(frame, centered(body, 50, 9), app.selector.selected());
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::parameter::Parameter;
    use crate::selector::SelectorTarget;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
        terminal.draw(|f| render(f, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn test_click_flow() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(&UiConfig::default(), 80);

        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("AIR QUALITY"));
        assert!(!text.contains("UV index"));

        let main = app.selector.regions().main;
        app.dispatch(InputAction::Click { column: main.x + 2, row: main.y });
        let text = draw(&mut terminal, &mut app);
        assert!(text.contains("UV index"));
        assert!(text.contains("What is this?"));

        let (_, uv_area) = app.selector.regions().options[1];
        app.dispatch(InputAction::Click { column: uv_area.x + 2, row: uv_area.y });
        let text = draw(&mut terminal, &mut app);

        assert_eq!(app.host.active_parameter, Parameter::UvIndex);
        assert!(text.contains("UV INDEX"));
        assert!(text.contains("since"));
        assert!(!text.contains("What is this?"));
    }

    #[test]
    fn test_info_panel_describes_selection() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = App::new(&UiConfig::default(), 80);

        app.dispatch(InputAction::Tap(SelectorTarget::Main));
        app.dispatch(InputAction::Tap(SelectorTarget::Info));
        let text = draw(&mut terminal, &mut app);

        assert!(text.contains("Press Esc to close"));
    }

    #[test]
    fn test_centered_clips() {
        let area = centered(Rect::new(0, 0, 10, 4), 50, 20);
        assert_eq!(area, Rect::new(0, 0, 10, 4));
    }
}
