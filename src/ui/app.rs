//! Host screen state.
//!
//! The host places one [`SensorSelector`] in the top-right corner of the
//! terminal, receives its selection changes and tracks the overlays and
//! status shown around it.

use crate::config::UiConfig;
use crate::parameter::Parameter;
use crate::selector::{
    Activation, ParameterListener, SelectorLayout, SelectorTarget, SensorSelector,
};
use crate::ui::input::InputAction;
use chrono::{DateTime, Local};
use ratatui::layout::Rect;

/// State the host keeps about selection changes
#[derive(Debug)]
pub struct HostState {
    /// Parameter last reported by the selector
    pub active_parameter: Parameter,
    /// When the parameter last changed
    pub last_changed: Option<DateTime<Local>>,
    /// Status message
    pub status_message: Option<String>,
}

impl HostState {
    fn new() -> Self {
        Self {
            active_parameter: Parameter::AirQuality,
            last_changed: None,
            status_message: Some("Press ? for help".to_string()),
        }
    }
}

impl ParameterListener for HostState {
    fn on_parameter_changed(&mut self, parameter: Parameter) {
        match parameter {
            Parameter::AirQuality => tracing::info!("Air Quality selected"),
            Parameter::UvIndex => tracing::info!("UV Index selected"),
        }

        tracing::debug!(icon = parameter.glyph().icon_name(), "round indicator updated");

        self.active_parameter = parameter;
        self.last_changed = Some(Local::now());
        self.status_message = Some(format!("Showing {}", parameter));
    }
}

/// Application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Show help panel
    pub show_help: bool,
    /// Show the explanation of the selected parameter
    pub show_info: bool,
    /// The embedded selector
    pub selector: SensorSelector,
    /// Receiver of the selector's notifications
    pub host: HostState,
    inset: u16,
    width_ratio: f64,
}

impl App {
    /// Create the host screen for a terminal `screen_width` cells wide
    pub fn new(config: &UiConfig, screen_width: u16) -> Self {
        let layout = SelectorLayout::for_screen_width(screen_width, config.width_ratio);
        tracing::debug!(screen_width, button_width = layout.button_width, "selector created");

        Self {
            should_quit: false,
            show_help: false,
            show_info: false,
            selector: SensorSelector::new(layout),
            host: HostState::new(),
            inset: config.inset,
            width_ratio: config.width_ratio,
        }
    }

    /// Where the selector goes inside `screen`: top-right, inset on both sides
    pub fn selector_area(&self, screen: Rect) -> Rect {
        let layout = self.selector.layout();
        let width = layout.total_width().min(screen.width.saturating_sub(self.inset));
        let height = self.selector.height().max(3);
        let x = screen
            .right()
            .saturating_sub(self.inset.saturating_add(width))
            .max(screen.x);
        let y = screen.y.saturating_add(self.inset);

        Rect::new(x, y, width, height).intersection(screen)
    }

    /// Recompute the selector geometry for a new terminal width
    pub fn resize(&mut self, screen_width: u16) {
        let layout = SelectorLayout::for_screen_width(screen_width, self.width_ratio);
        self.selector.set_layout(layout);
    }

    /// Apply a user action
    pub fn dispatch(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => self.should_quit = true,
            InputAction::ToggleHelp => self.toggle_help(),
            InputAction::Dismiss => {
                if self.has_overlay() {
                    self.close_overlays();
                } else {
                    self.should_quit = true;
                }
            }
            InputAction::Tap(_) | InputAction::Click { .. } if self.has_overlay() => {
                // The overlay covers the selector; a tap only closes it
                self.close_overlays();
            }
            InputAction::Tap(target) => self.tap(target),
            InputAction::Click { column, row } => {
                if let Some(target) = self.selector.hit_test(column, row) {
                    self.tap(target);
                }
            }
            InputAction::Resize { width, .. } => self.resize(width),
            InputAction::None => {}
        }
    }

    fn tap(&mut self, target: SelectorTarget) {
        match self.selector.activate(target, &mut self.host) {
            Activation::InfoRequested => {
                self.show_info = true;
            }
            Activation::Ignored => {
                tracing::trace!(?target, "tap ignored");
            }
            Activation::Toggled { .. } | Activation::Selected(_) => {}
        }
    }

    /// Whether the help or info panel is open
    pub fn has_overlay(&self) -> bool {
        self.show_help || self.show_info
    }

    fn close_overlays(&mut self) {
        self.show_help = false;
        self.show_info = false;
    }

    /// Toggle help panel
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
