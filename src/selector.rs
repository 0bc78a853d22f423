//! Collapsible sensor parameter selector.
//!
//! The selector owns a main toggle button, one option row per [`Parameter`],
//! an info row and a round indicator. It remembers which parameter is
//! selected and whether the option list is expanded. Drawing lives in
//! [`crate::ui::widgets::sensor_selector`]; this module only holds state and
//! the transitions between states.

use crate::parameter::{Glyph, Parameter};
use ratatui::layout::{Position, Rect};

/// Narrowest the button column is allowed to get
const MIN_BUTTON_WIDTH: u16 = 20;

/// Width of the round indicator next to the main button
const ROUND_WIDTH: u16 = 5;

/// Label of the info row
pub const INFO_LABEL: &str = "What is this?";

/// Receiver of selection changes
#[cfg_attr(test, mockall::automock)]
pub trait ParameterListener {
    /// Called once every time the user picks an option
    fn on_parameter_changed(&mut self, parameter: Parameter);
}

/// Geometry of the selector, derived from the screen width given by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorLayout {
    /// Width of the button column, borders excluded
    pub button_width: u16,
    /// Width of the round indicator
    pub round_width: u16,
}

impl SelectorLayout {
    /// Size the button column as a share of the screen width
    pub fn for_screen_width(screen_width: u16, width_ratio: f64) -> Self {
        let scaled = (f64::from(screen_width) * width_ratio).round() as u16;
        Self {
            button_width: scaled.max(MIN_BUTTON_WIDTH),
            round_width: ROUND_WIDTH,
        }
    }

    /// Total width including the panel borders and the round indicator
    pub fn total_width(&self) -> u16 {
        self.panel_width().saturating_add(self.round_width)
    }

    /// Width of the button panel including its borders
    pub fn panel_width(&self) -> u16 {
        self.button_width.saturating_add(2)
    }
}

/// Something the user can click on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorTarget {
    Main,
    Option(Parameter),
    Info,
    Round,
}

/// Outcome of activating a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The option list was shown or hidden
    Toggled { expanded: bool },
    /// A parameter was picked and the listener notified
    Selected(Parameter),
    /// The info row was tapped; the list collapsed
    InfoRequested,
    /// The target was hidden or has no action
    Ignored,
}

/// One option row as it should be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub parameter: Parameter,
    pub label: &'static str,
    pub glyph: Glyph,
    pub visible: bool,
}

/// Everything needed to draw the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    /// Main button label
    pub title: String,
    /// Main button chevron
    pub chevron: Glyph,
    /// Option rows, hidden while collapsed
    pub options: Vec<OptionRow>,
    /// Info row label
    pub info_label: &'static str,
    /// Whether the info row is shown
    pub info_visible: bool,
    /// Icon on the round indicator
    pub round_icon: Glyph,
}

/// Screen regions of the buttons drawn in the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorRegions {
    pub main: Rect,
    pub options: Vec<(Parameter, Rect)>,
    pub info: Option<Rect>,
    pub round: Rect,
}

/// Selector state
#[derive(Debug)]
pub struct SensorSelector {
    selected: Parameter,
    expanded: bool,
    layout: SelectorLayout,
    regions: SelectorRegions,
}

impl SensorSelector {
    /// Create a collapsed selector with Air Quality selected
    pub fn new(layout: SelectorLayout) -> Self {
        Self {
            selected: Parameter::AirQuality,
            expanded: false,
            layout,
            regions: SelectorRegions::default(),
        }
    }

    pub fn selected(&self) -> Parameter {
        self.selected
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn layout(&self) -> SelectorLayout {
        self.layout
    }

    /// Replace the geometry, keeping the selection
    pub fn set_layout(&mut self, layout: SelectorLayout) {
        self.layout = layout;
    }

    /// Rows taken by the panel in its current state
    pub fn height(&self) -> u16 {
        if self.expanded {
            // main + options + info, inside borders
            2 + 1 + Parameter::ALL.len() as u16 + 1
        } else {
            3
        }
    }

    /// Describe the visual tree for the current state
    pub fn view(&self) -> SelectorView {
        SelectorView {
            title: self.selected.title(),
            chevron: if self.expanded {
                Glyph::ChevronUp
            } else {
                Glyph::ChevronDown
            },
            options: Parameter::ALL
                .iter()
                .map(|&parameter| OptionRow {
                    parameter,
                    label: parameter.display_name(),
                    glyph: parameter.glyph(),
                    visible: self.expanded,
                })
                .collect(),
            info_label: INFO_LABEL,
            info_visible: self.expanded,
            round_icon: self.selected.glyph(),
        }
    }

    /// Show or hide the option list
    pub fn on_main_button_tap(&mut self) {
        self.expanded = !self.expanded;
        tracing::debug!(expanded = self.expanded, "selector toggled");
    }

    /// Select a parameter, collapse, and notify the listener
    pub fn on_option_tap(&mut self, parameter: Parameter, listener: &mut dyn ParameterListener) {
        self.selected = parameter;
        self.expanded = false;
        tracing::debug!(%parameter, "parameter selected");
        listener.on_parameter_changed(parameter);
    }

    /// Remember where the buttons were drawn
    pub fn set_regions(&mut self, regions: SelectorRegions) {
        self.regions = regions;
    }

    #[cfg(test)]
    pub fn regions(&self) -> &SelectorRegions {
        &self.regions
    }

    /// Find the visible button under a screen cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<SelectorTarget> {
        let position = Position::new(column, row);

        if self.regions.main.contains(position) {
            return Some(SelectorTarget::Main);
        }
        if self.regions.round.contains(position) {
            return Some(SelectorTarget::Round);
        }
        if !self.expanded {
            return None;
        }

        if let Some((parameter, _)) = self
            .regions
            .options
            .iter()
            .find(|(_, area)| area.contains(position))
        {
            return Some(SelectorTarget::Option(*parameter));
        }

        match self.regions.info {
            Some(area) if area.contains(position) => Some(SelectorTarget::Info),
            _ => None,
        }
    }

    /// Run the action bound to a target
    pub fn activate(
        &mut self,
        target: SelectorTarget,
        listener: &mut dyn ParameterListener,
    ) -> Activation {
        match target {
            SelectorTarget::Main => {
                self.on_main_button_tap();
                Activation::Toggled {
                    expanded: self.expanded,
                }
            }
            SelectorTarget::Option(parameter) if self.expanded => {
                self.on_option_tap(parameter, listener);
                Activation::Selected(parameter)
            }
            SelectorTarget::Info if self.expanded => {
                // The info row shares the main button's action
                self.on_main_button_tap();
                Activation::InfoRequested
            }
            _ => Activation::Ignored,
        }
    }
}
