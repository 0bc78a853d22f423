//! The selectable sensor parameters and the glyphs used to draw them.

use std::fmt;

/// A sensor parameter the selector can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Air quality readings
    AirQuality,
    /// Ultraviolet index readings
    UvIndex,
}

impl Parameter {
    /// All parameters in the order their option rows are shown
    pub const ALL: [Parameter; 2] = [Parameter::AirQuality, Parameter::UvIndex];

    /// Label used on the option row
    pub fn display_name(&self) -> &'static str {
        match self {
            Parameter::AirQuality => "Air Quality",
            Parameter::UvIndex => "UV index",
        }
    }

    /// Label used on the main button once this parameter is selected
    pub fn title(&self) -> String {
        self.display_name().to_uppercase()
    }

    /// Icon shown on the option row and on the round indicator
    pub fn glyph(&self) -> Glyph {
        match self {
            Parameter::AirQuality => Glyph::Wind,
            Parameter::UvIndex => Glyph::Sun,
        }
    }

    /// Short explanation shown in the info panel
    pub fn description(&self) -> &'static str {
        match self {
            Parameter::AirQuality => {
                "Concentration of particulates and gases in the air around the sensor. \
                 Lower values mean cleaner air."
            }
            Parameter::UvIndex => {
                "Strength of sunburn-producing ultraviolet radiation at the sensor. \
                 Values of 6 and above call for sun protection."
            }
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Icons drawn by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wind,
    Sun,
    ChevronDown,
    ChevronUp,
}

impl Glyph {
    /// Terminal symbol for the icon
    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Wind => "≋",
            Glyph::Sun => "☀",
            Glyph::ChevronDown => "▾",
            Glyph::ChevronUp => "▴",
        }
    }

    /// Symbolic icon name
    pub fn icon_name(&self) -> &'static str {
        match self {
            Glyph::Wind => "wind",
            Glyph::Sun => "sun.max.fill",
            Glyph::ChevronDown => "chevron.down",
            Glyph::ChevronUp => "chevron.up",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_uppercase() {
        assert_eq!(Parameter::AirQuality.title(), "AIR QUALITY");
        assert_eq!(Parameter::UvIndex.title(), "UV INDEX");
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Parameter::AirQuality.glyph(), Glyph::Wind);
        assert_eq!(Parameter::UvIndex.glyph(), Glyph::Sun);
        assert_eq!(Glyph::Sun.icon_name(), "sun.max.fill");
    }
}
