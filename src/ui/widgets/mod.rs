//! UI widgets for the sensor selector screen.

pub mod help;
pub mod sensor_selector;
pub mod status_bar;

pub use help::{render_help, render_info};
pub use sensor_selector::render_sensor_selector;
pub use status_bar::render_status_bar;
