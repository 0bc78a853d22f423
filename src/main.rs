//! Sensor selector: a terminal screen with a collapsible sensor parameter
//! selector.
//!
//! `main` performs the following steps:
//! 1. Parses command-line arguments.
//! 2. Loads the configuration file and applies environment and CLI overrides.
//! 3. Initializes logging to the configured file.
//! 4. Switches the terminal to the alternate screen and runs the event loop
//!    until the user quits.
//!
//! # Errors
//!
//! `main` will return an error if:
//! * The configuration cannot be parsed or fails validation.
//! * The log file cannot be opened.
//! * Standard output is not a terminal.
//! * The terminal cannot be set up or drawn to.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal, ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod cli;
mod config;
mod error;
mod logging;
mod parameter;
mod selector;
mod ui;

use cli::Cli;
use config::AppConfig;
use error::{Result, UiError};
use ui::App;

/// Restores the terminal when dropped, including on early returns and panics
struct TerminalGuard {
    alternate_screen: bool,
    mouse_capture: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| UiError::InitializationError(e.to_string()))?;
        let mut guard = Self {
            alternate_screen: false,
            mouse_capture: false,
        };

        let mut stdout = io::stdout();
        stdout.execute(terminal::EnterAlternateScreen)?;
        guard.alternate_screen = true;

        if mouse {
            stdout.execute(EnableMouseCapture)?;
            guard.mouse_capture = true;
        }

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_capture {
            let _ = stdout.execute(DisableMouseCapture);
        }
        if self.alternate_screen {
            let _ = stdout.execute(terminal::LeaveAlternateScreen);
        }
        let _ = stdout.execute(cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

fn run(config: &AppConfig) -> Result<()> {
    let _guard = TerminalGuard::enter(config.ui.mouse)?;
    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    let size = terminal.size()?;
    let mut app = App::new(&config.ui, size.width);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    tracing::info!(width = size.width, height = size.height, "sensor selector started");

    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, &mut app))
            .map_err(|e| UiError::RenderError(e.to_string()))?;

        let action = ui::handle_input(tick_rate)?;
        if action != ui::InputAction::None {
            tracing::trace!(?action, "input");
        }
        app.dispatch(action);
    }

    tracing::info!(parameter = %app.selector.selected(), "sensor selector stopped");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    if cli.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = AppConfig::load(&cli.config)?;
    config.apply_cli_overrides(&cli);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    logging::init(&config.logging)?;

    if !atty::is(atty::Stream::Stdout) {
        return Err(UiError::NotATerminal.into());
    }

    run(&config)?;
    Ok(())
}
