mod app;
mod catalog;
mod cli;
mod error;
mod filter;
mod input;
mod logging;
mod ui;

use app::App;
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Command};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use error::AppError;
use logging::{LogConfig, LogOutput};
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::{info, warn};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let command = cli.command.unwrap_or(Command::Tui);

    // The TUI owns the terminal, so its logs go to a file
    let config = LogConfig::from_verbosity(cli.verbose);
    let config = match (&command, cli.log_file) {
        (Command::Tui, None) => config.with_optional_log_file(logging::default_log_path()),
        (_, log_file) => config.with_log_file(log_file),
    };
    match logging::init_logging(&config)? {
        LogOutput::File(path) => info!(path = %path.display(), "logging to file"),
        LogOutput::Stderr => {}
        LogOutput::Disabled(reason) => {
            eprintln!("Warning: {reason}; continuing without a log file");
        }
    }

    let catalog = Catalog::builtin()?;
    info!(pairs = catalog.len(), "catalog loaded");
    if catalog.is_empty() {
        warn!("catalog has no pairs");
    }

    match command {
        Command::Tui => run_tui(&catalog),
        Command::List { query, json } => {
            cli::handle_list(&catalog, &query, json, &mut std::io::stdout().lock())
        }
        Command::Show { id, json } => {
            cli::handle_show(&catalog, id, json, &mut std::io::stdout().lock())
        }
    }
}

fn run_tui(catalog: &Catalog) -> Result<(), AppError> {
    let mut app = App::new(catalog);

    // Init terminal
    let mut terminal = ratatui::init();
    let result = execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(AppError::from)
        .and_then(|()| run_app(&mut terminal, &mut app));

    // Restore terminal
    if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
        warn!(error = %e, "failed to disable mouse capture");
    }
    ratatui::restore();
    info!("session ended");
    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<(), AppError> {
    // Initial viewport setup
    let size = terminal.size()?;
    app.update_viewport(Rect::new(0, 0, size.width, size.height));

    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    input::handle_mouse(app, mouse, Rect::new(0, 0, size.width, size.height));
                }
                Event::Resize(width, height) => {
                    app.update_viewport(Rect::new(0, 0, width, height));
                }
                _ => {}
            }
        }
    }
}
