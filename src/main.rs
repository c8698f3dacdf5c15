use quest_log::{actions, app, config, errors, event, ui};

use anyhow::Result;
use app::AppState;
use clap::Parser;
use config::{load_config, AppConfig, CliArgs};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use errors::{AppError, AppResult};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    setup_logging(&config, args.debug)?;
    info!(start_page = %config.start_page, "starting quest-log");

    let mut app = AppState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Run the main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors from the main loop
    if let Err(err) = res {
        error!(error = %err, "main loop failed");
        eprintln!("Error: {}", err);
    }

    info!("bye");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            actions::execute_action(action, app)?;
        }
    }

    Ok(())
}

/// Filter directive: `RUST_LOG` wins, then each `-d` raises the configured
/// level one step.
fn log_directive(configured: &str, verbosity: u8) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

// The TUI owns the terminal, so logs only ever go to a file.
fn setup_logging(config: &AppConfig, verbosity: u8) -> AppResult<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(&config.log_level, verbosity)));

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    debug!(path = %path.display(), verbosity, "logging initialised");
    Ok(())
}
