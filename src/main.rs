use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_four::cli::{self, Cli};
use connect_four::config::{AppConfig, LoggingConfig, UiConfig};
use connect_four::ui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }

    match cli.moves {
        Some(list) => {
            init_tracing(&config.logging, true)?;
            let columns = cli::parse_move_list(&list).context("parsing --moves")?;
            let state = cli::replay(&columns);
            print!("{}", cli::report(&state));
            Ok(())
        }
        None => {
            init_tracing(&config.logging, false)?;
            run_tui(&config.ui).context("running terminal UI")
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured filter.
///
/// The TUI owns stdout/stderr, so interactive sessions only log when a file
/// is configured.
fn init_tracing(logging: &LoggingConfig, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .context("building log filter")?;

    match (&logging.file, headless) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        (None, true) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        (None, false) => {}
    }
    Ok(())
}

fn run_tui(config: &UiConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("terminal ready");
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
