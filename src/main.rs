use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tocview::app::{config, persistence, r#loop::run_loop, state::AppState};
use tocview::infrastructure::json_source::JsonTocSource;
use tocview::logging;
use tocview::theme::PaletteType;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse a book's table of contents in the terminal.")]
struct Args {
    /// Table of contents JSON file.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Color theme, overriding the config file.
    #[arg(long, value_parser = parse_theme)]
    theme: Option<PaletteType>,

    /// Alternative config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to write logs.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn parse_theme(name: &str) -> Result<PaletteType, String> {
    PaletteType::from_name(name)
        .ok_or_else(|| format!("unknown theme '{name}' (known: catppuccin, nord, gruvbox)"))
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_path) = args.log_file.clone().or_else(logging::default_log_path) {
        logging::init(&log_path)?;
    }
    setup_panic_hook();

    // Everything that can fail on bad input happens before the terminal
    // switches to raw mode.
    let file = args
        .file
        .canonicalize()
        .with_context(|| format!("cannot open {}", args.file.display()))?;

    let mut cfg = args
        .config
        .clone()
        .or_else(config::get_config_path)
        .map(|path| config::Config::load(&path))
        .unwrap_or_default();
    if args.theme.is_some() {
        cfg.theme = args.theme;
    }

    let app_state = AppState::new(&cfg, persistence::get_favorites_path());
    let source = Arc::new(JsonTocSource::new(file.clone()));
    tracing::info!(file = %file.display(), "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, source).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:?}");
        eprintln!("{err:?}");
    }

    Ok(())
}
