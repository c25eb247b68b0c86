//! puptui - main entry point
//!
//! Sets up logging and the terminal, then hands control to the app loop.

mod app;
mod assets;
mod catalog;
mod cli;
mod error;
mod route;
mod theme;
mod ui;

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::cli::{Cli, Commands};

/// Initialize tracing with env-filter support.
///
/// Logs go to stderr so they stay out of the alternate screen; set
/// `RUST_LOG` to raise or lower the level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("puptui starting up");

    let cli = Cli::parse_args();

    match cli.command {
        Some(Commands::Catalog { json }) => print_catalog(json)?,
        Some(Commands::Browse) | None => run_tui()?,
    }

    Ok(())
}

/// Run the interactive catalog browser.
fn run_tui() -> anyhow::Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut app = app::App::new(Catalog::standard());
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}

/// Print the catalog to stdout, either as JSON or a plain listing.
fn print_catalog(json: bool) -> anyhow::Result<()> {
    let catalog = Catalog::standard();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for (index, record) in catalog.records().iter().enumerate() {
        println!(
            "{:>2}. {:<20} {:<10} {:<8} [{}]",
            index + 1,
            record.breed_name,
            record.age,
            record.gender.to_string(),
            assets::resolve_or_placeholder(record.image).name,
        );
    }

    Ok(())
}
