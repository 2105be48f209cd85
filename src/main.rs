// MegaCLI - keyboard-driven file browser and mini shell
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

use megacli::cli::{help, EventLoop, LoopExit};
use megacli::config::constants::VERSION_STRING;
use megacli::config::{load_config, Config};
use megacli::fs::RealFileProbe;
use megacli::logging;
use megacli::process::SystemRunner;
use megacli::shell::{Resolver, Session};
use megacli::tui::{terminal, CrosstermCanvas, CrosstermTty};

#[derive(Parser, Debug)]
#[command(
    name = "megacli",
    about = "Browse directories, edit files and run commands from one prompt",
    disable_version_flag = true,
    after_help = help::AFTER_HELP
)]
struct Cli {
    /// Directory to start in
    directory: Option<PathBuf>,

    /// Print the version and exit
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.version {
        println!("{VERSION_STRING}");
        return ExitCode::SUCCESS;
    }

    if let Some(path) = logging::log_path() {
        if let Err(e) = logging::init_logging(&path) {
            eprintln!("Warning: logging disabled: {e:#}");
        }
    }

    match run(cli) {
        Ok((LoopExit::Quit, dir)) => {
            eprintln!("{}", dir.display());
            ExitCode::SUCCESS
        }
        Ok((LoopExit::Forced, _)) => ExitCode::FAILURE,
        Err(e) => {
            terminal::restore();
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Set up, run the event loop, and return how it ended plus the final
/// directory.
fn run(cli: Cli) -> Result<(LoopExit, PathBuf)> {
    let mut config = load_config()?;
    apply_start_directory(&mut config, cli.directory);
    info!(editor = %config.editor, dirs = ?config.start_dirs, "Starting");

    let mut session = Session::new(&config.start_dirs).context("Invalid start directories")?;
    session.show_hidden = config.show_hidden;

    let resolver = Resolver::new(
        Arc::new(RealFileProbe::from_env()),
        Arc::new(SystemRunner::new()),
        config.editor.clone(),
        config.home.clone(),
    );

    terminal::install_signal_handler()?;
    terminal::install_panic_hook();
    let guard = terminal::enter()?;

    let canvas = CrosstermCanvas::new().context("Failed to query terminal size")?;
    let mut event_loop = EventLoop::new(
        canvas,
        CrosstermTty::new(),
        session,
        resolver,
        config.colors.clone(),
        config.poll_timeout(),
    );
    let exit = event_loop.run()?;
    drop(guard);

    Ok((exit, event_loop.session().current_dir().to_path_buf()))
}

/// A directory argument takes the first tracked slot; anything else is
/// ignored.
fn apply_start_directory(config: &mut Config, directory: Option<PathBuf>) {
    let Some(dir) = directory else {
        return;
    };
    if dir.is_dir() {
        config.set_start_dir(dir);
    } else {
        warn!(path = %dir.display(), "Start path is not a directory, ignoring");
    }
}
