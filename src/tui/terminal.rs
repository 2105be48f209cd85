// Terminal mode management
//
// Every way out of the program (normal return, fatal setup error, panic,
// SIGINT/SIGTERM/SIGHUP) ends in the same `restore()`. It is guarded by an
// atomic flag so it runs exactly once no matter which path gets there first.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error};

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Restores the terminal when dropped.
#[must_use = "the terminal is restored when the guard is dropped"]
pub struct TerminalGuard {
    _private: (),
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Switch to raw mode on the alternate screen.
pub fn enter() -> Result<TerminalGuard> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    ACTIVE.store(true, Ordering::SeqCst);

    let guard = TerminalGuard { _private: () };
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        DisableLineWrap,
        cursor::Hide,
        Clear(ClearType::All)
    )
    .context("Failed to prepare terminal")?;

    debug!("Terminal entered raw mode");
    Ok(guard)
}

/// Put the terminal back the way we found it. Safe to call more than once
/// and from any thread.
pub fn restore() {
    if !ACTIVE.swap(false, Ordering::SeqCst) {
        return;
    }
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        EnableLineWrap,
        cursor::Show,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}

pub fn is_active() -> bool {
    ACTIVE.load(Ordering::SeqCst)
}

/// Hand the terminal to a child process. No-op when the UI is not running.
pub fn suspend() {
    if !is_active() {
        return;
    }
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        EnableLineWrap,
        cursor::Show,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}

/// Take the terminal back after `suspend()`.
pub fn resume() {
    if !is_active() {
        return;
    }
    if let Err(e) = enable_raw_mode() {
        error!("Failed to re-enable raw mode: {}", e);
    }
    let _ = execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        DisableLineWrap,
        cursor::Hide,
        Clear(ClearType::All)
    );
}

/// Restore the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}

/// Restore the terminal and exit with status 1 on SIGINT, SIGTERM or SIGHUP.
///
/// In raw mode Ctrl-C arrives as a key, so this only fires for signals sent
/// from outside.
pub fn install_signal_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        restore();
        std::process::exit(1);
    })
    .context("Failed to install signal handler")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_and_suspend_are_noops_when_inactive() {
        assert!(!is_active());
        restore();
        suspend();
        resume();
        assert!(!is_active());
    }
}
