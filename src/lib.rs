// MegaCLI - keyboard-driven file browser and mini shell
// Library exports

pub mod cli;
pub mod config;
pub mod editor;
pub mod fs;
pub mod logging;
pub mod process;
pub mod shell;
pub mod tui;
