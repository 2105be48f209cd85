// Terminal UI module
//
// Canvas:   cell buffer with diffed flushes (crossterm backend + headless grid)
// Keys:     crossterm events folded into logical keys
// Terminal: raw mode / alternate screen lifecycle and signal-safe restore

mod canvas;
mod keys;
pub mod terminal;
mod tty;

pub use canvas::{Canvas, Cell, CellGrid, CrosstermCanvas};
pub use keys::Key;
pub use tty::{CrosstermTty, KeySource};
