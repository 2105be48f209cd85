// Project-wide constants
//
// Centralised here so the screen layout and the word lists the resolver
// matches against have one source of truth. Import via
// `use crate::config::constants::*;`.

/// Printed by `--version`.
pub const VERSION_STRING: &str = concat!("MegaCLI ", env!("CARGO_PKG_VERSION"));

/// Header drawn at the top of the screen.
pub const START_MESSAGE: &str = "---=[ MegaCLI ]=---";

/// Column of the header, the status lines and the prompt.
pub const LEFT_MARGIN: u16 = 5;

pub const HEADER_ROW: u16 = 2;
pub const DIR_INDEX_ROW: u16 = 3;
pub const HIDDEN_MARKER_ROW: u16 = 4;

/// Row of the prompt. The body (listing or output) starts on the next row.
pub const PROMPT_ROW: u16 = 6;

/// Words that end the session.
pub const QUIT_WORDS: &[&str] = &["exit", "quit", "q", "bye"];

/// Words that redraw the listing of the active directory.
pub const LIST_WORDS: &[&str] = &["l", "ls", "dir"];

/// Editor used when neither the config file nor `$EDITOR` names one.
pub const DEFAULT_EDITOR: &str = "vi";

/// Key poll timeout.
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 10;

/// Upper bound accepted for `poll_timeout_ms`.
pub const MAX_POLL_TIMEOUT_MS: u64 = 1000;

/// Programs bound to Ctrl-T and Ctrl-G.
pub const TIG: &str = "tig";
pub const LAZYGIT: &str = "lazygit";
