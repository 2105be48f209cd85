// Key bindings
//
// Maps a logical key to what it means at the prompt. Context-dependent keys
// (Backspace on an empty line, Tab, Ctrl-C) carry one meaning here and are
// split up by the event loop, which knows the buffer state.

use crate::tui::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Insert(String),
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,
    /// Delete before the cursor; parent directory on an empty line.
    Backspace,
    /// Delete before the cursor; toggle hidden files at column 0; parent
    /// directory on an empty line.
    DeleteOrToggleHidden,
    DeleteAt,
    DeleteToEnd,
    Submit,
    /// Cycle directories on an empty line, complete otherwise.
    Tab,
    NextDir,
    PreviousDir,
    ParentDir,
    ResolveSymlinks,
    FreshestSubdir,
    ToggleHidden,
    Redraw,
    RunTig,
    RunLazygit,
    /// Clear a non-empty line, quit on an empty one.
    Interrupt,
    /// Clear a non-empty line, quit with a failure status on an empty one.
    ForceQuit,
    Escape,
    Resize(u16, u16),
    Ignore,
}

pub fn key_action(key: &Key) -> KeyAction {
    match key {
        Key::Text(text) => insert_action(text),
        Key::Left => KeyAction::MoveLeft,
        Key::Right => KeyAction::MoveRight,
        Key::Home | Key::Up | Key::Ctrl('a') => KeyAction::MoveHome,
        Key::End | Key::Down | Key::Ctrl('e') => KeyAction::MoveEnd,
        Key::Backspace => KeyAction::Backspace,
        Key::Ctrl('h') => KeyAction::DeleteOrToggleHidden,
        Key::Delete => KeyAction::DeleteAt,
        Key::Ctrl('k') => KeyAction::DeleteToEnd,
        Key::Enter => KeyAction::Submit,
        Key::Tab => KeyAction::Tab,
        Key::Ctrl('n') => KeyAction::NextDir,
        Key::Ctrl('p') => KeyAction::PreviousDir,
        Key::Ctrl('b') => KeyAction::ParentDir,
        Key::Ctrl('w') => KeyAction::ResolveSymlinks,
        Key::CtrlSpace => KeyAction::FreshestSubdir,
        Key::Ctrl('o') => KeyAction::ToggleHidden,
        Key::Ctrl('l') => KeyAction::Redraw,
        Key::Ctrl('t') => KeyAction::RunTig,
        Key::Ctrl('g') => KeyAction::RunLazygit,
        Key::Ctrl('c') | Key::Ctrl('d') => KeyAction::Interrupt,
        Key::Ctrl('q') => KeyAction::ForceQuit,
        Key::Esc => KeyAction::Escape,
        Key::Resize(width, height) => KeyAction::Resize(*width, *height),
        Key::PageUp | Key::PageDown | Key::Ctrl(_) => KeyAction::Ignore,
    }
}

/// Whitespace-only input is dropped, except a single space.
fn insert_action(text: &str) -> KeyAction {
    if text.is_empty() || (text != " " && text.trim().is_empty()) {
        return KeyAction::Ignore;
    }
    KeyAction::Insert(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_inserts() {
        assert_eq!(
            key_action(&Key::Text("ls".into())),
            KeyAction::Insert("ls".into())
        );
        assert_eq!(key_action(&Key::Text(" ".into())), KeyAction::Insert(" ".into()));
    }

    #[test]
    fn test_whitespace_only_ignored() {
        assert_eq!(key_action(&Key::Text("  ".into())), KeyAction::Ignore);
        assert_eq!(key_action(&Key::Text("\u{3000}".into())), KeyAction::Ignore);
        assert_eq!(key_action(&Key::Text(String::new())), KeyAction::Ignore);
    }

    #[test]
    fn test_home_and_end_aliases() {
        for key in [Key::Home, Key::Up, Key::Ctrl('a')] {
            assert_eq!(key_action(&key), KeyAction::MoveHome);
        }
        for key in [Key::End, Key::Down, Key::Ctrl('e')] {
            assert_eq!(key_action(&key), KeyAction::MoveEnd);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_action(&Key::Ctrl('c')), KeyAction::Interrupt);
        assert_eq!(key_action(&Key::Ctrl('d')), KeyAction::Interrupt);
        assert_eq!(key_action(&Key::Ctrl('q')), KeyAction::ForceQuit);
        assert_eq!(key_action(&Key::Esc), KeyAction::Escape);
    }

    #[test]
    fn test_navigation_bindings() {
        assert_eq!(key_action(&Key::Ctrl('n')), KeyAction::NextDir);
        assert_eq!(key_action(&Key::Ctrl('p')), KeyAction::PreviousDir);
        assert_eq!(key_action(&Key::Ctrl('b')), KeyAction::ParentDir);
        assert_eq!(key_action(&Key::Ctrl('w')), KeyAction::ResolveSymlinks);
        assert_eq!(key_action(&Key::CtrlSpace), KeyAction::FreshestSubdir);
        assert_eq!(key_action(&Key::Tab), KeyAction::Tab);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(key_action(&Key::Ctrl('z')), KeyAction::Ignore);
        assert_eq!(key_action(&Key::PageUp), KeyAction::Ignore);
    }
}
