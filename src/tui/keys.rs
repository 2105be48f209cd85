// Logical key events
//
// Raw crossterm events are folded into the small set of keys the event loop
// understands. Anything else (mouse, focus, release events) is dropped here.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Printable input: one keystroke or a whole paste.
    Text(String),
    Enter,
    Tab,
    Backspace,
    Delete,
    Esc,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Ctrl plus a lowercase ASCII letter.
    Ctrl(char),
    CtrlSpace,
    Resize(u16, u16),
}

impl Key {
    pub fn from_event(event: Event) -> Option<Key> {
        match event {
            Event::Key(key) => Self::from_key_event(key),
            Event::Paste(text) => {
                let text = sanitize_paste(&text);
                (!text.is_empty()).then_some(Key::Text(text))
            }
            Event::Resize(width, height) => Some(Key::Resize(width, height)),
            _ => None,
        }
    }

    fn from_key_event(key: KeyEvent) -> Option<Key> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(' ') if ctrl => Some(Key::CtrlSpace),
            KeyCode::Char(c) if ctrl => {
                let c = c.to_ascii_lowercase();
                c.is_ascii_lowercase().then_some(Key::Ctrl(c))
            }
            KeyCode::Char(_) if alt => None,
            KeyCode::Char(c) => sanitize_char(c).then(|| Key::Text(c.to_string())),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Tab => Some(Key::Tab),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Delete => Some(Key::Delete),
            KeyCode::Esc => Some(Key::Esc),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Home => Some(Key::Home),
            KeyCode::End => Some(Key::End),
            KeyCode::PageUp => Some(Key::PageUp),
            KeyCode::PageDown => Some(Key::PageDown),
            _ => None,
        }
    }
}

/// Printable chars only; private-use code points (terminal image protocols)
/// are rejected too.
fn sanitize_char(c: char) -> bool {
    match c {
        ' '..='~' => true,
        '\u{00A0}'..='\u{10FFFF}' => !matches!(
            c,
            '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
        ),
        _ => false,
    }
}

/// Flatten a paste to a single line: line breaks and tabs become spaces,
/// other unprintable chars are dropped.
fn sanitize_paste(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' | '\t' => out.push(' '),
            c if sanitize_char(c) => out.push(c),
            _ => {}
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_char_is_text() {
        assert_eq!(
            Key::from_event(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Key::Text("a".into()))
        );
        assert_eq!(
            Key::from_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Key::Text("A".into()))
        );
    }

    #[test]
    fn test_ctrl_letters() {
        assert_eq!(
            Key::from_event(press(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Some(Key::Ctrl('k'))
        );
        assert_eq!(
            Key::from_event(press(KeyCode::Char('Q'), KeyModifiers::CONTROL)),
            Some(Key::Ctrl('q'))
        );
        assert_eq!(
            Key::from_event(press(KeyCode::Char(' '), KeyModifiers::CONTROL)),
            Some(Key::CtrlSpace)
        );
    }

    #[test]
    fn test_alt_chars_ignored() {
        assert_eq!(
            Key::from_event(press(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(Key::from_event(release), None);
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            Key::from_event(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Key::Enter)
        );
        assert_eq!(
            Key::from_event(press(KeyCode::Home, KeyModifiers::NONE)),
            Some(Key::Home)
        );
        assert_eq!(Key::from_event(Event::Resize(80, 24)), Some(Key::Resize(80, 24)));
        assert_eq!(Key::from_event(Event::FocusGained), None);
    }

    #[test]
    fn test_paste_flattened() {
        assert_eq!(
            Key::from_event(Event::Paste("echo a\r\nb\tc\n".into())),
            Some(Key::Text("echo a b c".into()))
        );
        assert_eq!(Key::from_event(Event::Paste("\n".into())), None);
    }

    #[test]
    fn test_sanitize_char() {
        assert!(sanitize_char('a'));
        assert!(sanitize_char('é'));
        assert!(!sanitize_char('\x07'));
        assert!(!sanitize_char('\x7f'));
        assert!(!sanitize_char('\u{E000}'));
    }
}
