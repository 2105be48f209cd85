// LineEditor - the in-progress command buffer
//
// Owns the typed characters and a cursor index. Knows nothing about commands
// or the filesystem; the event loop calls these primitives in response to keys.

/// Single-line text buffer with a cursor.
///
/// The cursor is a char index and always satisfies `0 <= cursor <= len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an editor holding `text` with the cursor at the end.
    pub fn with_text(text: &str) -> Self {
        let buffer: Vec<char> = text.chars().collect();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Character under the cursor, or `None` when the cursor sits past the end.
    pub fn char_at_cursor(&self) -> Option<char> {
        self.buffer.get(self.cursor).copied()
    }

    /// Splice `text` in at the cursor and move the cursor past it.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let inserted: Vec<char> = text.chars().collect();
        let count = inserted.len();
        self.buffer.splice(self.cursor..self.cursor, inserted);
        self.cursor += count;
    }

    /// Backspace: remove the char before the cursor.
    pub fn delete_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.buffer.remove(self.cursor - 1);
        self.cursor -= 1;
    }

    /// Delete: remove the char under the cursor. The cursor stays put.
    pub fn delete_at(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete_to_end(&mut self) {
        self.buffer.truncate(self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.len() {
            self.cursor += 1;
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Complete the last token of the buffer against `candidates`.
    ///
    /// The first candidate (in iteration order) that starts with the token
    /// wins. Its remaining suffix, possibly empty, is appended to the buffer
    /// and the cursor advances by the suffix length. Returns whether a
    /// candidate matched.
    pub fn complete_against<I, S>(&mut self, candidates: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = self.text();
        let token = completion_token(&text);
        if token.is_empty() {
            return false;
        }
        let token_len = token.chars().count();

        let Some(name) = candidates
            .into_iter()
            .find(|candidate| candidate.as_ref().starts_with(token))
        else {
            return false;
        };
        let suffix: Vec<char> = name.as_ref().chars().skip(token_len).collect();
        let suffix_len = suffix.len();
        self.buffer.extend(suffix);
        self.cursor = (self.cursor + suffix_len).min(self.buffer.len());
        true
    }
}

/// The part of `text` that tab completion works on: everything after the last
/// whitespace char, without a leading `./`.
pub fn completion_token(text: &str) -> &str {
    let token = match text.rfind(char::is_whitespace) {
        Some(idx) => {
            let ws_len = text[idx..].chars().next().map_or(1, char::len_utf8);
            &text[idx + ws_len..]
        }
        None => text,
    };
    token.strip_prefix("./").unwrap_or(token)
}
