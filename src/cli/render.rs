// Screen rendering
//
// Draws one full frame into a Canvas: header, status lines, prompt with the
// edited line, and the body below it. Nothing here touches the terminal
// directly, so frames can be checked against a CellGrid.

use crossterm::style::Color;
use std::path::Path;

use crate::config::constants::{
    DIR_INDEX_ROW, HEADER_ROW, HIDDEN_MARKER_ROW, LEFT_MARGIN, PROMPT_ROW, START_MESSAGE,
};
use crate::config::ColorScheme;
use crate::editor::LineEditor;
use crate::fs::{paths, EntryKind, Listing};
use crate::shell::Session;
use crate::tui::Canvas;

/// Gap between listing columns.
const COLUMN_MARGIN: usize = 1;

/// What is shown under the prompt.
#[derive(Debug, Clone)]
pub enum Body {
    Listing(Listing),
    Output(String),
    Error(String),
    Empty,
}

pub struct Screen<'a> {
    pub colors: &'a ColorScheme,
    pub home: &'a Path,
}

impl Screen<'_> {
    /// Clear the canvas and draw a complete frame. Does not flush.
    pub fn render(&self, canvas: &mut dyn Canvas, session: &Session, line: &LineEditor, body: &Body) {
        canvas.clear();
        self.status(canvas, session);
        let prompt_len = self.prompt(canvas, session);
        self.line(canvas, line, LEFT_MARGIN.saturating_add(prompt_len));
        match body {
            Body::Listing(listing) => self.listing(canvas, listing),
            Body::Output(text) => self.output(canvas, text),
            Body::Error(text) => self.error(canvas, text),
            Body::Empty => {}
        }
    }

    fn status(&self, canvas: &mut dyn Canvas, session: &Session) {
        canvas.write(
            LEFT_MARGIN,
            HEADER_ROW,
            self.colors.header.to_color(),
            Color::Reset,
            START_MESSAGE,
        );
        let index_line = format!(
            "{} [{}]",
            session.active_index(),
            session.current_dir().display()
        );
        canvas.write(
            LEFT_MARGIN,
            DIR_INDEX_ROW,
            self.colors.dir_index.to_color(),
            Color::Reset,
            &index_line,
        );
        let marker = if session.show_hidden { "." } else { " " };
        canvas.write(LEFT_MARGIN, HIDDEN_MARKER_ROW, Color::Reset, Color::Reset, marker);
    }

    /// Draw `<dir>> ` and return its width.
    fn prompt(&self, canvas: &mut dyn Canvas, session: &Session) -> u16 {
        let dir = paths::abbreviate_home(session.current_dir(), self.home);
        let dir_len = dir.chars().count() as u16;
        let colors = &self.colors.prompt;
        canvas.write(LEFT_MARGIN, PROMPT_ROW, colors.path.to_color(), Color::Reset, &dir);
        let marker_x = LEFT_MARGIN.saturating_add(dir_len);
        canvas.write(marker_x, PROMPT_ROW, colors.marker.to_color(), Color::Reset, ">");
        canvas.write(marker_x.saturating_add(1), PROMPT_ROW, Color::Reset, Color::Reset, " ");
        dir_len.saturating_add(2)
    }

    /// The edited text with the cursor cell highlighted.
    fn line(&self, canvas: &mut dyn Canvas, line: &LineEditor, x: u16) {
        let colors = &self.colors.prompt;
        canvas.write(x, PROMPT_ROW, colors.input.to_color(), Color::Reset, &line.text());
        let under_cursor = line.char_at_cursor().unwrap_or(' ');
        let cursor = u16::try_from(line.cursor()).unwrap_or(u16::MAX);
        canvas.write(
            x.saturating_add(cursor),
            PROMPT_ROW,
            colors.cursor_fg.to_color(),
            colors.cursor_bg.to_color(),
            &under_cursor.to_string(),
        );
    }

    /// Column-major listing. A column is as wide as the longest name seen so
    /// far; drawing stops once the next column would run off the right edge.
    fn listing(&self, canvas: &mut dyn Canvas, listing: &Listing) {
        let top = PROMPT_ROW as usize + 1;
        let width = canvas.width() as usize;
        let height = canvas.height() as usize;
        let colors = &self.colors.listing;
        let (mut x, mut y) = (LEFT_MARGIN as usize, top);
        let mut longest = 0;

        for entry in &listing.entries {
            let name_len = entry.name.chars().count();
            longest = longest.max(name_len);

            let fg = match entry.kind {
                EntryKind::Directory => colors.directory.to_color(),
                EntryKind::Executable => colors.executable.to_color(),
                EntryKind::Symlink => colors.symlink.to_color(),
                EntryKind::Binary => colors.binary.to_color(),
                EntryKind::Plain => colors.file.to_color(),
            };
            canvas.write(x as u16, y as u16, fg, Color::Reset, &entry.name);
            if let Some(suffix) = entry.kind.suffix() {
                canvas.write(
                    (x + name_len) as u16,
                    y as u16,
                    colors.suffix.to_color(),
                    Color::Reset,
                    suffix,
                );
            }

            y += 1;
            if y >= height {
                x += longest + COLUMN_MARGIN;
                y = top;
            }
            if x + longest > width {
                break;
            }
        }
    }

    fn output(&self, canvas: &mut dyn Canvas, text: &str) {
        let fg = self.colors.output.to_color();
        for (row, line) in text.lines().enumerate() {
            canvas.write(LEFT_MARGIN, body_row(row), fg, Color::Reset, line.trim());
        }
    }

    fn error(&self, canvas: &mut dyn Canvas, text: &str) {
        let fg = self.colors.error.to_color();
        for (row, line) in text.lines().enumerate() {
            canvas.write(LEFT_MARGIN, body_row(row), fg, Color::Reset, line);
        }
    }
}

fn body_row(offset: usize) -> u16 {
    (PROMPT_ROW as usize + 1 + offset).min(u16::MAX as usize) as u16
}
