// Canvas - cell-addressed drawing surface
//
// Drawing code writes into a back buffer; `draw()` pushes only the cells
// that changed since the previous frame.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Stdout, Write};

pub trait Canvas {
    /// Write `text` starting at column `x`, row `y`. Text past the right edge
    /// or below the last row is dropped.
    fn write(&mut self, x: u16, y: u16, fg: Color, bg: Color, text: &str);

    /// Blank the back buffer.
    fn clear(&mut self);

    /// Flush the back buffer to the output.
    fn draw(&mut self) -> io::Result<()>;

    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Adopt a new size; the next `draw()` repaints everything.
    fn resize(&mut self, _width: u16, _height: u16) {}

    /// Forget what is on screen so the next `draw()` repaints everything.
    fn invalidate(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// In-memory grid of cells. Doubles as a headless [`Canvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Characters of row `y` with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        let row: String = self.cells[start..start + self.width as usize]
            .iter()
            .map(|cell| cell.ch)
            .collect();
        row.trim_end().to_string()
    }

    /// Every row joined with newlines, for assertions.
    pub fn screen_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for CellGrid {
    fn write(&mut self, x: u16, y: u16, fg: Color, bg: Color, text: &str) {
        if y >= self.height {
            return;
        }
        let row_start = y as usize * self.width as usize;
        for (offset, ch) in text.chars().enumerate() {
            let col = x as usize + offset;
            if col >= self.width as usize {
                break;
            }
            self.cells[row_start + col] = Cell { ch, fg, bg };
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn draw(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn resize(&mut self, width: u16, height: u16) {
        *self = CellGrid::new(width, height);
    }
}

/// [`Canvas`] that renders to stdout through crossterm.
pub struct CrosstermCanvas {
    back: CellGrid,
    front: Option<CellGrid>,
    out: Stdout,
}

impl CrosstermCanvas {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            back: CellGrid::new(width, height),
            front: None,
            out: io::stdout(),
        })
    }
}

impl Canvas for CrosstermCanvas {
    fn write(&mut self, x: u16, y: u16, fg: Color, bg: Color, text: &str) {
        self.back.write(x, y, fg, bg, text);
    }

    fn clear(&mut self) {
        self.back.clear();
    }

    fn draw(&mut self) -> io::Result<()> {
        if self.front.is_none() {
            queue!(self.out, Clear(ClearType::All))?;
        }

        let mut colors: Option<(Color, Color)> = None;
        let mut next_pos: Option<(u16, u16)> = None;
        for y in 0..self.back.height() {
            for x in 0..self.back.width() {
                let Some(cell) = self.back.cell(x, y).copied() else {
                    continue;
                };
                let unchanged = self
                    .front
                    .as_ref()
                    .and_then(|front| front.cell(x, y))
                    .is_some_and(|old| *old == cell);
                if unchanged {
                    continue;
                }
                if next_pos != Some((x, y)) {
                    queue!(self.out, MoveTo(x, y))?;
                }
                if colors != Some((cell.fg, cell.bg)) {
                    queue!(
                        self.out,
                        SetForegroundColor(cell.fg),
                        SetBackgroundColor(cell.bg)
                    )?;
                    colors = Some((cell.fg, cell.bg));
                }
                queue!(self.out, Print(cell.ch))?;
                next_pos = Some((x + 1, y));
            }
        }
        queue!(
            self.out,
            SetForegroundColor(Color::Reset),
            SetBackgroundColor(Color::Reset)
        )?;
        self.out.flush()?;
        self.front = Some(self.back.clone());
        Ok(())
    }

    fn width(&self) -> u16 {
        self.back.width()
    }

    fn height(&self) -> u16 {
        self.back.height()
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.back = CellGrid::new(width, height);
        self.front = None;
    }

    fn invalidate(&mut self) {
        self.front = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_back() {
        let mut grid = CellGrid::new(10, 2);
        grid.write(2, 1, Color::Red, Color::Reset, "hey");
        assert_eq!(grid.row_text(1), "  hey");
        assert_eq!(grid.cell(2, 1).unwrap().fg, Color::Red);
        assert_eq!(grid.row_text(0), "");
    }

    #[test]
    fn test_write_clips_at_edges() {
        let mut grid = CellGrid::new(4, 1);
        grid.write(2, 0, Color::Reset, Color::Reset, "abcdef");
        grid.write(0, 5, Color::Reset, Color::Reset, "ignored");
        assert_eq!(grid.row_text(0), "  ab");
    }

    #[test]
    fn test_clear() {
        let mut grid = CellGrid::new(4, 1);
        grid.write(0, 0, Color::Reset, Color::Reset, "abcd");
        grid.clear();
        assert_eq!(grid.screen_text(), "");
    }

    #[test]
    fn test_resize_resets_contents() {
        let mut grid = CellGrid::new(4, 1);
        grid.write(0, 0, Color::Reset, Color::Reset, "abcd");
        grid.resize(8, 3);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.screen_text(), "\n\n");
    }

    #[test]
    fn test_multibyte_occupies_one_cell() {
        let mut grid = CellGrid::new(6, 1);
        grid.write(0, 0, Color::Reset, Color::Reset, "a¤b");
        assert_eq!(grid.cell(1, 0).unwrap().ch, '¤');
        assert_eq!(grid.cell(2, 0).unwrap().ch, 'b');
    }
}
