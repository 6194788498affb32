//! Fixed-size character grid holding one rendered frame.

use crate::constants::*;
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Row-major 80x20 frame buffer. Lives on the stack for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    cells: [[char; SCREEN_WIDTH]; SCREEN_HEIGHT],
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenBuffer {
    pub fn new() -> Self {
        Self {
            cells: [[' '; SCREEN_WIDTH]; SCREEN_HEIGHT],
        }
    }

    /// Fill every cell with a space.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(' ');
        }
    }

    /// Horizontal rules on the first and last rows, vertical bars on the
    /// first and last columns. Bars are drawn last so they own the corners.
    pub fn draw_border(&mut self) {
        self.cells[0].fill(BORDER_HORIZONTAL);
        self.cells[SCREEN_HEIGHT - 1].fill(BORDER_HORIZONTAL);
        for row in self.cells.iter_mut() {
            row[0] = BORDER_VERTICAL;
            row[SCREEN_WIDTH - 1] = BORDER_VERTICAL;
        }
    }

    /// Set a single cell. Coordinates outside the grid are ignored.
    pub fn put(&mut self, x: i32, y: i32, ch: char) {
        if x >= 0 && y >= 0 && (x as usize) < SCREEN_WIDTH && (y as usize) < SCREEN_HEIGHT {
            self.cells[y as usize][x as usize] = ch;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Write `text` horizontally centered on `row`, never touching the right border.
    pub fn write_centered(&mut self, row: usize, text: &str) {
        if row >= SCREEN_HEIGHT {
            return;
        }
        let len = text.chars().count();
        let start = SCREEN_WIDTH.saturating_sub(len) / 2;
        for (i, ch) in text.chars().enumerate() {
            let x = start + i;
            if x >= SCREEN_WIDTH - 1 {
                break;
            }
            self.cells[row][x] = ch;
        }
    }

    pub fn row_string(&self, y: usize) -> String {
        self.cells[y].iter().collect()
    }

    #[cfg(test)]
    fn lines(&self) -> Vec<String> {
        (0..SCREEN_HEIGHT).map(|y| self.row_string(y)).collect()
    }

    /// Clear the terminal, home the cursor, and write every row.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for y in 0..SCREEN_HEIGHT {
            queue!(out, Print(self.row_string(y)), Print("\r\n"))?;
        }
        out.flush()
    }
}
