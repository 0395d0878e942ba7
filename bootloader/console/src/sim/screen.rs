use alloc::string::String;

use crate::video::{GRAY_ON_BLACK, TEXT_COLUMNS, TEXT_ROWS};

/// One character cell of text memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: u8,
    pub attr: u8,
}

impl Cell {
    pub const fn blank(attr: u8) -> Self {
        Self { ch: b' ', attr }
    }
}

/// Display page 0 of an 80x25 text mode screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextScreen {
    cells: [[Cell; TEXT_COLUMNS]; TEXT_ROWS],
    row: usize,
    col: usize,
}

impl Default for TextScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TextScreen {
    pub fn new() -> Self {
        Self::filled(b' ', GRAY_ON_BLACK)
    }

    /// Screen with every cell set to `ch` in `attr`, cursor at the origin.
    pub fn filled(ch: u8, attr: u8) -> Self {
        Self {
            cells: [[Cell { ch, attr }; TEXT_COLUMNS]; TEXT_ROWS],
            row: 0,
            col: 0,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Cursor position as (row, column).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Out of range positions are clamped to the last row/column.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.row = row.min(TEXT_ROWS - 1);
        self.col = col.min(TEXT_COLUMNS - 1);
    }

    /// Characters of `row`, one per column.
    pub fn row_text(&self, row: usize) -> String {
        self.cells[row].iter().map(|cell| cell.ch as char).collect()
    }

    // scroll_up moves the window top..=bottom, left..=right up by `lines`
    // rows and fills the freed rows with blanks in `attr`.
    // Zero lines, or at least the window height, blanks the whole window.
    pub(crate) fn scroll_up(
        &mut self,
        lines: usize,
        attr: u8,
        (top, left): (usize, usize),
        (bottom, right): (usize, usize),
    ) {
        let bottom = bottom.min(TEXT_ROWS - 1);
        let right = right.min(TEXT_COLUMNS - 1);
        if top > bottom || left > right {
            return;
        }

        let height = bottom - top + 1;
        let lines = if lines == 0 || lines >= height {
            height
        } else {
            lines
        };

        for row in top..=bottom {
            let src = row + lines;
            for col in left..=right {
                self.cells[row][col] = if src <= bottom {
                    self.cells[src][col]
                } else {
                    Cell::blank(attr)
                };
            }
        }
    }

    // teletype mimics INT 0x10 AH=0x0E in text mode.
    // The written character keeps the attribute already in its cell.
    pub(crate) fn teletype(&mut self, c: u8) {
        match c {
            0x07 => {} // Bell, nothing to draw.
            0x08 => self.col = self.col.saturating_sub(1),
            b'\n' => self.line_feed(),
            b'\r' => self.col = 0,
            _ => {
                self.cells[self.row][self.col].ch = c;
                self.col += 1;
                if self.col == TEXT_COLUMNS {
                    self.col = 0;
                    self.line_feed();
                }
            }
        }
    }

    fn line_feed(&mut self) {
        if self.row + 1 < TEXT_ROWS {
            self.row += 1;
            return;
        }

        // New bottom line takes the attribute under the cursor.
        let attr = self.cells[self.row][self.col].attr;
        self.scroll_up(1, attr, (0, 0), (TEXT_ROWS - 1, TEXT_COLUMNS - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn write(screen: &mut TextScreen, s: &[u8]) {
        for &c in s {
            screen.teletype(c);
        }
    }

    #[test]
    fn wraps_at_last_column() {
        let mut screen = TextScreen::new();
        screen.set_cursor(0, TEXT_COLUMNS - 1);
        write(&mut screen, b"ab");

        assert_eq!(screen.cell(0, TEXT_COLUMNS - 1).ch, b'a');
        assert_eq!(screen.cell(1, 0).ch, b'b');
        assert_eq!(screen.cursor(), (1, 1));
    }

    #[test]
    fn line_feed_on_last_row_scrolls() {
        let mut screen = TextScreen::new();
        write(&mut screen, b"top");
        screen.set_cursor(TEXT_ROWS - 1, 0);
        write(&mut screen, b"end\r\n");

        assert_eq!(screen.cursor(), (TEXT_ROWS - 1, 0));
        assert_eq!(screen.row_text(TEXT_ROWS - 2).trim_end(), "end");
        assert_eq!(screen.row_text(TEXT_ROWS - 1).trim_end(), "");
        // Row 0 scrolled off.
        assert!(!screen.row_text(0).contains("top"));
    }

    #[test]
    fn backspace_stops_at_column_zero() {
        let mut screen = TextScreen::new();
        write(&mut screen, b"x\x08\x08");
        assert_eq!(screen.cursor(), (0, 0));
        // Backspace only moves the cursor.
        assert_eq!(screen.cell(0, 0).ch, b'x');
    }

    #[test]
    fn bell_draws_nothing() {
        let mut screen = TextScreen::new();
        write(&mut screen, b"\x07");
        assert_eq!(screen, TextScreen::new());
    }

    #[test]
    fn teletype_keeps_cell_attribute() {
        let mut screen = TextScreen::filled(b' ', 0x1E);
        write(&mut screen, b"Q");
        assert_eq!(screen.cell(0, 0), Cell { ch: b'Q', attr: 0x1E });
    }

    #[test]
    fn partial_scroll_moves_window_only() {
        let mut screen = TextScreen::new();
        for row in 0..4 {
            screen.set_cursor(row, 0);
            write(&mut screen, &[b'0' + row as u8]);
        }
        screen.scroll_up(1, 0x70, (1, 0), (3, 0));

        assert_eq!(screen.cell(0, 0).ch, b'0');
        assert_eq!(screen.cell(1, 0).ch, b'2');
        assert_eq!(screen.cell(2, 0).ch, b'3');
        assert_eq!(screen.cell(3, 0), Cell::blank(0x70));
        // Column 1 is outside the window.
        assert_eq!(screen.cell(3, 1), Cell::blank(GRAY_ON_BLACK));
    }

    #[test]
    fn scroll_clamps_window_to_screen() {
        let mut screen = TextScreen::filled(b'#', 0x07);
        screen.scroll_up(0, 0x07, (0, 0), (200, 200));
        assert_eq!(screen, TextScreen::new());
    }

    proptest! {
        #[test]
        fn printable_bytes_advance_cursor(text in proptest::collection::vec(0x20u8..0x7F, 0..TEXT_ROWS * TEXT_COLUMNS)) {
            let mut screen = TextScreen::new();
            write(&mut screen, &text);

            let n = text.len();
            prop_assert_eq!(screen.cursor(), (n / TEXT_COLUMNS, n % TEXT_COLUMNS));
            for (i, &c) in text.iter().enumerate() {
                prop_assert_eq!(screen.cell(i / TEXT_COLUMNS, i % TEXT_COLUMNS).ch, c);
            }
        }
    }
}
