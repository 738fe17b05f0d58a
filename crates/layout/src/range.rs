use std::fmt;

use serde::Serialize;

/// 1-based column number to spreadsheet letters (1 = A, 26 = Z, 27 = AA).
pub fn column_letters(column: u32) -> String {
    debug_assert!(column >= 1);
    let mut n = column;
    let mut letters = String::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.insert(0, (b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    letters
}

/// Inclusive run of rows, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowSpan {
    pub start: u32,
    pub end: u32,
}

impl RowSpan {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start >= 1 && start <= end);
        Self { start, end }
    }

    pub fn row_count(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, row: u32) -> bool {
        (self.start..=self.end).contains(&row)
    }
}

/// Inclusive rectangle of grid cells, rows and columns 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl GridRange {
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self { start_row, start_col, end_row, end_col }
    }

    pub fn cell(row: u32, col: u32) -> Self {
        Self::new(row, col, row, col)
    }

    /// Single-row span across columns.
    pub fn row(row: u32, start_col: u32, end_col: u32) -> Self {
        Self::new(row, start_col, row, end_col)
    }

    /// Single-column span across rows.
    pub fn column(col: u32, start_row: u32, end_row: u32) -> Self {
        Self::new(start_row, col, end_row, col)
    }

    /// True when the rectangle is well formed and inside a grid of
    /// `total_rows` x `columns`.
    pub fn fits(&self, total_rows: u32, columns: u32) -> bool {
        self.start_row >= 1
            && self.start_col >= 1
            && self.start_row <= self.end_row
            && self.start_col <= self.end_col
            && self.end_row <= total_rows
            && self.end_col <= columns
    }
}

impl fmt::Display for GridRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_row == self.end_row && self.start_col == self.end_col {
            write!(f, "{}{}", column_letters(self.start_col), self.start_row)
        } else {
            write!(
                f,
                "{}{}:{}{}",
                column_letters(self.start_col),
                self.start_row,
                column_letters(self.end_col),
                self.end_row
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
