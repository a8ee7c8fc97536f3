//! # Text Table
//!
//! Fixed-width text tables built from named, aligned columns.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  header line                 "# Item   Total "                          │
//! │  separator                   "---------------"                          │
//! │  body rows (0..n)            "1 Apple  $4.95 "                          │
//! │  separator (if rows exist)   "---------------"                          │
//! │  footer (optional)           "1        $4.95 "                          │
//! │                                                                         │
//! │  width(col)   = max chars over header, rows, footer (capped by max)    │
//! │  line length  = Σ widths + (columns − 1)                                │
//! │  every cell   = aligned to width, then ONE trailing space               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows are fixed-size arrays (`[String; N]`), so a row with the wrong
//! number of cells does not compile.
//!
//! ## Usage
//! ```rust
//! use ticket_core::table::{Column, Table};
//!
//! let mut table = Table::new([Column::right("#"), Column::left("Name")]);
//! table.push_row(["1".to_string(), "Apple".to_string()]);
//! table.set_footer(["1".to_string(), String::new()]);
//!
//! assert_eq!(table.render(), "# Name  \n-------\n1 Apple \n-------\n1       ");
//! ```

use std::iter;

// =============================================================================
// Alignment
// =============================================================================

/// Horizontal alignment of a cell inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    /// Padding split in half; the odd space goes on the right.
    Center,
    Right,
}

// =============================================================================
// Column
// =============================================================================

/// A named column with its alignment and an optional width cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    align: Align,
    max_width: Option<usize>,
}

impl Column {
    pub fn new(name: impl Into<String>, align: Align) -> Self {
        Column {
            name: name.into(),
            align,
            max_width: None,
        }
    }

    pub fn left(name: impl Into<String>) -> Self {
        Column::new(name, Align::Left)
    }

    pub fn center(name: impl Into<String>) -> Self {
        Column::new(name, Align::Center)
    }

    pub fn right(name: impl Into<String>) -> Self {
        Column::new(name, Align::Right)
    }

    /// Caps the column width. Longer cells (header included) are cut.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

// =============================================================================
// Table
// =============================================================================

/// A table of `N` columns: header, body rows and an optional footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<const N: usize> {
    columns: [Column; N],
    rows: Vec<[String; N]>,
    footer: Option<[String; N]>,
}

impl<const N: usize> Table<N> {
    /// Creates an empty table with the given columns, in display order.
    pub fn new(columns: [Column; N]) -> Self {
        Table {
            columns,
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn rows(&self) -> &[[String; N]] {
        &self.rows
    }

    /// Appends a body row below the existing ones.
    pub fn push_row(&mut self, row: [String; N]) {
        self.rows.push(row);
    }

    pub fn set_footer(&mut self, footer: [String; N]) {
        self.footer = Some(footer);
    }

    /// Width of each column in characters.
    pub fn column_widths(&self) -> [usize; N] {
        let mut widths = [0usize; N];

        let cells = iter::once(self.columns.each_ref().map(|c| c.name.as_str()))
            .chain(self.rows.iter().map(|row| row.each_ref().map(String::as_str)))
            .chain(self.footer.iter().map(|f| f.each_ref().map(String::as_str)));

        for line in cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for (width, column) in widths.iter_mut().zip(&self.columns) {
            if let Some(max) = column.max_width {
                *width = (*width).min(max);
            }
        }

        widths
    }

    /// Length of a separator line: all widths plus one gap between columns.
    pub fn line_length(&self) -> usize {
        self.column_widths().iter().sum::<usize>() + N.saturating_sub(1)
    }

    /// Renders the table as newline-separated text.
    ///
    /// The last line (footer, or last row without a footer) has no
    /// trailing newline.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let separator = "-".repeat(self.line_length());
        let mut out = String::new();

        self.write_line(&mut out, self.columns.each_ref().map(|c| c.name.as_str()), &widths);
        out.push('\n');
        out.push_str(&separator);

        for row in &self.rows {
            out.push('\n');
            self.write_line(&mut out, row.each_ref().map(String::as_str), &widths);
        }

        if let Some(footer) = &self.footer {
            out.push('\n');
            if !self.rows.is_empty() {
                out.push_str(&separator);
                out.push('\n');
            }
            self.write_line(&mut out, footer.each_ref().map(String::as_str), &widths);
        }

        out
    }

    fn write_line(&self, out: &mut String, cells: [&str; N], widths: &[usize; N]) {
        for ((column, width), cell) in self.columns.iter().zip(widths).zip(cells) {
            write_cell(out, cell, column.align, *width);
        }
    }
}

// =============================================================================
// Cell Rendering
// =============================================================================

/// Appends one cell: cut to `width` if longer, otherwise padded according
/// to `align`, then followed by exactly one space.
///
/// ## Example
/// ```rust
/// use ticket_core::table::{write_cell, Align};
///
/// let mut out = String::new();
/// write_cell(&mut out, "50%", Align::Right, 8);
/// write_cell(&mut out, "toilet paper", Align::Left, 6);
/// assert_eq!(out, "     50% toilet ");
/// ```
pub fn write_cell(out: &mut String, value: &str, align: Align, width: usize) {
    let value = match value.char_indices().nth(width) {
        Some((cut, _)) => &value[..cut],
        None => value,
    };
    let len = value.chars().count();
    let free = width - len;

    let before = match align {
        Align::Left => 0,
        Align::Center => free / 2,
        Align::Right => free,
    };
    let after = free - before;

    out.extend(iter::repeat(' ').take(before));
    out.push_str(value);
    out.extend(iter::repeat(' ').take(after));
    out.push(' ');
}

// =============================================================================
// Unit Tests
// =============================================================================
