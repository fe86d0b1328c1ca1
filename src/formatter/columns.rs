use std::borrow::Cow;

use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// What to do with a cell longer than its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// The width is a minimum; longer text is written in full.
    Widen,
    /// Keep the first `width` characters.
    Truncate,
    /// Refuse to render the row.
    Reject,
}

/// One fixed-width column. Widths count `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub width: usize,
    pub align: Align,
    pub overflow: Overflow,
}

impl Column {
    pub const fn new(name: &'static str, width: usize, align: Align, overflow: Overflow) -> Self {
        Self {
            name,
            width,
            align,
            overflow,
        }
    }

    /// Pad or cut `text` to this column using the column's own alignment.
    pub fn fit<'a>(&self, text: &'a str) -> Result<Cow<'a, str>> {
        self.fit_aligned(text, self.align)
    }

    pub fn fit_aligned<'a>(&self, text: &'a str, align: Align) -> Result<Cow<'a, str>> {
        let len = text.chars().count();
        if len > self.width {
            return match self.overflow {
                Overflow::Widen => Ok(Cow::Borrowed(text)),
                Overflow::Truncate => Ok(Cow::Owned(text.chars().take(self.width).collect())),
                Overflow::Reject => bail!(
                    "`{text}` does not fit the {}-character {} column",
                    self.width,
                    self.name
                ),
            };
        }
        let width = self.width;
        Ok(Cow::Owned(match align {
            Align::Left => format!("{text:<width$}"),
            Align::Right => format!("{text:>width$}"),
        }))
    }
}

/// Grid-table row: `| a | b | c |`.
pub fn grid_row(columns: &[Column], cells: &[&str]) -> Result<String> {
    grid_row_with(columns, cells, |c| c.align)
}

/// Grid-table header row; every cell is left-aligned.
pub fn grid_header(columns: &[Column]) -> Result<String> {
    let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
    grid_row_with(columns, &names, |_| Align::Left)
}

fn grid_row_with(
    columns: &[Column],
    cells: &[&str],
    align: impl Fn(&Column) -> Align,
) -> Result<String> {
    debug_assert_eq!(columns.len(), cells.len());
    let mut row = String::from("|");
    for (column, cell) in columns.iter().zip(cells) {
        row.push(' ');
        row.push_str(&column.fit_aligned(cell, align(column))?);
        row.push_str(" |");
    }
    Ok(row)
}

/// Grid-table rule: `+---+---+` filled with `fill`, one cell of padding on
/// either side of each column.
pub fn grid_rule(columns: &[Column], fill: char) -> String {
    let mut rule = String::from("+");
    for column in columns {
        rule.extend(std::iter::repeat_n(fill, column.width + 2));
        rule.push('+');
    }
    rule
}
