use std::io::Write;

use anyhow::{Context, Result};

use crate::config::DocText;
use crate::formatter::columns::{grid_header, grid_row, grid_rule};
use crate::formatter::{Align, Column, Formatter, Overflow};
use crate::table::CodeTable;

pub const CODE: Column = Column::new("File", 4, Align::Right, Overflow::Reject);
pub const LABEL: Column = Column::new("File Label", 27, Align::Left, Overflow::Truncate);
pub const NOTE: Column = Column::new("Contents", 120, Align::Left, Overflow::Truncate);

pub const COLUMNS: [Column; 3] = [CODE, LABEL, NOTE];

/// Indentation of the grid table under the `.. table::` directive.
const INDENT: &str = "   ";

/// Writes the reST reference page: preamble, then a grid table with one row
/// per distinct code in ascending order.
pub struct RstTableFormatter {
    pub doc: DocText,
}

impl Formatter for RstTableFormatter {
    fn format_to(&self, table: &CodeTable, out: &mut dyn Write) -> Result<()> {
        let doc = &self.doc;
        writeln!(out, ".. index:: {}", doc.index)?;
        writeln!(out, ".. _`{}`:", doc.anchor)?;
        writeln!(out)?;
        writeln!(out, "{}", doc.title)?;
        writeln!(out, "{}", "=".repeat(doc.title.chars().count()))?;
        writeln!(out)?;
        writeln!(out, ".. table:: {}", doc.caption)?;
        writeln!(out)?;

        let rule = grid_rule(&COLUMNS, '-');
        writeln!(out, "{INDENT}{rule}")?;
        writeln!(out, "{INDENT}{}", grid_header(&COLUMNS)?)?;
        writeln!(out, "{INDENT}{}", grid_rule(&COLUMNS, '='))?;

        for entry in table.sorted() {
            let code = entry.code.to_string();
            let cells = [code.as_str(), entry.label.as_str(), entry.note.as_str()];
            let row = grid_row(&COLUMNS, &cells)
                .with_context(|| format!("cannot tabulate {}", entry.label))?;
            writeln!(out, "{INDENT}{row}")?;
            writeln!(out, "{INDENT}{rule}")?;
        }

        writeln!(out)?;
        Ok(())
    }
}
