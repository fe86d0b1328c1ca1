pub mod columns;
pub mod constants;
pub mod rst;

use std::io::Write;

use anyhow::Result;

use crate::table::CodeTable;

pub use columns::{Align, Column, Overflow};
pub use constants::ConstantsFormatter;
pub use rst::RstTableFormatter;

pub trait Formatter {
    fn format_to(&self, table: &CodeTable, out: &mut dyn Write) -> Result<()>;

    /// Render into a string.
    fn render(&self, table: &CodeTable) -> Result<String> {
        let mut buf = Vec::new();
        self.format_to(table, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}
