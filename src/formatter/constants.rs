use std::io::Write;

use anyhow::Result;

use crate::formatter::{Align, Column, Formatter, Overflow};
use crate::table::CodeTable;

/// Labels and codes are minimum widths; identifiers are never cut.
pub const LABEL: Column = Column::new("label", 27, Align::Left, Overflow::Widen);
pub const CODE: Column = Column::new("code", 4, Align::Right, Overflow::Widen);

/// Writes the generated constants module: license block, a do-not-modify
/// notice, then one `LABEL = code  # note` line per definition in header order.
pub struct ConstantsFormatter {
    pub license: String,
    pub generator: String,
    pub origin: String,
}

impl Formatter for ConstantsFormatter {
    fn format_to(&self, table: &CodeTable, out: &mut dyn Write) -> Result<()> {
        out.write_all(self.license.as_bytes())?;
        writeln!(
            out,
            "# Do not modify this file! It is auto-generated by the {}",
            self.generator
        )?;
        writeln!(out, "# script, from {}", self.origin)?;

        for entry in table.in_source_order() {
            writeln!(
                out,
                "{} = {}  # {}",
                LABEL.fit(&entry.label)?,
                CODE.fit(&entry.code.to_string())?,
                entry.note
            )?;
        }

        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CodeEntry;

    fn formatter(license: &str) -> ConstantsFormatter {
        ConstantsFormatter {
            license: license.to_string(),
            generator: "document_psifiles".to_string(),
            origin: "psi4topdir/psi4/include/psi4/psifiles.h".to_string(),
        }
    }

    fn entry(code: i32, label: &str, note: &str) -> CodeEntry {
        CodeEntry {
            code,
            label: label.to_string(),
            note: note.to_string(),
        }
    }

    const NOTICE: &str = "# Do not modify this file! It is auto-generated by the document_psifiles\n\
                          # script, from psi4topdir/psi4/include/psi4/psifiles.h\n";

    #[test]
    fn empty_table_has_license_and_notice_only() {
        let out = formatter("# License\n#\n").render(&CodeTable::new()).unwrap();
        assert_eq!(out, format!("# License\n#\n{NOTICE}\n"));
    }

    #[test]
    fn assignment_line_layout() {
        let mut table = CodeTable::new();
        table.insert(entry(10, "PSIF_OLD_AMPS", "Old amplitudes from previous iteration"));
        let out = formatter("").render(&table).unwrap();
        let line = "PSIF_OLD_AMPS               =   10  # Old amplitudes from previous iteration";
        assert_eq!(out, format!("{NOTICE}{line}\n\n"));
    }

    #[test]
    fn keeps_header_order_and_duplicates() {
        let mut table = CodeTable::new();
        table.insert(entry(20, "PSIF_B", "b"));
        table.insert(entry(5, "PSIF_A", "a"));
        table.insert(entry(20, "PSIF_C", "c"));
        let out = formatter("").render(&table).unwrap();
        let labels: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("PSIF_"))
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(labels, vec!["PSIF_B", "PSIF_A", "PSIF_C"]);
    }

    #[test]
    fn long_label_and_code_are_not_cut() {
        let label = "PSIF_A_VERY_LONG_LABEL_THAT_OVERFLOWS";
        let mut table = CodeTable::new();
        table.insert(entry(123456, label, "x"));
        let out = formatter("").render(&table).unwrap();
        assert!(out.contains(&format!("{label} = 123456  # x\n")), "{out}");
    }

    #[test]
    fn license_without_trailing_newline_is_copied_verbatim() {
        let out = formatter("# no newline").render(&CodeTable::new()).unwrap();
        assert!(out.starts_with("# no newline# Do not modify"));
    }
}
