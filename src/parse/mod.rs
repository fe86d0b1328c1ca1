pub mod definition;
pub mod source;

use anyhow::{Context, Result};
use tracing::debug;

use crate::table::CodeTable;
use definition::match_line;
use source::HeaderSource;

/// Scan the header line by line and collect every definition.
///
/// Lines that are not definitions are skipped silently. A definition whose
/// code does not fit a `Code` aborts the scan.
pub fn build_table(source: &HeaderSource) -> Result<CodeTable> {
    let mut table = CodeTable::new();

    for (line_no, line) in source.numbered_lines() {
        let Some(raw) = match_line(line) else {
            continue;
        };
        let entry = raw
            .into_entry()
            .with_context(|| format!("{}:{line_no}", source.path_str()))?;
        debug!(line = line_no, code = entry.code, label = %entry.label, "definition");

        let (code, label) = (entry.code, entry.label.clone());
        if let Some(prev) = table.insert(entry) {
            debug!(
                code,
                previous = %prev.label,
                replacement = %label,
                "duplicate code, keeping the later definition"
            );
        }
    }

    Ok(table)
}
