use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::table::{Code, CodeEntry};

/// `#define LABEL 123 /*- note -*/`, anchored at both ends.
///
/// Codes are ASCII digits only; other Unicode digits make the line a
/// non-definition.
///
/// The note group is greedy: a note containing ` -*/` runs to the last
/// closing marker, and anything other than whitespace after the closing
/// marker rejects the line.
static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#define\s+(\w+)\s+([0-9]+)\s+/\*-\s+(.*)\s+-\*/\s*$")
        .expect("definition pattern is valid")
});

/// The three capture groups of a definition line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDefinition<'a> {
    pub label: &'a str,
    pub digits: &'a str,
    pub note: &'a str,
}

/// Match one line against the definition pattern. Non-matching lines yield
/// `None`.
pub fn match_line(line: &str) -> Option<RawDefinition<'_>> {
    let caps = DEFINITION.captures(line)?;
    Some(RawDefinition {
        label: caps.get(1)?.as_str(),
        digits: caps.get(2)?.as_str(),
        note: caps.get(3)?.as_str(),
    })
}

impl RawDefinition<'_> {
    /// Convert the digit group to a code. Fails only when the digits do not
    /// fit a `Code`.
    pub fn into_entry(self) -> Result<CodeEntry> {
        let code: Code = self
            .digits
            .parse()
            .with_context(|| {
                format!(
                    "code `{}` of {} is not a valid integer",
                    self.digits, self.label
                )
            })?;
        Ok(CodeEntry {
            code,
            label: self.label.to_string(),
            note: self.note.to_string(),
        })
    }
}

/// Match and convert in one step.
pub fn parse_line(line: &str) -> Result<Option<CodeEntry>> {
    match_line(line).map(RawDefinition::into_entry).transpose()
}
