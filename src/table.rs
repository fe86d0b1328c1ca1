use std::collections::BTreeMap;

/// Numeric identifier of a definition. Only ever built from a run of
/// decimal digits, so it is never negative.
pub type Code = i32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: Code,
    /// Symbolic name, used verbatim in the constants file.
    pub label: String,
    /// Free-text description taken from the inline comment.
    pub note: String,
}

/// All definitions found in one header.
///
/// Keeps two views: every match in source order (duplicates included), which
/// drives the constants file, and a code-keyed index where the last
/// definition of a code wins, which drives the documentation table.
#[derive(Debug, Default)]
pub struct CodeTable {
    matches: Vec<CodeEntry>,
    by_code: BTreeMap<Code, usize>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition. Returns the entry it replaced in the code index,
    /// if that code was already defined.
    pub fn insert(&mut self, entry: CodeEntry) -> Option<&CodeEntry> {
        let idx = self.matches.len();
        let code = entry.code;
        self.matches.push(entry);
        self.by_code.insert(code, idx).map(|prev| &self.matches[prev])
    }

    pub fn get(&self, code: Code) -> Option<&CodeEntry> {
        self.by_code.get(&code).map(|&idx| &self.matches[idx])
    }

    /// Every matched definition in the order it appeared in the header.
    pub fn in_source_order(&self) -> &[CodeEntry] {
        &self.matches
    }

    /// One entry per distinct code, ascending by code.
    pub fn sorted(&self) -> impl Iterator<Item = &CodeEntry> {
        self.by_code.values().map(|&idx| &self.matches[idx])
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
