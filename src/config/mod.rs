use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Where the inputs and outputs live, plus the fixed text written around the
/// generated rows.
///
/// Defaults reproduce the psi4 source tree layout. Every field may be
/// overridden from a YAML file; missing keys keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Text copied verbatim to the top of the constants file.
    pub license_template: PathBuf,
    /// Header scanned for `#define` lines.
    pub header: PathBuf,
    pub constants_output: PathBuf,
    /// Never prefixed by the driver path.
    pub doc_output: PathBuf,
    /// Category shown in the `Auto-documenting` banner.
    pub category: String,
    /// Script name quoted in the do-not-modify comment.
    pub generator: String,
    /// Header path quoted in the do-not-modify comment.
    pub origin: String,
    pub doc: DocText,
}

/// Preamble text of the reST document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocText {
    pub index: String,
    pub anchor: String,
    pub title: String,
    pub caption: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            license_template: PathBuf::from("../../psi4/share/psi4/python/source.template"),
            header: PathBuf::from("../../psi4/include/psi4/psifiles.h"),
            constants_output: PathBuf::from("../../psi4/share/psi4/python/p4const/psifiles.py"),
            doc_output: PathBuf::from("source/autodoc_psifiles.rst"),
            category: "header".to_string(),
            generator: "document_psifiles".to_string(),
            origin: "psi4topdir/psi4/include/psi4/psifiles.h".to_string(),
            doc: DocText::default(),
        }
    }
}

impl Default for DocText {
    fn default() -> Self {
        Self {
            index: "psioh".to_string(),
            anchor: "apdx:psiFiles".to_string(),
            title: "PSIOH Intermediate Files".to_string(),
            caption: "Auxiliary files in |PSIfour|".to_string(),
        }
    }
}

impl Layout {
    /// Prefix the driver-relative paths (license template, header and
    /// constants output) with `driver`. The documentation output stays
    /// relative to the working directory.
    pub fn with_driver(mut self, driver: Option<&Path>) -> Self {
        if let Some(driver) = driver {
            self.license_template = driver.join(&self.license_template);
            self.header = driver.join(&self.header);
            self.constants_output = driver.join(&self.constants_output);
        }
        self
    }

    /// File name of the header, for the banner line.
    pub fn header_name(&self) -> String {
        self.header
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.header.display().to_string())
    }
}

/// Load a layout from the given YAML file, or the built-in defaults when no
/// file is given.
pub fn load_layout(path: Option<&Path>) -> Result<Layout> {
    let Some(path) = path else {
        return Ok(Layout::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_layout(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_layout(contents: &str) -> Result<Layout> {
    // An empty document deserializes to null rather than an empty mapping.
    if contents.trim().is_empty() {
        return Ok(Layout::default());
    }
    Ok(serde_yml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        let layout = load_layout(None).unwrap();
        assert_eq!(layout, Layout::default());
        assert_eq!(layout.header_name(), "psifiles.h");
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        assert_eq!(parse_layout("").unwrap(), Layout::default());
        assert_eq!(parse_layout("\n  \n").unwrap(), Layout::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let layout = parse_layout(
            "header: include/codes.h\ndoc:\n  title: Error Codes\n",
        )
        .unwrap();
        assert_eq!(layout.header, PathBuf::from("include/codes.h"));
        assert_eq!(layout.doc.title, "Error Codes");
        assert_eq!(layout.doc.index, "psioh");
        assert_eq!(layout.generator, "document_psifiles");
        assert_eq!(layout.header_name(), "codes.h");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(parse_layout("headre: typo.h\n").is_err());
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let err = load_layout(Some(Path::new("/nonexistent/codetab.yml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn driver_prefixes_inputs_and_constants_only() {
        let layout = Layout::default().with_driver(Some(Path::new("doc/sphinxman")));
        assert_eq!(
            layout.header,
            PathBuf::from("doc/sphinxman/../../psi4/include/psi4/psifiles.h")
        );
        assert_eq!(
            layout.license_template,
            PathBuf::from("doc/sphinxman/../../psi4/share/psi4/python/source.template")
        );
        assert_eq!(
            layout.constants_output,
            PathBuf::from("doc/sphinxman/../../psi4/share/psi4/python/p4const/psifiles.py")
        );
        assert_eq!(layout.doc_output, PathBuf::from("source/autodoc_psifiles.rst"));
    }

    #[test]
    fn no_driver_leaves_paths_alone() {
        assert_eq!(Layout::default().with_driver(None), Layout::default());
    }
}
