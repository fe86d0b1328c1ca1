pub mod cli;
pub mod config;
pub mod formatter;
pub mod parse;
pub mod table;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cli::Args;
use config::{Layout, load_layout};
use formatter::{ConstantsFormatter, Formatter, RstTableFormatter};
use parse::build_table;
use parse::source::HeaderSource;
use table::CodeTable;

/// Run the generator. Returns the exit code: 0 on success. Failures are
/// returned as errors and abort the run.
pub fn run(args: Args) -> Result<i32> {
    let layout = load_layout(args.config.as_deref())?.with_driver(args.driver.as_deref());

    debug!(
        license = %layout.license_template.display(),
        header = %layout.header.display(),
        constants = %layout.constants_output.display(),
        doc = %layout.doc_output.display(),
        "resolved layout"
    );

    // --list: print the sorted table and exit without writing anything
    if args.list {
        let table = build_table(&HeaderSource::from_path(&layout.header)?)?;
        for entry in table.sorted() {
            println!("{}\t{}\t{}", entry.code, entry.label, entry.note);
        }
        return Ok(0);
    }

    generate(&layout)?;
    Ok(0)
}

/// Read the license template and header named by `layout`, then write the
/// constants module and the reST table. Returns the parsed table.
///
/// Both outputs are rendered in memory before either file is touched, so a
/// row that cannot be tabulated leaves no output behind.
pub fn generate(layout: &Layout) -> Result<CodeTable> {
    let license = std::fs::read_to_string(&layout.license_template).with_context(|| {
        format!(
            "failed to read license template {}",
            layout.license_template.display()
        )
    })?;

    println!(
        "Auto-documenting {} file {}",
        layout.category,
        layout.header_name()
    );

    let source = HeaderSource::from_path(&layout.header)?;
    let table = build_table(&source)?;

    let constants = ConstantsFormatter {
        license,
        generator: layout.generator.clone(),
        origin: layout.origin.clone(),
    }
    .render(&table)?;
    let doc = RstTableFormatter {
        doc: layout.doc.clone(),
    }
    .render(&table)?;

    write_output(&layout.constants_output, &constants)?;
    debug!(
        rows = table.in_source_order().len(),
        path = %layout.constants_output.display(),
        "wrote constants"
    );
    write_output(&layout.doc_output, &doc)?;
    debug!(rows = table.len(), path = %layout.doc_output.display(), "wrote table");

    Ok(table)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
