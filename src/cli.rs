use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "codetab",
    version,
    about = "Generate a constants module and a reST table from a header of numeric #defines"
)]
pub struct Args {
    /// Directory prefix for the header, license template and constants output
    pub driver: Option<PathBuf>,

    /// Path to a YAML layout file overriding the built-in paths and titles
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print the extracted table (code, label, note), one entry per line, then exit
    #[arg(long)]
    pub list: bool,
}
