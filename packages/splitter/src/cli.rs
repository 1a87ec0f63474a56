//! Command-line interface for the splitter.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::splitter::split_file;

/// Corpus Splitter - Turn a labeled tab-delimited file into a directory-per-label corpus.
///
/// Every non-blank `<label>\t<content>` line is written to
/// `<DEST_DIR>/<label>/<NNNN>.txt`, numbered in file order.
#[derive(Parser)]
#[command(name = "corpus-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Tab-delimited input file (one `<label>\t<content>` record per line)
    pub source: PathBuf,

    /// Existing destination root directory
    pub dest_dir: PathBuf,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}

/// Execute a parsed command line.
pub fn execute(cli: &Cli) -> Result<()> {
    split_file(&cli.source, &cli.dest_dir)?;
    Ok(())
}
