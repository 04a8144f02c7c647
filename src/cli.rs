use std::path::PathBuf;

use clap::Parser;

use crate::populate::{DEFAULT_COUNT, DEFAULT_TARGET};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "dirseed", version, about = "Populate a directory with fixture text files")]
pub struct Cli {
    /// Target directory to populate. Created (with missing ancestors) if absent.
    #[arg(default_value = DEFAULT_TARGET)]
    pub path: PathBuf,

    /// Number of files to create, named test1.txt through testN.txt.
    #[arg(short = 'c', long = "count", default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Print the files that would be created without touching the filesystem.
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
