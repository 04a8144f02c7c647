use std::fs;

use anyhow::{Context, Result, bail};
use camino::Utf8Path;
use tracing::debug;

/// Target directory used when the CLI is invoked without a path argument.
pub const DEFAULT_TARGET: &str = "test";

/// Number of file slots filled when `--count` is not given.
pub const DEFAULT_COUNT: u32 = 2;

/// Every created file holds this exact string, no trailing newline added.
pub const FILE_CONTENT: &str = "hello world, welcome to the world of python programming!";

/// Per-slot result of a populate run, in slot order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileOutcome {
    Created { filename: String, bytes: usize },
    Failed { filename: String, reason: String },
}

impl FileOutcome {
    pub fn filename(&self) -> &str {
        match self {
            FileOutcome::Created { filename, .. } | FileOutcome::Failed { filename, .. } => {
                filename
            }
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, FileOutcome::Created { .. })
    }
}

/// Filename for a 1-based file slot.
pub fn slot_filename(slot: u32) -> String {
    format!("test{slot}.txt")
}

/// Fill `target` with `count` fixed-content text files named
/// `test1.txt` through `test{count}.txt`, ascending.
///
/// The directory (and any missing ancestors) is created first; failure there
/// aborts the whole operation before any file is attempted. Individual file
/// writes that fail are reported and recorded, and the loop moves on to the
/// next slot. Existing files with the same names are truncated and rewritten.
pub fn populate(target: &Utf8Path, count: u32) -> Result<Vec<FileOutcome>> {
    ensure_target_dir(target)?;
    debug!("target directory {target} ready");

    let mut outcomes = Vec::with_capacity(count as usize);
    for slot in 1..=count {
        let filename = slot_filename(slot);
        let filepath = target.join(&filename);
        println!("Creating file {}", filepath);
        match fs::write(&filepath, FILE_CONTENT) {
            Ok(()) => {
                println!("Created {}", filename);
                outcomes.push(FileOutcome::Created {
                    filename,
                    bytes: FILE_CONTENT.len(),
                });
            }
            Err(err) => {
                println!("Failed to create {}: {}", filename, err);
                outcomes.push(FileOutcome::Failed {
                    filename,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(outcomes)
}

/// Ensure `target` exists as a directory, creating missing ancestors.
///
/// A pre-existing directory is fine; a pre-existing non-directory entry is a
/// fatal error for the whole run.
fn ensure_target_dir(target: &Utf8Path) -> Result<()> {
    if target.exists() && !target.is_dir() {
        bail!("{} already exists and is not a directory", target);
    }
    fs::create_dir_all(target).with_context(|| format!("creating directory {}", target))
}
