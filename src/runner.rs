use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::Cli;
use crate::populate;

pub fn run(cli: Cli) -> Result<()> {
    let target = Utf8PathBuf::from_path_buf(cli.path)
        .map_err(|path| anyhow!("target path {} is not valid UTF-8", path.display()))?;

    if cli.dry_run {
        for slot in 1..=cli.count {
            println!(
                "[dry-run] would create {}",
                target.join(populate::slot_filename(slot))
            );
        }
        return Ok(());
    }

    let outcomes = populate::populate(&target, cli.count)?;

    let failed = outcomes
        .iter()
        .filter(|outcome| !outcome.is_created())
        .count();
    if failed > 0 {
        // Per-file failures were already reported in the loop; they do not
        // change the exit status.
        println!(
            "[warn] {} of {} files could not be created",
            failed,
            outcomes.len()
        );
    }

    Ok(())
}
