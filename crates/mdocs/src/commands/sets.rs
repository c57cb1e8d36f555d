//! `mdocs sets` command implementation.

use mdocs_site::Site;

use crate::error::CliError;
use crate::output::Output;

/// List registered sets in priority order.
pub(crate) fn execute(site: &Site, output: &Output) -> Result<(), CliError> {
    let sets = site.sets();
    if sets.is_empty() {
        output.info("No sets configured. Add [[sets]] entries to mdocs.toml.");
        return Ok(());
    }

    for set in sets {
        output.data(&format!(
            "{}\t{}\t{}",
            set.priority,
            set.name,
            set.root().display()
        ));
    }
    Ok(())
}
