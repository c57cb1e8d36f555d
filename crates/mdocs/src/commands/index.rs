//! `mdocs index` command implementation.

use clap::Args;
use mdocs_site::{Page, Site};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the index command.
#[derive(Args)]
pub(crate) struct IndexArgs {
    /// Only show pages of this set.
    #[arg(short, long)]
    set: Option<String>,

    /// Print pages as JSON.
    #[arg(long)]
    json: bool,
}

impl IndexArgs {
    /// Execute the index command.
    pub(crate) fn execute(self, site: &Site, output: &Output) -> Result<(), CliError> {
        let pages: Vec<Page> = match &self.set {
            Some(name) => mdocs_site::build_set(site.documentation(), name)?,
            None => site.build_index()?.into_pages(),
        };

        if self.json {
            output.data(&serde_json::to_string_pretty(&pages)?);
            return Ok(());
        }

        for page in &pages {
            output.data(&format!(
                "{}\t{}\t{}\t{}\t{}",
                page.set_name,
                page.slug,
                page.title.as_deref().unwrap_or("-"),
                page.category.as_deref().unwrap_or("-"),
                page.checksum,
            ));
        }
        output.info(&format!("{} page(s)", pages.len()));
        Ok(())
    }
}
