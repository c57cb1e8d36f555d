//! `mdocs nav` command implementation.

use clap::Args;
use mdocs_site::{Page, Site};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Set to show.
    set: String,
}

impl NavArgs {
    /// Execute the nav command.
    pub(crate) fn execute(self, site: &Site, output: &Output) -> Result<(), CliError> {
        let nav = site.navigation(&self.set)?;

        for group in nav.groups() {
            output.highlight(group.category.as_deref().unwrap_or("(uncategorized)"));
            for page in &group.pages {
                output.data(&format!("  {}  {}", page.slug, label(page)));
                output.muted(&format!(
                    "    prev: {}  next: {}",
                    nav.previous(page).map_or("-", |p| p.slug.as_str()),
                    nav.next(page).map_or("-", |p| p.slug.as_str()),
                ));
            }
        }
        Ok(())
    }
}

/// Page title, falling back to the file name.
fn label(page: &Page) -> &str {
    page.title.as_deref().unwrap_or(&page.filename)
}
