//! `mdocs render` command implementation.

use clap::Args;
use mdocs_site::Site;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Set containing the page.
    set: String,

    /// Page slug (e.g. `guides/intro`).
    slug: String,

    /// Render live, without reading or writing the cache.
    #[arg(long)]
    no_cache: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self, site: &Site, output: &Output) -> Result<(), CliError> {
        let html = self.render(site)?;
        output.data(html.trim_end());
        Ok(())
    }

    /// Rendered HTML of the requested page.
    fn render(&self, site: &Site) -> Result<String, CliError> {
        let not_found = || CliError::PageNotFound {
            set: self.set.clone(),
            slug: self.slug.clone(),
        };

        let page = site.page(&self.set, &self.slug)?.ok_or_else(not_found)?;
        let html = if self.no_cache {
            site.page_content_live(&page)?
        } else {
            site.page_content(&page)?
        };

        match html {
            Some(html) => Ok(html),
            // Empty files render to nothing; only a vanished file is missing
            None if site.page_content_raw(&page)?.is_some() => Ok(String::new()),
            None => Err(not_found()),
        }
    }
}
