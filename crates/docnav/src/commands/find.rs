//! `docnav find` command implementation.

use clap::Args;
use docnav_config::SiteConfig;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the find command.
#[derive(Args)]
pub(crate) struct FindArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Link target to search for (e.g. /guide/intro).
    link: String,
}

impl FindArgs {
    /// Execute the find command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or no entry
    /// links to the path.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        for line in require_hits(&config, &self.link)? {
            output.data(&line);
        }
        Ok(())
    }
}

/// Like [`describe_hits`], but an empty result is an error.
fn require_hits(config: &SiteConfig, link: &str) -> Result<Vec<String>, CliError> {
    let lines = describe_hits(config, link);
    if lines.is_empty() {
        return Err(CliError::NotFound(format!(
            "No navigation entry links to {link}"
        )));
    }
    Ok(lines)
}

/// Describe every entry linking to `link`, prefixed with its location.
fn describe_hits(config: &SiteConfig, link: &str) -> Vec<String> {
    config
        .find_by_link(link)
        .map(|entry| {
            let group = config
                .sidebar_groups()
                .iter()
                .find(|group| group.items.iter().any(|item| std::ptr::eq(item, entry)));
            match group {
                Some(group) => format!("sidebar/{}: {}", group.text, entry.text),
                None => format!("nav: {}", entry.text),
            }
        })
        .collect()
}
