//! `docnav check` command implementation.

use clap::Args;
use docnav_config::SiteConfig;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load or validate.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        if let Some(path) = config.config_path() {
            output.info(&format!("Config: {}", path.display()));
        }
        output.highlight(&config.identity().title);
        for line in summary(&config) {
            output.info(&line);
        }
        output.success("Configuration is valid");

        Ok(())
    }
}

/// Summary lines describing a validated config.
fn summary(config: &SiteConfig) -> Vec<String> {
    let identity = config.identity();
    let links: usize = config
        .sidebar_groups()
        .iter()
        .map(|group| group.items.len())
        .sum();

    let mut lines = vec![format!("Base path: {}", identity.base)];
    if !identity.description.is_empty() {
        lines.push(format!("Description: {}", identity.description));
    }
    lines.push(format!("Top nav entries: {}", config.top_nav().len()));
    lines.push(format!(
        "Sidebar: {} groups, {links} links",
        config.sidebar_groups().len()
    ));
    lines.push(format!("Social links: {}", config.social_links().len()));
    lines
}
