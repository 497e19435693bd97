//! `docnav nav` command implementation.

use clap::Args;
use docnav_site::Navigation;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Site-relative path of the current page (marks matching entries active).
    #[arg(short, long, default_value = "/")]
    page: String,

    /// Treat --page as a full request path including the base path.
    #[arg(long)]
    with_base: bool,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails to load, or if
    /// `--with-base` is set and the page is outside the site.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;

        let navigation = if self.with_base {
            Navigation::for_request(&config, &self.page).ok_or_else(|| {
                CliError::Validation(format!(
                    "{} is not under base path {}",
                    self.page,
                    config.identity().base
                ))
            })?
        } else {
            Navigation::build(&config, &self.page)
        };

        output.data(&serde_json::to_string_pretty(&navigation)?);
        Ok(())
    }
}
