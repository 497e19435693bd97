//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod find;
pub(crate) mod nav;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, SiteConfig};
use docnav_site::builtin_icons;

pub(crate) use check::CheckArgs;
pub(crate) use find::FindArgs;
pub(crate) use nav::NavArgs;

use crate::error::CliError;

/// Config options shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site base path (overrides config).
    #[arg(long, env = "DOCNAV_BASE")]
    base: Option<String>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,
}

impl ConfigArgs {
    /// Load and validate the site config against the built-in icons.
    pub(crate) fn load(self) -> Result<SiteConfig, CliError> {
        let cli_settings = CliSettings {
            base: self.base,
            title: self.title,
        };
        let config = SiteConfig::load(
            self.config.as_deref(),
            Some(&cli_settings),
            &builtin_icons(),
        )?;
        if let Some(path) = config.config_path() {
            tracing::debug!(path = %path.display(), "Loaded site config");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_args_load_records_path_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        std::fs::write(&path, "[site]\nbase = \"/docs/\"\ntitle = \"Docs\"\n").unwrap();
        let args = ConfigArgs {
            config: Some(path.clone()),
            base: Some("/preview/".to_owned()),
            title: None,
        };

        let config = args.load().unwrap();

        assert_eq!(config.config_path(), Some(path.as_path()));
        assert_eq!(config.identity().base, "/preview/");
        assert_eq!(config.identity().title, "Docs");
    }

    #[test]
    fn test_config_args_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConfigArgs {
            config: Some(dir.path().join("missing.toml")),
            base: None,
            title: None,
        };

        let err = args.load().unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
    }
}
