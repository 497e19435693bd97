//! Site configuration for docnav.
//!
//! Parses `docnav.toml` files with serde, validates them, and exposes the
//! result as an immutable [`SiteConfig`]. Config files are auto-discovered
//! in parent directories when no explicit path is given.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
//!
//! Expanded fields:
//! - `site.base`
//! - `site.title`
//! - `social_links[*].link`
//!
//! ## Example
//!
//! ```
//! use docnav_config::{IconSet, SiteConfig};
//!
//! let icons = IconSet::new(["github"]);
//! let config = SiteConfig::parse(
//!     r#"
//! [site]
//! base = "/docs/"
//! title = "Docs"
//!
//! [[sidebar]]
//! text = "Guide"
//! items = [{ text = "Intro", link = "/guide/intro" }]
//! "#,
//!     &icons,
//! )
//! .unwrap();
//!
//! let hits: Vec<_> = config.find_by_link("/guide/intro").collect();
//! assert_eq!(hits[0].text, "Intro");
//! ```

mod expand;
mod icons;
mod model;
mod validate;

use std::path::{Path, PathBuf};

pub use icons::{IconRegistry, IconSet};
pub use model::{NavLink, SidebarGroup, SiteConfigSource, SiteIdentity, SocialLink};
pub use validate::{LabelScope, ValidationError};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "docnav.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base path.
    pub base: Option<String>,
    /// Override site title.
    pub title: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
    /// Site literal failed validation.
    #[error("Configuration error: {0}")]
    Invalid(#[from] ValidationError),
}

/// Validated, immutable site configuration.
///
/// Only obtainable through validation, so every instance satisfies the
/// navigation invariants: unique sibling labels, non-empty sidebar groups,
/// a slash-delimited base path, and social links with known icons and
/// absolute URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    identity: SiteIdentity,
    top_nav: Vec<NavLink>,
    sidebar: Vec<SidebarGroup>,
    social_links: Vec<SocialLink>,
    config_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Validate a site literal and take ownership of it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, scanning identity, top
    /// nav, sidebar and social links in that order.
    pub fn from_source(
        source: SiteConfigSource,
        icons: &dyn IconRegistry,
    ) -> Result<Self, ValidationError> {
        validate::validate(&source, icons)?;

        Ok(Self {
            identity: source.site,
            top_nav: source.nav,
            sidebar: source.sidebar,
            social_links: source.social_links,
            config_path: None,
        })
    }

    /// Parse and validate a TOML site literal.
    ///
    /// No environment expansion is performed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML and
    /// `ConfigError::Invalid` if validation fails.
    pub fn parse(text: &str, icons: &dyn IconRegistry) -> Result<Self, ConfigError> {
        let source: SiteConfigSource = toml::from_str(text)?;
        Ok(Self::from_source(source, icons)?)
    }

    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after environment expansion and before
    /// validation, so overrides are held to the same rules as file values.
    ///
    /// # Errors
    ///
    /// Returns error if no config file is found, reading or parsing fails,
    /// an environment variable is unset, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
        icons: &dyn IconRegistry,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => Self::discover_config()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?,
        };

        Self::load_from_file(&path, cli_settings, icons)
    }

    /// Site identity.
    #[must_use]
    pub fn identity(&self) -> &SiteIdentity {
        &self.identity
    }

    /// Top navigation in display order.
    #[must_use]
    pub fn top_nav(&self) -> &[NavLink] {
        &self.top_nav
    }

    /// Sidebar groups in display order.
    #[must_use]
    pub fn sidebar_groups(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    /// Social links in display order.
    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    /// Path of the file this config was loaded from, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// All navigation entries whose link equals `path`.
    ///
    /// Yields top nav entries first, then sidebar items group by group, each
    /// in declaration order. The iterator is lazy; call again to restart.
    pub fn find_by_link<'a>(
        &'a self,
        path: &'a str,
    ) -> impl Iterator<Item = &'a NavLink> + Clone {
        self.top_nav
            .iter()
            .chain(self.sidebar.iter().flat_map(|group| group.items.iter()))
            .filter(move |entry| entry.link == path)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(
        path: &Path,
        cli_settings: Option<&CliSettings>,
        icons: &dyn IconRegistry,
    ) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading site config");

        let content = std::fs::read_to_string(path)?;
        let mut source: SiteConfigSource = toml::from_str(&content)?;

        expand_env_vars(&mut source)?;
        if let Some(settings) = cli_settings {
            apply_cli_settings(&mut source, settings);
        }

        let mut config = Self::from_source(source, icons)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

/// Apply CLI settings to the site literal.
fn apply_cli_settings(source: &mut SiteConfigSource, settings: &CliSettings) {
    if let Some(base) = &settings.base {
        source.site.base.clone_from(base);
    }
    if let Some(title) = &settings.title {
        source.site.title.clone_from(title);
    }
}

/// Expand environment variable references in configuration strings.
fn expand_env_vars(source: &mut SiteConfigSource) -> Result<(), ConfigError> {
    source.site.base = expand::expand_env(&source.site.base, "site.base")?;
    source.site.title = expand::expand_env(&source.site.title, "site.title")?;

    for (index, social) in source.social_links.iter_mut().enumerate() {
        social.link = expand::expand_env(&social.link, &format!("social_links[{index}].link"))?;
    }

    Ok(())
}
