//! Navigation view for the page renderer.
//!
//! Resolves configured links against the site base path and marks the
//! entries that point at the page being rendered.
//!
//! # Example
//!
//! ```
//! use docnav_config::{NavLink, SidebarGroup, SiteConfig, SiteConfigSource, SiteIdentity};
//! use docnav_site::{Navigation, builtin_icons};
//!
//! let mut source = SiteConfigSource::new(SiteIdentity::new("/docs/", "Docs"));
//! source.sidebar.push(SidebarGroup::new(
//!     "Guide",
//!     vec![NavLink::new("Intro", "/guide/intro")],
//! ));
//! let config = SiteConfig::from_source(source, &builtin_icons()).unwrap();
//!
//! let nav = Navigation::build(&config, "/guide/intro");
//! assert_eq!(nav.sidebar[0].items[0].href, "/docs/guide/intro");
//! assert!(nav.sidebar[0].items[0].active);
//! ```

use serde::Serialize;

use docnav_config::{NavLink, SiteConfig};

/// Navigation entry ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Label.
    pub text: String,
    /// Link target with the base path applied.
    pub href: String,
    /// Whether the entry points at the current page.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
}

/// Sidebar group ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Group heading.
    pub text: String,
    /// Group entries.
    pub items: Vec<NavItem>,
}

/// Social link ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SocialItem {
    pub icon: String,
    pub href: String,
}

/// Complete navigation for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    /// Site title.
    pub title: String,
    /// Site description.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Top navigation.
    pub nav: Vec<NavItem>,
    /// Sidebar groups.
    pub sidebar: Vec<SidebarSection>,
    /// Social links.
    pub social_links: Vec<SocialItem>,
}

impl Navigation {
    /// Build navigation for the page at `current_path`.
    ///
    /// `current_path` is site-relative (without the base path). Every entry
    /// returned by [`SiteConfig::find_by_link`] for it is marked active.
    #[must_use]
    pub fn build(config: &SiteConfig, current_path: &str) -> Self {
        let base = config.identity().base.as_str();
        let active: Vec<&NavLink> = config.find_by_link(current_path).collect();

        tracing::debug!(
            path = current_path,
            active = active.len(),
            "Building navigation"
        );

        let item = |link: &NavLink| NavItem {
            text: link.text.clone(),
            href: resolve_href(base, &link.link),
            active: active.iter().any(|hit| std::ptr::eq(*hit, link)),
        };

        Self {
            title: config.identity().title.clone(),
            description: config.identity().description.clone(),
            nav: config.top_nav().iter().map(item).collect(),
            sidebar: config
                .sidebar_groups()
                .iter()
                .map(|group| SidebarSection {
                    text: group.text.clone(),
                    items: group.items.iter().map(item).collect(),
                })
                .collect(),
            social_links: config
                .social_links()
                .iter()
                .map(|social| SocialItem {
                    icon: social.icon.clone(),
                    href: social.link.clone(),
                })
                .collect(),
        }
    }

    /// Build navigation for a request path that includes the base path.
    ///
    /// Returns `None` if `request_path` is outside the site.
    #[must_use]
    pub fn for_request(config: &SiteConfig, request_path: &str) -> Option<Self> {
        let page = site_path(&config.identity().base, request_path)?;
        Some(Self::build(config, &page))
    }
}

/// Apply the base path to a site-relative link.
///
/// Links that do not start with `/` (external URLs, relative paths) are
/// returned unchanged.
#[must_use]
pub fn resolve_href(base: &str, link: &str) -> String {
    if link.starts_with('/') {
        format!("{}{link}", base.trim_end_matches('/'))
    } else {
        link.to_owned()
    }
}

/// Strip the base path from a request path.
///
/// The result always starts with `/`. Returns `None` if `request_path` is
/// not under `base`.
#[must_use]
pub fn site_path(base: &str, request_path: &str) -> Option<String> {
    let rest = request_path
        .strip_prefix(base)
        .or_else(|| (request_path == base.trim_end_matches('/')).then_some(""))?;
    Some(format!("/{rest}"))
}
