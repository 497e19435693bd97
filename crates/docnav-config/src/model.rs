//! Site configuration records.
//!
//! These are the plain building blocks of a site literal. They carry no
//! invariants on their own; [`SiteConfig`](crate::SiteConfig) validates them
//! as a whole during construction.

use serde::{Deserialize, Serialize};

/// Site identity: where the site is mounted and how it is presented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIdentity {
    /// URL path prefix the site is served under (e.g. `/docs/`).
    pub base: String,
    /// Display name.
    pub title: String,
    /// Human-readable summary.
    #[serde(default)]
    pub description: String,
}

impl SiteIdentity {
    /// Create an identity with an empty description.
    #[must_use]
    pub fn new(base: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            title: title.into(),
            description: String::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Labeled navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Label shown to the user.
    pub text: String,
    /// Target path or URL.
    pub link: String,
}

impl NavLink {
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Labeled group of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,
    /// Links in display order.
    #[serde(default)]
    pub items: Vec<NavLink>,
}

impl SidebarGroup {
    #[must_use]
    pub fn new(text: impl Into<String>, items: Vec<NavLink>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }
}

/// Icon-labeled external link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon identifier known to the renderer (e.g. `github`).
    pub icon: String,
    /// Absolute URL.
    pub link: String,
}

impl SocialLink {
    #[must_use]
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }
}

/// Unvalidated site literal, as authored in `docnav.toml`.
///
/// Turn it into a [`SiteConfig`](crate::SiteConfig) with
/// [`SiteConfig::from_source`](crate::SiteConfig::from_source).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfigSource {
    /// Site identity (`[site]` table).
    pub site: SiteIdentity,
    /// Top navigation (`[[nav]]`).
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Sidebar groups (`[[sidebar]]`).
    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,
    /// Social links (`[[social_links]]`).
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl SiteConfigSource {
    /// Create a literal with the given identity and no navigation.
    #[must_use]
    pub fn new(site: SiteIdentity) -> Self {
        Self {
            site,
            nav: Vec::new(),
            sidebar: Vec::new(),
            social_links: Vec::new(),
        }
    }
}
