//! Icons the navigation renderer can draw.

use docnav_config::IconSet;

/// Identifiers of the built-in social icons.
pub const BUILTIN_ICONS: &[&str] = &[
    "discord",
    "facebook",
    "github",
    "instagram",
    "linkedin",
    "mastodon",
    "npm",
    "slack",
    "twitter",
    "x",
    "youtube",
];

/// Built-in icons as an [`IconSet`] for config validation.
#[must_use]
pub fn builtin_icons() -> IconSet {
    IconSet::new(BUILTIN_ICONS.iter().copied())
}
