//! Site literal validation.
//!
//! Checks run top-to-bottom (identity, top nav, sidebar, social links) and
//! depth-first within each tree. The first violation aborts validation.

use std::collections::HashSet;
use std::fmt;

use crate::icons::IconRegistry;
use crate::model::{NavLink, SiteConfigSource, SiteIdentity, SocialLink};

/// Sibling list in which a label must be unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LabelScope {
    /// Top-level navigation.
    TopNav,
    /// Items of the named sidebar group.
    SidebarGroup(String),
}

impl fmt::Display for LabelScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopNav => f.write_str("top nav"),
            Self::SidebarGroup(name) => write!(f, "sidebar group \"{name}\""),
        }
    }
}

/// First constraint violated by a site literal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Base path or title is invalid.
    #[error("Invalid site.{field}: {message}")]
    InvalidIdentity {
        /// Identity field (`base` or `title`).
        field: &'static str,
        message: String,
    },
    /// Required `text` or `link` is empty.
    #[error("{path} cannot be empty")]
    EmptyField {
        /// Dotted path to the field (e.g. `sidebar[1].items[0].link`).
        path: String,
    },
    /// Two siblings share a label.
    #[error("Duplicate label \"{label}\" in {scope}")]
    DuplicateLabel { scope: LabelScope, label: String },
    /// Sidebar group has no items.
    #[error("Sidebar group \"{group}\" (sidebar[{index}]) has no items")]
    EmptyGroup { index: usize, group: String },
    /// Social link icon is not known to the renderer.
    #[error("Unknown icon \"{icon}\" in social_links[{index}]")]
    UnknownIcon { index: usize, icon: String },
    /// Social link is not an absolute URL.
    #[error("Malformed URL \"{link}\" in social_links[{index}]: {reason}")]
    MalformedUrl {
        index: usize,
        link: String,
        reason: String,
    },
}

/// Validate a site literal, reporting the first violation found.
pub(crate) fn validate(
    source: &SiteConfigSource,
    icons: &dyn IconRegistry,
) -> Result<(), ValidationError> {
    validate_identity(&source.site)?;
    validate_siblings(&source.nav, "nav", &LabelScope::TopNav)?;

    for (index, group) in source.sidebar.iter().enumerate() {
        if group.text.is_empty() {
            return Err(ValidationError::EmptyField {
                path: format!("sidebar[{index}].text"),
            });
        }
        if group.items.is_empty() {
            return Err(ValidationError::EmptyGroup {
                index,
                group: group.text.clone(),
            });
        }
        validate_siblings(
            &group.items,
            &format!("sidebar[{index}].items"),
            &LabelScope::SidebarGroup(group.text.clone()),
        )?;
    }

    for (index, social) in source.social_links.iter().enumerate() {
        validate_social(index, social, icons)?;
    }

    Ok(())
}

fn validate_identity(identity: &SiteIdentity) -> Result<(), ValidationError> {
    // "/" alone is the root mount: its single slash is both leading and trailing
    if !identity.base.starts_with('/') || !identity.base.ends_with('/') {
        return Err(ValidationError::InvalidIdentity {
            field: "base",
            message: format!("\"{}\" must start and end with '/'", identity.base),
        });
    }
    if identity.title.is_empty() {
        return Err(ValidationError::InvalidIdentity {
            field: "title",
            message: "cannot be empty".to_owned(),
        });
    }
    Ok(())
}

/// Check one sibling list: non-empty fields, unique labels.
fn validate_siblings(
    links: &[NavLink],
    path: &str,
    scope: &LabelScope,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(links.len());

    for (index, link) in links.iter().enumerate() {
        if link.text.is_empty() {
            return Err(ValidationError::EmptyField {
                path: format!("{path}[{index}].text"),
            });
        }
        if link.link.is_empty() {
            return Err(ValidationError::EmptyField {
                path: format!("{path}[{index}].link"),
            });
        }
        if !seen.insert(link.text.as_str()) {
            return Err(ValidationError::DuplicateLabel {
                scope: scope.clone(),
                label: link.text.clone(),
            });
        }
    }

    Ok(())
}

fn validate_social(
    index: usize,
    social: &SocialLink,
    icons: &dyn IconRegistry,
) -> Result<(), ValidationError> {
    if !icons.is_known(&social.icon) {
        return Err(ValidationError::UnknownIcon {
            index,
            icon: social.icon.clone(),
        });
    }

    let malformed = |reason: String| ValidationError::MalformedUrl {
        index,
        link: social.link.clone(),
        reason,
    };
    let url = url::Url::parse(&social.link).map_err(|e| malformed(e.to_string()))?;
    if !url.has_host() {
        return Err(malformed("missing host".to_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconSet;
    use crate::model::SidebarGroup;
    use pretty_assertions::assert_eq;

    fn icons() -> IconSet {
        IconSet::new(["github", "x"])
    }

    fn valid_source() -> SiteConfigSource {
        SiteConfigSource {
            site: SiteIdentity::new("/docs/", "T"),
            nav: vec![NavLink::new("Home", "/")],
            sidebar: vec![SidebarGroup::new(
                "Guide",
                vec![NavLink::new("Intro", "/guide/intro")],
            )],
            social_links: vec![],
        }
    }

    fn validate_err(source: &SiteConfigSource) -> ValidationError {
        validate(source, &icons()).unwrap_err()
    }

    #[test]
    fn test_valid_source_passes() {
        assert_eq!(validate(&valid_source(), &icons()), Ok(()));
    }

    #[test]
    fn test_base_missing_leading_slash() {
        let mut source = valid_source();
        source.site.base = "docs/".to_owned();

        let err = validate_err(&source);

        assert!(matches!(
            err,
            ValidationError::InvalidIdentity { field: "base", .. }
        ));
        assert!(err.to_string().contains("docs/"));
    }

    #[test]
    fn test_base_missing_trailing_slash() {
        let mut source = valid_source();
        source.site.base = "/docs".to_owned();

        assert!(matches!(
            validate_err(&source),
            ValidationError::InvalidIdentity { field: "base", .. }
        ));
    }

    #[test]
    fn test_base_empty_is_invalid() {
        let mut source = valid_source();
        source.site.base = String::new();

        assert!(matches!(
            validate_err(&source),
            ValidationError::InvalidIdentity { field: "base", .. }
        ));
    }

    #[test]
    fn test_root_base_is_valid() {
        let mut source = valid_source();
        source.site.base = "/".to_owned();

        assert_eq!(validate(&source, &icons()), Ok(()));
    }

    #[test]
    fn test_empty_title() {
        let mut source = valid_source();
        source.site.title = String::new();

        assert!(matches!(
            validate_err(&source),
            ValidationError::InvalidIdentity { field: "title", .. }
        ));
    }

    #[test]
    fn test_empty_description_is_valid() {
        let source = valid_source();

        assert!(source.site.description.is_empty());
        assert_eq!(validate(&source, &icons()), Ok(()));
    }

    #[test]
    fn test_base_checked_before_title() {
        let mut source = valid_source();
        source.site.base = "docs".to_owned();
        source.site.title = String::new();

        assert!(matches!(
            validate_err(&source),
            ValidationError::InvalidIdentity { field: "base", .. }
        ));
    }

    #[test]
    fn test_top_nav_duplicate_label() {
        let mut source = valid_source();
        source.nav.push(NavLink::new("Home", "/home"));

        assert_eq!(
            validate_err(&source),
            ValidationError::DuplicateLabel {
                scope: LabelScope::TopNav,
                label: "Home".to_owned(),
            }
        );
    }

    #[test]
    fn test_top_nav_empty_text() {
        let mut source = valid_source();
        source.nav.push(NavLink::new("", "/other"));

        assert_eq!(
            validate_err(&source),
            ValidationError::EmptyField {
                path: "nav[1].text".to_owned()
            }
        );
    }

    #[test]
    fn test_top_nav_empty_link() {
        let mut source = valid_source();
        source.nav[0].link = String::new();

        assert_eq!(
            validate_err(&source),
            ValidationError::EmptyField {
                path: "nav[0].link".to_owned()
            }
        );
    }

    #[test]
    fn test_sidebar_duplicate_label_references_group() {
        let mut source = valid_source();
        source.sidebar[0]
            .items
            .push(NavLink::new("Intro", "/guide/other"));

        let err = validate_err(&source);

        assert_eq!(
            err,
            ValidationError::DuplicateLabel {
                scope: LabelScope::SidebarGroup("Guide".to_owned()),
                label: "Intro".to_owned(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Duplicate label \"Intro\" in sidebar group \"Guide\""
        );
    }

    #[test]
    fn test_same_label_in_different_scopes_is_valid() {
        let mut source = valid_source();
        source.nav.push(NavLink::new("Intro", "/guide/intro"));
        source.sidebar.push(SidebarGroup::new(
            "Reference",
            vec![NavLink::new("Intro", "/reference/intro")],
        ));

        assert_eq!(validate(&source, &icons()), Ok(()));
    }

    #[test]
    fn test_duplicate_links_are_allowed() {
        let mut source = valid_source();
        source.sidebar[0]
            .items
            .push(NavLink::new("Introduction", "/guide/intro"));

        assert_eq!(validate(&source, &icons()), Ok(()));
    }

    #[test]
    fn test_empty_group() {
        let mut source = valid_source();
        source.sidebar.push(SidebarGroup::new("Empty", vec![]));

        let err = validate_err(&source);

        assert_eq!(
            err,
            ValidationError::EmptyGroup {
                index: 1,
                group: "Empty".to_owned(),
            }
        );
        assert!(err.to_string().contains("sidebar[1]"));
    }

    #[test]
    fn test_group_empty_heading() {
        let mut source = valid_source();
        source.sidebar[0].text = String::new();

        assert_eq!(
            validate_err(&source),
            ValidationError::EmptyField {
                path: "sidebar[0].text".to_owned()
            }
        );
    }

    #[test]
    fn test_group_item_empty_link() {
        let mut source = valid_source();
        source.sidebar[0].items.push(NavLink::new("Setup", ""));

        assert_eq!(
            validate_err(&source),
            ValidationError::EmptyField {
                path: "sidebar[0].items[1].link".to_owned()
            }
        );
    }

    #[test]
    fn test_groups_checked_in_declaration_order() {
        let mut source = valid_source();
        source.sidebar.insert(0, SidebarGroup::new("First", vec![]));
        source.sidebar[1]
            .items
            .push(NavLink::new("Intro", "/again"));

        assert!(matches!(
            validate_err(&source),
            ValidationError::EmptyGroup { index: 0, .. }
        ));
    }

    #[test]
    fn test_unknown_icon() {
        let mut source = valid_source();
        source
            .social_links
            .push(SocialLink::new("myspace", "https://myspace.com/docs"));

        assert_eq!(
            validate_err(&source),
            ValidationError::UnknownIcon {
                index: 0,
                icon: "myspace".to_owned(),
            }
        );
    }

    #[test]
    fn test_icon_check_is_delegated() {
        let mut source = valid_source();
        source
            .social_links
            .push(SocialLink::new("myspace", "https://myspace.com/docs"));

        let everything = |_: &str| true;

        assert_eq!(validate(&source, &everything), Ok(()));
    }

    #[test]
    fn test_relative_social_link_is_malformed() {
        let mut source = valid_source();
        source
            .social_links
            .push(SocialLink::new("github", "github.com/example"));

        assert!(matches!(
            validate_err(&source),
            ValidationError::MalformedUrl { index: 0, .. }
        ));
    }

    #[test]
    fn test_social_link_without_host_is_malformed() {
        let mut source = valid_source();
        source
            .social_links
            .push(SocialLink::new("github", "mailto:docs@example.com"));

        let err = validate_err(&source);

        assert!(matches!(err, ValidationError::MalformedUrl { .. }));
        assert!(err.to_string().contains("missing host"));
    }

    #[test]
    fn test_valid_social_link() {
        let mut source = valid_source();
        source
            .social_links
            .push(SocialLink::new("github", "https://github.com/example/docs"));

        assert_eq!(validate(&source, &icons()), Ok(()));
    }

    #[test]
    fn test_icon_checked_before_url() {
        let mut source = valid_source();
        source
            .social_links
            .push(SocialLink::new("myspace", "not a url"));

        assert!(matches!(
            validate_err(&source),
            ValidationError::UnknownIcon { .. }
        ));
    }
}
