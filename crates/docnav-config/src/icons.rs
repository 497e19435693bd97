//! Icon identifiers recognized by the renderer.

use std::collections::BTreeSet;

/// Closed set of icon identifiers supplied by the rendering layer.
///
/// Social links are checked against a registry during construction; the
/// configuration itself never decides which icons exist.
pub trait IconRegistry {
    /// Whether `icon` names a known icon.
    fn is_known(&self, icon: &str) -> bool;
}

/// Set-backed [`IconRegistry`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconSet {
    icons: BTreeSet<String>,
}

impl IconSet {
    #[must_use]
    pub fn new<I, S>(icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            icons: icons.into_iter().map(Into::into).collect(),
        }
    }

    /// Known identifiers in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl IconRegistry for IconSet {
    fn is_known(&self, icon: &str) -> bool {
        self.icons.contains(icon)
    }
}

impl<F> IconRegistry for F
where
    F: Fn(&str) -> bool,
{
    fn is_known(&self, icon: &str) -> bool {
        self(icon)
    }
}
