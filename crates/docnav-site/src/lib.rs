//! Navigation rendering support for docnav.
//!
//! This crate provides:
//! - [`SiteHandle`]: The active [`SiteConfig`](docnav_config::SiteConfig),
//!   swappable as a whole
//! - [`Navigation`]: Per-page navigation view with active entries marked
//! - [`builtin_icons`]: The icon set the renderer can draw
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docnav_config::SiteConfig;
//! use docnav_site::{Navigation, SiteHandle, builtin_icons};
//!
//! let icons = builtin_icons();
//! let config = SiteConfig::load(None, None, &icons)?;
//! let handle = SiteHandle::new(config);
//!
//! let nav = Navigation::build(&handle.current(), "/guide/intro");
//! # Ok(())
//! # }
//! ```

mod handle;
mod icons;
mod navigation;

pub use handle::SiteHandle;
pub use icons::{BUILTIN_ICONS, builtin_icons};
pub use navigation::{NavItem, Navigation, SidebarSection, SocialItem, resolve_href, site_path};
