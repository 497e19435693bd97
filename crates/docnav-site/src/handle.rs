//! Shared handle to the active site configuration.

use std::path::Path;
use std::sync::{Arc, Mutex, RwLock};

use docnav_config::{CliSettings, ConfigError, IconRegistry, SiteConfig};

/// Active site configuration shared by rendering workers.
///
/// # Thread Safety
///
/// Readers take an `Arc<SiteConfig>` snapshot and never hold a lock while
/// rendering:
/// - Uses internal `RwLock<Arc<SiteConfig>>` for the current snapshot
/// - Uses `Mutex<()>` for serializing reload operations
///
/// A configuration is never modified in place. Reloading builds and
/// validates a complete replacement before swapping it in.
pub struct SiteHandle {
    /// Mutex for serializing reload operations.
    reload_lock: Mutex<()>,
    /// Current config snapshot (atomically swappable).
    current: RwLock<Arc<SiteConfig>>,
}

impl SiteHandle {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            reload_lock: Mutex::new(()),
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Get current config snapshot.
    ///
    /// The snapshot stays valid after a later [`replace`](Self::replace).
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn current(&self) -> Arc<SiteConfig> {
        Arc::clone(&self.current.read().unwrap())
    }

    /// Swap in a new config, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn replace(&self, config: SiteConfig) -> Arc<SiteConfig> {
        let next = Arc::new(config);
        std::mem::replace(&mut *self.current.write().unwrap(), next)
    }

    /// Load a new config and swap it in if it is valid.
    ///
    /// Without `config_path`, reloads from the file the current config was
    /// loaded from (or auto-discovers one). On failure the current config
    /// stays active.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] that prevented the new config from loading.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn reload(
        &self,
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
        icons: &dyn IconRegistry,
    ) -> Result<Arc<SiteConfig>, ConfigError> {
        let _guard = self.reload_lock.lock().unwrap();

        let previous = self.current();
        let path = config_path.or_else(|| previous.config_path());

        match SiteConfig::load(path, cli_settings, icons) {
            Ok(config) => {
                let config = Arc::new(config);
                *self.current.write().unwrap() = Arc::clone(&config);
                tracing::info!(title = %config.identity().title, "Reloaded site config");
                Ok(config)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected site config reload");
                Err(e)
            }
        }
    }
}
