use goshawk_core::{ConfigResolver, ConfigStore, HarnessSettings, Overrides};
use std::path::Path;

pub mod capture;
pub mod completion;
pub mod config;

/// Load the config store and resolve the effective settings.
///
/// An absent config file degrades to an empty store so environment-only
/// runs still work; a present-but-broken file is an error.
pub(crate) fn load_settings(
    config_path: &Path,
    overrides: &Overrides<'_>,
) -> goshawk_core::Result<HarnessSettings> {
    let store = if config_path.exists() {
        ConfigStore::from_file(config_path)?
    } else {
        tracing::warn!(
            "Config file {} not found; relying on environment variables and defaults",
            config_path.display()
        );
        ConfigStore::empty()
    };

    let resolver = ConfigResolver::new(store);
    HarnessSettings::resolve(&resolver, overrides)
}
