use crate::config::Config;

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use tracing::warn;
use vbox_applet_core::{CoreError, CoreResult, SettingKey, SettingsStore};

/// [`SettingsStore`] backed by the `[policy]` section of the config file.
///
/// Every write saves the whole file. The in-memory value changes even if
/// the save fails.
pub struct ConfigStore {
    config: Config,
    path: PathBuf,
}

impl ConfigStore {
    /// Wrap a loaded config and the path it is saved to.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }
}

impl SettingsStore for ConfigStore {
    fn get_bool(&self, key: SettingKey) -> bool {
        let policy = &self.config.policy;
        match key {
            SettingKey::Sort => policy.sort,
            SettingKey::Headless => policy.headless,
            SettingKey::Detachable => policy.detachable,
        }
    }

    #[track_caller]
    fn set_bool(&mut self, key: SettingKey, value: bool) -> CoreResult<()> {
        let policy = &mut self.config.policy;
        match key {
            SettingKey::Sort => policy.sort = value,
            SettingKey::Headless => policy.headless = value,
            SettingKey::Detachable => policy.detachable = value,
        }

        self.config.save_to(&self.path).map_err(|e| {
            warn!(key = key.as_str(), error = %e, "Failed to persist setting");
            CoreError::SettingsError {
                reason: format!("Failed to save `{}`: {}", key.as_str(), e),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
