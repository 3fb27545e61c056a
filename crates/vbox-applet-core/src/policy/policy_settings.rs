use crate::{LaunchMode, SettingKey, SettingsStore};

/// Snapshot of the persisted policy flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicySettings {
    /// Request a sorted VM listing.
    pub sort_enabled: bool,
    /// Start VMs headless.
    pub headless_enabled: bool,
    /// Start VMs with a detachable frontend.
    pub detachable_enabled: bool,
}

impl PolicySettings {
    /// Read all flags from the store.
    pub fn read(store: &dyn SettingsStore) -> Self {
        Self {
            sort_enabled: store.get_bool(SettingKey::Sort),
            headless_enabled: store.get_bool(SettingKey::Headless),
            detachable_enabled: store.get_bool(SettingKey::Detachable),
        }
    }

    /// Launch mode implied by these flags. Headless wins over detachable.
    pub fn launch_mode(&self) -> LaunchMode {
        if self.headless_enabled {
            LaunchMode::Headless
        } else if self.detachable_enabled {
            LaunchMode::Separate
        } else {
            LaunchMode::Default
        }
    }
}
