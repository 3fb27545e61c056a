//! Toggle rules for the persisted policy flags.
//!
//! A headless launch is always detachable in VirtualBox's model, so
//! enabling headless enables detachable, and disabling detachable disables
//! headless. The reverse transitions leave the companion flag alone.

use crate::{CoreResult, LaunchMode, PolicySettings, SettingKey, SettingsStore};

use tracing::{info, instrument};

/// Applies toggle and consistency rules on top of a [`SettingsStore`].
pub struct SettingsPolicy<'a> {
    store: &'a mut dyn SettingsStore,
}

impl<'a> SettingsPolicy<'a> {
    /// Wrap a settings store.
    pub fn new(store: &'a mut dyn SettingsStore) -> Self {
        Self { store }
    }

    /// Current flags.
    pub fn settings(&self) -> PolicySettings {
        PolicySettings::read(&*self.store)
    }

    /// Launch mode evaluated now, never cached.
    pub fn launch_mode(&self) -> LaunchMode {
        self.settings().launch_mode()
    }

    /// Flip `sort`. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns error if the store write fails.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) -> CoreResult<bool> {
        let (sort, written) = self.flip(SettingKey::Sort);
        written.map(|()| sort)
    }

    /// Flip `headless`; turning it on also turns on `detachable`.
    ///
    /// The companion write is attempted even if the first write failed.
    ///
    /// # Errors
    ///
    /// Returns the first store write error.
    #[instrument(skip(self))]
    pub fn toggle_headless(&mut self) -> CoreResult<bool> {
        let (headless, written) = self.flip(SettingKey::Headless);
        let companion = if headless {
            self.store.set_bool(SettingKey::Detachable, true)
        } else {
            Ok(())
        };
        written.and(companion)?;
        Ok(headless)
    }

    /// Flip `detachable`; turning it off also turns off `headless`.
    ///
    /// The companion write is attempted even if the first write failed.
    ///
    /// # Errors
    ///
    /// Returns the first store write error.
    #[instrument(skip(self))]
    pub fn toggle_detachable(&mut self) -> CoreResult<bool> {
        let (detachable, written) = self.flip(SettingKey::Detachable);
        let companion = if detachable {
            Ok(())
        } else {
            self.store.set_bool(SettingKey::Headless, false)
        };
        written.and(companion)?;
        Ok(detachable)
    }

    /// Overwrite `detachable` with `headless` when they disagree.
    ///
    /// Returns `true` if a repair was written.
    ///
    /// # Errors
    ///
    /// Returns error if the store write fails.
    #[instrument(skip(self))]
    pub fn repair_consistency(&mut self) -> CoreResult<bool> {
        let settings = self.settings();
        if settings.headless_enabled == settings.detachable_enabled {
            return Ok(false);
        }

        self.store
            .set_bool(SettingKey::Detachable, settings.headless_enabled)?;
        info!(
            headless = settings.headless_enabled,
            "Detachable flag realigned with headless"
        );
        Ok(true)
    }

    /// Flip `key`, returning the new value and the outcome of the write.
    fn flip(&mut self, key: SettingKey) -> (bool, CoreResult<()>) {
        let value = !self.store.get_bool(key);
        let written = self.store.set_bool(key, value);
        info!(key = key.as_str(), value, "Setting toggled");
        (value, written)
    }
}
