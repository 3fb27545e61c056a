use crate::CoreResult;

/// Persisted boolean settings the applet reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Ask the tool for a sorted VM listing.
    Sort,
    /// Start VMs without a display.
    Headless,
    /// Start VMs with a detachable GUI.
    Detachable,
}

impl SettingKey {
    /// Key name in the settings store.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::Sort => "sort",
            SettingKey::Headless => "headless",
            SettingKey::Detachable => "detachable",
        }
    }
}

/// Boolean key/value store backing the launch and display policy.
///
/// No transactions: concurrent external edits are last-writer-wins.
pub trait SettingsStore {
    /// Current value of `key`.
    fn get_bool(&self, key: SettingKey) -> bool;

    /// Persist a new value for `key`.
    ///
    /// # Errors
    ///
    /// Returns error if the value could not be persisted.
    fn set_bool(&mut self, key: SettingKey, value: bool) -> CoreResult<()>;
}
