mod launch_mode;
mod policy_settings;
mod settings_policy;
mod settings_store;

pub use {
    launch_mode::LaunchMode, policy_settings::PolicySettings, settings_policy::SettingsPolicy,
    settings_store::{SettingKey, SettingsStore},
};
