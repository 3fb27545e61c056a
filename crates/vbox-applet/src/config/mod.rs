#[allow(clippy::module_inception)]
mod config;
mod config_store;
mod policy_config;
mod schedule_config;
mod tool_config;

pub(crate) use {
    config::Config, config_store::ConfigStore, policy_config::PolicyConfig,
    schedule_config::ScheduleConfig, tool_config::ToolConfig,
};

use directories::ProjectDirs;

pub(crate) const DEFAULT_MANAGE_COMMAND: &str = "vboxmanage";
pub(crate) const DEFAULT_GUI_COMMAND: &str = "virtualbox";
pub(crate) const DEFAULT_WINDOW_COMMAND: &str = "wmctrl";
pub(crate) const DEFAULT_INITIAL_DELAY_SECS: u64 = 10;
pub(crate) const DEFAULT_TOGGLE_DELAY_MS: u64 = 100;
pub(crate) const DEFAULT_VISIBILITY_DELAY_MS: u64 = 50;

pub(crate) fn default_manage_command() -> String {
    DEFAULT_MANAGE_COMMAND.to_string()
}

pub(crate) fn default_gui_command() -> String {
    DEFAULT_GUI_COMMAND.to_string()
}

pub(crate) fn default_window_command() -> String {
    DEFAULT_WINDOW_COMMAND.to_string()
}

pub(crate) fn default_initial_delay_secs() -> u64 {
    DEFAULT_INITIAL_DELAY_SECS
}

pub(crate) fn default_toggle_delay_ms() -> u64 {
    DEFAULT_TOGGLE_DELAY_MS
}

pub(crate) fn default_visibility_delay_ms() -> u64 {
    DEFAULT_VISIBILITY_DELAY_MS
}

/// Platform directories for config and logs.
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "vbox-applet", "VBox-Applet")
}
