use crate::config::{default_gui_command, default_manage_command, default_window_command};

use serde::{Deserialize, Serialize};
use vbox_applet_core::ToolCommands;

/// External programs the applet runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// VirtualBox management CLI.
    #[serde(default = "default_manage_command")]
    pub manage_command: String,
    /// VirtualBox GUI launcher.
    #[serde(default = "default_gui_command")]
    pub gui_command: String,
    /// Window control tool used to list and focus VM windows.
    #[serde(default = "default_window_command")]
    pub window_command: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            manage_command: default_manage_command(),
            gui_command: default_gui_command(),
            window_command: default_window_command(),
        }
    }
}

impl ToolConfig {
    /// Command lines for the VirtualBox tools.
    pub fn tool_commands(&self) -> ToolCommands {
        ToolCommands {
            manage_command: self.manage_command.clone(),
            gui_command: self.gui_command.clone(),
        }
    }
}
