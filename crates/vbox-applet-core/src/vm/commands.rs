use crate::LaunchMode;

/// Command lines understood by the external VirtualBox tools.
///
/// Flag spelling is a compatibility contract with the installed tool version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommands {
    /// Management CLI, e.g. `vboxmanage`.
    pub manage_command: String,
    /// Standalone GUI launcher, e.g. `virtualbox`.
    pub gui_command: String,
}

impl Default for ToolCommands {
    fn default() -> Self {
        Self {
            manage_command: "vboxmanage".to_string(),
            gui_command: "virtualbox".to_string(),
        }
    }
}

impl ToolCommands {
    /// `<tool> list [--sorted] vms`
    pub fn list_vms(&self, sorted: bool) -> String {
        if sorted {
            format!("{} list --sorted vms", self.manage_command)
        } else {
            format!("{} list vms", self.manage_command)
        }
    }

    /// `<tool> list runningvms`
    pub fn list_running_vms(&self) -> String {
        format!("{} list runningvms", self.manage_command)
    }

    /// `<tool> startvm <id> [--type headless|separate]`
    pub fn start_vm(&self, id: &str, mode: LaunchMode) -> String {
        let mut command = format!("{} startvm {}", self.manage_command, shell_words::quote(id));
        if let Some(kind) = mode.type_argument() {
            command.push_str(" --type ");
            command.push_str(kind);
        }
        command
    }

    /// The standalone GUI with no arguments.
    pub fn launch_application(&self) -> String {
        self.gui_command.clone()
    }
}
