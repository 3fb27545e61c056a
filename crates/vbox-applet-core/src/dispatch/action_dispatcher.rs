use crate::{
    CoreResult, LaunchMode, ProcessInvoker, RunningStateTracker, ToolCommands, WindowInfo,
    WindowManager,
};

use tracing::{info, instrument, warn};

/// Marker every VirtualBox VM window carries in its title.
const VM_WINDOW_MARKER: &str = "virtualbox";

/// Outcome of activating a VM item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The VM was stopped and a start command was spawned.
    Started,
    /// The VM was running and its window was focused.
    Focused(WindowInfo),
    /// The VM was running but no matching window was found.
    NoWindow,
}

/// Decides between starting a VM and focusing its window.
pub struct ActionDispatcher<'a> {
    invoker: &'a dyn ProcessInvoker,
    windows: &'a dyn WindowManager,
    commands: &'a ToolCommands,
}

impl<'a> ActionDispatcher<'a> {
    /// Create a dispatcher over the given collaborators.
    pub fn new(
        invoker: &'a dyn ProcessInvoker,
        windows: &'a dyn WindowManager,
        commands: &'a ToolCommands,
    ) -> Self {
        Self {
            invoker,
            windows,
            commands,
        }
    }

    /// Focus the VM's window if it is running, otherwise start it.
    ///
    /// `launch_mode` is applied only when the VM is started.
    ///
    /// # Errors
    ///
    /// Returns error if the start command cannot be spawned or windows
    /// cannot be enumerated or focused.
    #[instrument(skip(self, tracker))]
    pub fn activate(
        &self,
        tracker: &RunningStateTracker<'_>,
        name: &str,
        id: &str,
        launch_mode: LaunchMode,
    ) -> CoreResult<Activation> {
        if tracker.is_running(id) {
            return self.focus_vm_window(name);
        }

        self.invoker
            .run_async(&self.commands.start_vm(id, launch_mode))?;
        info!(vm_id = %id, ?launch_mode, "VM start requested");

        Ok(Activation::Started)
    }

    /// Spawn the standalone VirtualBox GUI.
    ///
    /// # Errors
    ///
    /// Returns error if the GUI cannot be spawned.
    #[instrument(skip(self))]
    pub fn launch_application(&self) -> CoreResult<()> {
        self.invoker
            .run_async(&self.commands.launch_application())?;
        info!("VirtualBox application launched");
        Ok(())
    }

    fn focus_vm_window(&self, name: &str) -> CoreResult<Activation> {
        let windows = self.windows.list_windows()?;

        match windows
            .into_iter()
            .find(|window| is_vm_window(&window.title, name))
        {
            Some(window) => {
                self.windows.focus(&window)?;
                info!(window_id = %window.id, title = %window.title, "VM window focused");
                Ok(Activation::Focused(window))
            }
            None => {
                warn!(vm_name = %name, "VM is running but no window matched");
                Ok(Activation::NoWindow)
            }
        }
    }
}

/// Titles look like `<name> [Running] - Oracle VirtualBox`; the name prefix
/// is case-sensitive, the marker is not.
fn is_vm_window(title: &str, name: &str) -> bool {
    title.starts_with(name) && title.to_lowercase().contains(VM_WINDOW_MARKER)
}
