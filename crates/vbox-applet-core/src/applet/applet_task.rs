/// Deferred work the applet schedules on its own task queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppletTask {
    /// Query the VM list and rebuild the menu.
    Populate,
    /// Query running VMs and update the menu markers.
    RefreshRunning,
}
