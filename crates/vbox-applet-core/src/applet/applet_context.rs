use crate::{Notifier, ProcessInvoker, SettingsStore, ToolCommands, WindowManager};

use std::time::Duration;

/// Delays used when the applet schedules its own work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppletTimings {
    /// Delay before the first population after start-up.
    pub initial_delay: Duration,
    /// Delay between a sort toggle and the repopulation it triggers.
    pub toggle_delay: Duration,
    /// Delay between the menu opening and the running-marker refresh.
    pub visibility_delay: Duration,
    /// Period of the background repopulation, `None` to disable.
    pub refresh_interval: Option<Duration>,
}

impl Default for AppletTimings {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(10),
            toggle_delay: Duration::from_millis(100),
            visibility_delay: Duration::from_millis(50),
            refresh_interval: None,
        }
    }
}

/// Everything the applet talks to outside itself.
pub struct AppletContext {
    /// Spawns the external tools.
    pub invoker: Box<dyn ProcessInvoker>,
    /// Persisted policy flags.
    pub settings: Box<dyn SettingsStore>,
    /// Window enumeration and focus.
    pub windows: Box<dyn WindowManager>,
    /// User-visible error reporting.
    pub notifier: Box<dyn Notifier>,
    /// External tool command lines.
    pub commands: ToolCommands,
    /// Scheduling delays.
    pub timings: AppletTimings,
}
