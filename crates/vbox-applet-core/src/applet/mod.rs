#[allow(clippy::module_inception)]
mod applet;
mod applet_context;
mod applet_task;
mod notifier;

pub use {
    applet::Applet,
    applet_context::{AppletContext, AppletTimings},
    applet_task::AppletTask,
    notifier::Notifier,
};

/// Display name used in notifications and tooltips.
pub const APPLET_NAME: &str = "VirtualBox applet";
