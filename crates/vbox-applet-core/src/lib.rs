//! VirtualBox applet core library
//!
//! Toolkit-agnostic engine behind the VirtualBox tray applet: runs
//! `vboxmanage`, parses its VM listings, keeps a menu in step with them and
//! decides whether activating a VM starts it or focuses its window.
//!
//! The widget toolkit, settings store, window manager, notifications and
//! process spawning are all injected through traits.
//!
//! # Example
//!
//! ```no_run
//! use vbox_applet_core::{ProcessInvoker, ToolCommands, VmQuery, CoreResult};
//!
//! fn print_vms(invoker: &dyn ProcessInvoker) -> CoreResult<()> {
//!     let commands = ToolCommands::default();
//!     for vm in VmQuery::new(invoker, &commands).list_vms(true)? {
//!         println!("{} ({})", vm.name, vm.id);
//!     }
//!     Ok(())
//! }
//! ```

mod applet;
mod dispatch;
mod error;
mod menu;
mod policy;
mod process;
mod schedule;
mod vm;

pub use {
    applet::{APPLET_NAME, Applet, AppletContext, AppletTask, AppletTimings, Notifier},
    dispatch::{ActionDispatcher, Activation, WindowInfo, WindowManager},
    error::{CoreError, Result as CoreResult},
    menu::{
        DETACHABLE_LABEL, HEADLESS_LABEL, LAUNCH_APPLICATION_LABEL, MenuAction, MenuEntry,
        MenuItemBinding, MenuReconciler, MenuRenderer, PLACEHOLDER_LABEL, REFRESH_LABEL,
        SORT_LABEL,
    },
    policy::{LaunchMode, PolicySettings, SettingKey, SettingsPolicy, SettingsStore},
    process::{ProcessInvoker, ProcessOutput, split_command_line},
    schedule::{Clock, SystemClock, TaskHandle, TaskQueue, VirtualClock},
    vm::{RunningStateTracker, ToolCommands, VmQuery, VmRecord, parse_vm_list},
};

#[cfg(test)]
mod tests;
