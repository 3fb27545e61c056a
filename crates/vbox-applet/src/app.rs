use crate::{
    AppResult, DesktopNotifier, SystemProcessInvoker, TrayManager, TrayMenuRenderer,
    WmctrlWindowManager,
    config::{Config, ConfigStore},
};

use std::time::Instant;

use tracing::{debug, info, instrument};
use tray_icon::{TrayIconEvent, menu::Menu, menu::MenuEvent};
use vbox_applet_core::{Applet, AppletContext, SystemClock};

/// Main application state.
///
/// Lives on the main thread: the tray icon and its menu are `!Send`.
pub struct App {
    applet: Applet<TrayMenuRenderer, SystemClock>,
    _tray_manager: TrayManager,
}

impl App {
    /// Load configuration, create the tray icon and the applet.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let config_path = Config::config_path()?;
        let config = Config::load_from(&config_path)?;

        let invoker = SystemProcessInvoker::new()?;
        let windows = WmctrlWindowManager::new(invoker.clone(), config.tool.window_command.clone());
        let commands = config.tool.tool_commands();
        let timings = config.schedule.timings();

        let ctx = AppletContext {
            invoker: Box::new(invoker),
            settings: Box::new(ConfigStore::new(config, config_path)),
            windows: Box::new(windows),
            notifier: Box::new(DesktopNotifier),
            commands,
            timings,
        };

        let menu = Menu::new();
        let renderer = TrayMenuRenderer::new(menu.clone());
        let applet = Applet::new(ctx, renderer, SystemClock);
        let tray_manager = TrayManager::new(menu)?;

        info!("VirtualBox applet starting");

        Ok(Self {
            applet,
            _tray_manager: tray_manager,
        })
    }

    /// Route a clicked menu item to the applet.
    #[instrument(skip(self))]
    pub fn handle_menu_event(&mut self, event: MenuEvent) {
        let action = self.applet.menu().renderer().action_for(&event.id);

        match action {
            Some(action) => self.applet.handle_action(&action),
            None => debug!(id = ?event.id, "Click on inert menu item"),
        }
    }

    /// Clicking the icon opens the menu.
    pub fn handle_icon_event(&mut self, event: TrayIconEvent) {
        if let TrayIconEvent::Click { .. } = event {
            self.applet.on_visibility_changed(true);
        }
    }

    /// Run due tasks and return when to wake up next.
    pub fn tick(&mut self) -> Option<Instant> {
        self.applet.run_due_tasks();
        self.applet.next_deadline()
    }

    /// Remove the menu and cancel scheduled work.
    pub fn shutdown(&mut self) {
        self.applet.teardown();
        info!("VirtualBox applet shut down");
    }
}
