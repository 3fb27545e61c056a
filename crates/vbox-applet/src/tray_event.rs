use tray_icon::{TrayIconEvent, menu::MenuEvent};

/// Events forwarded from tray-icon's global handlers into the tao event loop.
///
/// The applet lives on the main thread, so every tray interaction is
/// delivered to it through this enum.
#[derive(Debug)]
pub enum TrayEvent {
    /// A menu item was clicked.
    Menu(MenuEvent),
    /// The tray icon itself was interacted with.
    Icon(TrayIconEvent),
}
