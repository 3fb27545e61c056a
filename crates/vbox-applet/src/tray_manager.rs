//! System tray icon hosting the applet menu.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::Menu;
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};
use vbox_applet_core::APPLET_NAME;

/// Owns the tray icon. Dropping it removes the icon from the status area.
pub struct TrayManager {
    _tray_icon: TrayIcon,
}

impl TrayManager {
    /// Create the tray icon showing `menu`.
    #[track_caller]
    #[instrument(skip(menu))]
    pub fn new(menu: Menu) -> AppResult<Self> {
        let icon = Self::load_icon()?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(APPLET_NAME)
            .with_menu(Box::new(menu))
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            _tray_icon: tray_icon,
        })
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon() -> AppResult<Icon> {
        let png_bytes: &[u8] = include_bytes!("../resources/icons/vbox.png");

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::TrayError {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
