//! [`MenuRenderer`] on top of the tray-icon menu.

use std::{collections::HashMap, panic::Location};

use error_location::ErrorLocation;
use tracing::debug;
use tray_icon::menu::{CheckMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use vbox_applet_core::{CoreError, CoreResult, MenuAction, MenuEntry, MenuRenderer};

enum TrayWidget {
    Plain(MenuItem),
    Check { item: CheckMenuItem, checked: bool },
    Separator(PredefinedMenuItem),
}

struct RenderedItem {
    widget: TrayWidget,
    action: Option<MenuAction>,
}

/// Renders applet menu entries into a tray-icon [`Menu`].
///
/// VM entries are check items whose check mark is the running ornament.
pub struct TrayMenuRenderer {
    menu: Menu,
    items: HashMap<MenuId, RenderedItem>,
}

impl TrayMenuRenderer {
    /// Render into `menu`.
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            items: HashMap::new(),
        }
    }

    /// Action bound to a clicked item.
    ///
    /// The toolkit flips a check item's mark on click; the mark is put back
    /// to the last state the applet set, so only the applet decides it.
    pub fn action_for(&self, id: &MenuId) -> Option<MenuAction> {
        let rendered = self.items.get(id)?;
        if let TrayWidget::Check { item, checked } = &rendered.widget {
            item.set_checked(*checked);
        }
        rendered.action.clone()
    }

    #[track_caller]
    fn lookup(&mut self, id: &MenuId) -> CoreResult<&mut RenderedItem> {
        self.items.get_mut(id).ok_or_else(|| CoreError::MenuError {
            reason: format!("Unknown menu item {:?}", id),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn set_check(&mut self, id: &MenuId, value: bool) -> CoreResult<()> {
        match &mut self.lookup(id)?.widget {
            TrayWidget::Check { item, checked } => {
                item.set_checked(value);
                *checked = value;
                Ok(())
            }
            TrayWidget::Plain(_) | TrayWidget::Separator(_) => Err(CoreError::MenuError {
                reason: format!("Menu item {:?} has no check mark", id),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl MenuRenderer for TrayMenuRenderer {
    type Handle = MenuId;

    #[track_caller]
    fn append(&mut self, entry: &MenuEntry) -> CoreResult<MenuId> {
        let widget = match entry {
            MenuEntry::Placeholder { label } => {
                TrayWidget::Plain(MenuItem::new(label, false, None))
            }
            MenuEntry::Action {
                label,
                action: MenuAction::StartVm { .. },
            } => TrayWidget::Check {
                item: CheckMenuItem::new(label, true, false, None),
                checked: false,
            },
            MenuEntry::Action { label, .. } => TrayWidget::Plain(MenuItem::new(label, true, None)),
            MenuEntry::Toggle { label, checked, .. } => TrayWidget::Check {
                item: CheckMenuItem::new(label, true, *checked, None),
                checked: *checked,
            },
            MenuEntry::Separator => TrayWidget::Separator(PredefinedMenuItem::separator()),
        };

        let (id, result) = match &widget {
            TrayWidget::Plain(item) => (item.id().clone(), self.menu.append(item)),
            TrayWidget::Check { item, .. } => (item.id().clone(), self.menu.append(item)),
            TrayWidget::Separator(item) => (item.id().clone(), self.menu.append(item)),
        };
        result.map_err(|e| CoreError::MenuError {
            reason: format!("Failed to append menu item: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.items.insert(
            id.clone(),
            RenderedItem {
                widget,
                action: entry.menu_action().cloned(),
            },
        );

        Ok(id)
    }

    #[track_caller]
    fn remove(&mut self, handle: &MenuId) -> CoreResult<()> {
        let rendered = self.items.remove(handle).ok_or_else(|| CoreError::MenuError {
            reason: format!("Unknown menu item {:?}", handle),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let result = match &rendered.widget {
            TrayWidget::Plain(item) => self.menu.remove(item),
            TrayWidget::Check { item, .. } => self.menu.remove(item),
            TrayWidget::Separator(item) => self.menu.remove(item),
        };
        result.map_err(|e| CoreError::MenuError {
            reason: format!("Failed to remove menu item: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(id = ?handle, "Menu item removed");
        Ok(())
    }

    #[track_caller]
    fn set_running_ornament(&mut self, handle: &MenuId, running: bool) -> CoreResult<()> {
        self.set_check(handle, running)
    }

    #[track_caller]
    fn set_checked(&mut self, handle: &MenuId, checked: bool) -> CoreResult<()> {
        self.set_check(handle, checked)
    }
}
