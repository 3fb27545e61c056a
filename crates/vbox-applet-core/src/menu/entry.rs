/// What happens when the user activates a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Start the VM, or focus its window if it is already running.
    StartVm {
        /// Display name, used to find the VM's window.
        name: String,
        /// Tool identifier.
        id: String,
    },
    /// Re-query and rebuild the menu.
    Refresh,
    /// Flip the sort policy.
    ToggleSort,
    /// Flip the headless policy.
    ToggleHeadless,
    /// Flip the detachable policy.
    ToggleDetachable,
    /// Open the standalone VirtualBox GUI.
    LaunchApplication,
}

/// Toolkit-agnostic description of a menu item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Inert item shown until the first listing arrives.
    Placeholder {
        /// Text shown.
        label: String,
    },
    /// Clickable item.
    Action {
        /// Text shown.
        label: String,
        /// Action fired on click.
        action: MenuAction,
    },
    /// Item with an on/off check mark.
    Toggle {
        /// Text shown.
        label: String,
        /// Action fired on click.
        action: MenuAction,
        /// Initial check state.
        checked: bool,
    },
    /// Visual separator.
    Separator,
}

impl MenuEntry {
    /// Clickable item.
    pub fn action(label: impl Into<String>, action: MenuAction) -> Self {
        MenuEntry::Action {
            label: label.into(),
            action,
        }
    }

    /// Toggle item.
    pub fn toggle(label: impl Into<String>, action: MenuAction, checked: bool) -> Self {
        MenuEntry::Toggle {
            label: label.into(),
            action,
            checked,
        }
    }

    /// Action fired when this entry is activated, if any.
    pub fn menu_action(&self) -> Option<&MenuAction> {
        match self {
            MenuEntry::Action { action, .. } | MenuEntry::Toggle { action, .. } => Some(action),
            MenuEntry::Placeholder { .. } | MenuEntry::Separator => None,
        }
    }
}
