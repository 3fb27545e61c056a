mod entry;
mod reconciler;
mod renderer;

pub use {
    entry::{MenuAction, MenuEntry},
    reconciler::{MenuItemBinding, MenuReconciler},
    renderer::MenuRenderer,
};

/// Label of the item shown before the first successful population.
pub const PLACEHOLDER_LABEL: &str = "...";
/// Label of the refresh action.
pub const REFRESH_LABEL: &str = "Refresh";
/// Label of the sort toggle.
pub const SORT_LABEL: &str = "Sort";
/// Label of the headless toggle.
pub const HEADLESS_LABEL: &str = "Headless";
/// Label of the detachable toggle.
pub const DETACHABLE_LABEL: &str = "Detachable";
/// Label of the standalone GUI launcher.
pub const LAUNCH_APPLICATION_LABEL: &str = "Launch application\u{2026}";
