use crate::{CoreResult, MenuEntry};

use std::fmt::Debug;

/// Widget toolkit port used by [`MenuReconciler`](crate::MenuReconciler).
///
/// Items are appended at the end of the menu. Handles are owned by the
/// toolkit; the reconciler only keeps them to update or remove items later.
pub trait MenuRenderer {
    /// Opaque reference to a rendered item.
    type Handle: Clone + Debug;

    /// Append an item at the end of the menu.
    ///
    /// # Errors
    ///
    /// Returns error if the toolkit rejects the item.
    fn append(&mut self, entry: &MenuEntry) -> CoreResult<Self::Handle>;

    /// Remove a previously appended item.
    ///
    /// # Errors
    ///
    /// Returns error if the toolkit fails to remove the item.
    fn remove(&mut self, handle: &Self::Handle) -> CoreResult<()>;

    /// Show or hide the "running" ornament on a VM item.
    ///
    /// # Errors
    ///
    /// Returns error if the toolkit fails to update the item.
    fn set_running_ornament(&mut self, handle: &Self::Handle, running: bool) -> CoreResult<()>;

    /// Update the check mark of a toggle item.
    ///
    /// # Errors
    ///
    /// Returns error if the toolkit fails to update the item.
    fn set_checked(&mut self, handle: &Self::Handle, checked: bool) -> CoreResult<()>;
}
