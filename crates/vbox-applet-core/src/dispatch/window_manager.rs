use crate::CoreResult;

/// A top-level window as reported by the windowing system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    /// Windowing-system identifier.
    pub id: String,
    /// Window title.
    pub title: String,
}

/// Window enumeration and focus port.
pub trait WindowManager {
    /// All currently open top-level windows, in stacking order.
    ///
    /// # Errors
    ///
    /// Returns error if the windows cannot be enumerated.
    fn list_windows(&self) -> CoreResult<Vec<WindowInfo>>;

    /// Raise and focus a window.
    ///
    /// # Errors
    ///
    /// Returns error if the window cannot be activated.
    fn focus(&self, window: &WindowInfo) -> CoreResult<()>;
}
