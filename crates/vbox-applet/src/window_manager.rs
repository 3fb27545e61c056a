//! VM window lookup and focus through `wmctrl`.

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, instrument};
use vbox_applet_core::{CoreError, CoreResult, ProcessInvoker, WindowInfo, WindowManager};

/// [`WindowManager`] driving the `wmctrl` command-line tool.
pub struct WmctrlWindowManager<P: ProcessInvoker> {
    invoker: P,
    command: String,
}

impl<P: ProcessInvoker> WmctrlWindowManager<P> {
    /// Use `command` (usually `wmctrl`) through `invoker`.
    pub fn new(invoker: P, command: impl Into<String>) -> Self {
        Self {
            invoker,
            command: command.into(),
        }
    }
}

impl<P: ProcessInvoker> WindowManager for WmctrlWindowManager<P> {
    #[track_caller]
    #[instrument(skip(self))]
    fn list_windows(&self) -> CoreResult<Vec<WindowInfo>> {
        let output = self
            .invoker
            .run_sync(&format!("{} -l", self.command))
            .map_err(|e| CoreError::WindowError {
                reason: format!("Failed to list windows: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let windows = parse_window_list(&output.stdout_text());
        debug!(count = windows.len(), "Windows listed");
        Ok(windows)
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn focus(&self, window: &WindowInfo) -> CoreResult<()> {
        let output = self
            .invoker
            .run_sync(&format!("{} -i -a {}", self.command, window.id))
            .map_err(|e| CoreError::WindowError {
                reason: format!("Failed to focus window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !output.success() {
            return Err(CoreError::WindowError {
                reason: format!(
                    "{} exited with {:?} activating {}",
                    self.command, output.status, window.id
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

/// Parse `wmctrl -l` output: `<id> <desktop> <host> <title...>`.
pub(crate) fn parse_window_list(raw: &str) -> Vec<WindowInfo> {
    raw.lines().filter_map(parse_window_line).collect()
}

fn parse_window_line(line: &str) -> Option<WindowInfo> {
    let mut rest = line;
    let mut fields = Vec::with_capacity(3);
    for _ in 0..3 {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        fields.push(&rest[..end]);
        rest = &rest[end..];
    }

    Some(WindowInfo {
        id: fields[0].to_string(),
        title: rest.trim().to_string(),
    })
}
