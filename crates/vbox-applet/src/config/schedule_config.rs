use crate::config::{
    default_initial_delay_secs, default_toggle_delay_ms, default_visibility_delay_ms,
};

use std::time::Duration;

use serde::{Deserialize, Serialize};
use vbox_applet_core::AppletTimings;

/// Delays for the applet's deferred work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Seconds to wait before the first population.
    #[serde(default = "default_initial_delay_secs")]
    pub initial_delay_secs: u64,
    /// Milliseconds between a sort toggle and the rebuild.
    #[serde(default = "default_toggle_delay_ms")]
    pub toggle_delay_ms: u64,
    /// Milliseconds between the menu opening and the running check.
    #[serde(default = "default_visibility_delay_ms")]
    pub visibility_delay_ms: u64,
    /// Seconds between background rebuilds, 0 disables them.
    #[serde(default)]
    pub refresh_interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            initial_delay_secs: default_initial_delay_secs(),
            toggle_delay_ms: default_toggle_delay_ms(),
            visibility_delay_ms: default_visibility_delay_ms(),
            refresh_interval_secs: 0,
        }
    }
}

impl ScheduleConfig {
    /// Delays as used by the applet.
    pub fn timings(&self) -> AppletTimings {
        AppletTimings {
            initial_delay: Duration::from_secs(self.initial_delay_secs),
            toggle_delay: Duration::from_millis(self.toggle_delay_ms),
            visibility_delay: Duration::from_millis(self.visibility_delay_ms),
            refresh_interval: (self.refresh_interval_secs > 0)
                .then(|| Duration::from_secs(self.refresh_interval_secs)),
        }
    }
}
