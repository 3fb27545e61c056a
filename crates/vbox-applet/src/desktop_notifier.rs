use notify_rust::Notification;
use tracing::warn;
use vbox_applet_core::Notifier;

/// [`Notifier`] showing desktop notifications.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify_error(&self, summary: &str, body: &str) {
        if let Err(e) = Notification::new()
            .appname(summary)
            .summary(summary)
            .body(body)
            .icon("dialog-error")
            .show()
        {
            warn!(error = %e, "Failed to show notification");
        }
    }
}
