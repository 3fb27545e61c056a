/// User-visible notification surface.
pub trait Notifier {
    /// Show an error to the user. Delivery failures are the implementor's concern.
    fn notify_error(&self, summary: &str, body: &str);
}
