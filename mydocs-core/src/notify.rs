//! The seam between the journal core and whatever displays its progress.

/// Receives human readable notifications from journal operations.
///
/// Messages are plain text. Decorating them (colors, icons) is up to the implementor,
/// and nothing an implementor does can change the outcome of the operation.
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_info(&self, message: &str);
}

/// A [`Notifier`] that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify_success(&self, _message: &str) {}
    fn notify_info(&self, _message: &str) {}
}
