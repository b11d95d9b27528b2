//! Ephemeral user-facing notifications.

use console::style;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Injected notification channel, the terminal counterpart of a toast.
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => eprintln!("{}", style(format!("✅ {message}")).green()),
            NotificationKind::Error => eprintln!("{}", style(format!("⛔ {message}")).red()),
        }
    }
}
