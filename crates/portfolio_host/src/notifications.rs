//! Notification (toast) service contracts and adapters.

use std::cell::RefCell;

/// Host service for short user-visible notifications.
pub trait Notifier {
    /// Shows `message` to the user.
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notifier for unsupported targets.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str) {}
}

#[derive(Debug, Default)]
/// Notifier that records every message in order.
pub struct MemoryNotifier {
    messages: RefCell<Vec<String>>,
}

impl MemoryNotifier {
    /// Returns the recorded messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
