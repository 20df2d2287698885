//! Toast notifier shown over the terminal.

use std::{cell::Cell, time::Duration};

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::{logging, set_timeout_with_handle, RwSignal, SignalSet};
use portfolio_host::Notifier;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Notifier that shows the latest message and hides it after [`TOAST_DURATION`].
pub struct ToastNotifier {
    message: RwSignal<String>,
    visible: RwSignal<bool>,
    timer: Cell<Option<TimeoutHandle>>,
}

impl ToastNotifier {
    /// Creates a notifier writing to the given toast signals.
    pub fn new(message: RwSignal<String>, visible: RwSignal<bool>) -> Self {
        Self {
            message,
            visible,
            timer: Cell::new(None),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        self.message.set(message.to_string());
        self.visible.set(true);
        if let Some(timer) = self.timer.take() {
            timer.clear();
        }

        let visible = self.visible;
        match set_timeout_with_handle(move || visible.set(false), TOAST_DURATION) {
            Ok(timer) => self.timer.set(Some(timer)),
            Err(err) => logging::warn!("toast timer failed: {err:?}"),
        }
    }
}
