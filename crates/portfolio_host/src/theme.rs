//! Theme capability exposed to commands and its persisted, announced controller.

use std::{cell::Cell, rc::Rc};

use shell_contract::Theme;

use crate::{Notifier, PrefsStore};

/// Preference key holding the stored theme id.
pub const THEME_PREF_KEY: &str = "terminal-theme";

/// Read and change the active theme.
pub trait ThemeService {
    /// Returns the active theme.
    fn get(&self) -> Theme;

    /// Activates `theme`.
    fn set(&self, theme: Theme);

    /// Activates the opposite of the current theme.
    fn toggle(&self) {
        self.set(self.get().opposite());
    }
}

/// Hook that makes a theme visible (document attribute, toggle label, ...).
pub type ThemeApplyHook = Rc<dyn Fn(Theme)>;

/// Hook told about preference storage failures.
pub type PrefsFailureHook = Rc<dyn Fn(&str)>;

/// Theme controller that persists choices and announces changes.
pub struct ThemeController {
    active: Cell<Theme>,
    store: Rc<dyn PrefsStore>,
    notifier: Rc<dyn Notifier>,
    apply: ThemeApplyHook,
    on_prefs_failure: PrefsFailureHook,
}

impl ThemeController {
    /// Creates a controller whose initial theme is the stored value, else `preferred`.
    ///
    /// Nothing is applied until [`ThemeController::apply_initial`] runs. Storage failures are
    /// handed to `on_prefs_failure` and never block a theme change.
    pub fn new(
        store: Rc<dyn PrefsStore>,
        notifier: Rc<dyn Notifier>,
        preferred: Theme,
        apply: ThemeApplyHook,
        on_prefs_failure: PrefsFailureHook,
    ) -> Self {
        let stored = match store.load_pref(THEME_PREF_KEY) {
            Ok(raw) => raw.and_then(|raw| raw.parse::<Theme>().ok()),
            Err(err) => {
                on_prefs_failure(&format!("theme load failed: {err}"));
                None
            }
        };
        Self {
            active: Cell::new(stored.unwrap_or(preferred)),
            store,
            notifier,
            apply,
            on_prefs_failure,
        }
    }

    /// Applies the initial theme without persisting or announcing it.
    pub fn apply_initial(&self) {
        (self.apply)(self.active.get());
    }

    fn activate(&self, theme: Theme) {
        let changed = theme != self.active.get();
        self.active.set(theme);
        if changed {
            (self.apply)(theme);
        }
        // Storage failures leave the in-memory theme active.
        if let Err(err) = self.store.save_pref(THEME_PREF_KEY, theme.as_str()) {
            (self.on_prefs_failure)(&format!("theme save failed: {err}"));
        }
        if changed {
            self.notifier.notify(&format!("theme: {theme}"));
        }
    }
}

impl ThemeService for ThemeController {
    fn get(&self) -> Theme {
        self.active.get()
    }

    fn set(&self, theme: Theme) {
        self.activate(theme);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{MemoryNotifier, MemoryPrefsStore};

    struct Harness {
        store: MemoryPrefsStore,
        notifier: Rc<MemoryNotifier>,
        applied: Rc<RefCell<Vec<Theme>>>,
        failures: Rc<RefCell<Vec<String>>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                store: MemoryPrefsStore::default(),
                notifier: Rc::new(MemoryNotifier::default()),
                applied: Rc::new(RefCell::new(Vec::new())),
                failures: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn controller(&self, preferred: Theme) -> ThemeController {
            self.controller_with_store(Rc::new(self.store.clone()), preferred)
        }

        fn controller_with_store(
            &self,
            store: Rc<dyn PrefsStore>,
            preferred: Theme,
        ) -> ThemeController {
            let applied = self.applied.clone();
            let failures = self.failures.clone();
            ThemeController::new(
                store,
                self.notifier.clone(),
                preferred,
                Rc::new(move |theme: Theme| applied.borrow_mut().push(theme)),
                Rc::new(move |message: &str| failures.borrow_mut().push(message.to_string())),
            )
        }
    }

    struct QuotaExceededStore;

    impl PrefsStore for QuotaExceededStore {
        fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
            Err("storage disabled".to_string())
        }

        fn save_pref(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("quota exceeded".to_string())
        }
    }

    #[test]
    fn initial_theme_prefers_stored_value() {
        let harness = Harness::new();
        harness.store.save_pref(THEME_PREF_KEY, "light").expect("save");
        assert_eq!(harness.controller(Theme::Dark).get(), Theme::Light);
    }

    #[test]
    fn initial_theme_falls_back_to_preferred_scheme() {
        let harness = Harness::new();
        harness.store.save_pref(THEME_PREF_KEY, "sepia").expect("save");
        assert_eq!(harness.controller(Theme::Dark).get(), Theme::Dark);
    }

    #[test]
    fn initial_application_neither_persists_nor_announces() {
        let harness = Harness::new();
        let controller = harness.controller(Theme::Dark);
        controller.apply_initial();
        assert_eq!(*harness.applied.borrow(), vec![Theme::Dark]);
        assert_eq!(harness.store.load_pref(THEME_PREF_KEY).expect("load"), None);
        assert!(harness.notifier.messages().is_empty());
    }

    #[test]
    fn toggle_persists_and_announces_changes() {
        let harness = Harness::new();
        let controller = harness.controller(Theme::Dark);
        controller.toggle();
        assert_eq!(controller.get(), Theme::Light);
        assert_eq!(
            harness.store.load_pref(THEME_PREF_KEY).expect("load"),
            Some("light".to_string())
        );
        assert_eq!(harness.notifier.messages(), vec!["theme: light".to_string()]);
    }

    #[test]
    fn setting_the_active_theme_persists_silently() {
        let harness = Harness::new();
        let controller = harness.controller(Theme::Dark);
        controller.set(Theme::Dark);
        assert!(harness.applied.borrow().is_empty());
        assert!(harness.notifier.messages().is_empty());
        assert_eq!(
            harness.store.load_pref(THEME_PREF_KEY).expect("load"),
            Some("dark".to_string())
        );
    }

    #[test]
    fn storage_failures_are_reported_without_blocking_the_change() {
        let harness = Harness::new();
        let controller = harness.controller_with_store(Rc::new(QuotaExceededStore), Theme::Dark);
        assert_eq!(controller.get(), Theme::Dark);

        controller.toggle();
        assert_eq!(controller.get(), Theme::Light);
        assert_eq!(*harness.applied.borrow(), vec![Theme::Light]);
        assert_eq!(harness.notifier.messages(), vec!["theme: light".to_string()]);
        assert_eq!(
            *harness.failures.borrow(),
            vec![
                "theme load failed: storage disabled".to_string(),
                "theme save failed: quota exceeded".to_string(),
            ]
        );
    }
}
