//! Typed host-service contracts and in-memory adapters used by the terminal engine and commands.
//!
//! Browser adapters live in `portfolio_host_web`. Everything here is single-threaded and
//! synchronous; services are shared as `Rc<dyn Trait>`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod notifications;
pub mod storage;
pub mod theme;
pub mod time;

pub use external_url::{
    ExternalUrlService, NoopExternalUrlService, OpenTarget, RecordingUrlService, SafeUrlOpener,
    UrlOpenError, UrlPolicy,
};
pub use notifications::{MemoryNotifier, NoopNotifier, Notifier};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore};
pub use theme::{PrefsFailureHook, ThemeApplyHook, ThemeController, ThemeService, THEME_PREF_KEY};
pub use time::local_date_string;
