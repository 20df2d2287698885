//! Browser (`wasm32`) implementations of [`portfolio_host`] service contracts.
//!
//! Every adapter compiles on native targets as an inert fallback so the workspace builds and
//! tests without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod external_url;
pub mod storage;

pub use document::{apply_document_theme, page_base_url, preferred_theme, prefers_coarse_pointer};
pub use external_url::WebExternalUrlService;
pub use storage::local_prefs::WebPrefsStore;
